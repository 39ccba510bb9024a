//! Request and response DTOs shared by every HTTP endpoint.
//!
//! DTOs define the JSON wire format of the API. Server-side domain models convert into
//! these types at the controller boundary.

pub mod api;
pub mod order;
pub mod revenue;
