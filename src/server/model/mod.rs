//! Domain models used by the service and data layers.
//!
//! These types sit between entity models and wire DTOs. Conversions happen at the layer
//! boundaries: `from_entity` / `from_row` in the data layer, `from_dto` / `into_dto` in
//! controllers.

pub mod order;
pub mod revenue;
