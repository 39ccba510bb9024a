//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller layer and the data layer. They are responsible for:
//!
//! - **Business Logic**: Pricing rules and state transition checks
//! - **Orchestration**: Coordinating repository calls for one operation
//! - **Transaction Management**: Running multi-step writes atomically
//! - **Error Tagging**: Attaching the failing stage to database errors

pub mod order;
pub mod pricing;
pub mod revenue;

#[cfg(test)]
mod test;
