//! HTTP request handlers.
//!
//! Handlers extract path and body values, hand them to the service layer, and convert the
//! resulting domain models into DTOs. Every handler is annotated with `utoipa::path` so the
//! router can collect it into the OpenAPI document.

pub mod order;
pub mod revenue;

#[cfg(test)]
mod test;
