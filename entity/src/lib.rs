//! SeaORM entities for the restaurant order schema.

pub mod prelude;

pub mod feedback;
pub mod menu;
pub mod order_details;
pub mod orders;
pub mod payment;
pub mod sea_orm_active_enums;
