//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table or join each. They are generic over
//! `ConnectionTrait`, so the same repository runs against the pool or inside a transaction.

pub mod menu;
pub mod order;
pub mod order_detail;

#[cfg(test)]
mod test;
