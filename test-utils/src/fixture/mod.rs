//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of conversions and pricing logic that only need an in-memory entity model.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let order = fixture::order::entity();
//! let takeaway = fixture::order::entity_builder()
//!     .order_type(OrderType::Takeaway)
//!     .build();
//! ```

pub mod order;
