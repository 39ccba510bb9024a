//! Orderdesk Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the order
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, plus factories and fixtures for the order schema.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts entities with sensible defaults
//! - **fixture**: Builds entity models in memory without touching the database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_order_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_order_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let burger = factory::menu_item::create_menu_item(db).await?;
//!     let order = factory::order::create_order(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
