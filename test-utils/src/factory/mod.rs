//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let burger = factory::menu_item::create_menu_item(&db).await?;
//! let order = factory::order::create_order(&db).await?;
//! factory::order_detail::create_order_detail(&db, order.order_no, burger.item_no, 2).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use entity::sea_orm_active_enums::{OrderStatus, OrderType};
//! use test_utils::factory;
//!
//! let order = factory::order::OrderFactory::new(&db)
//!     .order_type(OrderType::Takeaway)
//!     .status(OrderStatus::Confirmed)
//!     .total_amount(Decimal::new(2500, 2))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `menu_item` - Create menu entities
//! - `order` - Create order header entities
//! - `order_detail` - Create order line item entities
//! - `payment` - Create payment entities
//! - `feedback` - Create feedback entities
//! - `helpers` - Unique id generation and multi-entity convenience methods

pub mod feedback;
pub mod helpers;
pub mod menu_item;
pub mod order;
pub mod order_detail;
pub mod payment;

pub use feedback::create_feedback;
pub use menu_item::{create_menu_item, create_menu_item_with_price};
pub use order::create_order;
pub use order_detail::create_order_detail;
pub use payment::create_payment;
