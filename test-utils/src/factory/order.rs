//! Order factory for creating test order header entities.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{OrderStatus, OrderType};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let order = OrderFactory::new(&db)
///     .order_type(OrderType::Takeaway)
///     .status(OrderStatus::Confirmed)
///     .order_date(Utc::now() - chrono::Duration::days(1))
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    order_type: OrderType,
    status: OrderStatus,
    total_amount: Decimal,
    order_date: DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - order_type: `Dine-in`
    /// - status: `Pending`
    /// - total_amount: `10.00`
    /// - order_date: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            order_type: OrderType::DineIn,
            status: OrderStatus::Pending,
            total_amount: Decimal::new(1000, 2),
            order_date: Utc::now(),
        }
    }

    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn total_amount(mut self, total_amount: Decimal) -> Self {
        self.total_amount = total_amount;
        self
    }

    pub fn order_date(mut self, order_date: DateTime<Utc>) -> Self {
        self.order_date = order_date;
        self
    }

    /// Inserts the order into the database.
    ///
    /// # Returns
    /// - `Ok(entity::orders::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::orders::Model, DbErr> {
        entity::orders::ActiveModel {
            order_type: ActiveValue::Set(self.order_type),
            order_status: ActiveValue::Set(self.status),
            total_amount: ActiveValue::Set(self.total_amount),
            order_date: ActiveValue::Set(self.order_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending dine-in order with default values.
pub async fn create_order(db: &DatabaseConnection) -> Result<entity::orders::Model, DbErr> {
    OrderFactory::new(db).build().await
}
