//! Order fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::{
    orders,
    sea_orm_active_enums::{OrderStatus, OrderType},
};
use rust_decimal::Decimal;

/// Default order number.
pub const DEFAULT_ORDER_NO: i32 = 1;

/// Default order date: 2025-03-01 12:30:00 UTC.
pub fn default_order_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0)
        .single()
        .unwrap_or_default()
}

/// Creates an order entity model with default values.
///
/// # Default Values
/// - order_no: `1`
/// - order_type: `Dine-in`
/// - order_status: `Pending`
/// - total_amount: `10.00`
/// - order_date: `2025-03-01 12:30:00 UTC`
pub fn entity() -> orders::Model {
    entity_builder().build()
}

/// Creates an order entity builder for customization.
pub fn entity_builder() -> OrderEntityBuilder {
    OrderEntityBuilder {
        model: orders::Model {
            order_no: DEFAULT_ORDER_NO,
            order_type: OrderType::DineIn,
            order_status: OrderStatus::Pending,
            total_amount: Decimal::new(1000, 2),
            order_date: default_order_date(),
        },
    }
}

/// Builder for in-memory order entity models.
pub struct OrderEntityBuilder {
    model: orders::Model,
}

impl OrderEntityBuilder {
    pub fn order_no(mut self, order_no: i32) -> Self {
        self.model.order_no = order_no;
        self
    }

    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.model.order_type = order_type;
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.model.order_status = status;
        self
    }

    pub fn total_amount(mut self, total_amount: Decimal) -> Self {
        self.model.total_amount = total_amount;
        self
    }

    pub fn build(self) -> orders::Model {
        self.model
    }
}
