//! Order domain models and parameters.
//!
//! Provides the order header model, validated placement parameters built from the
//! place-order request, and the flattened detail line returned by the detail query.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{OrderStatus, OrderType};
use rust_decimal::Decimal;
use sea_orm::{ActiveEnum, FromQueryResult, Iterable};

use crate::{
    model::order::{CartItemDto, OrderDetailDto, OrderDto, PlaceOrderDto},
    server::{error::order::OrderError, service::pricing::Pricing},
};

/// Payment method whose UPI id is exposed in order details.
pub const UPI_PAYMENT_METHOD: &str = "UPI";

/// Order header.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_no: i32,
    pub order_type: OrderType,
    pub order_status: OrderStatus,
    pub total_amount: Decimal,
    pub order_date: DateTime<Utc>,
}

impl Order {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::orders::Model) -> Self {
        Self {
            order_no: entity.order_no,
            order_type: entity.order_type,
            order_status: entity.order_status,
            total_amount: entity.total_amount,
            order_date: entity.order_date,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            order_no: self.order_no,
            order_type: self.order_type.to_value(),
            order_status: self.order_status.to_value(),
            total_amount: self.total_amount,
            order_date: self.order_date,
        }
    }
}

/// Parses the wire form of an order type (`Dine-in` or `Takeaway`).
pub fn parse_order_type(value: &str) -> Option<OrderType> {
    OrderType::iter().find(|order_type| order_type.to_value() == value)
}

/// A cart entry as submitted by the client.
///
/// `price` is the client's view of the menu price and only feeds the initial total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartLine {
    pub item_no: i32,
    pub quantity: i32,
    pub price: Decimal,
}

impl From<CartItemDto> for CartLine {
    fn from(dto: CartItemDto) -> Self {
        Self {
            item_no: dto.item_no,
            quantity: dto.quantity,
            price: dto.price,
        }
    }
}

/// Validated parameters for placing an order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceOrderParams {
    pub order_type: OrderType,
    pub cart: Vec<CartLine>,
    /// `(item_no, quantity)` pairs with repeated items merged, in first-seen order.
    line_items: Vec<(i32, i32)>,
}

impl PlaceOrderParams {
    /// Validates a place-order request.
    ///
    /// Checks run in order: non-empty cart, known order type, positive quantities.
    ///
    /// # Returns
    /// - `Ok(PlaceOrderParams)` - Request is well formed
    /// - `Err(OrderError::EmptyCart)` - Cart missing or empty
    /// - `Err(OrderError::InvalidOrderType)` - `orderType` missing or unknown
    /// - `Err(OrderError::InvalidQuantity)` - A cart line has a zero or negative quantity
    /// - `Err(OrderError::QuantityOverflow)` - Repeated lines for one item overflow `i32`
    pub fn from_dto(dto: PlaceOrderDto) -> Result<Self, OrderError> {
        if dto.cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let order_type = dto
            .order_type
            .as_deref()
            .and_then(parse_order_type)
            .ok_or_else(|| OrderError::InvalidOrderType(dto.order_type.clone()))?;

        let cart: Vec<CartLine> = dto.cart.into_iter().map(CartLine::from).collect();

        if let Some(line) = cart.iter().find(|line| line.quantity <= 0) {
            return Err(OrderError::InvalidQuantity {
                item_no: line.item_no,
                quantity: line.quantity,
            });
        }

        let line_items = merge_lines(&cart)?;

        Ok(Self {
            order_type,
            cart,
            line_items,
        })
    }

    /// Total computed from the client's prices, stored until the menu-based recalculation.
    ///
    /// # Returns
    /// - `Ok(Decimal)` - Cart total including the surcharge
    /// - `Err(OrderError::AmountOverflow)` - Prices and quantities overflow a decimal amount
    pub fn cart_total(&self, pricing: &Pricing) -> Result<Decimal, OrderError> {
        pricing
            .total(
                self.order_type,
                self.cart.iter().map(|line| (line.price, line.quantity)),
            )
            .ok_or(OrderError::AmountOverflow)
    }

    /// Distinct menu item numbers referenced by the cart.
    pub fn item_nos(&self) -> Vec<i32> {
        self.line_items.iter().map(|&(item_no, _)| item_no).collect()
    }

    /// `(item_no, quantity)` pairs with repeated items merged, in first-seen order.
    pub fn line_items(&self) -> &[(i32, i32)] {
        &self.line_items
    }
}

fn merge_lines(cart: &[CartLine]) -> Result<Vec<(i32, i32)>, OrderError> {
    let mut merged: Vec<(i32, i32)> = Vec::with_capacity(cart.len());
    for line in cart {
        match merged.iter_mut().find(|(item_no, _)| *item_no == line.item_no) {
            Some((item_no, quantity)) => {
                *quantity = quantity
                    .checked_add(line.quantity)
                    .ok_or(OrderError::QuantityOverflow(*item_no))?;
            }
            None => merged.push((line.item_no, line.quantity)),
        }
    }
    Ok(merged)
}

/// Result of a successful placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedOrder {
    pub order_no: i32,
    /// Total recalculated from menu prices.
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfirmedOrder {
    pub order_no: i32,
    pub total_amount: Decimal,
}

/// One row of the order detail join as read from the database.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct OrderDetailRow {
    pub order_no: i32,
    pub order_status: String,
    pub order_type: String,
    pub total_amount: Decimal,
    pub order_date: DateTime<Utc>,
    pub item_no: i32,
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
    pub payment_id: Option<i32>,
    pub payment_status: Option<String>,
    pub payment_method: Option<String>,
    pub payment_time: Option<DateTime<Utc>>,
    pub upi_id: Option<String>,
    pub feedback_stars: Option<i32>,
}

/// A line item of an order together with its payment and feedback.
///
/// `upi_id` is only kept for UPI payments.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetailLine {
    pub row: OrderDetailRow,
}

impl OrderDetailLine {
    pub fn from_row(mut row: OrderDetailRow) -> Self {
        if row.payment_method.as_deref() != Some(UPI_PAYMENT_METHOD) {
            row.upi_id = None;
        }
        Self { row }
    }

    pub fn into_dto(self) -> OrderDetailDto {
        let row = self.row;
        OrderDetailDto {
            order_no: row.order_no,
            order_status: row.order_status,
            order_type: row.order_type,
            total_amount: row.total_amount,
            order_date: row.order_date,
            item_no: row.item_no,
            name: row.name,
            quantity: row.quantity,
            price: row.price,
            payment_id: row.payment_id,
            payment_status: row.payment_status,
            payment_method: row.payment_method,
            payment_time: row.payment_time,
            upi_id: row.upi_id,
            feedback_stars: row.feedback_stars,
        }
    }
}
