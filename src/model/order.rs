use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One order header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub order_no: i32,
    /// `Dine-in` or `Takeaway`.
    pub order_type: String,
    /// `Pending`, `Confirmed` or `Cancelled`.
    pub order_status: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub order_date: DateTime<Utc>,
}

/// One row of the order detail join: a line item with its menu entry, plus the
/// order's payment and feedback when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDetailDto {
    pub order_no: i32,
    pub order_status: String,
    pub order_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub order_date: DateTime<Utc>,
    pub item_no: i32,
    pub name: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub payment_id: Option<i32>,
    pub payment_status: Option<String>,
    pub payment_method: Option<String>,
    pub payment_time: Option<DateTime<Utc>>,
    /// Only populated for UPI payments.
    pub upi_id: Option<String>,
    pub feedback_stars: Option<i32>,
}

/// A single cart entry submitted when placing an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartItemDto {
    pub item_no: i32,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlaceOrderDto {
    #[serde(default)]
    pub cart: Vec<CartItemDto>,
    #[serde(default, rename = "orderType")]
    pub order_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponseDto {
    pub message: String,
    pub order_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmOrderResponseDto {
    pub message: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub updated_total_amount: Decimal,
}
