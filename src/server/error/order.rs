use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{ActiveEnum, DbErr};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Step of an order operation during which a database call failed.
///
/// The display form is the client-facing message for that failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PlaceOrder,
    InsertOrderDetails,
    CalculateOrderTotal,
    FetchOrders,
    FetchPendingOrders,
    FetchOrderDetails,
    ConfirmOrder,
    CancelOrder,
    DailyRevenue,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::PlaceOrder => "Failed to place order",
            Self::InsertOrderDetails => "Failed to insert order details",
            Self::CalculateOrderTotal => "Failed to calculate order total",
            Self::FetchOrders => "Failed to fetch orders",
            Self::FetchPendingOrders => "Failed to fetch pending orders",
            Self::FetchOrderDetails => "Failed to fetch order details",
            Self::ConfirmOrder => "Failed to confirm order",
            Self::CancelOrder => "Failed to cancel order",
            Self::DailyRevenue => "Internal server error while fetching daily revenue.",
        };
        f.write_str(message)
    }
}

/// Why a cancel request matched no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelRejection {
    /// No order with that number exists.
    Missing,
    /// The order exists but has already left `Pending`.
    NotPending(OrderStatus),
}

impl fmt::Display for CancelRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("does not exist"),
            Self::NotPending(status) => write!(f, "is {}", status.to_value()),
        }
    }
}

#[derive(Error, Debug)]
pub enum OrderError {
    /// Place-order request with no cart entries.
    #[error("Cart cannot be empty")]
    EmptyCart,

    /// `orderType` missing or not one of `Dine-in` / `Takeaway`.
    #[error("Invalid order type: {}", .0.as_deref().unwrap_or("<missing>"))]
    InvalidOrderType(Option<String>),

    /// Cart entry with a zero or negative quantity.
    #[error("Invalid quantity {quantity} for menu item {item_no}")]
    InvalidQuantity { item_no: i32, quantity: i32 },

    /// Repeated cart entries for one item whose quantities add up past `i32::MAX`.
    #[error("Combined quantity for menu item {0} is too large")]
    QuantityOverflow(i32),

    /// Order total does not fit in a decimal amount.
    #[error("Order total is too large")]
    AmountOverflow,

    /// Cart references menu items that do not exist.
    #[error("Unknown menu items: {0:?}")]
    UnknownMenuItems(Vec<i32>),

    #[error("Order {0} not found")]
    NotFound(i32),

    /// Confirm update matched no row.
    #[error("Order {0} cannot be confirmed")]
    CannotConfirm(i32),

    #[error("Order {order_no} cannot be cancelled, it {reason}")]
    CannotCancel {
        order_no: i32,
        reason: CancelRejection,
    },

    /// Database failure at a given stage. Any open transaction has been rolled back.
    #[error("{stage}: {source}")]
    Persistence {
        stage: Stage,
        #[source]
        source: DbErr,
    },
}

/// Attaches the failing stage to a database result.
pub trait StageExt<T> {
    fn stage(self, stage: Stage) -> Result<T, OrderError>;
}

impl<T> StageExt<T> for Result<T, DbErr> {
    fn stage(self, stage: Stage) -> Result<T, OrderError> {
        self.map_err(|source| OrderError::Persistence { stage, source })
    }
}

/// Converts order errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and rejected state transitions
/// - 404 Not Found - Confirming an order that does not exist
/// - 500 Internal Server Error - Persistence failures, with the driver message as `details`
impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            Self::EmptyCart => (StatusCode::BAD_REQUEST, "Cart cannot be empty".to_string(), None),
            Self::InvalidOrderType(_) => (
                StatusCode::BAD_REQUEST,
                "Invalid order type".to_string(),
                Some(self.to_string()),
            ),
            Self::InvalidQuantity { .. } => (
                StatusCode::BAD_REQUEST,
                "Invalid item quantity".to_string(),
                Some(self.to_string()),
            ),
            Self::QuantityOverflow(_) => (
                StatusCode::BAD_REQUEST,
                "Invalid item quantity".to_string(),
                Some(self.to_string()),
            ),
            Self::AmountOverflow => (
                StatusCode::BAD_REQUEST,
                "Order total out of range".to_string(),
                Some(self.to_string()),
            ),
            Self::UnknownMenuItems(_) => (
                StatusCode::BAD_REQUEST,
                "Unknown menu item".to_string(),
                Some(self.to_string()),
            ),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Order not found".to_string(), None),
            Self::CannotConfirm(_) => (
                StatusCode::BAD_REQUEST,
                "Order cannot be confirmed".to_string(),
                None,
            ),
            Self::CannotCancel { order_no, reason } => (
                StatusCode::BAD_REQUEST,
                "Order cannot be cancelled".to_string(),
                Some(format!("order {} {}", order_no, reason)),
            ),
            Self::Persistence { stage, source } => {
                tracing::error!("{}: {}", stage, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    stage.to_string(),
                    Some(source.to_string()),
                )
            }
        };

        (status, Json(ErrorDto { error, details })).into_response()
    }
}
