use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        order::{
            ConfirmOrderResponseDto, OrderDetailDto, OrderDto, PlaceOrderDto,
            PlaceOrderResponseDto,
        },
    },
    server::{
        error::AppError,
        model::order::{Order, OrderDetailLine, PlaceOrderParams},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Get all orders.
///
/// Returns every order header, newest first.
///
/// # Returns
/// - `200 OK` - List of orders
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/fetch-all-orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "All orders, newest first", body = Vec<OrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn fetch_all_orders(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::new(&state.db, state.pricing).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(orders.into_iter().map(Order::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get the line items of an order.
///
/// Each row joins a line item with its menu entry and the order's payment and feedback,
/// which are null when absent. `upi_id` is only set for UPI payments. An unknown order
/// yields an empty list.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `order_no` - Order number from the path
///
/// # Returns
/// - `200 OK` - Detail rows, possibly empty
/// - `400 Bad Request` - Order id is not an integer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/fetch-order-details/{order_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order number")
    ),
    responses(
        (status = 200, description = "Detail rows of the order", body = Vec<OrderDetailDto>),
        (status = 400, description = "Invalid order id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn fetch_order_details(
    State(state): State<AppState>,
    order_no: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(order_no) = order_no?;

    let lines = OrderService::new(&state.db, state.pricing)
        .get_details(order_no)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            lines
                .into_iter()
                .map(OrderDetailLine::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Place an order.
///
/// Validates the cart, then stores the order header and line items in one transaction.
/// The stored total is recalculated from menu prices, plus the takeaway surcharge for
/// takeaway orders.
///
/// # Arguments
/// - `state` - Application state containing the database connection and pricing
/// - `payload` - Cart entries and order type
///
/// # Returns
/// - `200 OK` - Order placed, with its order number
/// - `400 Bad Request` - Empty cart, invalid order type or quantity, unknown menu item, or malformed body
/// - `500 Internal Server Error` - Database error, nothing was stored
#[utoipa::path(
    post,
    path = "/place-order",
    tag = ORDER_TAG,
    request_body = PlaceOrderDto,
    responses(
        (status = 200, description = "Order placed successfully", body = PlaceOrderResponseDto),
        (status = 400, description = "Invalid order", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_order(
    State(state): State<AppState>,
    payload: Result<Json<PlaceOrderDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = PlaceOrderParams::from_dto(payload)?;

    let placed = OrderService::new(&state.db, state.pricing)
        .place(params)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PlaceOrderResponseDto {
            message: "Order placed successfully".to_string(),
            order_id: placed.order_no,
        }),
    ))
}

/// Confirm an order.
///
/// Marks the order confirmed and adds the takeaway surcharge to its stored total for
/// takeaway orders.
///
/// # Returns
/// - `200 OK` - Order confirmed, with its updated total
/// - `400 Bad Request` - Order could not be updated, or invalid order id
/// - `404 Not Found` - No order with that number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/confirm-order/{order_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order number")
    ),
    responses(
        (status = 200, description = "Order confirmed", body = ConfirmOrderResponseDto),
        (status = 400, description = "Order cannot be confirmed", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_order(
    State(state): State<AppState>,
    order_no: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(order_no) = order_no?;

    let confirmed = OrderService::new(&state.db, state.pricing)
        .confirm(order_no)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ConfirmOrderResponseDto {
            message: "Order confirmed".to_string(),
            updated_total_amount: confirmed.total_amount,
        }),
    ))
}

/// Cancel a pending order.
///
/// # Returns
/// - `200 OK` - Order cancelled
/// - `400 Bad Request` - Order does not exist or is no longer pending, or invalid order id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/cancel-order/{order_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order number")
    ),
    responses(
        (status = 200, description = "Order cancelled", body = MessageDto),
        (status = 400, description = "Order cannot be cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    order_no: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(order_no) = order_no?;

    OrderService::new(&state.db, state.pricing)
        .cancel(order_no)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Order cancelled".to_string(),
        }),
    ))
}

/// Get orders awaiting confirmation, newest first.
#[utoipa::path(
    get,
    path = "/fetch-pending-orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Pending orders, newest first", body = Vec<OrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn fetch_pending_orders(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::new(&state.db, state.pricing)
        .get_pending()
        .await?;

    Ok((
        StatusCode::OK,
        Json(orders.into_iter().map(Order::into_dto).collect::<Vec<_>>()),
    ))
}
