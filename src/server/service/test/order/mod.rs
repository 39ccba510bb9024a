use crate::{
    model::order::{CartItemDto, PlaceOrderDto},
    server::{
        error::order::{CancelRejection, OrderError},
        model::order::PlaceOrderParams,
        service::{order::OrderService, pricing::Pricing},
    },
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{OrderStatus, OrderType};
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod cancel;
mod get_all;
mod get_details;
mod get_pending;

/// Builds validated placement parameters from `(item_no, quantity, price)` entries.
fn place_params(order_type: &str, cart: &[(i32, i32, Decimal)]) -> PlaceOrderParams {
    PlaceOrderParams::from_dto(PlaceOrderDto {
        cart: cart
            .iter()
            .map(|&(item_no, quantity, price)| CartItemDto {
                item_no,
                quantity,
                price,
            })
            .collect(),
        order_type: Some(order_type.to_string()),
    })
    .unwrap()
}
