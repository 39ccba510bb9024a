use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::order::OrderDto;

/// Revenue for the current day and the orders it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenueDto {
    #[serde(with = "rust_decimal::serde::float")]
    pub today_revenue: Decimal,
    pub completed_orders: Vec<OrderDto>,
}
