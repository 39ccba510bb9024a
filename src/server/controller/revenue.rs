use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    model::{api::ErrorDto, revenue::DailyRevenueDto},
    server::{error::AppError, service::revenue::RevenueService, state::AppState},
};

/// Tag for grouping revenue endpoints in OpenAPI documentation
pub static REVENUE_TAG: &str = "revenue";

/// Get today's revenue.
///
/// Sums the totals of orders currently `Confirmed` whose order date falls on the current UTC
/// day and lists those orders, newest first. An order placed on an earlier day is left out
/// even if it was confirmed today.
///
/// # Returns
/// - `200 OK` - Revenue and the confirmed orders it covers
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/daily-revenue",
    tag = REVENUE_TAG,
    responses(
        (status = 200, description = "Today's revenue", body = DailyRevenueDto),
        (status = 500, description = "Internal server error while fetching daily revenue", body = ErrorDto)
    ),
)]
pub async fn daily_revenue(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let revenue = RevenueService::new(&state.db)
        .daily(Utc::now().date_naive())
        .await?;

    Ok((StatusCode::OK, Json(revenue.into_dto())))
}
