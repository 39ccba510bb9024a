use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use entity::sea_orm_active_enums::{OrderStatus, OrderType};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router, service::pricing::Pricing, state::AppState};


const PREFIX: &str = "/api/orders";

/// Builds the full application router over the test database with default pricing.
fn app(db: &DatabaseConnection) -> Router {
    router::router(AppState::new(db.clone(), Pricing::default()), PREFIX)
}

/// Sends a request through the router and decodes the JSON response body.
async fn send(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(format!("{}{}", PREFIX, path));
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    into_parts(app.clone().oneshot(request).await.unwrap()).await
}

async fn into_parts(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
