use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{order, revenue},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "orderdesk", description = "Restaurant order management API"),
    tags(
        (name = "order", description = "Order placement and lifecycle"),
        (name = "revenue", description = "Revenue reporting")
    )
)]
pub struct ApiDoc;

/// Order and revenue routes with their OpenAPI operations, relative to the mount prefix.
pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(order::fetch_all_orders))
        .routes(routes!(order::fetch_order_details))
        .routes(routes!(order::place_order))
        .routes(routes!(order::confirm_order))
        .routes(routes!(order::cancel_order))
        .routes(routes!(order::fetch_pending_orders))
        .routes(routes!(revenue::daily_revenue))
}

/// Builds the complete application router.
///
/// Mounts the API routes under `api_prefix` (empty mounts them at the root), serves the
/// OpenAPI document at `/api-docs/openapi.json` with Swagger UI at `/docs`, and wraps
/// everything in permissive CORS and request tracing.
pub fn router(state: AppState, api_prefix: &str) -> Router {
    let api = if api_prefix.is_empty() {
        OpenApiRouter::with_openapi(ApiDoc::openapi()).merge(api_routes())
    } else {
        OpenApiRouter::with_openapi(ApiDoc::openapi()).nest(api_prefix, api_routes())
    };

    let (router, openapi) = api.split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
