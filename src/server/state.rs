//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::pricing::Pricing;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a handle to a connection pool
/// and `Pricing` is a small `Copy` value.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    ///
    /// Each request acquires a connection per query, or one connection for the lifetime of a
    /// transaction.
    pub db: DatabaseConnection,

    /// Surcharge rules applied when placing and confirming orders.
    pub pricing: Pricing,
}

impl AppState {
    pub fn new(db: DatabaseConnection, pricing: Pricing) -> Self {
        Self { db, pricing }
    }
}
