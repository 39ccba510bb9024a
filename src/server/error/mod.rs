//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` for automatic
//! error handling in API endpoints.

pub mod config;
pub mod order;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, order::OrderError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain errors like `OrderError` handle their own
/// response mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Order workflow error.
    ///
    /// Delegates to `OrderError::into_response()` for status code mapping.
    #[error(transparent)]
    OrderErr(#[from] OrderError),

    /// Database error outside of an order workflow stage (startup, migrations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// The request could not be decoded (malformed JSON body, non-numeric path id).
    ///
    /// Results in 400 Bad Request.
    #[error("{error}: {details}")]
    BadRequest { error: String, details: String },
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest {
            error: "Invalid request body".to_string(),
            details: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest {
            error: "Invalid order id".to_string(),
            details: rejection.body_text(),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - Variable - For `OrderErr`, delegated to `OrderError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::OrderErr(err) => err.into_response(),
            Self::BadRequest { error, details } => {
                tracing::debug!("Rejected request: {}: {}", error, details);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error,
                        details: Some(details),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
                details: None,
            }),
        )
            .into_response()
    }
}
