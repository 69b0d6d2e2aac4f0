//! Unified error handling for the HTTP surface.
//!
//! Route handlers return `Result<T, AppError>`. There are only two expected
//! outcome kinds in the backend: success and not-found. Not-found is a
//! sentinel for lookup misses, never a fault; everything else is a store
//! failure that surfaces as an opaque 500.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::StoreError;

/// Application-level error type for the catalog API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Resource not found — the expected lookup miss, not a failure.
    #[error("not found: {0}")]
    NotFound(String),
}

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Store(_)) {
            tracing::error!(error = %self, "request failed");
        }

        let status = match &self {
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // Don't expose store internals to clients
        let message = match &self {
            Self::Store(_) => "internal server error".to_owned(),
            Self::NotFound(_) => self.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
