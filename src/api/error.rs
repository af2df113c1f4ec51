//! HTTP mapping for [`Error`].
//!
//! Domain errors carry their message to the caller; store and I/O failures are logged
//! and reported with a generic message.

use crate::errors::Error;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidData { message } => (StatusCode::BAD_REQUEST, message.clone()),
            Self::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_string(),
                )
            }
            Self::Config { .. } | Self::Io(_) => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Result type for handlers
pub type ApiResult<T> = std::result::Result<T, Error>;
