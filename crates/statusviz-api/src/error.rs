//! Error types for the visualizer API layer.
//!
//! [`ApiError`] unifies the layer's failure modes into a single enum that
//! converts into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The core
//! feed operations are total, so very little can actually fail here:
//! malformed request payloads are rejected by the extractors before any
//! handler runs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur in the visualizer API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Serialization(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("JSON error: {e}"))
            }
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
