//! Unified error type for the ingestion pipeline.
//!
//! Every step of the workflow fails with an `AppError`; the HTTP layer maps
//! the variant to a status code and a JSON body. No error is retried
//! internally.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("probe failed: {0}")]
    Probe(String),

    #[error("no video streams found: {0}")]
    NoStreams(String),

    #[error("transcode failed: {0}")]
    Transcode(String),

    #[error("storage error: {0}")]
    Store(String),

    #[error("persist error: {0}")]
    Persist(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    ///
    /// Ownership mismatch (`Forbidden`) is deliberately reported as 401, not
    /// 403.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated(_) | AppError::Forbidden(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnsupportedMediaType(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Probe(_)
            | AppError::NoStreams(_)
            | AppError::Transcode(_)
            | AppError::Store(_)
            | AppError::Persist(_)
            | AppError::Io(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
