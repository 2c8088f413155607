//! HTTP-facing error type
//!
//! Maps the pipeline's error taxonomy onto status codes and the
//! `{error, details?}` payload. Browser-acquisition failures surface a
//! generic message; audit failures carry their underlying cause.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use types::errors::ScanError;

/// Central error type for the scan service HTTP surface.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("URL is required")]
    MissingUrl,

    #[error("Invalid URL format")]
    InvalidUrl,

    #[error("Browser session unavailable")]
    BrowserUnavailable,

    #[error("Scan failed: {0}")]
    ScanFailed(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<ScanError> for AppError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::MissingUrl => AppError::MissingUrl,
            ScanError::InvalidUrl(_) => AppError::InvalidUrl,
            // Infrastructure failures get a generic message; the cause is
            // already on the log stream.
            ScanError::Browser(_) => AppError::BrowserUnavailable,
            ScanError::Audit(cause) => AppError::ScanFailed(cause.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MissingUrl => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "URL is required" }),
            ),
            AppError::InvalidUrl => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid URL format" }),
            ),
            AppError::BrowserUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to analyze website" }),
            ),
            AppError::ScanFailed(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to analyze website", "details": details }),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
