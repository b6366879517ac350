//! API error types and JSON response formatting.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::puzzle::PuzzleError;
use crate::share::ShareError;

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error details in the response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API error type that converts to HTTP responses.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
                details: self.details,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ShareError> for ApiError {
    fn from(err: ShareError) -> Self {
        let (status, code) = match err {
            ShareError::NotFound => (StatusCode::NOT_FOUND, "SHARE_NOT_FOUND"),
            ShareError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ShareError::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "STORE_UNCONFIGURED"),
        };
        // The Display string is the fixed client-facing message.
        Self::new(status, code, err.to_string())
    }
}

impl From<PuzzleError> for ApiError {
    fn from(err: PuzzleError) -> Self {
        let (status, code) = match err {
            PuzzleError::NotFound => (StatusCode::NOT_FOUND, "PUZZLE_NOT_FOUND"),
            PuzzleError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            PuzzleError::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "STORE_UNCONFIGURED"),
        };
        Self::new(status, code, err.to_string())
    }
}
