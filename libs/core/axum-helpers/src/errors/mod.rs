pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::{ErrorCode, INTERNAL_ERROR_MESSAGE};

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error envelope.
///
/// Every failed request, including unmatched routes, answers with this shape:
///
/// ```json
/// {
///   "success": false,
///   "error": "Not Found",
///   "message": "Item with id 42 not found",
///   "statusCode": 404
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Error category label
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// HTTP status code, repeated in the body
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: code.label().to_string(),
            message: message.into(),
            status_code: code.status().as_u16(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// This is the only place where failure kinds are mapped to status codes;
/// domain crates convert their own errors into it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Payload Too Large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::BadRequest(_) => ErrorCode::ValidationError,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::PayloadTooLarge(_) => ErrorCode::PayloadTooLarge,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();

        let message = match self {
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = code.code(), "Bad request: {}", msg);
                msg
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                msg
            }
            AppError::PayloadTooLarge(msg) => {
                tracing::warn!(error_code = code.code(), "Payload too large: {}", msg);
                msg
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        error_response(code, message)
    }
}

/// Helper function to create error responses.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
///
/// let response = error_response(ErrorCode::NotFound, "Route /nope not found");
/// ```
pub fn error_response(code: ErrorCode, message: impl Into<String>) -> Response {
    (code.status(), Json(ErrorResponse::new(code, message))).into_response()
}
