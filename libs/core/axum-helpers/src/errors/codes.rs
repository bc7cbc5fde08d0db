//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - the label clients see in the `error` field (e.g. "Validation Error")
//! - the HTTP status it maps to
//! - an integer code for logging and monitoring (e.g. 1001)
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//! use axum::http::StatusCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.label(), "Validation Error");
//! assert_eq!(code.status(), StatusCode::BAD_REQUEST);
//! assert_eq!(code.code(), 1001);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned for every 500; the real cause is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong on the server";

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Caller input failed a shape or value constraint
    ValidationError,

    /// Referenced resource or route does not exist
    NotFound,

    /// Request body exceeded the configured limit
    PayloadTooLarge,

    /// An unexpected internal server error occurred
    InternalError,
}

impl ErrorCode {
    /// Label placed in the `error` field of the envelope.
    pub const fn label(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Validation Error",
            ErrorCode::NotFound => "Not Found",
            ErrorCode::PayloadTooLarge => "Payload Too Large",
            ErrorCode::InternalError => "Internal Server Error",
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Integer code for logs and dashboards.
    pub const fn code(&self) -> i32 {
        match self {
            ErrorCode::ValidationError => 1001,
            ErrorCode::NotFound => 1004,
            ErrorCode::InternalError => 1005,
            ErrorCode::PayloadTooLarge => 1006,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
