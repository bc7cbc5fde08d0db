//! Success envelope shared by all JSON endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API response wrapper
///
/// ```json
/// { "success": true, "data": [...], "count": 2 }
/// { "success": true, "data": {...}, "message": "Item created successfully" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    /// Number of entries in `data`, set for collection responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Wraps a collection, filling `count` from its length.
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            count: Some(count),
            ..Self::success(data)
        }
    }
}
