use axum::{
    http::Uri,
    response::{IntoResponse, Response},
};

use super::AppError;

/// Fallback handler for unmatched routes.
///
/// Answers 404 with the standard error envelope, naming the requested path.
pub async fn not_found(uri: Uri) -> Response {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    AppError::NotFound(format!("Route {} not found", target)).into_response()
}
