//! One log line per request.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Middleware that logs method, path, status and latency for every request.
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use axum_helpers::http::access_log;
///
/// let app = Router::new()
///     .route("/", get(handler))
///     .layer(middleware::from_fn(access_log));
/// ```
pub async fn access_log(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "{} {}",
        method,
        path
    );

    response
}
