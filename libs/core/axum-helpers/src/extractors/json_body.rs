//! Untyped JSON body extractor feeding decode-and-validate handlers.

use crate::errors::AppError;
use axum::{
    Form,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, StatusCode, header},
};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Request body parsed as an arbitrary JSON value.
///
/// Handlers that need to check field shapes themselves (missing vs. wrong
/// type vs. out of range) take the raw value and validate it into a typed
/// request. Rejections use the standard error envelope:
/// - body over the router's `DefaultBodyLimit` → 413
/// - malformed JSON → 400
///
/// An empty body is read as `{}`. A body sent as
/// `application/x-www-form-urlencoded` becomes an object of string fields;
/// any other `Content-Type` (or none) is parsed as JSON.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create(JsonBody(raw): JsonBody) -> String {
///     format!("name = {:?}", raw.get("name"))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(req.headers()) {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|rejection| reject(rejection.status(), rejection.body_text()))?;

            let object: Map<String, Value> = fields
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect();
            return Ok(JsonBody(Value::Object(object)));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| reject(rejection.status(), rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(Value::Object(serde_json::Map::new())));
        }

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

fn reject(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::BadRequest(message)
    }
}
