//! Custom extractors for Axum handlers.
//!
//! Extractor rejections use [`AppError`](crate::errors::AppError) so that
//! malformed requests get the same envelope as domain failures.

pub mod json_body;

pub use json_body::JsonBody;
