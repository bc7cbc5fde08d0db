//! HTTP middleware module.
//!
//! This module provides HTTP-level middleware for:
//! - CORS configuration
//! - Security headers
//! - Access logging
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{access_log, cors_layer, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(access_log))
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(cors_layer(&CorsConfig::Permissive)?);
//! ```

pub mod access_log;
pub mod cors;
pub mod security;

pub use access_log::access_log;
pub use cors::cors_layer;
pub use security::security_headers;
