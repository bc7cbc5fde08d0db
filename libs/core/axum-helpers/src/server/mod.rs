//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI documentation and middleware
//! - The health endpoint
//! - Graceful shutdown
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//!
//! let routes = api_routes.merge(health_router(app_info!("My API")));
//! let router = create_router::<ApiDoc>(routes, &server_config, &cors_config)?;
//! create_app(router, &server_config).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
