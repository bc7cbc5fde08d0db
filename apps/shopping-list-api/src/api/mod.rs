//! API routes module

pub mod items;

use axum::Router;
use axum_helpers::health_router;

use crate::state::AppState;

/// Create all API routes, mounted at the root by `axum_helpers::create_router`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/items", items::router(state))
        .merge(health_router(state.config.app))
}
