//! Items API routes
//!
//! This module wires up the items domain to HTTP routes.

use axum::Router;
use domain_items::{ItemService, handlers};

use crate::state::AppState;

/// Create items router backed by the shared store
pub fn router(state: &AppState) -> Router {
    let service = ItemService::new(state.items.clone());

    handlers::router(service)
}
