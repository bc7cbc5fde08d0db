//! Application state management.
//!
//! The item store lives here so that a single instance is shared by every
//! router built from this state.

use domain_items::InMemoryItemRepository;

/// Shared application state.
///
/// Cloning is cheap: the repository clones share the same underlying store.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Process-local item store
    pub items: InMemoryItemRepository,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            items: InMemoryItemRepository::new(),
        }
    }
}
