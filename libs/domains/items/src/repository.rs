use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};

/// Repository trait for Item persistence
///
/// Implementations own every stored item; callers only ever see clones.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Store a new item under the next unused id
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    /// Get an item by ID
    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>>;

    /// All items in insertion order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Merge `input` into an existing item; `NotFound` if absent
    async fn update(&self, id: i64, input: UpdateItem) -> ItemResult<Item>;

    /// Delete an item by ID, returning whether it existed
    async fn delete(&self, id: i64) -> ItemResult<bool>;

    /// Number of stored items
    async fn count(&self) -> ItemResult<usize>;
}
