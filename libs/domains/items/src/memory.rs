//! In-process item store.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;

#[derive(Debug)]
struct ItemStore {
    items: Vec<Item>,
    next_id: i64,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl ItemStore {
    fn position(&self, id: i64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

/// In-memory implementation of ItemRepository.
///
/// Items live in a `Vec` in insertion order and lookups are linear scans.
/// The list and the id counter sit behind one lock, so every operation is
/// atomic with respect to concurrent requests. Clones share the same store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<ItemStore>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let item = Item::new(id, input);
        store.items.push(item.clone());

        tracing::info!(item_id = id, "Created item");
        Ok(item)
    }

    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let store = self.store.read().await;
        Ok(store.items.iter().find(|item| item.id == id).cloned())
    }

    async fn list(&self) -> ItemResult<Vec<Item>> {
        let store = self.store.read().await;
        Ok(store.items.clone())
    }

    async fn update(&self, id: i64, input: UpdateItem) -> ItemResult<Item> {
        let mut store = self.store.write().await;

        let index = store.position(id).ok_or(ItemError::NotFound(id))?;

        let mut updated = store.items[index].clone();
        updated.apply_update(input);
        store.items[index] = updated.clone();

        tracing::info!(item_id = id, "Updated item");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> ItemResult<bool> {
        let mut store = self.store.write().await;

        match store.position(id) {
            Some(index) => {
                store.items.remove(index);
                tracing::info!(item_id = id, "Deleted item");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> ItemResult<usize> {
        Ok(self.store.read().await.items.len())
    }
}
