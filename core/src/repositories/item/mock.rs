//! Mock implementation of ItemRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::item::Item;
use crate::errors::DomainError;

use super::trait_::ItemRepository;

/// Mock item repository for testing
pub struct MockItemRepository {
    items: Arc<RwLock<HashMap<i64, Item>>>,
    next_id: AtomicI64,
}

impl MockItemRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for MockItemRepository {
    async fn create(&self, mut item: Item) -> Result<Item, DomainError> {
        let mut items = self.items.write().await;
        item.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, item: Item) -> Result<Item, DomainError> {
        let mut items = self.items.write().await;
        if !items.contains_key(&item.id) {
            return Err(DomainError::not_found("Item"));
        }
        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, DomainError> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn find_all_by_owner(&self, owner_id: i64) -> Result<Vec<Item>, DomainError> {
        let items = self.items.read().await;
        let mut owned: Vec<Item> = items
            .values()
            .filter(|i| i.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by_key(|i| i.id);
        Ok(owned)
    }

    async fn find_all_by_request_ids(&self, request_ids: &[i64]) -> Result<Vec<Item>, DomainError> {
        let items = self.items.read().await;
        let mut matched: Vec<Item> = items
            .values()
            .filter(|i| i.request_id.map_or(false, |rid| request_ids.contains(&rid)))
            .cloned()
            .collect();
        matched.sort_by_key(|i| i.id);
        Ok(matched)
    }

    async fn search(&self, text: &str) -> Result<Vec<Item>, DomainError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let needle = text.to_lowercase();
        let items = self.items.read().await;
        let mut found: Vec<Item> = items
            .values()
            .filter(|i| {
                i.available
                    && (i.name.to_lowercase().contains(&needle)
                        || i.description.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        found.sort_by_key(|i| i.id);
        Ok(found)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut items = self.items.write().await;
        Ok(items.remove(&id).is_some())
    }
}
