//! Item repository trait defining the interface for item data persistence.

use async_trait::async_trait;

use crate::domain::entities::item::Item;
use crate::errors::DomainError;

/// Repository trait for Item entity persistence operations
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persist a new item and return it with its assigned id
    async fn create(&self, item: Item) -> Result<Item, DomainError>;

    /// Update an existing item
    async fn update(&self, item: Item) -> Result<Item, DomainError>;

    /// Find an item by its unique identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, DomainError>;

    /// Fetch all items listed by one owner
    async fn find_all_by_owner(&self, owner_id: i64) -> Result<Vec<Item>, DomainError>;

    /// Fetch all items fulfilling any of the given catalog requests
    async fn find_all_by_request_ids(&self, request_ids: &[i64]) -> Result<Vec<Item>, DomainError>;

    /// Search available items whose name or description contains `text`,
    /// case-insensitive. A blank `text` yields an empty result.
    async fn search(&self, text: &str) -> Result<Vec<Item>, DomainError>;

    /// Delete an item
    ///
    /// # Returns
    /// * `Ok(true)` - Item was deleted
    /// * `Ok(false)` - Item not found
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
