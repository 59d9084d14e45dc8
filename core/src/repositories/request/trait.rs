//! Catalog request repository trait.

use async_trait::async_trait;

use crate::domain::entities::item_request::ItemRequest;
use crate::errors::DomainError;

/// Repository trait for ItemRequest entity persistence operations
#[async_trait]
pub trait ItemRequestRepository: Send + Sync {
    /// Persist a new request and return it with its assigned id
    async fn create(&self, request: ItemRequest) -> Result<ItemRequest, DomainError>;

    /// Find a request by its unique identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<ItemRequest>, DomainError>;

    /// Fetch all requests
    async fn find_all(&self) -> Result<Vec<ItemRequest>, DomainError>;

    /// Fetch all requests placed by one user
    async fn find_all_by_requestor(&self, requestor_id: i64) -> Result<Vec<ItemRequest>, DomainError>;
}
