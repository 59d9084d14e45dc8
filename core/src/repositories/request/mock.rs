//! Mock implementation of ItemRequestRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::item_request::ItemRequest;
use crate::errors::DomainError;

use super::trait_::ItemRequestRepository;

/// Mock catalog request repository for testing
pub struct MockItemRequestRepository {
    requests: Arc<RwLock<HashMap<i64, ItemRequest>>>,
    next_id: AtomicI64,
}

impl MockItemRequestRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            requests: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockItemRequestRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRequestRepository for MockItemRequestRepository {
    async fn create(&self, mut request: ItemRequest) -> Result<ItemRequest, DomainError> {
        let mut requests = self.requests.write().await;
        request.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        requests.insert(request.id, request.clone());
        Ok(request)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ItemRequest>, DomainError> {
        let requests = self.requests.read().await;
        Ok(requests.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<ItemRequest>, DomainError> {
        let requests = self.requests.read().await;
        let mut all: Vec<ItemRequest> = requests.values().cloned().collect();
        all.sort_by_key(|r| r.id);
        Ok(all)
    }

    async fn find_all_by_requestor(&self, requestor_id: i64) -> Result<Vec<ItemRequest>, DomainError> {
        let requests = self.requests.read().await;
        let mut mine: Vec<ItemRequest> = requests
            .values()
            .filter(|r| r.requestor_id == requestor_id)
            .cloned()
            .collect();
        mine.sort_by_key(|r| r.id);
        Ok(mine)
    }
}
