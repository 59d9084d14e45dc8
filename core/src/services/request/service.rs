//! Catalog request service implementation

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::entities::item::Item;
use crate::domain::entities::item_request::ItemRequest;
use crate::domain::value_objects::views::RequestView;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ItemRepository, ItemRequestRepository, UserRepository};

/// Catalog request service: users ask for items nobody lists yet, and
/// each request view shows the items later listed to fulfil it.
pub struct ItemRequestService<R, U, I>
where
    R: ItemRequestRepository,
    U: UserRepository,
    I: ItemRepository,
{
    request_repository: Arc<R>,
    user_repository: Arc<U>,
    item_repository: Arc<I>,
}

impl<R, U, I> ItemRequestService<R, U, I>
where
    R: ItemRequestRepository,
    U: UserRepository,
    I: ItemRepository,
{
    /// Create a new catalog request service
    pub fn new(request_repository: Arc<R>, user_repository: Arc<U>, item_repository: Arc<I>) -> Self {
        Self {
            request_repository,
            user_repository,
            item_repository,
        }
    }

    /// Place a catalog request
    pub async fn create_request(&self, requestor_id: i64, description: String) -> DomainResult<ItemRequest> {
        let now = Utc::now();
        self.user_repository
            .find_by_id(requestor_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        let request = self
            .request_repository
            .create(ItemRequest::new(description, requestor_id, now))
            .await?;
        info!(request_id = request.id, requestor_id, "item request created");
        Ok(request)
    }

    /// Fetch one request with the items fulfilling it
    pub async fn get_request(&self, request_id: i64) -> DomainResult<RequestView> {
        let request = self
            .request_repository
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| DomainError::not_found("ItemRequest"))?;
        let items = self.item_repository.find_all_by_request_ids(&[request_id]).await?;
        Ok(RequestView { request, items })
    }

    /// Fetch all of one user's requests, each with its fulfilling items
    pub async fn get_requests_by_user(&self, user_id: i64) -> DomainResult<Vec<RequestView>> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        let requests = self.request_repository.find_all_by_requestor(user_id).await?;
        if requests.is_empty() {
            return Err(DomainError::not_found("Requests of this user"));
        }

        let request_ids: Vec<i64> = requests.iter().map(|r| r.id).collect();
        let items = self.item_repository.find_all_by_request_ids(&request_ids).await?;
        let mut items_per_request: HashMap<i64, Vec<Item>> = HashMap::new();
        for item in items {
            if let Some(request_id) = item.request_id {
                items_per_request.entry(request_id).or_default().push(item);
            }
        }

        Ok(requests
            .into_iter()
            .map(|request| {
                let items = items_per_request.remove(&request.id).unwrap_or_default();
                RequestView { request, items }
            })
            .collect())
    }

    /// Fetch every request in the catalog
    pub async fn get_all_requests(&self) -> DomainResult<Vec<ItemRequest>> {
        self.request_repository.find_all().await
    }
}
