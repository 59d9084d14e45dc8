//! Unit tests for catalog requests and their fulfilling items.

use std::sync::Arc;

use crate::domain::entities::item::Item;
use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::item::ItemRepository;
use crate::repositories::user::UserRepository;
use crate::repositories::{MockItemRepository, MockItemRequestRepository, MockUserRepository};
use crate::services::request::ItemRequestService;

struct Fixture {
    service: ItemRequestService<MockItemRequestRepository, MockUserRepository, MockItemRepository>,
    items: Arc<MockItemRepository>,
    requestor: User,
    owner: User,
}

async fn setup() -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let items = Arc::new(MockItemRepository::new());
    let requests = Arc::new(MockItemRequestRepository::new());

    let requestor = users.create(User::new("Rita", "rita@example.com")).await.unwrap();
    let owner = users.create(User::new("Olga", "olga@example.com")).await.unwrap();

    let service = ItemRequestService::new(requests, users.clone(), items.clone());
    Fixture {
        service,
        items,
        requestor,
        owner,
    }
}

#[tokio::test]
async fn test_create_and_get_request() {
    let f = setup().await;
    let request = f
        .service
        .create_request(f.requestor.id, "Need a tile cutter".to_string())
        .await
        .unwrap();
    assert!(request.id > 0);

    let view = f.service.get_request(request.id).await.unwrap();
    assert_eq!(view.request.description, "Need a tile cutter");
    assert!(view.items.is_empty());
}

#[tokio::test]
async fn test_request_view_lists_fulfilling_items() {
    let f = setup().await;
    let request = f
        .service
        .create_request(f.requestor.id, "Need a tile cutter".to_string())
        .await
        .unwrap();
    let item = f
        .items
        .create(Item::new(
            "Tile cutter",
            "Manual tile cutter",
            true,
            f.owner.id,
            Some(request.id),
        ))
        .await
        .unwrap();

    let view = f.service.get_request(request.id).await.unwrap();
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].id, item.id);

    let by_user = f.service.get_requests_by_user(f.requestor.id).await.unwrap();
    assert_eq!(by_user.len(), 1);
    assert_eq!(by_user[0].items.len(), 1);
}

#[tokio::test]
async fn test_requests_by_user_without_requests_not_found() {
    let f = setup().await;
    let result = f.service.get_requests_by_user(f.owner.id).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_create_request_unknown_user_not_found() {
    let f = setup().await;
    let result = f.service.create_request(999, "Anything".to_string()).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}
