//! Unit tests for user registration, updates, and email uniqueness.

use std::sync::Arc;

use crate::errors::DomainError;
use crate::repositories::MockUserRepository;
use crate::services::user::{NewUser, UserService, UserUpdate};

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
    }
}

fn service() -> UserService<MockUserRepository> {
    UserService::new(Arc::new(MockUserRepository::new()))
}

#[tokio::test]
async fn test_create_and_get_user() {
    let service = service();
    let user = service.create_user(new_user("Alice", "alice@example.com")).await.unwrap();
    assert!(user.id > 0);

    let fetched = service.get_user(user.id).await.unwrap();
    assert_eq!(fetched, user);
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let service = service();
    service.create_user(new_user("Alice", "alice@example.com")).await.unwrap();
    let result = service.create_user(new_user("Alia", "alice@example.com")).await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_update_to_taken_email_rejected() {
    let service = service();
    service.create_user(new_user("Alice", "alice@example.com")).await.unwrap();
    let bob = service.create_user(new_user("Bob", "bob@example.com")).await.unwrap();

    let result = service
        .update_user(
            bob.id,
            UserUpdate {
                email: Some("alice@example.com".to_string()),
                ..UserUpdate::default()
            },
        )
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));

    // Re-submitting the user's own email is not a conflict
    let unchanged = service
        .update_user(
            bob.id,
            UserUpdate {
                email: Some("bob@example.com".to_string()),
                ..UserUpdate::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(unchanged.email, "bob@example.com");
}

#[tokio::test]
async fn test_get_missing_user_not_found() {
    let service = service();
    let result = service.get_user(42).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_user() {
    let service = service();
    let user = service.create_user(new_user("Alice", "alice@example.com")).await.unwrap();
    service.delete_user(user.id).await.unwrap();
    assert!(matches!(
        service.get_user(user.id).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        service.delete_user(user.id).await,
        Err(DomainError::NotFound { .. })
    ));
}
