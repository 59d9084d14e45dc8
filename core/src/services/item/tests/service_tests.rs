//! Unit tests for item CRUD, the owner's aggregated item views, search,
//! and comment eligibility.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::booking::Booking;
use crate::domain::entities::item::Item;
use crate::domain::entities::user::User;
use crate::errors::{CommentError, DomainError};
use crate::repositories::booking::BookingRepository;
use crate::repositories::item::ItemRepository;
use crate::repositories::user::UserRepository;
use crate::repositories::{
    MockBookingRepository, MockCommentRepository, MockItemRepository, MockItemRequestRepository,
    MockUserRepository,
};
use crate::services::item::{ItemService, ItemUpdate, NewItem};

type Service = ItemService<
    MockItemRepository,
    MockUserRepository,
    MockBookingRepository,
    MockCommentRepository,
    MockItemRequestRepository,
>;

struct Fixture {
    service: Service,
    users: Arc<MockUserRepository>,
    items: Arc<MockItemRepository>,
    bookings: Arc<MockBookingRepository>,
    owner: User,
    renter: User,
}

async fn setup() -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let items = Arc::new(MockItemRepository::new());
    let bookings = Arc::new(MockBookingRepository::new(items.clone() as Arc<dyn ItemRepository>));
    let comments = Arc::new(MockCommentRepository::new());
    let requests = Arc::new(MockItemRequestRepository::new());

    let owner = users.create(User::new("Olga", "olga@example.com")).await.unwrap();
    let renter = users.create(User::new("Rita", "rita@example.com")).await.unwrap();

    let service = ItemService::new(
        items.clone(),
        users.clone(),
        bookings.clone(),
        comments,
        requests,
    );
    Fixture {
        service,
        users,
        items,
        bookings,
        owner,
        renter,
    }
}

fn hours(offset: i64) -> DateTime<Utc> {
    Utc::now() + Duration::hours(offset)
}

fn new_item(name: &str) -> NewItem {
    NewItem {
        name: name.to_string(),
        description: format!("{} for rent", name),
        available: true,
        request_id: None,
    }
}

#[tokio::test]
async fn test_create_and_update_item() {
    let f = setup().await;
    let item = f.service.create_item(f.owner.id, new_item("Drill")).await.unwrap();
    assert!(item.id > 0);
    assert_eq!(item.owner_id, f.owner.id);

    let updated = f
        .service
        .update_item(
            f.owner.id,
            item.id,
            ItemUpdate {
                available: Some(false),
                ..ItemUpdate::default()
            },
        )
        .await
        .unwrap();
    assert!(!updated.available);
    assert_eq!(updated.name, "Drill");
}

#[tokio::test]
async fn test_update_by_non_owner_fails() {
    let f = setup().await;
    let item = f.service.create_item(f.owner.id, new_item("Drill")).await.unwrap();
    let result = f
        .service
        .update_item(
            f.renter.id,
            item.id,
            ItemUpdate {
                name: Some("Stolen".to_string()),
                ..ItemUpdate::default()
            },
        )
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_create_item_with_missing_request_fails() {
    let f = setup().await;
    let result = f
        .service
        .create_item(
            f.owner.id,
            NewItem {
                request_id: Some(99),
                ..new_item("Drill")
            },
        )
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_owner_views_carry_last_and_next_booking() {
    let f = setup().await;
    let item = f.service.create_item(f.owner.id, new_item("Drill")).await.unwrap();

    let finished = Booking::new(item.id, f.renter.id, hours(-5), hours(-4));
    let older_finished = Booking::new(item.id, f.renter.id, hours(-9), hours(-8));
    let upcoming = Booking::new(item.id, f.renter.id, hours(4), hours(5));
    let later_upcoming = Booking::new(item.id, f.renter.id, hours(8), hours(9));
    for booking in [finished.clone(), older_finished, upcoming.clone(), later_upcoming] {
        f.bookings.create(booking).await.unwrap();
    }

    let views = f.service.get_items_by_owner(f.owner.id).await.unwrap();
    assert_eq!(views.len(), 1);
    let view = &views[0];
    // Latest end among finished rentals, earliest start among upcoming ones
    assert_eq!(view.last_booking, Some(finished.end));
    assert_eq!(view.next_booking, Some(upcoming.start));
}

#[tokio::test]
async fn test_owner_view_without_bookings_has_no_times() {
    let f = setup().await;
    f.service.create_item(f.owner.id, new_item("Drill")).await.unwrap();
    let views = f.service.get_items_by_owner(f.owner.id).await.unwrap();
    assert_eq!(views.len(), 1);
    assert!(views[0].last_booking.is_none());
    assert!(views[0].next_booking.is_none());
    assert!(views[0].comments.is_empty());
}

#[tokio::test]
async fn test_owner_with_no_items_not_found() {
    let f = setup().await;
    let empty_handed = f.users.create(User::new("Nils", "nils@example.com")).await.unwrap();
    let result = f.service.get_items_by_owner(empty_handed.id).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_search_matches_available_items_only() {
    let f = setup().await;
    f.service.create_item(f.owner.id, new_item("Power Drill")).await.unwrap();
    let hidden = f
        .service
        .create_item(
            f.owner.id,
            NewItem {
                available: false,
                ..new_item("Drill Press")
            },
        )
        .await
        .unwrap();

    let found = f.service.search("drill").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_ne!(found[0].id, hidden.id);

    let blank = f.service.search("   ").await.unwrap();
    assert!(blank.is_empty());
}

#[tokio::test]
async fn test_comment_after_finished_rental() {
    let f = setup().await;
    let item = f.service.create_item(f.owner.id, new_item("Drill")).await.unwrap();
    f.bookings
        .create(Booking::new(item.id, f.renter.id, hours(-3), hours(-1)))
        .await
        .unwrap();

    let comment = f
        .service
        .create_comment(f.renter.id, item.id, "Solid tool".to_string())
        .await
        .unwrap();
    assert_eq!(comment.item_id, item.id);
    assert_eq!(comment.author_id, f.renter.id);

    let view = f.service.get_item(item.id).await.unwrap();
    assert_eq!(view.comments.len(), 1);
    assert_eq!(view.comments[0].text, "Solid tool");
}

#[tokio::test]
async fn test_comment_without_any_booking_fails() {
    let f = setup().await;
    let item = f.service.create_item(f.owner.id, new_item("Drill")).await.unwrap();
    let result = f
        .service
        .create_comment(f.renter.id, item.id, "Nice".to_string())
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Comment(CommentError::NeverBooked))
    ));
}

#[tokio::test]
async fn test_comment_before_rental_finishes_fails() {
    let f = setup().await;
    let item = f.service.create_item(f.owner.id, new_item("Drill")).await.unwrap();
    f.bookings
        .create(Booking::new(item.id, f.renter.id, hours(1), hours(2)))
        .await
        .unwrap();

    let result = f
        .service
        .create_comment(f.renter.id, item.id, "Too early".to_string())
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Comment(CommentError::RentalNotFinished))
    ));
}

#[tokio::test]
async fn test_comment_on_other_item_does_not_qualify() {
    let f = setup().await;
    let rented = f.service.create_item(f.owner.id, new_item("Drill")).await.unwrap();
    let other = f.service.create_item(f.owner.id, new_item("Ladder")).await.unwrap();
    f.bookings
        .create(Booking::new(rented.id, f.renter.id, hours(-3), hours(-1)))
        .await
        .unwrap();

    let result = f
        .service
        .create_comment(f.renter.id, other.id, "Never rented this".to_string())
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Comment(CommentError::RentalNotFinished))
    ));
}

#[tokio::test]
async fn test_delete_item_owner_only() {
    let f = setup().await;
    let item = f.service.create_item(f.owner.id, new_item("Drill")).await.unwrap();

    let result = f.service.delete_item(f.renter.id, item.id).await;
    assert!(matches!(result, Err(DomainError::Forbidden { .. })));

    f.service.delete_item(f.owner.id, item.id).await.unwrap();
    assert!(f.items.find_by_id(item.id).await.unwrap().is_none());
}
