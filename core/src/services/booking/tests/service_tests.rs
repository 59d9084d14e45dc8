//! Unit tests for the booking lifecycle: creation validation, overlap
//! rejection, the approve/reject state machine, authorization, and the
//! state-filtered listings.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::booking::BookingStatus;
use crate::domain::entities::item::Item;
use crate::domain::entities::user::User;
use crate::domain::value_objects::state_filter::{BookingRole, StateFilter};
use crate::errors::{BookingError, DomainError};
use crate::repositories::item::ItemRepository;
use crate::repositories::user::UserRepository;
use crate::repositories::{MockBookingRepository, MockItemRepository, MockUserRepository};
use crate::services::booking::{BookingService, NewBooking};

struct Fixture {
    service: BookingService<MockBookingRepository, MockUserRepository, MockItemRepository>,
    owner: User,
    booker: User,
    item: Item,
}

/// One owner with one available item, plus one booker
async fn setup() -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let items = Arc::new(MockItemRepository::new());
    let bookings = Arc::new(MockBookingRepository::new(items.clone() as Arc<dyn ItemRepository>));

    let owner = users.create(User::new("Olga", "olga@example.com")).await.unwrap();
    let booker = users.create(User::new("Rita", "rita@example.com")).await.unwrap();
    let item = items
        .create(Item::new("Drill", "Cordless drill", true, owner.id, None))
        .await
        .unwrap();

    let service = BookingService::new(bookings, users, items);
    Fixture {
        service,
        owner,
        booker,
        item,
    }
}

fn hours(offset: i64) -> DateTime<Utc> {
    Utc::now() + Duration::hours(offset)
}

fn new_booking(item_id: i64, start_offset: i64, end_offset: i64) -> NewBooking {
    NewBooking {
        item_id,
        start: hours(start_offset),
        end: hours(end_offset),
    }
}

#[tokio::test]
async fn test_created_booking_is_waiting() {
    let f = setup().await;
    let booking = f
        .service
        .create_booking(f.booker.id, new_booking(f.item.id, 2, 3))
        .await
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Waiting);
    assert!(booking.id > 0);
    assert!(booking.start < booking.end);
    assert_eq!(booking.booker_id, f.booker.id);
}

#[tokio::test]
async fn test_empty_interval_rejected() {
    let f = setup().await;
    let start = hours(2);
    let result = f
        .service
        .create_booking(
            f.booker.id,
            NewBooking {
                item_id: f.item.id,
                start,
                end: start,
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Booking(BookingError::InvalidInterval))
    ));
}

#[tokio::test]
async fn test_inverted_interval_rejected() {
    let f = setup().await;
    let result = f
        .service
        .create_booking(f.booker.id, new_booking(f.item.id, 3, 2))
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Booking(BookingError::InvalidInterval))
    ));
}

#[tokio::test]
async fn test_unavailable_item_rejected() {
    let users = Arc::new(MockUserRepository::new());
    let items = Arc::new(MockItemRepository::new());
    let bookings = Arc::new(MockBookingRepository::new(items.clone() as Arc<dyn ItemRepository>));
    let owner = users.create(User::new("Olga", "olga@example.com")).await.unwrap();
    let booker = users.create(User::new("Rita", "rita@example.com")).await.unwrap();
    let item = items
        .create(Item::new("Saw", "Hand saw", false, owner.id, None))
        .await
        .unwrap();
    let service = BookingService::new(bookings, users, items);

    let result = service.create_booking(booker.id, new_booking(item.id, 2, 3)).await;
    assert!(matches!(
        result,
        Err(DomainError::Booking(BookingError::ItemUnavailable))
    ));
}

#[tokio::test]
async fn test_unknown_booker_and_item_not_found() {
    let f = setup().await;
    let result = f.service.create_booking(999, new_booking(f.item.id, 2, 3)).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));

    let result = f.service.create_booking(f.booker.id, new_booking(999, 2, 3)).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_overlapping_booking_rejected() {
    let f = setup().await;
    f.service
        .create_booking(f.booker.id, new_booking(f.item.id, 2, 3))
        .await
        .unwrap();

    // strictly inside
    let inside = f
        .service
        .create_booking(f.owner.id, new_booking(f.item.id, 2, 3))
        .await;
    assert!(matches!(
        inside,
        Err(DomainError::Booking(BookingError::Overlapping))
    ));

    // partial overlap on the left edge
    let partial = f
        .service
        .create_booking(f.owner.id, new_booking(f.item.id, 1, 2))
        .await;
    assert!(matches!(
        partial,
        Err(DomainError::Booking(BookingError::Overlapping))
    ));

    // disjoint interval on the same item is fine
    let disjoint = f
        .service
        .create_booking(f.owner.id, new_booking(f.item.id, 4, 5))
        .await;
    assert!(disjoint.is_ok());
}

#[tokio::test]
async fn test_finished_booking_does_not_conflict() {
    let f = setup().await;
    // Already-finished rental occupying the same clock-face interval
    f.service
        .create_booking(f.booker.id, new_booking(f.item.id, -3, -2))
        .await
        .unwrap();

    // The same interval again: the finished booking is no obstacle
    let result = f
        .service
        .create_booking(f.owner.id, new_booking(f.item.id, -3, -2))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_decide_approve_then_repeat_fails() {
    let f = setup().await;
    let booking = f
        .service
        .create_booking(f.booker.id, new_booking(f.item.id, 2, 3))
        .await
        .unwrap();

    let approved = f.service.decide_booking(f.owner.id, booking.id, true).await.unwrap();
    assert_eq!(approved.status, BookingStatus::Approved);

    let repeat = f.service.decide_booking(f.owner.id, booking.id, false).await;
    assert!(matches!(
        repeat,
        Err(DomainError::Booking(BookingError::AlreadyDecided))
    ));
}

#[tokio::test]
async fn test_decide_reject() {
    let f = setup().await;
    let booking = f
        .service
        .create_booking(f.booker.id, new_booking(f.item.id, 2, 3))
        .await
        .unwrap();
    let rejected = f.service.decide_booking(f.owner.id, booking.id, false).await.unwrap();
    assert_eq!(rejected.status, BookingStatus::Rejected);
}

#[tokio::test]
async fn test_decide_by_non_owner_forbidden() {
    let f = setup().await;
    let booking = f
        .service
        .create_booking(f.booker.id, new_booking(f.item.id, 2, 3))
        .await
        .unwrap();

    // Even the booker may not decide their own booking
    let result = f.service.decide_booking(f.booker.id, booking.id, true).await;
    assert!(matches!(result, Err(DomainError::Forbidden { .. })));

    let refreshed = f.service.get_booking(f.booker.id, booking.id).await.unwrap();
    assert_eq!(refreshed.status, BookingStatus::Waiting);
}

#[tokio::test]
async fn test_decide_missing_booking_not_found() {
    let f = setup().await;
    let result = f.service.decide_booking(f.owner.id, 999, true).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_get_booking_visibility() {
    let f = setup().await;
    let booking = f
        .service
        .create_booking(f.booker.id, new_booking(f.item.id, 2, 3))
        .await
        .unwrap();

    assert!(f.service.get_booking(f.booker.id, booking.id).await.is_ok());
    assert!(f.service.get_booking(f.owner.id, booking.id).await.is_ok());

    let missing = f.service.get_booking(f.booker.id, booking.id + 100).await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_get_booking_third_party_forbidden() {
    let users = Arc::new(MockUserRepository::new());
    let items = Arc::new(MockItemRepository::new());
    let bookings = Arc::new(MockBookingRepository::new(items.clone() as Arc<dyn ItemRepository>));
    let owner = users.create(User::new("Olga", "olga@example.com")).await.unwrap();
    let booker = users.create(User::new("Rita", "rita@example.com")).await.unwrap();
    let stranger = users.create(User::new("Sven", "sven@example.com")).await.unwrap();
    let item = items
        .create(Item::new("Drill", "Cordless drill", true, owner.id, None))
        .await
        .unwrap();
    let service = BookingService::new(bookings, users, items);

    let booking = service
        .create_booking(booker.id, new_booking(item.id, 2, 3))
        .await
        .unwrap();
    let result = service.get_booking(stranger.id, booking.id).await;
    assert!(matches!(result, Err(DomainError::Forbidden { .. })));
}

#[tokio::test]
async fn test_list_bookings_filters_and_order() {
    let f = setup().await;
    let past = f
        .service
        .create_booking(f.booker.id, new_booking(f.item.id, -4, -3))
        .await
        .unwrap();
    let current = f
        .service
        .create_booking(f.booker.id, new_booking(f.item.id, -1, 1))
        .await
        .unwrap();
    let future = f
        .service
        .create_booking(f.booker.id, new_booking(f.item.id, 3, 4))
        .await
        .unwrap();

    let all = f
        .service
        .list_bookings(f.booker.id, BookingRole::Booker, StateFilter::All)
        .await
        .unwrap();
    assert_eq!(
        all.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![future.id, current.id, past.id]
    );

    let futures = f
        .service
        .list_bookings(f.booker.id, BookingRole::Booker, StateFilter::Future)
        .await
        .unwrap();
    assert_eq!(futures.iter().map(|b| b.id).collect::<Vec<_>>(), vec![future.id]);

    let pasts = f
        .service
        .list_bookings(f.booker.id, BookingRole::Booker, StateFilter::Past)
        .await
        .unwrap();
    assert_eq!(pasts.iter().map(|b| b.id).collect::<Vec<_>>(), vec![past.id]);

    let currents = f
        .service
        .list_bookings(f.booker.id, BookingRole::Booker, StateFilter::Current)
        .await
        .unwrap();
    assert_eq!(currents.iter().map(|b| b.id).collect::<Vec<_>>(), vec![current.id]);

    // PAST, CURRENT and FUTURE together partition ALL
    let partition_len = futures.len() + pasts.len() + currents.len();
    assert_eq!(partition_len, all.len());
}

#[tokio::test]
async fn test_list_bookings_status_filters() {
    let f = setup().await;
    let first = f
        .service
        .create_booking(f.booker.id, new_booking(f.item.id, 2, 3))
        .await
        .unwrap();
    let second = f
        .service
        .create_booking(f.booker.id, new_booking(f.item.id, 5, 6))
        .await
        .unwrap();
    f.service.decide_booking(f.owner.id, first.id, true).await.unwrap();

    let waiting = f
        .service
        .list_bookings(f.booker.id, BookingRole::Booker, StateFilter::Waiting)
        .await
        .unwrap();
    assert_eq!(waiting.iter().map(|b| b.id).collect::<Vec<_>>(), vec![second.id]);

    let approved = f
        .service
        .list_bookings(f.booker.id, BookingRole::Booker, StateFilter::Approved)
        .await
        .unwrap();
    assert_eq!(approved.iter().map(|b| b.id).collect::<Vec<_>>(), vec![first.id]);

    let rejected = f
        .service
        .list_bookings(f.booker.id, BookingRole::Booker, StateFilter::Rejected)
        .await
        .unwrap();
    assert!(rejected.is_empty());
}

#[tokio::test]
async fn test_list_bookings_owner_role() {
    let f = setup().await;
    let booking = f
        .service
        .create_booking(f.booker.id, new_booking(f.item.id, 2, 3))
        .await
        .unwrap();

    let as_owner = f
        .service
        .list_bookings(f.owner.id, BookingRole::Owner, StateFilter::All)
        .await
        .unwrap();
    assert_eq!(as_owner.iter().map(|b| b.id).collect::<Vec<_>>(), vec![booking.id]);

    // The booker owns no items, so the owner-side listing is empty
    let booker_as_owner = f
        .service
        .list_bookings(f.booker.id, BookingRole::Owner, StateFilter::All)
        .await
        .unwrap();
    assert!(booker_as_owner.is_empty());
}

#[tokio::test]
async fn test_list_bookings_unknown_user_not_found() {
    let f = setup().await;
    let result = f
        .service
        .list_bookings(999, BookingRole::Booker, StateFilter::All)
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}
