//! Mock implementation of BookingRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::booking::Booking;
use crate::domain::value_objects::state_filter::StateFilter;
use crate::errors::DomainError;
use crate::repositories::item::ItemRepository;

use super::trait_::BookingRepository;

/// Mock booking repository for testing.
///
/// Owner-side queries need to know which items a user owns, so the mock
/// holds a handle to the item repository it is paired with in the test.
pub struct MockBookingRepository {
    bookings: Arc<RwLock<HashMap<i64, Booking>>>,
    items: Arc<dyn ItemRepository>,
    next_id: AtomicI64,
}

impl MockBookingRepository {
    /// Create a new mock repository backed by the given item repository
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self {
            bookings: Arc::new(RwLock::new(HashMap::new())),
            items,
            next_id: AtomicI64::new(1),
        }
    }

    fn sort_newest_first(bookings: &mut [Booking]) {
        bookings.sort_by(|a, b| b.start.cmp(&a.start));
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn create(&self, mut booking: Booking) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;
        booking.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;
        if !bookings.contains_key(&booking.id) {
            return Err(DomainError::not_found("Booking"));
        }
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.get(&id).cloned())
    }

    async fn find_all_by_item(&self, item_id: i64) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        let mut on_item: Vec<Booking> = bookings
            .values()
            .filter(|b| b.item_id == item_id)
            .cloned()
            .collect();
        Self::sort_newest_first(&mut on_item);
        Ok(on_item)
    }

    async fn find_all_by_booker(
        &self,
        booker_id: i64,
        filter: StateFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        let mut mine: Vec<Booking> = bookings
            .values()
            .filter(|b| b.booker_id == booker_id && filter.matches(b, now))
            .cloned()
            .collect();
        Self::sort_newest_first(&mut mine);
        Ok(mine)
    }

    async fn find_all_by_owner(
        &self,
        owner_id: i64,
        filter: StateFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<Booking>, DomainError> {
        let owned_ids: Vec<i64> = self
            .items
            .find_all_by_owner(owner_id)
            .await?
            .into_iter()
            .map(|i| i.id)
            .collect();
        let bookings = self.bookings.read().await;
        let mut on_owned: Vec<Booking> = bookings
            .values()
            .filter(|b| owned_ids.contains(&b.item_id) && filter.matches(b, now))
            .cloned()
            .collect();
        Self::sort_newest_first(&mut on_owned);
        Ok(on_owned)
    }
}
