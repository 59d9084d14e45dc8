//! Booking repository trait defining the interface for booking persistence.
//!
//! The listing queries take the caller-chosen [`StateFilter`] together with
//! the request's `now` so the time-window predicates are evaluated against
//! one single clock reading, and they return results ordered by `start`
//! descending because every user-facing listing wants that order.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::booking::Booking;
use crate::domain::value_objects::state_filter::StateFilter;
use crate::errors::DomainError;

/// Repository trait for Booking entity persistence operations
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking and return it with its assigned id
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Update an existing booking (status changes only; item, booker and
    /// interval are immutable after creation)
    async fn update(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Find a booking by its unique identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, DomainError>;

    /// Fetch every booking on one item, newest start first
    async fn find_all_by_item(&self, item_id: i64) -> Result<Vec<Booking>, DomainError>;

    /// Fetch the caller's own bookings matching `filter`, newest start first
    async fn find_all_by_booker(
        &self,
        booker_id: i64,
        filter: StateFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<Booking>, DomainError>;

    /// Fetch bookings on all items owned by `owner_id` matching `filter`,
    /// newest start first
    async fn find_all_by_owner(
        &self,
        owner_id: i64,
        filter: StateFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<Booking>, DomainError>;
}
