//! Booking service implementation

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::entities::booking::Booking;
use crate::domain::value_objects::state_filter::{BookingRole, StateFilter};
use crate::errors::{BookingError, DomainError, DomainResult};
use crate::repositories::{BookingRepository, ItemRepository, UserRepository};

use super::lock::ItemLockRegistry;

/// Candidate booking as submitted by the caller
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub item_id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Booking service managing the booking lifecycle.
///
/// Every public operation reads the clock exactly once on entry and uses
/// that value for all temporal comparisons within the call, so one request
/// can never classify the same booking as both past and current.
pub struct BookingService<B, U, I>
where
    B: BookingRepository,
    U: UserRepository,
    I: ItemRepository,
{
    /// Booking repository for persistence
    booking_repository: Arc<B>,
    /// User repository, consulted for caller existence checks
    user_repository: Arc<U>,
    /// Item repository, consulted for availability and ownership
    item_repository: Arc<I>,
    /// Per-item locks guarding the overlap check-and-insert
    locks: ItemLockRegistry,
}

impl<B, U, I> BookingService<B, U, I>
where
    B: BookingRepository,
    U: UserRepository,
    I: ItemRepository,
{
    /// Create a new booking service
    pub fn new(booking_repository: Arc<B>, user_repository: Arc<U>, item_repository: Arc<I>) -> Self {
        Self {
            booking_repository,
            user_repository,
            item_repository,
            locks: ItemLockRegistry::new(),
        }
    }

    /// Create a booking for an item.
    ///
    /// Validation order:
    /// 1. Booker and item must exist
    /// 2. The interval must be non-empty (`start < end` strictly)
    /// 3. The item must be available
    /// 4. The interval must not overlap any booking on the item that has
    ///    not finished yet; finished bookings cannot conflict
    ///
    /// The overlap check and the insert run under the item's lock so two
    /// concurrent requests cannot both validate against the same snapshot.
    /// Nothing is persisted unless every check passes.
    ///
    /// On success the booking is persisted in the `Waiting` status.
    pub async fn create_booking(&self, booker_id: i64, new_booking: NewBooking) -> DomainResult<Booking> {
        let now = Utc::now();

        self.user_repository
            .find_by_id(booker_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        let item = self
            .item_repository
            .find_by_id(new_booking.item_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Item"))?;

        if new_booking.start >= new_booking.end {
            return Err(BookingError::InvalidInterval.into());
        }
        if !item.available {
            return Err(BookingError::ItemUnavailable.into());
        }

        let _guard = self.locks.acquire(item.id).await;

        let candidate = Booking::new(item.id, booker_id, new_booking.start, new_booking.end);
        let existing = self.booking_repository.find_all_by_item(item.id).await?;
        let conflict = existing
            .iter()
            .filter(|b| b.end > now)
            .any(|b| candidate.overlaps(b));
        if conflict {
            return Err(BookingError::Overlapping.into());
        }

        let booking = self.booking_repository.create(candidate).await?;
        info!(
            booking_id = booking.id,
            item_id = booking.item_id,
            booker_id = booking.booker_id,
            "booking created"
        );
        Ok(booking)
    }

    /// Approve or reject a pending booking.
    ///
    /// Only the owner of the booked item may decide, and only while the
    /// booking is `Waiting`. A second decision on the same booking fails
    /// rather than silently repeating, surfacing the misuse to the caller.
    pub async fn decide_booking(&self, caller_id: i64, booking_id: i64, approved: bool) -> DomainResult<Booking> {
        let mut booking = self
            .booking_repository
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))?;
        let item = self
            .item_repository
            .find_by_id(booking.item_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Item"))?;

        if !item.is_owned_by(caller_id) {
            return Err(DomainError::forbidden(
                "only the owner of the booked item may approve or reject a booking",
            ));
        }

        booking.decide(approved)?;
        let booking = self.booking_repository.update(booking).await?;
        info!(
            booking_id = booking.id,
            status = %booking.status,
            "booking decided"
        );
        Ok(booking)
    }

    /// Fetch one booking.
    ///
    /// Visible only to the booker and the item owner; any third party gets
    /// a `Forbidden` error even if the booking exists.
    pub async fn get_booking(&self, caller_id: i64, booking_id: i64) -> DomainResult<Booking> {
        let booking = self
            .booking_repository
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))?;
        let item = self
            .item_repository
            .find_by_id(booking.item_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Item"))?;

        if !booking.is_visible_to(caller_id, item.owner_id) {
            return Err(DomainError::forbidden(
                "only the booker or the item owner may view a booking",
            ));
        }
        Ok(booking)
    }

    /// List bookings for the caller in the given role, filtered and ordered
    /// by start descending. The caller must be an existing user.
    pub async fn list_bookings(
        &self,
        caller_id: i64,
        role: BookingRole,
        filter: StateFilter,
    ) -> DomainResult<Vec<Booking>> {
        let now = Utc::now();

        self.user_repository
            .find_by_id(caller_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        match role {
            BookingRole::Booker => {
                self.booking_repository
                    .find_all_by_booker(caller_id, filter, now)
                    .await
            }
            BookingRole::Owner => {
                self.booking_repository
                    .find_all_by_owner(caller_id, filter, now)
                    .await
            }
        }
    }
}
