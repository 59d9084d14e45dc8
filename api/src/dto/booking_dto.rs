//! Booking request/response bodies and listing query parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lend_core::domain::entities::booking::{Booking, BookingStatus};
use lend_core::domain::value_objects::state_filter::StateFilter;
use lend_core::errors::DomainError;
use lend_core::services::NewBooking;

use crate::error::ApiError;

/// Body of `POST /bookings`
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub item_id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<CreateBookingRequest> for NewBooking {
    fn from(request: CreateBookingRequest) -> Self {
        Self {
            item_id: request.item_id,
            start: request.start,
            end: request.end,
        }
    }
}

/// Query of `PATCH /bookings/{id}?approved=`
#[derive(Debug, Deserialize)]
pub struct DecideQuery {
    pub approved: bool,
}

/// Query of the booking listings; defaults to `ALL` when absent
#[derive(Debug, Default, Deserialize)]
pub struct StateQuery {
    pub state: Option<String>,
}

impl StateQuery {
    /// Parse the filter, rejecting unknown values as a client error
    pub fn filter(&self) -> Result<StateFilter, ApiError> {
        match &self.state {
            None => Ok(StateFilter::default()),
            Some(state) => state
                .parse()
                .map_err(|message: String| ApiError(DomainError::validation(message))),
        }
    }
}

/// Booking as returned by the API
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub item_id: i64,
    pub booker_id: i64,
    pub status: BookingStatus,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            start: booking.start,
            end: booking.end,
            item_id: booking.item_id,
            booker_id: booking.booker_id,
            status: booking.status,
        }
    }
}
