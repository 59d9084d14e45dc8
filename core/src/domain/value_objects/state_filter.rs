//! Booking list filters and the caller's role in a listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::booking::{Booking, BookingStatus};

/// Which side of a booking the caller is listing for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingRole {
    /// Bookings the caller created
    Booker,
    /// Bookings on items the caller owns
    Owner,
}

/// Filter applied to a booking listing, evaluated against a single `now`
/// captured at the start of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StateFilter {
    /// No predicate
    All,
    /// `start <= now <= end`
    Current,
    /// `end < now`
    Past,
    /// `start > now`
    Future,
    /// Status is `Waiting`
    Waiting,
    /// Status is `Approved`
    Approved,
    /// Status is `Rejected`
    Rejected,
}

impl StateFilter {
    /// Evaluates the filter predicate for one booking.
    ///
    /// Every variant is matched exhaustively so a new filter cannot be
    /// added without deciding its predicate here.
    pub fn matches(&self, booking: &Booking, now: DateTime<Utc>) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::Current => booking.is_current(now),
            StateFilter::Past => booking.is_finished(now),
            StateFilter::Future => booking.is_future(now),
            StateFilter::Waiting => booking.status == BookingStatus::Waiting,
            StateFilter::Approved => booking.status == BookingStatus::Approved,
            StateFilter::Rejected => booking.status == BookingStatus::Rejected,
        }
    }
}

impl Default for StateFilter {
    fn default() -> Self {
        StateFilter::All
    }
}

impl std::str::FromStr for StateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALL" => Ok(StateFilter::All),
            "CURRENT" => Ok(StateFilter::Current),
            "PAST" => Ok(StateFilter::Past),
            "FUTURE" => Ok(StateFilter::Future),
            "WAITING" => Ok(StateFilter::Waiting),
            "APPROVED" => Ok(StateFilter::Approved),
            "REJECTED" => Ok(StateFilter::Rejected),
            other => Err(format!("unknown booking state filter: {}", other)),
        }
    }
}
