//! Booking entity and its status state machine.
//!
//! A booking reserves one item for one closed time interval. The status
//! starts at `Waiting` and moves exactly once to `Approved` or `Rejected`
//! by decision of the item owner; both of those states are terminal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::BookingError;

/// Lifecycle status of a booking
///
/// The enum is deliberately closed: every transition and filter site
/// matches exhaustively, so adding a state forces every consumer to be
/// revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    /// Awaiting the owner's decision; the only status a booking is created in
    Waiting,
    /// Confirmed by the owner; terminal
    Approved,
    /// Declined by the owner; terminal
    Rejected,
}

impl BookingStatus {
    /// Whether any further transition is legal from this status
    pub fn is_terminal(&self) -> bool {
        match self {
            BookingStatus::Waiting => false,
            BookingStatus::Approved | BookingStatus::Rejected => true,
        }
    }

    /// Canonical storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Waiting => "WAITING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WAITING" => Ok(BookingStatus::Waiting),
            "APPROVED" => Ok(BookingStatus::Approved),
            "REJECTED" => Ok(BookingStatus::Rejected),
            other => Err(format!("unknown booking status: {}", other)),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booking entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier, assigned by storage on creation
    pub id: i64,

    /// Start of the rental interval (UTC)
    pub start: DateTime<Utc>,

    /// End of the rental interval (UTC), strictly after `start`
    pub end: DateTime<Utc>,

    /// Booked item; immutable after creation
    pub item_id: i64,

    /// User who requested the booking; immutable after creation
    pub booker_id: i64,

    /// Lifecycle status
    pub status: BookingStatus,
}

impl Booking {
    /// Creates a new booking in the `Waiting` status; the id is assigned
    /// by the repository. Interval validity is checked by the service
    /// before the booking is persisted.
    pub fn new(item_id: i64, booker_id: i64, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            start,
            end,
            item_id,
            booker_id,
            status: BookingStatus::Waiting,
        }
    }

    /// Applies the owner's decision.
    ///
    /// Legal only while the booking is `Waiting`; a repeated decision on an
    /// already-decided booking is an error, never a silent no-op.
    pub fn decide(&mut self, approved: bool) -> Result<(), BookingError> {
        if self.status != BookingStatus::Waiting {
            return Err(BookingError::AlreadyDecided);
        }
        self.status = if approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };
        Ok(())
    }

    /// Closed-interval overlap test against another booking.
    ///
    /// Touching endpoints count as a conflict: a booking ending exactly
    /// when another starts is still an overlap.
    pub fn overlaps(&self, other: &Booking) -> bool {
        !(self.start > other.end || self.end < other.start)
    }

    /// Whether the rental has already finished at `now`
    pub fn is_finished(&self, now: DateTime<Utc>) -> bool {
        self.end < now
    }

    /// Whether the rental is in progress at `now`
    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now <= self.end
    }

    /// Whether the rental has not yet started at `now`
    pub fn is_future(&self, now: DateTime<Utc>) -> bool {
        self.start > now
    }

    /// Whether the given user may view this booking. Only the booker and
    /// the item owner have that right; the owner id comes from the loaded
    /// item since the booking itself stores only the item id.
    pub fn is_visible_to(&self, user_id: i64, item_owner_id: i64) -> bool {
        self.booker_id == user_id || item_owner_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_new_booking_is_waiting() {
        let booking = Booking::new(1, 2, at(10), at(12));
        assert_eq!(booking.status, BookingStatus::Waiting);
        assert_eq!(booking.id, 0);
    }

    #[test]
    fn test_decide_approve_and_reject() {
        let mut booking = Booking::new(1, 2, at(10), at(12));
        booking.decide(true).unwrap();
        assert_eq!(booking.status, BookingStatus::Approved);

        let mut booking = Booking::new(1, 2, at(10), at(12));
        booking.decide(false).unwrap();
        assert_eq!(booking.status, BookingStatus::Rejected);
    }

    #[test]
    fn test_decide_is_single_shot() {
        let mut booking = Booking::new(1, 2, at(10), at(12));
        booking.decide(true).unwrap();
        assert_eq!(booking.decide(false), Err(BookingError::AlreadyDecided));
        assert_eq!(booking.decide(true), Err(BookingError::AlreadyDecided));
        assert_eq!(booking.status, BookingStatus::Approved);
    }

    #[test]
    fn test_overlap_partial_and_contained() {
        let base = Booking::new(1, 2, at(10), at(14));
        let inside = Booking::new(1, 3, at(11), at(12));
        let left = Booking::new(1, 3, at(8), at(11));
        let right = Booking::new(1, 3, at(13), at(16));
        let equal = base.clone();
        assert!(base.overlaps(&inside));
        assert!(base.overlaps(&left));
        assert!(base.overlaps(&right));
        assert!(base.overlaps(&equal));
    }

    #[test]
    fn test_overlap_touching_endpoints_conflict() {
        let base = Booking::new(1, 2, at(10), at(12));
        let adjacent = Booking::new(1, 3, at(12), at(14));
        assert!(base.overlaps(&adjacent));
        assert!(adjacent.overlaps(&base));
    }

    #[test]
    fn test_disjoint_intervals_do_not_overlap() {
        let base = Booking::new(1, 2, at(10), at(11));
        let later = Booking::new(1, 3, at(12), at(13));
        assert!(!base.overlaps(&later));
    }

    #[test]
    fn test_temporal_classification() {
        let booking = Booking::new(1, 2, at(10), at(12));
        assert!(booking.is_future(at(9)));
        assert!(booking.is_current(at(10)));
        assert!(booking.is_current(at(11)));
        assert!(booking.is_current(at(12)));
        assert!(booking.is_finished(at(12) + Duration::seconds(1)));
        assert!(!booking.is_finished(at(12)));
    }

    #[test]
    fn test_visibility() {
        let booking = Booking::new(5, 2, at(10), at(12));
        assert!(booking.is_visible_to(2, 9));
        assert!(booking.is_visible_to(9, 9));
        assert!(!booking.is_visible_to(3, 9));
    }

    #[test]
    fn test_status_round_trip() {
        for status in [BookingStatus::Waiting, BookingStatus::Approved, BookingStatus::Rejected] {
            assert_eq!(status.as_str().parse::<BookingStatus>().unwrap(), status);
        }
        assert!("CANCELED".parse::<BookingStatus>().is_err());
    }
}
