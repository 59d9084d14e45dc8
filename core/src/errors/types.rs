//! Booking- and comment-specific error types
//!
//! These enums describe the business-rule failures of the booking lifecycle.
//! The presentation layer maps every variant to an HTTP 400 response; the
//! messages here are the canonical reason strings.

use thiserror::Error;

/// Booking lifecycle errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    #[error("Booking start and end must not be the same instant and start must precede end")]
    InvalidInterval,

    #[error("The item is not available for booking")]
    ItemUnavailable,

    #[error("The booking overlaps an existing booking for this item")]
    Overlapping,

    #[error("Only a pending booking can be approved or rejected")]
    AlreadyDecided,
}

/// Comment eligibility errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommentError {
    #[error("Only a user who has rented the item may comment on it")]
    NeverBooked,

    #[error("Only a user whose rental of the item has finished may comment on it")]
    RentalNotFinished,
}
