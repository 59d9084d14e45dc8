//! Booking service module
//!
//! This module implements the booking lifecycle:
//! - Creation with interval and availability validation
//! - Overlap checking under a per-item lock
//! - The owner's approve/reject decision (the status state machine)
//! - Authorization checks for viewing a booking
//! - Listing with state filters for both the booker and the owner role

mod lock;
mod service;

#[cfg(test)]
mod tests;

pub use lock::ItemLockRegistry;
pub use service::{BookingService, NewBooking};
