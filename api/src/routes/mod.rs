//! Route handlers, one module per resource.

pub mod bookings;
pub mod items;
pub mod requests;
pub mod users;
