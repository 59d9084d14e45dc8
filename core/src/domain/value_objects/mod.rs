//! Value objects representing immutable domain concepts.

pub mod state_filter;
pub mod views;

// Re-export commonly used types
pub use state_filter::{BookingRole, StateFilter};
pub use views::{ItemView, RequestView};
