//! Repository interfaces for entity persistence.
//!
//! The services depend only on these traits; the `lend_infra` crate
//! provides the MySQL implementations and the `mock` modules provide
//! in-memory fakes for tests.

pub mod booking;
pub mod comment;
pub mod item;
pub mod request;
pub mod user;

pub use booking::{BookingRepository, MockBookingRepository};
pub use comment::{CommentRepository, MockCommentRepository};
pub use item::{ItemRepository, MockItemRepository};
pub use request::{ItemRequestRepository, MockItemRequestRepository};
pub use user::{MockUserRepository, UserRepository};
