//! Domain entities representing core business objects.

pub mod booking;
pub mod comment;
pub mod item;
pub mod item_request;
pub mod user;

// Re-export commonly used types
pub use booking::{Booking, BookingStatus};
pub use comment::Comment;
pub use item::Item;
pub use item_request::ItemRequest;
pub use user::User;
