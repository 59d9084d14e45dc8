//! Business services containing domain logic and use cases.

pub mod booking;
pub mod item;
pub mod request;
pub mod user;

// Re-export commonly used types
pub use booking::{BookingService, ItemLockRegistry, NewBooking};
pub use item::{ItemService, ItemUpdate, NewItem};
pub use request::ItemRequestService;
pub use user::{NewUser, UserService, UserUpdate};
