//! MySQL repository implementations
//!
//! One implementation per `lend_core` repository trait, all using runtime
//! SQLx queries with explicit row mapping.

pub mod booking_repository_impl;
pub mod comment_repository_impl;
pub mod item_repository_impl;
pub mod request_repository_impl;
pub mod user_repository_impl;

pub use booking_repository_impl::MySqlBookingRepository;
pub use comment_repository_impl::MySqlCommentRepository;
pub use item_repository_impl::MySqlItemRepository;
pub use request_repository_impl::MySqlItemRequestRepository;
pub use user_repository_impl::MySqlUserRepository;
