//! # Lendify Infrastructure
//!
//! MySQL implementations of the `lend_core` repository traits, plus
//! connection pool management.

pub mod database;

pub use database::connection::create_pool;
pub use sqlx::MySqlPool;
pub use database::mysql::{
    MySqlBookingRepository, MySqlCommentRepository, MySqlItemRepository, MySqlItemRequestRepository,
    MySqlUserRepository,
};
