//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between the domain and infrastructure layers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with its assigned id
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    ///
    /// # Returns
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError)` - Update failed (e.g. user not found)
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Fetch all users
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Delete a user
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// Check whether any user other than `exclude_id` already uses `email`
    async fn exists_by_email(&self, email: &str, exclude_id: Option<i64>) -> Result<bool, DomainError>;
}
