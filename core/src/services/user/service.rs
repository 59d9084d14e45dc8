//! User service implementation

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

/// New user registration data
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Partial update of a user; absent fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// User service managing registration and profile updates.
pub struct UserService<U>
where
    U: UserRepository,
{
    user_repository: Arc<U>,
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    /// Create a new user service
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Register a user. Emails must be unique across all users.
    pub async fn create_user(&self, new_user: NewUser) -> DomainResult<User> {
        if self.user_repository.exists_by_email(&new_user.email, None).await? {
            return Err(DomainError::validation("a user with this email already exists"));
        }
        let user = self
            .user_repository
            .create(User::new(new_user.name, new_user.email))
            .await?;
        info!(user_id = user.id, "user created");
        Ok(user)
    }

    /// Partially update a user; an email change is checked against every
    /// other user's email.
    pub async fn update_user(&self, user_id: i64, update: UserUpdate) -> DomainResult<User> {
        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            if self
                .user_repository
                .exists_by_email(&email, Some(user.id))
                .await?
            {
                return Err(DomainError::validation("a user with this email already exists"));
            }
            user.email = email;
        }
        self.user_repository.update(user).await
    }

    /// Fetch one user
    pub async fn get_user(&self, user_id: i64) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Fetch all users
    pub async fn get_all_users(&self) -> DomainResult<Vec<User>> {
        self.user_repository.find_all().await
    }

    /// Delete a user
    pub async fn delete_user(&self, user_id: i64) -> DomainResult<()> {
        if !self.user_repository.delete(user_id).await? {
            return Err(DomainError::not_found("User"));
        }
        info!(user_id, "user deleted");
        Ok(())
    }
}
