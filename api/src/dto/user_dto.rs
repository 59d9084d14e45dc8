//! User request/response bodies.

use serde::{Deserialize, Serialize};
use validator::Validate;

use lend_core::domain::entities::user::User;
use lend_core::services::{NewUser, UserUpdate};

/// Body of `POST /users`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255, message = "name must not be blank"))]
    pub name: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
        }
    }
}

/// Body of `PATCH /users/{id}`; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255, message = "name must not be blank"))]
    pub name: Option<String>,

    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
        }
    }
}

/// User as returned by the API
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
