//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{BookingError, CommentError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Comment(#[from] CommentError),
}

impl DomainError {
    /// Convenience constructor for a missing resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Convenience constructor for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    /// Convenience constructor for a failed authorization check
    pub fn forbidden(message: impl Into<String>) -> Self {
        DomainError::Forbidden {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
