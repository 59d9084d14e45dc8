//! HTTP error mapping.
//!
//! Wraps [`DomainError`] so the service layer's error taxonomy maps onto
//! HTTP status codes and the shared [`ErrorResponse`] wire body.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use lend_core::errors::DomainError;
use lend_shared::errors::{error_codes, ErrorResponse};

/// Error returned by every route handler
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self(DomainError::validation(errors.to_string()))
    }
}

impl ApiError {
    fn error_code(&self) -> &'static str {
        match &self.0 {
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Validation { .. } => error_codes::VALIDATION_ERROR,
            DomainError::Booking(_) | DomainError::Comment(_) => error_codes::BAD_REQUEST,
            DomainError::Forbidden { .. } => error_codes::FORBIDDEN,
            DomainError::Database(_) => error_codes::DATABASE_ERROR,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Validation { .. }
            | DomainError::Booking(_)
            | DomainError::Comment(_) => StatusCode::BAD_REQUEST,
            DomainError::Forbidden { .. } => StatusCode::FORBIDDEN,
            DomainError::Database(_) | DomainError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorResponse::new(self.error_code(), self.wire_message()))
    }
}

impl ApiError {
    /// Message placed on the wire. Storage failure details stay in the
    /// logs, not in the response body.
    fn wire_message(&self) -> String {
        match &self.0 {
            DomainError::Database(detail) => {
                tracing::error!(error = %detail, "database failure");
                "internal storage error".to_string()
            }
            other => other.to_string(),
        }
    }
}
