//! Caller identity extraction.

use actix_web::HttpRequest;

use lend_core::errors::DomainError;

use crate::error::ApiError;

/// Header carrying the caller's user id, validated upstream
pub const SHARER_USER_ID: &str = "X-Sharer-User-Id";

/// Read the caller id from the `X-Sharer-User-Id` header.
///
/// A missing or non-numeric header is a client error, not an
/// authentication failure; the header is trusted once present.
pub fn sharer_id(req: &HttpRequest) -> Result<i64, ApiError> {
    req.headers()
        .get(SHARER_USER_ID)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<i64>().ok())
        .ok_or_else(|| {
            ApiError(DomainError::validation(format!(
                "missing or invalid {} header",
                SHARER_USER_ID
            )))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_valid_header() {
        let req = TestRequest::default()
            .insert_header((SHARER_USER_ID, "42"))
            .to_http_request();
        assert_eq!(sharer_id(&req).unwrap(), 42);
    }

    #[test]
    fn test_missing_header() {
        let req = TestRequest::default().to_http_request();
        assert!(sharer_id(&req).is_err());
    }

    #[test]
    fn test_non_numeric_header() {
        let req = TestRequest::default()
            .insert_header((SHARER_USER_ID, "abc"))
            .to_http_request();
        assert!(sharer_id(&req).is_err());
    }
}
