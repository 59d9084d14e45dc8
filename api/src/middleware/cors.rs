//! CORS configuration, environment-aware.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use lend_shared::config::Environment;

use crate::extract::SHARER_USER_ID;

/// Build the CORS middleware for the given environment.
///
/// Development allows any origin; production restricts origins to the
/// comma-separated `ALLOWED_ORIGINS` variable.
pub fn create_cors(environment: Environment) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-sharer-user-id"),
        ])
        .max_age(3600);

    match environment {
        Environment::Production => {
            let origins = std::env::var("ALLOWED_ORIGINS").unwrap_or_default();
            origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .fold(cors, |cors, origin| cors.allowed_origin(origin))
        }
        _ => {
            tracing::debug!(header = SHARER_USER_ID, "permissive CORS for development");
            cors.allow_any_origin()
        }
    }
}
