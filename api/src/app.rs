//! Application state and route wiring.
//!
//! Services are generic over their repository traits; the HTTP layer pins
//! them to the MySQL implementations so handlers stay free of type
//! parameters.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use lend_core::services::{BookingService, ItemRequestService, ItemService, UserService};
use lend_infra::{
    MySqlBookingRepository, MySqlCommentRepository, MySqlItemRepository,
    MySqlItemRequestRepository, MySqlPool, MySqlUserRepository,
};

use crate::routes;

pub type Users = UserService<MySqlUserRepository>;
pub type Items = ItemService<
    MySqlItemRepository,
    MySqlUserRepository,
    MySqlBookingRepository,
    MySqlCommentRepository,
    MySqlItemRequestRepository,
>;
pub type Bookings = BookingService<MySqlBookingRepository, MySqlUserRepository, MySqlItemRepository>;
pub type Requests = ItemRequestService<MySqlItemRequestRepository, MySqlUserRepository, MySqlItemRepository>;

/// Shared services, one instance for the whole server
pub struct AppState {
    pub user_service: Users,
    pub item_service: Items,
    pub booking_service: Bookings,
    pub request_service: Requests,
}

impl AppState {
    /// Wire every service over one connection pool
    pub fn new(pool: MySqlPool) -> Self {
        let users = Arc::new(MySqlUserRepository::new(pool.clone()));
        let items = Arc::new(MySqlItemRepository::new(pool.clone()));
        let bookings = Arc::new(MySqlBookingRepository::new(pool.clone()));
        let comments = Arc::new(MySqlCommentRepository::new(pool.clone()));
        let requests = Arc::new(MySqlItemRequestRepository::new(pool));

        Self {
            user_service: UserService::new(users.clone()),
            item_service: ItemService::new(
                items.clone(),
                users.clone(),
                bookings.clone(),
                comments,
                requests.clone(),
            ),
            booking_service: BookingService::new(bookings, users.clone(), items.clone()),
            request_service: ItemRequestService::new(requests, users, items),
        }
    }
}

/// Mount every route.
///
/// Literal segments (`/search`, `/owner`, `/all`) are registered before
/// the `{id}` routes they would otherwise collide with.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .service(
            web::scope("/users")
                .route("", web::post().to(routes::users::create_user))
                .route("", web::get().to(routes::users::get_all_users))
                .route("/{user_id}", web::get().to(routes::users::get_user))
                .route("/{user_id}", web::patch().to(routes::users::update_user))
                .route("/{user_id}", web::delete().to(routes::users::delete_user)),
        )
        .service(
            web::scope("/items")
                .route("", web::post().to(routes::items::create_item))
                .route("", web::get().to(routes::items::get_owner_items))
                .route("/search", web::get().to(routes::items::search_items))
                .route("/{item_id}", web::get().to(routes::items::get_item))
                .route("/{item_id}", web::patch().to(routes::items::update_item))
                .route("/{item_id}", web::delete().to(routes::items::delete_item))
                .route("/{item_id}/comment", web::post().to(routes::items::create_comment)),
        )
        .service(
            web::scope("/bookings")
                .route("", web::post().to(routes::bookings::create_booking))
                .route("", web::get().to(routes::bookings::get_booker_bookings))
                .route("/owner", web::get().to(routes::bookings::get_owner_bookings))
                .route("/{booking_id}", web::get().to(routes::bookings::get_booking))
                .route("/{booking_id}", web::patch().to(routes::bookings::decide_booking)),
        )
        .service(
            web::scope("/requests")
                .route("", web::post().to(routes::requests::create_request))
                .route("", web::get().to(routes::requests::get_own_requests))
                .route("/all", web::get().to(routes::requests::get_all_requests))
                .route("/{request_id}", web::get().to(routes::requests::get_request)),
        );
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "lendify-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
