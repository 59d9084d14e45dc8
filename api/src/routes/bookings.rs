//! `/bookings` handlers.

use actix_web::{web, HttpRequest, HttpResponse};

use lend_core::domain::value_objects::state_filter::BookingRole;

use crate::app::AppState;
use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest, DecideQuery, StateQuery};
use crate::error::ApiError;
use crate::extract::sharer_id;

/// `POST /bookings`
pub async fn create_booking(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateBookingRequest>,
) -> Result<HttpResponse, ApiError> {
    let booker_id = sharer_id(&req)?;
    let booking = state
        .booking_service
        .create_booking(booker_id, body.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(BookingResponse::from(booking)))
}

/// `PATCH /bookings/{id}?approved=`
pub async fn decide_booking(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<DecideQuery>,
) -> Result<HttpResponse, ApiError> {
    let caller_id = sharer_id(&req)?;
    let booking = state
        .booking_service
        .decide_booking(caller_id, path.into_inner(), query.approved)
        .await?;
    Ok(HttpResponse::Ok().json(BookingResponse::from(booking)))
}

/// `GET /bookings/{id}`
pub async fn get_booking(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let caller_id = sharer_id(&req)?;
    let booking = state
        .booking_service
        .get_booking(caller_id, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(BookingResponse::from(booking)))
}

/// `GET /bookings?state=`: bookings the caller created
pub async fn get_booker_bookings(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<StateQuery>,
) -> Result<HttpResponse, ApiError> {
    list_bookings(req, state, query, BookingRole::Booker).await
}

/// `GET /bookings/owner?state=`: bookings on items the caller owns
pub async fn get_owner_bookings(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<StateQuery>,
) -> Result<HttpResponse, ApiError> {
    list_bookings(req, state, query, BookingRole::Owner).await
}

async fn list_bookings(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<StateQuery>,
    role: BookingRole,
) -> Result<HttpResponse, ApiError> {
    let caller_id = sharer_id(&req)?;
    let filter = query.filter()?;
    let bookings = state
        .booking_service
        .list_bookings(caller_id, role, filter)
        .await?;
    let response: Vec<BookingResponse> = bookings.into_iter().map(BookingResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}
