//! `/users` handlers.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::error::ApiError;

/// `POST /users`
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    body.validate()?;
    let user = state.user_service.create_user(body.into()).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// `PATCH /users/{id}`
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    body.validate()?;
    let user = state
        .user_service
        .update_user(path.into_inner(), body.into())
        .await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// `GET /users/{id}`
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user = state.user_service.get_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// `GET /users`
pub async fn get_all_users(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let users = state.user_service.get_all_users().await?;
    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// `DELETE /users/{id}`
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    state.user_service.delete_user(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
