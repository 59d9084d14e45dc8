//! `/items` handlers.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::app::AppState;
use crate::dto::item_dto::{
    CommentResponse, CreateCommentRequest, CreateItemRequest, ItemResponse, ItemViewResponse,
    UpdateItemRequest,
};
use crate::error::ApiError;
use crate::extract::sharer_id;

/// Query of `GET /items/search?text=`
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub text: String,
}

/// `POST /items`
pub async fn create_item(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateItemRequest>,
) -> Result<HttpResponse, ApiError> {
    let owner_id = sharer_id(&req)?;
    let body = body.into_inner();
    body.validate()?;
    let item = state.item_service.create_item(owner_id, body.into()).await?;
    Ok(HttpResponse::Created().json(ItemResponse::from(item)))
}

/// `PATCH /items/{id}`
pub async fn update_item(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateItemRequest>,
) -> Result<HttpResponse, ApiError> {
    let caller_id = sharer_id(&req)?;
    let body = body.into_inner();
    body.validate()?;
    let item = state
        .item_service
        .update_item(caller_id, path.into_inner(), body.into())
        .await?;
    Ok(HttpResponse::Ok().json(ItemResponse::from(item)))
}

/// `GET /items/{id}`
pub async fn get_item(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let view = state.item_service.get_item(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ItemViewResponse::from(view)))
}

/// `GET /items`: the caller's own items with booking summaries
pub async fn get_owner_items(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let owner_id = sharer_id(&req)?;
    let views = state.item_service.get_items_by_owner(owner_id).await?;
    let response: Vec<ItemViewResponse> = views.into_iter().map(ItemViewResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// `GET /items/search?text=`
pub async fn search_items(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, ApiError> {
    let items = state.item_service.search(&query.text).await?;
    let response: Vec<ItemResponse> = items.into_iter().map(ItemResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// `DELETE /items/{id}`
pub async fn delete_item(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let caller_id = sharer_id(&req)?;
    state
        .item_service
        .delete_item(caller_id, path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// `POST /items/{id}/comment`
pub async fn create_comment(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, ApiError> {
    let author_id = sharer_id(&req)?;
    let body = body.into_inner();
    body.validate()?;
    let comment = state
        .item_service
        .create_comment(author_id, path.into_inner(), body.text)
        .await?;
    Ok(HttpResponse::Ok().json(CommentResponse::from(comment)))
}
