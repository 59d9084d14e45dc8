//! `/requests` handlers.

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::request_dto::{CreateRequestBody, RequestResponse, RequestViewResponse};
use crate::error::ApiError;
use crate::extract::sharer_id;

/// `POST /requests`
pub async fn create_request(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateRequestBody>,
) -> Result<HttpResponse, ApiError> {
    let requestor_id = sharer_id(&req)?;
    let body = body.into_inner();
    body.validate()?;
    let request = state
        .request_service
        .create_request(requestor_id, body.description)
        .await?;
    Ok(HttpResponse::Created().json(RequestResponse::from(request)))
}

/// `GET /requests`: the caller's own requests with fulfilling items
pub async fn get_own_requests(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user_id = sharer_id(&req)?;
    let views = state.request_service.get_requests_by_user(user_id).await?;
    let response: Vec<RequestViewResponse> =
        views.into_iter().map(RequestViewResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// `GET /requests/all`
pub async fn get_all_requests(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let requests = state.request_service.get_all_requests().await?;
    let response: Vec<RequestResponse> = requests.into_iter().map(RequestResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// `GET /requests/{id}`
pub async fn get_request(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let view = state.request_service.get_request(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(RequestViewResponse::from(view)))
}
