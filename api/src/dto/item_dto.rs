//! Item, item-view and comment request/response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use lend_core::domain::entities::comment::Comment;
use lend_core::domain::entities::item::Item;
use lend_core::domain::value_objects::views::ItemView;
use lend_core::services::{ItemUpdate, NewItem};

/// Body of `POST /items`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, max = 255, message = "name must not be blank"))]
    pub name: String,

    #[validate(length(min = 1, message = "description must not be blank"))]
    pub description: String,

    pub available: bool,

    /// Catalog request this listing fulfills, if any
    pub request_id: Option<i64>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(request: CreateItemRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            available: request.available,
            request_id: request.request_id,
        }
    }
}

/// Body of `PATCH /items/{id}`; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateItemRequest {
    #[validate(length(min = 1, max = 255, message = "name must not be blank"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "description must not be blank"))]
    pub description: Option<String>,

    pub available: Option<bool>,
}

impl From<UpdateItemRequest> for ItemUpdate {
    fn from(request: UpdateItemRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            available: request.available,
        }
    }
}

/// Item as returned by the API
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<i64>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.available,
            owner_id: item.owner_id,
            request_id: item.request_id,
        }
    }
}

/// Body of `POST /items/{id}/comment`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "text must not be blank"))]
    pub text: String,
}

/// Comment as returned by the API
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub text: String,
    pub item_id: i64,
    pub author_id: i64,
    pub created: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            text: comment.text,
            item_id: comment.item_id,
            author_id: comment.author_id,
            created: comment.created,
        }
    }
}

/// Item enriched with its booking summary and comments
#[derive(Debug, Serialize)]
pub struct ItemViewResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<i64>,
    pub last_booking: Option<DateTime<Utc>>,
    pub next_booking: Option<DateTime<Utc>>,
    pub comments: Vec<CommentResponse>,
}

impl From<ItemView> for ItemViewResponse {
    fn from(view: ItemView) -> Self {
        Self {
            id: view.item.id,
            name: view.item.name,
            description: view.item.description,
            available: view.item.available,
            owner_id: view.item.owner_id,
            request_id: view.item.request_id,
            last_booking: view.last_booking,
            next_booking: view.next_booking,
            comments: view.comments.into_iter().map(CommentResponse::from).collect(),
        }
    }
}
