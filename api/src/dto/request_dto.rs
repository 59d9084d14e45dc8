//! Catalog request bodies and views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use lend_core::domain::entities::item_request::ItemRequest;
use lend_core::domain::value_objects::views::RequestView;

use super::item_dto::ItemResponse;

/// Body of `POST /requests`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequestBody {
    #[validate(length(min = 1, message = "description must not be blank"))]
    pub description: String,
}

/// Catalog request as returned by the API
#[derive(Debug, Serialize)]
pub struct RequestResponse {
    pub id: i64,
    pub description: String,
    pub requestor_id: i64,
    pub created: DateTime<Utc>,
}

impl From<ItemRequest> for RequestResponse {
    fn from(request: ItemRequest) -> Self {
        Self {
            id: request.id,
            description: request.description,
            requestor_id: request.requestor_id,
            created: request.created,
        }
    }
}

/// Catalog request together with the items listed to fulfil it
#[derive(Debug, Serialize)]
pub struct RequestViewResponse {
    pub id: i64,
    pub description: String,
    pub requestor_id: i64,
    pub created: DateTime<Utc>,
    pub items: Vec<ItemResponse>,
}

impl From<RequestView> for RequestViewResponse {
    fn from(view: RequestView) -> Self {
        Self {
            id: view.request.id,
            description: view.request.description,
            requestor_id: view.request.requestor_id,
            created: view.request.created,
            items: view.items.into_iter().map(ItemResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let blank = CreateRequestBody {
            description: String::new(),
        };
        assert!(blank.validate().is_err());

        let valid = CreateRequestBody {
            description: "Looking for a ladder".to_string(),
        };
        assert!(valid.validate().is_ok());
    }
}
