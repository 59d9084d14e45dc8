//! Catalog request entity: a user asking for an item that is not listed yet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog request entity. Owners may later list items that reference the
/// request; listing a request shows those items alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    /// Unique identifier, assigned by storage on creation
    pub id: i64,

    /// What the requestor is looking for
    pub description: String,

    /// User who placed the request
    pub requestor_id: i64,

    /// Creation timestamp (UTC)
    pub created: DateTime<Utc>,
}

impl ItemRequest {
    /// Creates a new ItemRequest instance; the id is assigned by the repository
    pub fn new(description: impl Into<String>, requestor_id: i64, created: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            description: description.into(),
            requestor_id,
            created,
        }
    }
}
