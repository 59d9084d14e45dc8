//! Comment entity left by a renter on an item after a finished rental.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment entity. Create-only: comments are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier, assigned by storage on creation
    pub id: i64,

    /// Comment body
    pub text: String,

    /// Commented item
    pub item_id: i64,

    /// Authoring user
    pub author_id: i64,

    /// Creation timestamp (UTC)
    pub created: DateTime<Utc>,
}

impl Comment {
    /// Creates a new Comment instance; the id is assigned by the repository
    pub fn new(text: impl Into<String>, item_id: i64, author_id: i64, created: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            text: text.into(),
            item_id,
            author_id,
            created,
        }
    }
}
