//! Item entity representing a thing offered for rent.

use serde::{Deserialize, Serialize};

/// Item entity. An item belongs to exactly one owner and may optionally
/// have been created in response to a catalog request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned by storage on creation
    pub id: i64,

    /// Short display name
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Whether the item can currently be booked
    pub available: bool,

    /// Id of the owning user
    pub owner_id: i64,

    /// Catalog request this item fulfills, if any
    pub request_id: Option<i64>,
}

impl Item {
    /// Creates a new Item instance; the id is assigned by the repository
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        available: bool,
        owner_id: i64,
        request_id: Option<i64>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            available,
            owner_id,
            request_id,
        }
    }

    /// Checks whether the given user owns this item
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }
}
