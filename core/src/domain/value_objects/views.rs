//! Read-side views derived on request, never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::comment::Comment;
use crate::domain::entities::item::Item;
use crate::domain::entities::item_request::ItemRequest;

/// Display view of an item, enriched with its booking history summary
/// and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    /// The item itself
    pub item: Item,

    /// End of the most recent booking that has already finished, if any
    pub last_booking: Option<DateTime<Utc>>,

    /// Start of the nearest booking that has not yet started, if any
    pub next_booking: Option<DateTime<Utc>>,

    /// All comments left on the item
    pub comments: Vec<Comment>,
}

impl ItemView {
    /// A view with no booking summary and no comments
    pub fn bare(item: Item) -> Self {
        Self {
            item,
            last_booking: None,
            next_booking: None,
            comments: Vec::new(),
        }
    }
}

/// Display view of a catalog request together with the items listed to
/// fulfil it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestView {
    /// The request itself
    pub request: ItemRequest,

    /// Items whose `request_id` references this request
    pub items: Vec<Item>,
}
