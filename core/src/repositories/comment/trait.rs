//! Comment repository trait defining the interface for comment persistence.

use async_trait::async_trait;

use crate::domain::entities::comment::Comment;
use crate::errors::DomainError;

/// Repository trait for Comment entity persistence operations.
/// Comments are create-only; there is no update or delete.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment and return it with its assigned id
    async fn create(&self, comment: Comment) -> Result<Comment, DomainError>;

    /// Fetch all comments on one item
    async fn find_all_by_item(&self, item_id: i64) -> Result<Vec<Comment>, DomainError>;

    /// Fetch all comments on any of the given items
    async fn find_all_by_items(&self, item_ids: &[i64]) -> Result<Vec<Comment>, DomainError>;
}
