//! MySQL implementation of the CommentRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use lend_core::domain::entities::comment::Comment;
use lend_core::errors::DomainError;
use lend_core::repositories::CommentRepository;

/// MySQL implementation of CommentRepository
pub struct MySqlCommentRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCommentRepository {
    /// Create a new MySQL comment repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Comment entity
    fn row_to_comment(row: &sqlx::mysql::MySqlRow) -> Result<Comment, DomainError> {
        Ok(Comment {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?,
            text: row
                .try_get("text")
                .map_err(|e| DomainError::Database(format!("Failed to get text: {}", e)))?,
            item_id: row
                .try_get("item_id")
                .map_err(|e| DomainError::Database(format!("Failed to get item_id: {}", e)))?,
            author_id: row
                .try_get("author_id")
                .map_err(|e| DomainError::Database(format!("Failed to get author_id: {}", e)))?,
            created: row
                .try_get::<DateTime<Utc>, _>("created")
                .map_err(|e| DomainError::Database(format!("Failed to get created: {}", e)))?,
        })
    }
}

#[async_trait]
impl CommentRepository for MySqlCommentRepository {
    async fn create(&self, mut comment: Comment) -> Result<Comment, DomainError> {
        let query = r#"
            INSERT INTO comments (text, item_id, author_id, created)
            VALUES (?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&comment.text)
            .bind(comment.item_id)
            .bind(comment.author_id)
            .bind(comment.created)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create comment: {}", e)))?;

        comment.id = result.last_insert_id() as i64;
        Ok(comment)
    }

    async fn find_all_by_item(&self, item_id: i64) -> Result<Vec<Comment>, DomainError> {
        let query = r#"
            SELECT id, text, item_id, author_id, created
            FROM comments
            WHERE item_id = ?
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .bind(item_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_comment).collect()
    }

    async fn find_all_by_items(&self, item_ids: &[i64]) -> Result<Vec<Comment>, DomainError> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; item_ids.len()].join(", ");
        let sql = format!(
            r#"
            SELECT id, text, item_id, author_id, created
            FROM comments
            WHERE item_id IN ({})
            ORDER BY id
            "#,
            placeholders
        );

        let mut query = sqlx::query(&sql);
        for item_id in item_ids {
            query = query.bind(item_id);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_comment).collect()
    }
}
