//! MySQL implementation of the ItemRequestRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use lend_core::domain::entities::item_request::ItemRequest;
use lend_core::errors::DomainError;
use lend_core::repositories::ItemRequestRepository;

/// MySQL implementation of ItemRequestRepository
pub struct MySqlItemRequestRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlItemRequestRepository {
    /// Create a new MySQL catalog request repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an ItemRequest entity
    fn row_to_request(row: &sqlx::mysql::MySqlRow) -> Result<ItemRequest, DomainError> {
        Ok(ItemRequest {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::Database(format!("Failed to get description: {}", e)))?,
            requestor_id: row
                .try_get("requestor_id")
                .map_err(|e| DomainError::Database(format!("Failed to get requestor_id: {}", e)))?,
            created: row
                .try_get::<DateTime<Utc>, _>("created")
                .map_err(|e| DomainError::Database(format!("Failed to get created: {}", e)))?,
        })
    }
}

#[async_trait]
impl ItemRequestRepository for MySqlItemRequestRepository {
    async fn create(&self, mut request: ItemRequest) -> Result<ItemRequest, DomainError> {
        let query = r#"
            INSERT INTO requests (description, requestor_id, created)
            VALUES (?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&request.description)
            .bind(request.requestor_id)
            .bind(request.created)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create request: {}", e)))?;

        request.id = result.last_insert_id() as i64;
        Ok(request)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ItemRequest>, DomainError> {
        let query = r#"
            SELECT id, description, requestor_id, created
            FROM requests
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_request(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<ItemRequest>, DomainError> {
        let query = r#"
            SELECT id, description, requestor_id, created
            FROM requests
            ORDER BY created DESC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_request).collect()
    }

    async fn find_all_by_requestor(&self, requestor_id: i64) -> Result<Vec<ItemRequest>, DomainError> {
        let query = r#"
            SELECT id, description, requestor_id, created
            FROM requests
            WHERE requestor_id = ?
            ORDER BY created DESC
        "#;

        let rows = sqlx::query(query)
            .bind(requestor_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_request).collect()
    }
}
