//! MySQL implementation of the ItemRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use lend_core::domain::entities::item::Item;
use lend_core::errors::DomainError;
use lend_core::repositories::ItemRepository;

/// MySQL implementation of ItemRepository
pub struct MySqlItemRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlItemRepository {
    /// Create a new MySQL item repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Item entity
    fn row_to_item(row: &sqlx::mysql::MySqlRow) -> Result<Item, DomainError> {
        Ok(Item {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::Database(format!("Failed to get name: {}", e)))?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::Database(format!("Failed to get description: {}", e)))?,
            available: row
                .try_get("available")
                .map_err(|e| DomainError::Database(format!("Failed to get available: {}", e)))?,
            owner_id: row
                .try_get("owner_id")
                .map_err(|e| DomainError::Database(format!("Failed to get owner_id: {}", e)))?,
            request_id: row
                .try_get("request_id")
                .map_err(|e| DomainError::Database(format!("Failed to get request_id: {}", e)))?,
        })
    }

    /// Placeholder list for an `IN (...)` clause
    fn placeholders(count: usize) -> String {
        vec!["?"; count].join(", ")
    }
}

#[async_trait]
impl ItemRepository for MySqlItemRepository {
    async fn create(&self, mut item: Item) -> Result<Item, DomainError> {
        let query = r#"
            INSERT INTO items (name, description, available, owner_id, request_id)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.available)
            .bind(item.owner_id)
            .bind(item.request_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create item: {}", e)))?;

        item.id = result.last_insert_id() as i64;
        Ok(item)
    }

    async fn update(&self, item: Item) -> Result<Item, DomainError> {
        let query = r#"
            UPDATE items
            SET name = ?, description = ?, available = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.available)
            .bind(item.id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to update item: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Item"));
        }
        Ok(item)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, DomainError> {
        let query = r#"
            SELECT id, name, description, available, owner_id, request_id
            FROM items
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_item(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all_by_owner(&self, owner_id: i64) -> Result<Vec<Item>, DomainError> {
        let query = r#"
            SELECT id, name, description, available, owner_id, request_id
            FROM items
            WHERE owner_id = ?
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn find_all_by_request_ids(&self, request_ids: &[i64]) -> Result<Vec<Item>, DomainError> {
        if request_ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            r#"
            SELECT id, name, description, available, owner_id, request_id
            FROM items
            WHERE request_id IN ({})
            ORDER BY id
            "#,
            Self::placeholders(request_ids.len())
        );

        let mut query = sqlx::query(&sql);
        for request_id in request_ids {
            query = query.bind(request_id);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn search(&self, text: &str) -> Result<Vec<Item>, DomainError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let query = r#"
            SELECT id, name, description, available, owner_id, request_id
            FROM items
            WHERE available = TRUE
              AND (LOWER(name) LIKE LOWER(?) OR LOWER(description) LIKE LOWER(?))
            ORDER BY id
        "#;
        let pattern = format!("%{}%", text);

        let rows = sqlx::query(query)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let query = "DELETE FROM items WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to delete item: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
