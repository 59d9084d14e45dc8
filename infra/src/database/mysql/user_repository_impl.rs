//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use lend_core::domain::entities::user::User;
use lend_core::errors::DomainError;
use lend_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::Database(format!("Failed to get name: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Database(format!("Failed to get email: {}", e)))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (name, email)
            VALUES (?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.name)
            .bind(&user.email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create user: {}", e)))?;

        user.id = result.last_insert_id() as i64;
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET name = ?, email = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to update user: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User"));
        }
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, name, email
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let query = r#"
            SELECT id, name, email
            FROM users
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let query = "DELETE FROM users WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_email(&self, email: &str, exclude_id: Option<i64>) -> Result<bool, DomainError> {
        let query = r#"
            SELECT COUNT(*) AS cnt
            FROM users
            WHERE email = ? AND (? IS NULL OR id != ?)
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .bind(exclude_id)
            .bind(exclude_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        let count: i64 = row
            .try_get("cnt")
            .map_err(|e| DomainError::Database(format!("Failed to get cnt: {}", e)))?;
        Ok(count > 0)
    }
}
