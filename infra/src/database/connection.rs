//! Database connection pool management
//!
//! Connection pooling uses SQLx with MySQL, configured from the shared
//! [`DatabaseConfig`].

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use lend_core::errors::DomainError;
use lend_shared::config::DatabaseConfig;

/// Create a MySQL connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, DomainError> {
    tracing::info!(
        max_connections = config.max_connections,
        "creating database connection pool"
    );

    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::Database(format!("Failed to connect to database: {}", e)))
}
