//! Shared utilities and common types for the Lendify server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types
//! - Error response structures and error codes

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, ServerConfig};
pub use errors::{error_codes, ErrorResponse};
