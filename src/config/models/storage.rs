//! Storage configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// Per-query timeout in seconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
    /// Enable database (if false, use in-memory storage)
    #[serde(default)]
    pub enabled: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
            query_timeout: default_query_timeout(),
            enabled: false,
        }
    }
}

impl DatabaseConfig {
    /// In-memory SQLite database, one connection so every query sees the same data
    pub fn sqlite_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            enabled: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        if self.url.is_empty() {
            return Err("Database URL is required when the database is enabled".to_string());
        }

        let supported = ["sqlite:", "postgres://", "postgresql://"];
        if !supported.iter().any(|prefix| self.url.starts_with(prefix)) {
            return Err(format!("Unsupported database URL: {}", self.url));
        }

        if self.max_connections == 0 {
            return Err("max_connections cannot be 0".to_string());
        }

        if self.query_timeout == 0 {
            return Err("query_timeout cannot be 0".to_string());
        }

        Ok(())
    }
}
