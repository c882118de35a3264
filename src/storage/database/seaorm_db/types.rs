use crate::utils::error::{Result, ServiceError};
use sea_orm::{DatabaseConnection, DbErr};
use std::future::Future;
use std::time::Duration;

/// SeaORM-based database implementation
#[derive(Debug)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    /// Backend type indicator
    pub(super) backend_type: DatabaseBackendType,
    /// Upper bound for a single query
    pub(super) query_timeout: Duration,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

impl DatabaseBackendType {
    pub fn from_url(url: &str) -> Self {
        if url.starts_with("sqlite") {
            DatabaseBackendType::SQLite
        } else {
            DatabaseBackendType::PostgreSQL
        }
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DatabaseStats {
    /// Total number of users
    pub total_users: u64,
    /// Total number of workers
    pub total_workers: u64,
}

impl SeaOrmDatabase {
    /// Run a query under the configured timeout
    pub(super) async fn timed<T, F>(&self, query: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, DbErr>>,
    {
        tokio::time::timeout(self.query_timeout, query)
            .await
            .map_err(|_| ServiceError::timeout("Database query timed out"))?
            .map_err(ServiceError::from)
    }
}
