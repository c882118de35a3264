//! Test database utilities
//!
//! Each test gets an isolated, migrated in-memory SQLite database.

use std::sync::Arc;
use workforce_api::config::DatabaseConfig;
use workforce_api::storage::database::Database;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new in-memory test database and apply migrations
    pub async fn new() -> Self {
        let db = Database::new(&DatabaseConfig::sqlite_memory())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Get Arc to the underlying database
    pub fn db_arc(&self) -> Arc<Database> {
        self.inner.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_creation() {
        let db = TestDatabase::new().await;
        assert!(db.db().health_check().await.is_ok());
    }
}
