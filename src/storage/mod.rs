//! Storage layer
//!
//! Accounts, workers and reset tokens live either in a SeaORM database or,
//! when the database is disabled, in process memory.

/// Database storage module
pub mod database;
/// In-memory storage module
pub mod memory;
/// Persistence traits
pub mod traits;

pub use memory::MemoryStore;
pub use traits::{ResetTokenStore, UserStore, WorkerStore};

use crate::config::StorageConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Main storage layer handing out the configured backend behind each trait
#[derive(Clone)]
pub struct StorageLayer {
    pub users: Arc<dyn UserStore>,
    pub workers: Arc<dyn WorkerStore>,
    pub reset_tokens: Arc<dyn ResetTokenStore>,
    /// Present when backed by a database
    pub database: Option<Arc<database::Database>>,
}

impl std::fmt::Debug for StorageLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageLayer")
            .field("database", &self.database.as_ref().map(|db| db.backend_type()))
            .finish()
    }
}

impl StorageLayer {
    /// Create a new storage layer
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        if !config.database.enabled {
            info!("Database disabled, using in-memory storage");
            return Ok(Self::in_memory());
        }

        debug!("Connecting to database");
        let database = Arc::new(database::Database::new(&config.database).await?);
        database.migrate().await?;

        Ok(Self::from_database(database))
    }

    /// Storage backed by a connected database
    pub fn from_database(database: Arc<database::Database>) -> Self {
        Self {
            users: database.clone(),
            workers: database.clone(),
            reset_tokens: database.clone(),
            database: Some(database),
        }
    }

    /// Storage kept in process memory
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: store.clone(),
            workers: store.clone(),
            reset_tokens: store,
            database: None,
        }
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        match &self.database {
            Some(database) => database.health_check().await,
            None => Ok(()),
        }
    }
}
