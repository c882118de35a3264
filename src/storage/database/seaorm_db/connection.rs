use crate::config::DatabaseConfig;
use crate::utils::error::{Result, ServiceError};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::entities;
use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Create a new database connection
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let db = Self::try_connect(&config.url, config).await?;
        let backend_type = DatabaseBackendType::from_url(&config.url);
        info!("Database connection established ({:?})", backend_type);

        Ok(Self {
            db,
            backend_type,
            query_timeout: Duration::from_secs(config.query_timeout),
        })
    }

    /// Try to connect to a database
    async fn try_connect(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url.to_string());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(|e| {
            warn!("Database connection failed: {}", e);
            ServiceError::Database(e)
        })
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            ServiceError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Close the database connection
    pub async fn close(self) -> Result<()> {
        self.db.close().await.map_err(ServiceError::Database)?;
        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");

        self.timed(entities::User::find().limit(1).all(&self.db))
            .await?;

        debug!("Database health check passed");
        Ok(())
    }

    /// Row counts
    pub async fn stats(&self) -> Result<DatabaseStats> {
        let total_users = self.timed(entities::User::find().count(&self.db)).await?;
        let total_workers = self.timed(entities::Worker::find().count(&self.db)).await?;

        Ok(DatabaseStats {
            total_users,
            total_workers,
        })
    }
}
