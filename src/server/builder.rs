//! Server startup
//!
//! `run_server` brings storage up, wires the services and serves until
//! shutdown. `migrate` only applies the schema.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::storage::database::Database;
use crate::utils::error::{Result, ServiceError};
use tracing::info;

/// Serve the API described by `config`
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting {} v{}", crate::NAME, crate::VERSION);

    let server = HttpServer::new(&config).await?;
    info!("API available at {}/api", config.server.public_url);
    info!("   GET  /api/health-check");
    info!("   *    /api/auth/...");
    info!("   *    /api/users[/{{id}}]");
    info!("   *    /api/workers[/{{id}}]");

    server.start().await
}

/// Apply pending migrations and exit
pub async fn migrate(config: &Config) -> Result<()> {
    let database = &config.storage.database;
    if !database.enabled {
        return Err(ServiceError::Config(
            "Database storage is disabled, nothing to migrate".to_string(),
        ));
    }

    let db = Database::new(database).await?;
    db.migrate().await?;
    db.close().await?;

    info!("Migrations applied");
    Ok(())
}
