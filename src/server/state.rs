//! Application state shared across HTTP handlers

use crate::auth::{AccessControl, AuthSystem};
use crate::config::Config;
use crate::services::{Mailer, UserService, WorkerService};
use crate::storage::StorageLayer;
use crate::utils::clock::Clock;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are cheap to clone; the per-worker `App` instances share them.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Authentication system
    pub auth: Arc<AuthSystem>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
    pub users: UserService,
    pub workers: WorkerService,
}

impl AppState {
    /// Wire the services over an already initialized storage layer
    pub fn new(
        config: Config,
        storage: StorageLayer,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let access = Arc::new(AccessControl::with_default_rules()?);
        let auth = Arc::new(AuthSystem::new(
            &config.auth,
            &config.server.public_url,
            &storage,
            mailer,
            clock.clone(),
        )?);

        let users = UserService::new(
            storage.users.clone(),
            access.clone(),
            auth.clone(),
            clock.clone(),
        );
        let workers = WorkerService::new(storage.workers.clone(), access, clock);

        Ok(Self {
            config: Arc::new(config),
            auth,
            storage: Arc::new(storage),
            users,
            workers,
        })
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
