//! Worker resource

use super::{parse_id, parse_payload};
use crate::auth::{AccessContext, AccessControl, Action, Subject};
use crate::core::models::{NewWorker, Page, User, Worker, WorkerListQuery, WorkerUpdate};
use crate::storage::WorkerStore;
use crate::utils::clock::Clock;
use crate::utils::error::{Result, ServiceError};
use std::sync::Arc;
use tracing::info;

/// CRUD over workers; every action needs an authenticated account
#[derive(Clone)]
pub struct WorkerService {
    workers: Arc<dyn WorkerStore>,
    access: Arc<AccessControl>,
    clock: Arc<dyn Clock>,
}

impl WorkerService {
    pub fn new(
        workers: Arc<dyn WorkerStore>,
        access: Arc<AccessControl>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            workers,
            access,
            clock,
        }
    }

    async fn load(&self, raw_id: &str) -> Result<Worker> {
        let id = parse_id(raw_id)?;
        self.workers
            .find_worker_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("No such worker exists!"))
    }

    fn authorize(&self, action: Action, actor: &User, subject: Subject) -> Result<()> {
        self.access
            .authorize(action, &AccessContext::authenticated(actor.id, subject))
    }

    pub async fn create(&self, actor: &User, body: serde_json::Value) -> Result<Worker> {
        self.authorize(Action::WorkerCreate, actor, Subject::None)?;

        let input = parse_payload::<NewWorker>(body)?.validated()?;
        let worker = self
            .workers
            .insert_worker(&Worker::new(input, self.clock.now()))
            .await?;
        info!("Worker created: {}", worker.id);
        Ok(worker)
    }

    pub async fn get(&self, actor: &User, id: &str) -> Result<Worker> {
        let worker = self.load(id).await?;
        self.authorize(Action::WorkerGet, actor, Subject::Worker(worker.id))?;
        Ok(worker)
    }

    pub async fn list(&self, actor: &User, query: WorkerListQuery) -> Result<Page<Worker>> {
        self.authorize(Action::WorkerList, actor, Subject::None)?;
        let (pagination, search) = query.into_parts()?;
        self.workers.list_workers(&search, pagination).await
    }

    /// Partial update of the whitelisted fields
    pub async fn update(
        &self,
        actor: &User,
        id: &str,
        body: serde_json::Value,
    ) -> Result<Worker> {
        let mut worker = self.load(id).await?;
        self.authorize(Action::WorkerUpdate, actor, Subject::Worker(worker.id))?;

        let update = parse_payload::<WorkerUpdate>(body)?.validated()?;
        worker.apply_update(update, self.clock.now());
        let worker = self.workers.update_worker(&worker).await?;
        info!("Worker updated: {}", worker.id);
        Ok(worker)
    }

    pub async fn delete(&self, actor: &User, id: &str) -> Result<Worker> {
        let worker = self.load(id).await?;
        self.authorize(Action::WorkerDelete, actor, Subject::Worker(worker.id))?;

        let deleted = self
            .workers
            .delete_worker(worker.id)
            .await?
            .ok_or_else(|| ServiceError::not_found("No such worker exists!"))?;
        info!("Worker deleted: {}", deleted.id);
        Ok(deleted)
    }
}
