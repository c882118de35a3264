use crate::core::models::{Page, Pagination, Worker};
use crate::core::search::SearchQuery;
use crate::storage::traits::WorkerStore;
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, worker};
use super::search::build_condition;
use super::types::SeaOrmDatabase;

fn worker_column(field: &str) -> Option<worker::Column> {
    match field {
        "fullname" => Some(worker::Column::Fullname),
        "position" => Some(worker::Column::Position),
        "salary" => Some(worker::Column::Salary),
        "gender" => Some(worker::Column::Gender),
        _ => None,
    }
}

#[async_trait]
impl WorkerStore for SeaOrmDatabase {
    async fn find_worker_by_id(&self, id: uuid::Uuid) -> Result<Option<Worker>> {
        debug!("Finding worker by ID: {}", id);

        let worker_model = self
            .timed(entities::Worker::find_by_id(id).one(&self.db))
            .await?;

        worker_model
            .map(|model| model.to_domain_worker())
            .transpose()
    }

    async fn insert_worker(&self, worker: &Worker) -> Result<Worker> {
        debug!("Creating worker: {}", worker.id);

        let active_model = worker::Model::from_domain_worker(worker);
        self.timed(entities::Worker::insert(active_model).exec(&self.db))
            .await?;

        Ok(worker.clone())
    }

    async fn update_worker(&self, worker: &Worker) -> Result<Worker> {
        debug!("Updating worker: {}", worker.id);

        let active_model = worker::Model::from_domain_worker(worker);
        match self
            .timed(entities::Worker::update(active_model).exec(&self.db))
            .await
        {
            Ok(model) => model.to_domain_worker(),
            Err(ServiceError::NotFound(_)) => {
                Err(ServiceError::not_found("No such worker exists!"))
            }
            Err(e) => Err(e),
        }
    }

    async fn delete_worker(&self, id: uuid::Uuid) -> Result<Option<Worker>> {
        debug!("Deleting worker: {}", id);

        let Some(model) = self
            .timed(entities::Worker::find_by_id(id).one(&self.db))
            .await?
        else {
            return Ok(None);
        };

        self.timed(entities::Worker::delete_by_id(id).exec(&self.db))
            .await?;

        model.to_domain_worker().map(Some)
    }

    async fn list_workers(
        &self,
        query: &SearchQuery,
        pagination: Pagination,
    ) -> Result<Page<Worker>> {
        debug!("Listing workers: {:?}, {:?}", query, pagination);

        let condition = build_condition(query, worker_column);

        let total = self
            .timed(
                entities::Worker::find()
                    .filter(condition.clone())
                    .count(&self.db),
            )
            .await?;

        let models = self
            .timed(
                entities::Worker::find()
                    .filter(condition)
                    .order_by_desc(worker::Column::CreatedAt)
                    .order_by_desc(worker::Column::Id)
                    .offset(pagination.skip)
                    .limit(pagination.limit)
                    .all(&self.db),
            )
            .await?;

        let docs = models
            .iter()
            .map(|model| model.to_domain_worker())
            .collect::<Result<Vec<_>>>()?;
        Ok(Page::new(docs, total, pagination))
    }
}
