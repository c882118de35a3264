//! In-memory store
//!
//! Used when the database is disabled and throughout the test suites. Locks
//! are only held for the duration of a map operation, never across `.await`.

use super::traits::{ResetTokenStore, UserStore, WorkerStore};
use crate::core::models::{Page, Pagination, User, Worker};
use crate::core::search::SearchQuery;
use crate::utils::error::{DUPLICATE_FIELD_MESSAGE, Result, ServiceError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct ResetTokenRecord {
    user_id: Uuid,
    expires_at: DateTime<Utc>,
    used_at: Option<DateTime<Utc>>,
}

impl ResetTokenRecord {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.used_at.is_none() && self.expires_at > now
    }
}

/// Process-local storage backend
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
    workers: RwLock<HashMap<Uuid, Worker>>,
    reset_tokens: RwLock<HashMap<String, ResetTokenRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn email_taken(users: &HashMap<Uuid, User>, email: &str, except: Option<Uuid>) -> bool {
        users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        debug!("Finding user by ID: {}", id);
        Ok(self.users.read().get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!("Finding user by email: {}", email);
        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert_user(&self, user: &User) -> Result<User> {
        debug!("Creating user: {}", user.id);
        let mut users = self.users.write();

        if users.contains_key(&user.id) || Self::email_taken(&users, &user.email, None) {
            return Err(ServiceError::conflict(DUPLICATE_FIELD_MESSAGE));
        }

        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn update_user(&self, user: &User) -> Result<User> {
        debug!("Updating user: {}", user.id);
        let mut users = self.users.write();

        if !users.contains_key(&user.id) {
            return Err(ServiceError::not_found("No such user exists"));
        }
        if Self::email_taken(&users, &user.email, Some(user.id)) {
            return Err(ServiceError::conflict(DUPLICATE_FIELD_MESSAGE));
        }

        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn delete_user(&self, id: Uuid) -> Result<Option<User>> {
        debug!("Deleting user: {}", id);
        let removed = self.users.write().remove(&id);
        if removed.is_some() {
            self.reset_tokens.write().retain(|_, record| record.user_id != id);
        }
        Ok(removed)
    }

    async fn list_users(&self, query: &SearchQuery, pagination: Pagination) -> Result<Page<User>> {
        debug!("Listing users: {:?}, {:?}", query, pagination);
        let mut matching: Vec<User> = self
            .users
            .read()
            .values()
            .filter(|u| query.matches(*u))
            .cloned()
            .collect();

        matching.sort_by(|a, b| b.email.cmp(&a.email));
        Ok(Page::from_sorted(matching, pagination))
    }
}

#[async_trait]
impl WorkerStore for MemoryStore {
    async fn find_worker_by_id(&self, id: Uuid) -> Result<Option<Worker>> {
        debug!("Finding worker by ID: {}", id);
        Ok(self.workers.read().get(&id).cloned())
    }

    async fn insert_worker(&self, worker: &Worker) -> Result<Worker> {
        debug!("Creating worker: {}", worker.id);
        let mut workers = self.workers.write();

        if workers.contains_key(&worker.id) {
            return Err(ServiceError::conflict(DUPLICATE_FIELD_MESSAGE));
        }

        workers.insert(worker.id, worker.clone());
        Ok(worker.clone())
    }

    async fn update_worker(&self, worker: &Worker) -> Result<Worker> {
        debug!("Updating worker: {}", worker.id);
        let mut workers = self.workers.write();

        match workers.get_mut(&worker.id) {
            Some(stored) => {
                *stored = worker.clone();
                Ok(worker.clone())
            }
            None => Err(ServiceError::not_found("No such worker exists!")),
        }
    }

    async fn delete_worker(&self, id: Uuid) -> Result<Option<Worker>> {
        debug!("Deleting worker: {}", id);
        Ok(self.workers.write().remove(&id))
    }

    async fn list_workers(
        &self,
        query: &SearchQuery,
        pagination: Pagination,
    ) -> Result<Page<Worker>> {
        debug!("Listing workers: {:?}, {:?}", query, pagination);
        let mut matching: Vec<Worker> = self
            .workers
            .read()
            .values()
            .filter(|w| query.matches(*w))
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(Page::from_sorted(matching, pagination))
    }
}

#[async_trait]
impl ResetTokenStore for MemoryStore {
    async fn store_reset_token(
        &self,
        user_id: Uuid,
        token_hash: &str,
        now: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<bool> {
        let mut tokens = self.reset_tokens.write();
        if tokens
            .values()
            .any(|record| record.user_id == user_id && record.is_live(now))
        {
            return Ok(false);
        }

        debug!("Storing password reset token for user: {}", user_id);
        tokens.retain(|_, record| record.user_id != user_id);
        tokens.insert(
            token_hash.to_string(),
            ResetTokenRecord {
                user_id,
                expires_at,
                used_at: None,
            },
        );
        Ok(true)
    }

    async fn consume_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Uuid>> {
        debug!("Consuming password reset token");
        let mut tokens = self.reset_tokens.write();

        match tokens.get_mut(token_hash) {
            Some(record) if record.is_live(now) => {
                record.used_at = Some(now);
                Ok(Some(record.user_id))
            }
            _ => Ok(None),
        }
    }

    async fn purge_expired_reset_tokens(&self, now: DateTime<Utc>) -> Result<u64> {
        let mut tokens = self.reset_tokens.write();
        let before = tokens.len();
        tokens.retain(|_, record| record.is_live(now));
        Ok((before - tokens.len()) as u64)
    }
}
