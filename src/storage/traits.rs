//! Persistence contracts
//!
//! Every backend enforces email uniqueness itself and reports a violation as
//! [`ServiceError::Conflict`](crate::utils::error::ServiceError::Conflict).

use crate::core::models::{Page, Pagination, User, Worker};
use crate::core::search::SearchQuery;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Account persistence
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Lookup by the normalized (lowercase) email
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn insert_user(&self, user: &User) -> Result<User>;

    /// Persist every mutable field of an existing account
    async fn update_user(&self, user: &User) -> Result<User>;

    /// Remove an account, returning it if it existed
    async fn delete_user(&self, id: Uuid) -> Result<Option<User>>;

    /// Filtered page, sorted by email descending
    async fn list_users(&self, query: &SearchQuery, pagination: Pagination) -> Result<Page<User>>;
}

/// Worker persistence
#[async_trait]
pub trait WorkerStore: Send + Sync {
    async fn find_worker_by_id(&self, id: Uuid) -> Result<Option<Worker>>;

    async fn insert_worker(&self, worker: &Worker) -> Result<Worker>;

    async fn update_worker(&self, worker: &Worker) -> Result<Worker>;

    async fn delete_worker(&self, id: Uuid) -> Result<Option<Worker>>;

    /// Filtered page, newest first
    async fn list_workers(
        &self,
        query: &SearchQuery,
        pagination: Pagination,
    ) -> Result<Page<Worker>>;
}

/// Single-use password reset tokens, stored by hash only
#[async_trait]
pub trait ResetTokenStore: Send + Sync {
    /// Store a token unless the account still holds a live one
    ///
    /// Expired or used tokens of the account are replaced. Returns whether
    /// the token was stored.
    async fn store_reset_token(
        &self,
        user_id: Uuid,
        token_hash: &str,
        now: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<bool>;

    /// Atomically mark an unexpired, unused token as used and return its account
    async fn consume_reset_token(&self, token_hash: &str, now: DateTime<Utc>)
    -> Result<Option<Uuid>>;

    /// Delete expired and used tokens, returning how many were removed
    async fn purge_expired_reset_tokens(&self, now: DateTime<Utc>) -> Result<u64>;
}
