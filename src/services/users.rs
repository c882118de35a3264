//! Account resource

use super::{parse_id, parse_payload};
use crate::auth::{AccessContext, AccessControl, Action, AuthSession, AuthSystem, Subject};
use crate::core::models::{NewUser, Page, PasswordUpdate, User, UserListQuery, UserUpdate};
use crate::storage::UserStore;
use crate::utils::clock::Clock;
use crate::utils::error::{Result, ServiceError};
use std::sync::Arc;
use tracing::{debug, info};

/// CRUD over accounts, gated by the access evaluator
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    access: Arc<AccessControl>,
    auth: Arc<AuthSystem>,
    clock: Arc<dyn Clock>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserStore>,
        access: Arc<AccessControl>,
        auth: Arc<AuthSystem>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            access,
            auth,
            clock,
        }
    }

    fn context(actor: Option<&User>, subject: Subject) -> AccessContext {
        match actor {
            Some(actor) => AccessContext::authenticated(actor.id, subject),
            None => AccessContext::anonymous(subject),
        }
    }

    async fn load(&self, raw_id: &str) -> Result<User> {
        let id = parse_id(raw_id)?;
        self.users
            .find_user_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("No such user exists"))
    }

    /// Register an account; open to anonymous callers
    pub async fn create(
        &self,
        actor: Option<&User>,
        body: serde_json::Value,
    ) -> Result<AuthSession> {
        self.access
            .authorize(Action::UserCreate, &Self::context(actor, Subject::None))?;
        let input: NewUser = parse_payload(body)?;
        self.auth.register(input).await
    }

    pub async fn get(&self, actor: &User, id: &str) -> Result<User> {
        let user = self.load(id).await?;
        self.access.authorize(
            Action::UserGet,
            &Self::context(Some(actor), Subject::User(user.id)),
        )?;
        Ok(user)
    }

    pub async fn list(&self, actor: &User, query: UserListQuery) -> Result<Page<User>> {
        self.access
            .authorize(Action::UserList, &Self::context(Some(actor), Subject::None))?;
        let (pagination, search) = query.into_parts()?;
        debug!("Listing users for {}", actor.id);
        self.users.list_users(&search, pagination).await
    }

    /// Update email and username; any other field is rejected
    pub async fn update(&self, actor: &User, id: &str, body: serde_json::Value) -> Result<User> {
        let mut user = self.load(id).await?;
        self.access.authorize(
            Action::UserUpdate,
            &Self::context(Some(actor), Subject::User(user.id)),
        )?;

        let update = parse_payload::<UserUpdate>(body)?.validated()?;
        user.apply_update(update, self.clock.now());
        let user = self.users.update_user(&user).await?;
        info!("User updated: {}", user.id);
        Ok(user)
    }

    /// Change the password of the account authenticated by basic credentials
    pub async fn update_password(
        &self,
        actor: &User,
        id: &str,
        body: serde_json::Value,
    ) -> Result<User> {
        let user = self.load(id).await?;
        self.access.authorize(
            Action::UserUpdatePassword,
            &Self::context(Some(actor), Subject::User(user.id)),
        )?;

        let update: PasswordUpdate = parse_payload(body)?;
        self.auth.change_password(user, &update.password).await
    }

    pub async fn delete(&self, actor: &User, id: &str) -> Result<User> {
        let user = self.load(id).await?;
        self.access.authorize(
            Action::UserDelete,
            &Self::context(Some(actor), Subject::User(user.id)),
        )?;

        let deleted = self
            .users
            .delete_user(user.id)
            .await?
            .ok_or_else(|| ServiceError::not_found("No such user exists"))?;
        info!("User deleted: {}", deleted.id);
        Ok(deleted)
    }
}
