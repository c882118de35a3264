use crate::core::models::{Page, Pagination, User};
use crate::core::search::SearchQuery;
use crate::storage::traits::UserStore;
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, password_reset_token, user};
use super::search::build_condition;
use super::types::SeaOrmDatabase;

fn user_column(field: &str) -> Option<user::Column> {
    match field {
        "email" => Some(user::Column::Email),
        "username" => Some(user::Column::Username),
        _ => None,
    }
}

#[async_trait]
impl UserStore for SeaOrmDatabase {
    async fn find_user_by_id(&self, id: uuid::Uuid) -> Result<Option<User>> {
        debug!("Finding user by ID: {}", id);

        let user_model = self
            .timed(entities::User::find_by_id(id).one(&self.db))
            .await?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!("Finding user by email: {}", email);

        let user_model = self
            .timed(
                entities::User::find()
                    .filter(user::Column::Email.eq(email))
                    .one(&self.db),
            )
            .await?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    async fn insert_user(&self, user: &User) -> Result<User> {
        debug!("Creating user: {}", user.id);

        let active_model = user::Model::from_domain_user(user);
        self.timed(entities::User::insert(active_model).exec(&self.db))
            .await?;

        Ok(user.clone())
    }

    async fn update_user(&self, user: &User) -> Result<User> {
        debug!("Updating user: {}", user.id);

        let active_model = user::Model::from_domain_user(user);
        match self
            .timed(entities::User::update(active_model).exec(&self.db))
            .await
        {
            Ok(model) => Ok(model.to_domain_user()),
            Err(ServiceError::NotFound(_)) => Err(ServiceError::not_found("No such user exists")),
            Err(e) => Err(e),
        }
    }

    async fn delete_user(&self, id: uuid::Uuid) -> Result<Option<User>> {
        debug!("Deleting user: {}", id);

        let Some(model) = self
            .timed(entities::User::find_by_id(id).one(&self.db))
            .await?
        else {
            return Ok(None);
        };

        // tokens first, SQLite does not enforce the cascade without the pragma
        let txn = self.timed(self.db.begin()).await?;
        self.timed(
            entities::PasswordResetToken::delete_many()
                .filter(password_reset_token::Column::UserId.eq(id))
                .exec(&txn),
        )
        .await?;
        self.timed(entities::User::delete_by_id(id).exec(&txn))
            .await?;
        self.timed(txn.commit()).await?;

        Ok(Some(model.to_domain_user()))
    }

    async fn list_users(&self, query: &SearchQuery, pagination: Pagination) -> Result<Page<User>> {
        debug!("Listing users: {:?}, {:?}", query, pagination);

        let condition = build_condition(query, user_column);

        let total = self
            .timed(
                entities::User::find()
                    .filter(condition.clone())
                    .count(&self.db),
            )
            .await?;

        let models = self
            .timed(
                entities::User::find()
                    .filter(condition)
                    .order_by_desc(user::Column::Email)
                    .offset(pagination.skip)
                    .limit(pagination.limit)
                    .all(&self.db),
            )
            .await?;

        let docs = models.iter().map(|model| model.to_domain_user()).collect();
        Ok(Page::new(docs, total, pagination))
    }
}
