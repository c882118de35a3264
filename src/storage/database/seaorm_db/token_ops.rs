use crate::storage::traits::ResetTokenStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, password_reset_token};
use super::types::SeaOrmDatabase;

#[async_trait]
impl ResetTokenStore for SeaOrmDatabase {
    async fn store_reset_token(
        &self,
        user_id: uuid::Uuid,
        token_hash: &str,
        now: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<bool> {
        let now: DateTimeWithTimeZone = now.into();
        let txn = self.timed(self.db.begin()).await?;

        let live = self
            .timed(
                entities::PasswordResetToken::find()
                    .filter(password_reset_token::Column::UserId.eq(user_id))
                    .filter(password_reset_token::Column::UsedAt.is_null())
                    .filter(password_reset_token::Column::ExpiresAt.gt(now))
                    .count(&txn),
            )
            .await?;
        if live > 0 {
            self.timed(txn.rollback()).await?;
            return Ok(false);
        }

        debug!("Storing password reset token for user: {}", user_id);

        // stale tokens of the account go with the insert
        self.timed(
            entities::PasswordResetToken::delete_many()
                .filter(password_reset_token::Column::UserId.eq(user_id))
                .exec(&txn),
        )
        .await?;

        let active_model = password_reset_token::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            token_hash: Set(token_hash.to_string()),
            expires_at: Set(expires_at.into()),
            created_at: Set(now),
            used_at: Set(None),
        };
        self.timed(entities::PasswordResetToken::insert(active_model).exec(&txn))
            .await?;

        self.timed(txn.commit()).await?;
        Ok(true)
    }

    async fn consume_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<uuid::Uuid>> {
        debug!("Consuming password reset token");
        let now: DateTimeWithTimeZone = now.into();

        let Some(token_model) = self
            .timed(
                entities::PasswordResetToken::find()
                    .filter(password_reset_token::Column::TokenHash.eq(token_hash))
                    .one(&self.db),
            )
            .await?
        else {
            return Ok(None);
        };

        // the guarded update decides between concurrent redeemers
        let result = self
            .timed(
                entities::PasswordResetToken::update_many()
                    .col_expr(password_reset_token::Column::UsedAt, Expr::value(now))
                    .filter(password_reset_token::Column::Id.eq(token_model.id))
                    .filter(password_reset_token::Column::UsedAt.is_null())
                    .filter(password_reset_token::Column::ExpiresAt.gt(now))
                    .exec(&self.db),
            )
            .await?;

        if result.rows_affected == 1 {
            Ok(Some(token_model.user_id))
        } else {
            Ok(None)
        }
    }

    async fn purge_expired_reset_tokens(&self, now: DateTime<Utc>) -> Result<u64> {
        debug!("Cleaning up expired password reset tokens");
        let now: DateTimeWithTimeZone = now.into();

        let result = self
            .timed(
                entities::PasswordResetToken::delete_many()
                    .filter(
                        Condition::any()
                            .add(password_reset_token::Column::ExpiresAt.lte(now))
                            .add(password_reset_token::Column::UsedAt.is_not_null()),
                    )
                    .exec(&self.db),
            )
            .await?;

        Ok(result.rows_affected)
    }
}
