use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// User ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Email address (unique, lowercase)
    #[sea_orm(unique)]
    pub email: String,

    /// Username
    pub username: String,

    /// Password hash
    pub password_hash: String,

    /// Secret embedded in issued tokens
    pub token_secret: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// User entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Password reset tokens relation
    #[sea_orm(has_many = "super::password_reset_token::Entity")]
    PasswordResetTokens,
}

impl Related<super::password_reset_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PasswordResetTokens.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and our domain model
impl Model {
    /// Convert SeaORM model to domain user model
    pub fn to_domain_user(&self) -> crate::core::models::User {
        crate::core::models::User {
            id: self.id,
            email: self.email.clone(),
            username: self.username.clone(),
            password_hash: self.password_hash.clone(),
            token_secret: self.token_secret.clone(),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Convert domain user model to SeaORM active model
    pub fn from_domain_user(user: &crate::core::models::User) -> ActiveModel {
        ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            username: Set(user.username.clone()),
            password_hash: Set(user.password_hash.clone()),
            token_secret: Set(user.token_secret.clone()),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
        }
    }
}
