use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stored password reset token
///
/// Only the digest of the mailed token is kept. A row is live while
/// `used_at` is empty and `expires_at` lies in the future; an account holds
/// at most one row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "password_reset_tokens")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: Uuid,

    /// SHA-256 hex digest of the mailed token
    #[sea_orm(unique)]
    pub token_hash: String,

    pub expires_at: DateTimeWithTimeZone,

    pub created_at: DateTimeWithTimeZone,

    /// Set once the token has been redeemed
    pub used_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning account; its rows go with it
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Owner,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
