use crate::core::models::{Contacts, Gender};
use crate::utils::error::ServiceError;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Worker database model
///
/// Contacts are flattened into two nullable columns.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "workers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub fullname: String,

    pub position: String,

    /// Salary rounded to cents
    pub salary: f64,

    /// "male" or "female"
    pub gender: String,

    pub contact_email: Option<String>,

    pub contact_mobile_number: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain worker model
    pub fn to_domain_worker(&self) -> crate::utils::error::Result<crate::core::models::Worker> {
        let gender = Gender::from_str(&self.gender).map_err(|_| {
            ServiceError::internal(format!(
                "Worker {} has an unknown gender '{}'",
                self.id, self.gender
            ))
        })?;

        Ok(crate::core::models::Worker {
            id: self.id,
            fullname: self.fullname.clone(),
            position: self.position.clone(),
            salary: self.salary,
            gender,
            contacts: Contacts {
                email: self.contact_email.clone(),
                mobile_number: self.contact_mobile_number.clone(),
            },
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        })
    }

    /// Convert domain worker model to SeaORM active model
    pub fn from_domain_worker(worker: &crate::core::models::Worker) -> ActiveModel {
        ActiveModel {
            id: Set(worker.id),
            fullname: Set(worker.fullname.clone()),
            position: Set(worker.position.clone()),
            salary: Set(worker.salary),
            gender: Set(worker.gender.as_str().to_string()),
            contact_email: Set(worker.contacts.email.clone()),
            contact_mobile_number: Set(worker.contacts.mobile_number.clone()),
            created_at: Set(worker.created_at.into()),
            updated_at: Set(worker.updated_at.into()),
        }
    }
}
