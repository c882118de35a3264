//! Worker model and request payloads

use super::pagination::Pagination;
use crate::core::search::{MatchMode, SearchQuery, SearchValue, Searchable};
use crate::utils::data::DataValidator;
use crate::utils::error::{Result, ServiceError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ServiceError::validation(
                "\"gender\" must be one of [male, female]",
            )),
        }
    }
}

/// Contact details of a worker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Contacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
}

impl Contacts {
    pub fn validated(self) -> Result<Self> {
        Ok(Self {
            email: self
                .email
                .map(|email| DataValidator::normalize_email("contacts.email", &email))
                .transpose()?,
            mobile_number: self
                .mobile_number
                .map(|number| DataValidator::validate_mobile_number(&number))
                .transpose()?,
        })
    }
}

/// An employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: Uuid,
    pub fullname: String,
    pub position: String,
    /// Always rounded to cents
    pub salary: f64,
    pub gender: Gender,
    #[serde(default)]
    pub contacts: Contacts,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Worker {
    pub fn new(input: NewWorker, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            fullname: input.fullname,
            position: input.position,
            salary: input.salary,
            gender: input.gender,
            contacts: input.contacts.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply whitelisted changes; contacts are replaced as a whole
    pub fn apply_update(&mut self, update: WorkerUpdate, now: DateTime<Utc>) {
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(fullname) = update.fullname {
            self.fullname = fullname;
        }
        if let Some(contacts) = update.contacts {
            self.contacts = contacts;
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(salary) = update.salary {
            self.salary = salary;
        }
        self.updated_at = now;
    }
}

/// Worker creation payload
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewWorker {
    pub gender: Gender,
    pub fullname: String,
    pub position: String,
    pub salary: f64,
    #[serde(default)]
    pub contacts: Option<Contacts>,
}

impl NewWorker {
    pub fn validated(self) -> Result<Self> {
        Ok(Self {
            gender: self.gender,
            fullname: DataValidator::validate_fullname(&self.fullname)?,
            position: DataValidator::validate_position(&self.position)?,
            salary: DataValidator::validate_salary(self.salary)?,
            contacts: self.contacts.map(Contacts::validated).transpose()?,
        })
    }
}

/// Partial worker update
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkerUpdate {
    pub gender: Option<Gender>,
    pub fullname: Option<String>,
    pub contacts: Option<Contacts>,
    pub position: Option<String>,
    pub salary: Option<f64>,
}

impl WorkerUpdate {
    pub fn validated(self) -> Result<Self> {
        Ok(Self {
            gender: self.gender,
            fullname: self
                .fullname
                .map(|name| DataValidator::validate_fullname(&name))
                .transpose()?,
            contacts: self.contacts.map(Contacts::validated).transpose()?,
            position: self
                .position
                .map(|position| DataValidator::validate_position(&position))
                .transpose()?,
            salary: self
                .salary
                .map(DataValidator::validate_salary)
                .transpose()?,
        })
    }
}

impl Searchable for Worker {
    fn search_field(&self, field: &str) -> Option<SearchValue> {
        match field {
            "fullname" => Some(self.fullname.as_str().into()),
            "position" => Some(self.position.as_str().into()),
            "salary" => Some(self.salary.into()),
            "gender" => Some(self.gender.as_str().into()),
            _ => None,
        }
    }
}

/// Query string of `GET /api/workers`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkerListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub fullname: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub gender: Option<Gender>,
}

impl WorkerListQuery {
    /// Validate paging bounds and filters, then build the search filter
    pub fn into_parts(self) -> Result<(Pagination, SearchQuery)> {
        let pagination = Pagination::new(self.skip, self.limit)?;
        let fullname = self
            .fullname
            .map(|name| DataValidator::validate_search_text("fullname", &name, 40))
            .transpose()?;
        let position = self
            .position
            .map(|position| DataValidator::validate_search_text("position", &position, 40))
            .transpose()?;
        let salary = self
            .salary
            .map(DataValidator::validate_salary)
            .transpose()?;

        let query = SearchQuery::builder()
            .field("fullname", MatchMode::ContainsWords, fullname)
            .field("position", MatchMode::ContainsFull, position)
            .field("salary", MatchMode::Exact, salary)
            .field("gender", MatchMode::Exact, self.gender.map(|g| g.as_str()))
            .build();

        Ok((pagination, query))
    }
}
