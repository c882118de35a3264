//! Account model and request payloads

use super::pagination::Pagination;
use crate::core::search::{MatchMode, SearchQuery, SearchValue, Searchable};
use crate::utils::auth::crypto::generate_account_secret;
use crate::utils::data::DataValidator;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account
///
/// The password hash and the rotating token secret never leave the process:
/// both are skipped on serialization.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    #[serde(skip)]
    pub password_hash: String,
    /// Embedded in every issued token, rotated on password change
    #[serde(skip)]
    pub token_secret: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .field("token_secret", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

impl User {
    /// Build a new account with a fresh id and token secret
    pub fn new(email: String, username: String, password_hash: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            password_hash,
            token_secret: generate_account_secret(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the password hash and rotate the token secret
    pub fn set_password_hash(&mut self, password_hash: String, now: DateTime<Utc>) {
        self.password_hash = password_hash;
        self.token_secret = generate_account_secret();
        self.updated_at = now;
    }

    /// Apply whitelisted profile changes
    pub fn apply_update(&mut self, update: UserUpdate, now: DateTime<Utc>) {
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(username) = update.username {
            self.username = username;
        }
        self.updated_at = now;
    }
}

/// Registration payload
#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl NewUser {
    /// Validate every field, returning the normalized payload
    pub fn validated(self) -> Result<Self> {
        Ok(Self {
            email: DataValidator::normalize_email("email", &self.email)?,
            username: DataValidator::validate_username(&self.username)?,
            password: DataValidator::validate_password(&self.password)?,
        })
    }
}

/// Profile update payload; `password` and any other field is rejected
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub username: Option<String>,
}

impl UserUpdate {
    pub fn validated(self) -> Result<Self> {
        Ok(Self {
            email: self
                .email
                .map(|email| DataValidator::normalize_email("email", &email))
                .transpose()?,
            username: self
                .username
                .map(|username| DataValidator::validate_username(&username))
                .transpose()?,
        })
    }
}

/// New password payload
#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PasswordUpdate {
    pub password: String,
}

impl std::fmt::Debug for PasswordUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordUpdate")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl PasswordUpdate {
    pub fn validated(self) -> Result<Self> {
        Ok(Self {
            password: DataValidator::validate_password(&self.password)?,
        })
    }
}

impl Searchable for User {
    fn search_field(&self, field: &str) -> Option<SearchValue> {
        match field {
            "email" => Some(self.email.as_str().into()),
            "username" => Some(self.username.as_str().into()),
            _ => None,
        }
    }
}

/// Query string of `GET /api/users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub email: Option<String>,
    pub username: Option<String>,
}

impl UserListQuery {
    /// Validate paging bounds and build the search filter
    pub fn into_parts(self) -> Result<(Pagination, SearchQuery)> {
        let pagination = Pagination::new(self.skip, self.limit)?;
        let email = self
            .email
            .map(|email| DataValidator::validate_search_text("email", &email.to_lowercase(), 254))
            .transpose()?;
        let username = self
            .username
            .map(|username| DataValidator::validate_search_text("username", &username, 30))
            .transpose()?;

        let query = SearchQuery::builder()
            .field("email", MatchMode::Exact, email)
            .field("username", MatchMode::ContainsFull, username)
            .build();

        Ok((pagination, query))
    }
}
