//! Services module
//!
//! Resource services load the target record, ask the access evaluator and
//! only then act. Mail delivery lives here too.

pub mod mail;
pub mod users;
pub mod workers;

pub use mail::{DisabledMailer, MailMessage, Mailer, RelayMailer, build_mailer};
pub use users::UserService;
pub use workers::WorkerService;

use crate::utils::error::{Result, ServiceError};
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Parse a path id
pub(crate) fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ServiceError::invalid_id(raw))
}

/// Deserialize a request body that was accepted as raw JSON
pub(crate) fn parse_payload<T: DeserializeOwned>(body: serde_json::Value) -> Result<T> {
    serde_json::from_value(body).map_err(|e| ServiceError::validation(e.to_string()))
}
