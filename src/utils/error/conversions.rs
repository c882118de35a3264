//! Type conversions into ServiceError
//!
//! Storage, extractor and runtime errors are normalized here before they
//! reach the response layer.

use super::types::ServiceError;
use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use sea_orm::{DbErr, SqlErr};

/// Message returned for unique constraint violations
pub const DUPLICATE_FIELD_MESSAGE: &str = "Duplicated field is not allowed";

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
            return ServiceError::Conflict(DUPLICATE_FIELD_MESSAGE.to_string());
        }

        match err {
            DbErr::RecordNotFound(message) => ServiceError::NotFound(message),
            DbErr::RecordNotUpdated => ServiceError::NotFound("Record not found".to_string()),
            other => ServiceError::Database(other),
        }
    }
}

impl From<JsonPayloadError> for ServiceError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::Deserialize(e) => ServiceError::Validation(e.to_string()),
            JsonPayloadError::ContentType => {
                ServiceError::Validation("Content type must be application/json".to_string())
            }
            other => ServiceError::Validation(other.to_string()),
        }
    }
}

impl From<QueryPayloadError> for ServiceError {
    fn from(err: QueryPayloadError) -> Self {
        match err {
            QueryPayloadError::Deserialize(e) => ServiceError::Validation(e.to_string()),
            other => ServiceError::Validation(other.to_string()),
        }
    }
}

impl From<PathError> for ServiceError {
    fn from(err: PathError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ServiceError {
    fn from(err: tokio::task::JoinError) -> Self {
        ServiceError::Internal(format!("Background task failed: {}", err))
    }
}

impl From<tokio::time::error::Elapsed> for ServiceError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        ServiceError::Timeout("Operation timed out".to_string())
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServiceError::Timeout(err.to_string())
        } else {
            ServiceError::Network(err.to_string())
        }
    }
}
