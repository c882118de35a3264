//! Error types for the service

use thiserror::Error;

/// Result type alias for the service
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Main error type for the service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or out-of-range input
    #[error("{0}")]
    Validation(String),

    /// Bad request errors
    #[error("{0}")]
    BadRequest(String),

    /// Missing, invalid, expired or revoked credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Not found errors
    #[error("{0}")]
    NotFound(String),

    /// Unique constraint violations
    #[error("{0}")]
    Conflict(String),

    /// JWT errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Mail delivery errors
    #[error("Mail error: {0}")]
    Mail(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Network errors
    #[error("Network error: {0}")]
    Network(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Whether the message may be shown to API clients as-is
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            ServiceError::Validation(_)
                | ServiceError::BadRequest(_)
                | ServiceError::NotFound(_)
                | ServiceError::Conflict(_)
        )
    }

    /// Whether retrying the same call later may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, ServiceError::Timeout(_) | ServiceError::Network(_))
    }
}
