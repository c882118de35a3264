//! HTTP response handling for errors

use super::types::ServiceError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_)
            | ServiceError::BadRequest(_)
            | ServiceError::Conflict(_) => StatusCode::BAD_REQUEST,
            ServiceError::Unauthorized(_) | ServiceError::Jwt(_) => StatusCode::UNAUTHORIZED,
            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Mail(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Network(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ServiceError::Config(_)
            | ServiceError::Database(_)
            | ServiceError::Serialization(_)
            | ServiceError::Yaml(_)
            | ServiceError::Io(_)
            | ServiceError::Crypto(_)
            | ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        HttpResponse::build(status_code).json(ErrorResponse::from_error(self, false))
    }
}

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorResponse {
    /// Build the client-facing body, hiding non-public messages behind the status text
    pub fn from_error(error: &ServiceError, with_stack: bool) -> Self {
        let message = if error.is_public() {
            error.to_string()
        } else {
            reason_phrase(error.status_code())
        };

        Self {
            message,
            stack: with_stack.then(|| error_stack(error)),
        }
    }
}

/// Canonical reason phrase for a status
pub fn reason_phrase(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown Error")
        .to_string()
}

/// Debug representation of the error followed by its source chain
pub fn error_stack(error: &ServiceError) -> String {
    let mut stack = format!("{:?}", error);
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        stack.push_str("\n    caused by: ");
        stack.push_str(&cause.to_string());
        source = cause.source();
    }
    stack
}
