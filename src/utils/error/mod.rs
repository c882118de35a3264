//! Error handling for the service
//!
//! This module defines all error types used throughout the service.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod response;
mod types;

pub use conversions::DUPLICATE_FIELD_MESSAGE;
pub use response::{ErrorResponse, error_stack, reason_phrase};
pub use types::{Result, ServiceError};
