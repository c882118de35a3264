//! Utility modules
//!
//! - **auth**: header parsing, password hashing and token generation
//! - **clock**: injectable time source
//! - **data**: input validation
//! - **error**: the service error type and its HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod auth;
pub mod clock;
pub mod data;
pub mod error;
pub mod logging;
