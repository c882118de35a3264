//! Authentication and security utilities

pub mod basic;
pub mod crypto;

pub use basic::{BasicCredentials, extract_bearer_token, parse_basic_credentials};
pub use crypto::*;
