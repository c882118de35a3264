//! Cryptographic helpers
//!
//! Password hashing and random token generation.

pub mod keys;
pub mod password;

pub use keys::{generate_account_secret, generate_reset_token, hash_token, token_fingerprint};
pub use password::{hash_password, verify_dummy_password, verify_password};
