//! Random secret and token generation

use rand::{Rng, distributions::Alphanumeric};
use sha2::{Digest, Sha256};

/// Length of per-account rotating secrets
pub const ACCOUNT_SECRET_LENGTH: usize = 32;

/// Length of password reset tokens
pub const RESET_TOKEN_LENGTH: usize = 48;

/// Generate a random alphanumeric token
pub fn generate_token(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Generate a fresh per-account token secret
pub fn generate_account_secret() -> String {
    generate_token(ACCOUNT_SECRET_LENGTH)
}

/// Generate a password reset token
pub fn generate_reset_token() -> String {
    generate_token(RESET_TOKEN_LENGTH)
}

/// Hash a token for storage
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Short, non-reversible identifier of a token that is safe to log
pub fn token_fingerprint(token: &str) -> String {
    hash_token(token).chars().take(12).collect()
}
