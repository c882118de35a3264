//! JWT types and data structures

use crate::utils::clock::Clock;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Signing material and lifetime of one token type
#[derive(Clone)]
pub(super) struct TokenKeys {
    pub(super) encoding_key: EncodingKey,
    pub(super) decoding_key: DecodingKey,
    /// Lifetime in seconds
    pub(super) ttl: u64,
}

impl TokenKeys {
    pub(super) fn new(secret: &str, ttl: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }
}

/// JWT handler for token operations
#[derive(Clone)]
pub struct JwtHandler {
    pub(super) access: TokenKeys,
    pub(super) refresh: TokenKeys,
    pub(super) password_change: TokenKeys,
    /// JWT algorithm
    pub(super) algorithm: Algorithm,
    pub(super) clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for JwtHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtHandler")
            .field("algorithm", &self.algorithm)
            .field("access_ttl", &self.access.ttl)
            .field("refresh_ttl", &self.refresh.ttl)
            .field("password_change_ttl", &self.password_change.ttl)
            .field("keys", &"[REDACTED]")
            .finish()
    }
}

/// JWT claims structure
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub id: Uuid,
    /// Account secret at issue time
    pub secret: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Token type
    pub token_type: TokenType,
}

impl std::fmt::Debug for Claims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Claims")
            .field("id", &self.id)
            .field("secret", &"[REDACTED]")
            .field("iat", &self.iat)
            .field("exp", &self.exp)
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// Token type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Access token for API access
    Access,
    /// Refresh token for obtaining new access tokens
    Refresh,
    /// Short-lived token allowing a single password change after a reset
    PasswordChange,
}

/// A signed token and its expiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    pub token: String,
    /// Epoch seconds
    pub expires_at: i64,
}

/// Token pair (access + refresh)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: IssuedToken,
    pub refresh: IssuedToken,
}
