//! Authentication configuration

use super::*;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use serde::{Deserialize, Serialize};

/// Minimum length of every signing secret
pub const MIN_SECRET_LENGTH: usize = 32;

/// Token signing keys and lifetimes
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Signing key for access tokens
    #[serde(default)]
    pub access_secret: String,
    /// Signing key for refresh tokens
    #[serde(default)]
    pub refresh_secret: String,
    /// Signing key for password-change tokens
    #[serde(default)]
    pub password_change_secret: String,
    /// Access token lifetime in seconds
    #[serde(default = "default_access_ttl")]
    pub access_ttl: u64,
    /// Refresh token lifetime in seconds
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl: u64,
    /// Password reset token lifetime in seconds
    #[serde(default = "default_reset_token_ttl")]
    pub reset_token_ttl: u64,
    /// Password-change token lifetime in seconds
    #[serde(default = "default_password_change_ttl")]
    pub password_change_ttl: u64,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_secret", &"[REDACTED]")
            .field("refresh_secret", &"[REDACTED]")
            .field("password_change_secret", &"[REDACTED]")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .field("reset_token_ttl", &self.reset_token_ttl)
            .field("password_change_ttl", &self.password_change_ttl)
            .finish()
    }
}

/// Secrets default to empty, so a configuration without them fails validation
impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_secret: String::new(),
            refresh_secret: String::new(),
            password_change_secret: String::new(),
            access_ttl: default_access_ttl(),
            refresh_ttl: default_refresh_ttl(),
            reset_token_ttl: default_reset_token_ttl(),
            password_change_ttl: default_password_change_ttl(),
        }
    }
}

impl AuthConfig {
    /// Default lifetimes with three freshly generated signing keys
    ///
    /// Tokens signed with these keys do not survive a restart.
    pub fn with_generated_secrets() -> Self {
        Self {
            access_secret: generate_secure_jwt_secret(),
            refresh_secret: generate_secure_jwt_secret(),
            password_change_secret: generate_secure_jwt_secret(),
            ..Self::default()
        }
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        let secrets = [
            ("access_secret", &self.access_secret),
            ("refresh_secret", &self.refresh_secret),
            ("password_change_secret", &self.password_change_secret),
        ];

        for (name, secret) in secrets {
            if secret.len() < MIN_SECRET_LENGTH {
                return Err(format!(
                    "{} must be at least {} characters long",
                    name, MIN_SECRET_LENGTH
                ));
            }
        }

        if self.access_secret == self.refresh_secret
            || self.access_secret == self.password_change_secret
            || self.refresh_secret == self.password_change_secret
        {
            return Err("Access, refresh and password-change secrets must differ".to_string());
        }

        if self.access_ttl == 0
            || self.refresh_ttl == 0
            || self.reset_token_ttl == 0
            || self.password_change_ttl == 0
        {
            return Err("Token lifetimes must be positive".to_string());
        }

        if self.refresh_ttl < self.access_ttl {
            return Err("refresh_ttl must not be shorter than access_ttl".to_string());
        }

        Ok(())
    }
}

/// Generate a secure random JWT secret
pub fn generate_secure_jwt_secret() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
