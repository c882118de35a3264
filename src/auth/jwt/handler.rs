//! Core JWT handler implementation

use super::types::{Claims, IssuedToken, JwtHandler, TokenKeys, TokenPair, TokenType};
use crate::config::AuthConfig;
use crate::core::models::User;
use crate::utils::clock::Clock;
use crate::utils::error::{Result, ServiceError};
use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};
use std::sync::Arc;
use tracing::{debug, warn};

impl JwtHandler {
    /// Create a new JWT handler
    pub fn new(config: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            access: TokenKeys::new(&config.access_secret, config.access_ttl),
            refresh: TokenKeys::new(&config.refresh_secret, config.refresh_ttl),
            password_change: TokenKeys::new(
                &config.password_change_secret,
                config.password_change_ttl,
            ),
            algorithm: Algorithm::HS256,
            clock,
        }
    }

    fn keys(&self, token_type: TokenType) -> &TokenKeys {
        match token_type {
            TokenType::Access => &self.access,
            TokenType::Refresh => &self.refresh,
            TokenType::PasswordChange => &self.password_change,
        }
    }

    fn issue(&self, user: &User, token_type: TokenType) -> Result<IssuedToken> {
        let keys = self.keys(token_type);
        let now = self.clock.timestamp();
        let exp = i64::try_from(keys.ttl)
            .ok()
            .and_then(|ttl| now.checked_add(ttl))
            .ok_or_else(|| ServiceError::config("Token lifetime out of range"))?;

        let claims = Claims {
            id: user.id,
            secret: user.token_secret.clone(),
            iat: now,
            exp,
            token_type,
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &keys.encoding_key).map_err(ServiceError::Jwt)?;

        debug!("Created {:?} token for user: {}", token_type, user.id);
        Ok(IssuedToken {
            token,
            expires_at: claims.exp,
        })
    }

    /// Create an access token for a user
    pub fn issue_access_token(&self, user: &User) -> Result<IssuedToken> {
        self.issue(user, TokenType::Access)
    }

    /// Create a refresh token for a user
    pub fn issue_refresh_token(&self, user: &User) -> Result<IssuedToken> {
        self.issue(user, TokenType::Refresh)
    }

    /// Create a token pair (access + refresh)
    pub fn issue_token_pair(&self, user: &User) -> Result<TokenPair> {
        Ok(TokenPair {
            access: self.issue_access_token(user)?,
            refresh: self.issue_refresh_token(user)?,
        })
    }

    /// Create the token that authorizes a single password change
    pub fn issue_password_change_token(&self, user: &User) -> Result<IssuedToken> {
        self.issue(user, TokenType::PasswordChange)
    }

    /// Verify signature, type and expiry of a token
    ///
    /// Expiry is judged by the injected clock, not by the system time.
    pub fn verify(&self, token: &str, expected: TokenType) -> Result<Claims> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;

        let token_data =
            decode::<Claims>(token, &self.keys(expected).decoding_key, &validation).map_err(
                |e| {
                    warn!("JWT verification failed: {}", e);
                    ServiceError::Jwt(e)
                },
            )?;
        let claims = token_data.claims;

        if claims.token_type != expected {
            warn!(
                "Token type mismatch: expected {:?}, got {:?}",
                expected, claims.token_type
            );
            return Err(ServiceError::unauthorized("Invalid token type"));
        }

        if claims.exp <= self.clock.timestamp() {
            debug!("Token expired for user: {}", claims.id);
            return Err(ServiceError::unauthorized("Token expired"));
        }

        debug!("Token verified for user: {}", claims.id);
        Ok(claims)
    }
}
