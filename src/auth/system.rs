//! Authentication flows
//!
//! Login, token refresh and the reset → password-change sequence. A token is
//! only honored while the secret it carries equals the account's current
//! secret, so changing the password revokes every earlier token.

use super::jwt::{Claims, IssuedToken, JwtHandler, TokenPair, TokenType};
use crate::config::AuthConfig;
use crate::core::models::{NewUser, User};
use crate::services::mail::{Mailer, password_reset_message};
use crate::storage::{ResetTokenStore, StorageLayer, UserStore};
use crate::utils::auth::BasicCredentials;
use crate::utils::auth::crypto::{
    generate_reset_token, hash_password, hash_token, token_fingerprint, verify_dummy_password,
    verify_password,
};
use crate::utils::clock::Clock;
use crate::utils::data::DataValidator;
use crate::utils::error::{Result, ServiceError};
use chrono::Duration;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// An account together with freshly issued tokens
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub user: User,
    pub tokens: TokenPair,
}

/// Main authentication system
#[derive(Clone)]
pub struct AuthSystem {
    users: Arc<dyn UserStore>,
    reset_tokens: Arc<dyn ResetTokenStore>,
    jwt: Arc<JwtHandler>,
    mailer: Arc<dyn Mailer>,
    clock: Arc<dyn Clock>,
    reset_token_ttl: Duration,
    /// Base of the links sent in reset mails
    public_url: String,
}

impl std::fmt::Debug for AuthSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSystem")
            .field("jwt", &self.jwt)
            .field("reset_token_ttl", &self.reset_token_ttl)
            .field("public_url", &self.public_url)
            .finish()
    }
}

impl AuthSystem {
    /// Create a new authentication system
    pub fn new(
        config: &AuthConfig,
        public_url: &str,
        storage: &StorageLayer,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let reset_token_ttl = i64::try_from(config.reset_token_ttl)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(|| ServiceError::config("reset_token_ttl out of range"))?;

        Ok(Self {
            users: storage.users.clone(),
            reset_tokens: storage.reset_tokens.clone(),
            jwt: Arc::new(JwtHandler::new(config, clock.clone())),
            mailer,
            clock,
            reset_token_ttl,
            public_url: public_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn jwt(&self) -> &JwtHandler {
        &self.jwt
    }

    /// Create an account and sign it in
    pub async fn register(&self, input: NewUser) -> Result<AuthSession> {
        let input = input.validated()?;
        let password_hash = hash_in_background(input.password).await?;

        let user = User::new(input.email, input.username, password_hash, self.clock.now());
        let user = self.users.insert_user(&user).await?;
        info!("User registered: {}", user.id);

        let tokens = self.jwt.issue_token_pair(&user)?;
        Ok(AuthSession { user, tokens })
    }

    /// Check an email and password pair
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn verify_credentials(&self, email: &str, password: &str) -> Result<User> {
        let email = email.trim().to_lowercase();
        let password = password.to_string();

        let Some(user) = self.users.find_user_by_email(&email).await? else {
            tokio::task::spawn_blocking(move || verify_dummy_password(&password)).await?;
            debug!("Login attempt for unknown email");
            return Err(ServiceError::unauthorized(INVALID_CREDENTIALS));
        };

        let hash = user.password_hash.clone();
        let valid =
            tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await??;
        if !valid {
            warn!("Invalid password for user: {}", user.id);
            return Err(ServiceError::unauthorized(INVALID_CREDENTIALS));
        }

        Ok(user)
    }

    /// Authenticate with basic credentials
    pub async fn authenticate_basic(&self, credentials: &BasicCredentials) -> Result<User> {
        self.verify_credentials(&credentials.email, &credentials.password)
            .await
    }

    /// Verify credentials and issue an access and a refresh token
    pub async fn login(&self, credentials: &BasicCredentials) -> Result<AuthSession> {
        let user = self.authenticate_basic(credentials).await?;
        let tokens = self.jwt.issue_token_pair(&user)?;
        info!("User logged in: {}", user.id);
        Ok(AuthSession { user, tokens })
    }

    /// The account a claim set refers to, if its secret is still current
    pub async fn resolve_account(&self, claims: &Claims) -> Result<Option<User>> {
        let user = self.users.find_user_by_id(claims.id).await?;
        Ok(user.filter(|user| user.token_secret == claims.secret))
    }

    async fn authenticate(&self, token: &str, token_type: TokenType) -> Result<User> {
        let claims = self.jwt.verify(token, token_type)?;
        match self.resolve_account(&claims).await? {
            Some(user) => Ok(user),
            None => {
                warn!("Rejected {:?} token with stale secret for {}", token_type, claims.id);
                Err(ServiceError::unauthorized("Invalid token"))
            }
        }
    }

    pub async fn authenticate_access(&self, token: &str) -> Result<User> {
        self.authenticate(token, TokenType::Access).await
    }

    pub async fn authenticate_refresh(&self, token: &str) -> Result<User> {
        self.authenticate(token, TokenType::Refresh).await
    }

    pub async fn authenticate_password_change(&self, token: &str) -> Result<User> {
        self.authenticate(token, TokenType::PasswordChange).await
    }

    /// New access token for an account that presented a valid refresh token
    ///
    /// The refresh token itself is kept.
    pub fn refresh_access_token(&self, user: &User) -> Result<IssuedToken> {
        debug!("Refreshing access token for user: {}", user.id);
        self.jwt.issue_access_token(user)
    }

    /// Store a single-use reset token and mail its link
    ///
    /// Succeeds whether or not the email belongs to an account. While the
    /// account still holds a live token no new one is issued and nothing is
    /// mailed. The mail goes out on a background task, so the response does
    /// not wait on the mailer; failures are logged there.
    pub async fn request_password_reset(&self, email: &str) -> Result<()> {
        let email = DataValidator::normalize_email("email", email)?;

        let Some(user) = self.users.find_user_by_email(&email).await? else {
            debug!("Password reset requested for unknown email");
            return Ok(());
        };

        let token = generate_reset_token();
        let now = self.clock.now();
        let stored = self
            .reset_tokens
            .store_reset_token(user.id, &hash_token(&token), now, now + self.reset_token_ttl)
            .await?;
        if !stored {
            debug!("Live reset token exists for user: {}, nothing mailed", user.id);
            return Ok(());
        }
        info!(
            "Password reset token {} issued for user: {}",
            token_fingerprint(&token),
            user.id
        );

        let link = format!("{}/reset-password?token={}", self.public_url, token);
        let message = password_reset_message(&user.email, &link);
        let mailer = self.mailer.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer.send(&message).await {
                warn!("Failed to send password reset mail to {}: {}", user.id, e);
            }
        });

        Ok(())
    }

    /// Redeem a reset token for a short-lived password-change token
    pub async fn redeem_reset_token(&self, token: &str) -> Result<IssuedToken> {
        let token = token.trim();
        let Some(user_id) = self
            .reset_tokens
            .consume_reset_token(&hash_token(token), self.clock.now())
            .await?
        else {
            warn!("Rejected reset token {}", token_fingerprint(token));
            return Err(ServiceError::unauthorized("Invalid or expired reset token"));
        };

        let user = self
            .users
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::unauthorized("Invalid or expired reset token"))?;

        info!("Reset token redeemed for user: {}", user.id);
        self.jwt.issue_password_change_token(&user)
    }

    /// Set a new password, rotating the account secret
    pub async fn change_password(&self, mut user: User, password: &str) -> Result<User> {
        let password = DataValidator::validate_password(password)?;
        let password_hash = hash_in_background(password).await?;

        user.set_password_hash(password_hash, self.clock.now());
        let user = self.users.update_user(&user).await?;

        info!("Password changed for user: {}", user.id);
        Ok(user)
    }

    /// Drop expired and used reset tokens
    pub async fn purge_expired_reset_tokens(&self) -> Result<u64> {
        let purged = self
            .reset_tokens
            .purge_expired_reset_tokens(self.clock.now())
            .await?;
        if purged > 0 {
            info!("Purged {} password reset tokens", purged);
        }
        Ok(purged)
    }
}

async fn hash_in_background(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}
