//! Configuration management
//!
//! Configuration is read from a YAML file, overlaid with environment
//! variables and validated before the server starts.

pub mod models;

pub use models::*;

use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse a YAML configuration file without validating it
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| ServiceError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load the file if it exists, overlay the process environment and validate
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await?
        } else {
            warn!(
                "Configuration file {:?} not found, using defaults and environment",
                path
            );
            Self::default()
        };

        config.apply_env()?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Overlay values from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(env) = get("APP_ENV") {
            self.server.environment = Environment::from_str(&env).map_err(ServiceError::Config)?;
        }
        if let Some(host) = get("HOST") {
            self.server.host = host;
        }
        if let Some(port) = get("PORT") {
            self.server.port = parse_env("PORT", &port)?;
        }
        if let Some(public_url) = get("PUBLIC_URL") {
            self.server.public_url = public_url;
        }
        if let Some(url) = get("DATABASE_URL") {
            self.storage.database.url = url;
            self.storage.database.enabled = true;
        }
        if let Some(secret) = get("JWT_SECRET_ACCESS_USER") {
            self.auth.access_secret = secret;
        }
        if let Some(secret) = get("JWT_SECRET_REFRESH_USER") {
            self.auth.refresh_secret = secret;
        }
        if let Some(secret) = get("JWT_SECRET_PASSWORD_CHANGE") {
            self.auth.password_change_secret = secret;
        }
        if let Some(ttl) = get("JWT_ACCESS_EXP") {
            self.auth.access_ttl = parse_env("JWT_ACCESS_EXP", &ttl)?;
        }
        if let Some(ttl) = get("JWT_REFRESH_EXP") {
            self.auth.refresh_ttl = parse_env("JWT_REFRESH_EXP", &ttl)?;
        }
        if let Some(relay_url) = get("MAIL_RELAY_URL") {
            self.mail.relay_url = Some(relay_url);
        }
        if let Some(from) = get("MAIL_FROM") {
            self.mail.from_address = from;
        }
        if let Some(level) = get("LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| ServiceError::Config(format!("Server config error: {}", e)))?;

        self.auth
            .validate()
            .map_err(|e| ServiceError::Config(format!("Auth config error: {}", e)))?;

        self.storage
            .database
            .validate()
            .map_err(|e| ServiceError::Config(format!("Database config error: {}", e)))?;

        self.mail
            .validate()
            .map_err(|e| ServiceError::Config(format!("Mail config error: {}", e)))?;

        crate::utils::logging::parse_log_level(&self.logging.level)?;

        if self.server.environment.is_production() && self.mail.relay_url.is_none() {
            warn!("No mail relay configured, password reset mails will not be delivered");
        }

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ServiceError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ServiceError::Config(format!("Invalid value for {}: {}", key, value)))
}
