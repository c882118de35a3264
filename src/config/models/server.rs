//! Server configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            "test" => Ok(Environment::Test),
            other => Err(format!("Unknown environment: {}", other)),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
        };
        f.write_str(name)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of worker threads
    pub workers: Option<usize>,
    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,
    /// Base URL used in links sent by mail
    #[serde(default = "default_public_url")]
    pub public_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout: u64,
    /// Allowed CORS origins, empty allows any origin
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            environment: Environment::default(),
            public_url: default_public_url(),
            request_timeout: default_timeout(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the number of workers (defaults to CPU count)
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            return Err("Request timeout cannot be 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count cannot be 0".to_string());
        }

        url::Url::parse(&self.public_url)
            .map_err(|e| format!("Invalid public_url '{}': {}", self.public_url, e))?;

        Ok(())
    }
}
