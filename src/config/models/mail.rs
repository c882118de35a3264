//! Mail relay configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Outgoing mail configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// HTTP endpoint accepting `{from, to, subject, html}` JSON
    pub relay_url: Option<String>,
    /// Bearer token for the relay
    pub api_key: Option<String>,
    /// Sender address
    #[serde(default = "default_mail_from")]
    pub from_address: String,
    /// Relay request timeout in seconds
    #[serde(default = "default_mail_timeout")]
    pub timeout: u64,
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("relay_url", &self.relay_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("from_address", &self.from_address)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            relay_url: None,
            api_key: None,
            from_address: default_mail_from(),
            timeout: default_mail_timeout(),
        }
    }
}

impl MailConfig {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(relay_url) = &self.relay_url {
            let parsed = url::Url::parse(relay_url)
                .map_err(|e| format!("Invalid relay_url '{}': {}", relay_url, e))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(format!(
                    "relay_url must use http:// or https:// scheme, got: {}",
                    parsed.scheme()
                ));
            }
        }

        if !self.from_address.contains('@') {
            return Err(format!("Invalid from_address: {}", self.from_address));
        }

        if self.timeout == 0 {
            return Err("Mail timeout cannot be 0".to_string());
        }

        Ok(())
    }
}
