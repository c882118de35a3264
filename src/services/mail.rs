//! Outgoing mail
//!
//! Messages go to an HTTP relay as `{from, to, subject, html}` JSON. Outside
//! production, or without a relay, mail is logged and dropped.

use crate::config::{Environment, MailConfig};
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// A single outgoing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Mail delivery
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<()>;

    /// Channel name
    fn name(&self) -> &'static str;
}

/// Posts messages to an HTTP mail relay
#[derive(Debug, Clone)]
pub struct RelayMailer {
    client: reqwest::Client,
    relay_url: String,
    api_key: Option<String>,
    from_address: String,
}

#[derive(Serialize)]
struct RelayPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

impl RelayMailer {
    pub fn new(
        relay_url: String,
        api_key: Option<String>,
        from_address: String,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::config(format!("Failed to build mail client: {}", e)))?;

        Ok(Self {
            client,
            relay_url,
            api_key,
            from_address,
        })
    }
}

#[async_trait]
impl Mailer for RelayMailer {
    async fn send(&self, message: &MailMessage) -> Result<()> {
        let payload = RelayPayload {
            from: &self.from_address,
            to: &message.to,
            subject: &message.subject,
            html: &message.html,
        };

        let mut request = self.client.post(&self.relay_url).json(&payload);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ServiceError::mail(format!(
                "Mail relay returned status: {}",
                response.status()
            )));
        }

        debug!("Mail '{}' handed to relay", message.subject);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "relay"
    }
}

/// Drops every message
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledMailer;

#[async_trait]
impl Mailer for DisabledMailer {
    async fn send(&self, message: &MailMessage) -> Result<()> {
        debug!("Mail disabled, dropping '{}'", message.subject);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

/// Relay in production when one is configured, otherwise disabled
pub fn build_mailer(config: &MailConfig, environment: Environment) -> Result<Arc<dyn Mailer>> {
    match (&config.relay_url, environment.is_production()) {
        (Some(relay_url), true) => {
            info!("Mail delivery through relay {}", relay_url);
            Ok(Arc::new(RelayMailer::new(
                relay_url.clone(),
                config.api_key.clone(),
                config.from_address.clone(),
                Duration::from_secs(config.timeout),
            )?))
        }
        _ => {
            info!("Mail delivery disabled ({} environment)", environment);
            Ok(Arc::new(DisabledMailer))
        }
    }
}

/// The password reset mail
pub fn password_reset_message(to: &str, reset_link: &str) -> MailMessage {
    MailMessage {
        to: to.to_string(),
        subject: "Reset your password".to_string(),
        html: format!(
            "<p>A password reset was requested for your account.</p>\
             <p><a href=\"{link}\">Reset your password</a></p>\
             <p>If you did not request it, you can ignore this mail.</p>",
            link = reset_link
        ),
    }
}
