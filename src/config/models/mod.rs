//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

#![allow(missing_docs)]

pub mod auth;
pub mod logging;
pub mod mail;
pub mod server;
pub mod storage;

pub use auth::*;
pub use logging::*;
pub use mail::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    4040
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

pub fn default_public_url() -> String {
    "http://127.0.0.1:4040".to_string()
}

pub fn default_access_ttl() -> u64 {
    3600 // 1 hour
}

pub fn default_refresh_ttl() -> u64 {
    60 * 60 * 24 * 30 // 30 days
}

pub fn default_reset_token_ttl() -> u64 {
    3600
}

pub fn default_password_change_ttl() -> u64 {
    300
}

pub fn default_database_url() -> String {
    "sqlite://data/workforce.db?mode=rwc".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_query_timeout() -> u64 {
    10
}

pub fn default_mail_from() -> String {
    "no-reply@workforce.local".to_string()
}

pub fn default_mail_timeout() -> u64 {
    10
}

pub fn default_log_level() -> String {
    "info".to_string()
}
