//! # workforce-api
//!
//! REST API for user accounts and worker records.
//!
//! ## Features
//!
//! - **Accounts**: registration, profile updates, password changes
//! - **Workers**: CRUD with free-text search, sorting and pagination
//! - **Authentication**: basic credentials, access/refresh/password-change JWTs
//!   and a mailed password-reset flow
//! - **Access control**: first-match rule evaluation per category and action
//! - **Storage**: SeaORM (SQLite or Postgres) or an in-memory store
//!
//! ## Serving
//!
//! ```rust,no_run
//! use workforce_api::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/workforce.yaml").await?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::models::{Page, User, Worker};
pub use utils::error::{Result, ServiceError};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
