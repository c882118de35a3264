//! Structured logging setup

use crate::config::LoggingConfig;
use crate::utils::error::{Result, ServiceError};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = Registry::default().with(filter);

    let installed = if config.json {
        registry
            .with(fmt::layer().json().with_target(true).with_current_span(true))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_thread_ids(false))
            .try_init()
    };

    installed.map_err(|e| ServiceError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse a log level name
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(ServiceError::Config(format!(
            "Invalid log level '{}', expected one of trace, debug, info, warn, error",
            other
        ))),
    }
}
