//! Structured logging with tracing
//!
//! Logs go to stderr so that stdout stays reserved for command output.

use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;
use crate::error::{Error, Result};
use std::path::Path;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// `RULEDOCS_LOG`, when set, takes precedence over the configured level.
///
/// # Errors
///
/// Fails on an invalid level or when a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    // Layer types differ between formats, so each branch installs its own registry
    let installed = if config.json_format {
        let stderr = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true);
        Registry::default().with(filter).with(stderr).try_init()
    } else {
        let stderr = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);
        Registry::default().with(filter).with(stderr).try_init()
    };

    installed.map_err(|e| Error::Logging {
        message: format!("Failed to install subscriber: {e}"),
    })?;

    debug!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
///
/// # Errors
///
/// Returns [`Error::Configuration`] for anything but trace, debug, info, warn(ing) or error.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
