//! Infrastructure layer for ruledocs
//!
//! Cross-cutting concerns shared by the command line front end:
//! - Layered configuration (defaults, TOML file, `RULEDOCS__` environment)
//! - Structured logging with `tracing`
//! - Error context helpers

pub mod config;
pub mod constants;
pub mod error;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader, LoggingConfig, RulesConfig};
pub use error::{Error, Result};
pub use logging::init_logging;
