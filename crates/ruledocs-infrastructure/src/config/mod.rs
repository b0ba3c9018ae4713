//! Configuration management
//!
//! Layered configuration backed by Figment. See [`ConfigLoader`] for the
//! precedence of sources.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, RulesConfig};
