//! Configuration types

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_RULES_DIR};
use ruledocs_core::PreviewLimit;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Root application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Rule source configuration
    pub rules: RulesConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Where rule documents come from and how many of them to keep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Directory holding the rule markdown files
    pub dir: PathBuf,
    /// Preview truncation mode (`third`, `sixth`, `minimal`); unset keeps everything
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_RULES_DIR),
            limit: None,
        }
    }
}

impl RulesConfig {
    /// Resolve the configured truncation mode
    ///
    /// Unrecognised values fall back to [`PreviewLimit::All`].
    pub fn preview_limit(&self) -> PreviewLimit {
        let limit = PreviewLimit::from_setting(self.limit.as_deref());
        if let Some(raw) = self.limit.as_deref()
            && limit == PreviewLimit::All
            && raw != PreviewLimit::All.as_str()
        {
            debug!(limit = raw, "Unrecognised rules.limit, keeping all rules");
        }
        limit
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}
