//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "ruledocs.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "ruledocs";

/// Environment variable prefix for configuration (e.g. `RULEDOCS__RULES__LIMIT`)
pub const CONFIG_ENV_PREFIX: &str = "RULEDOCS__";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Default rules directory, relative to the working directory
pub const DEFAULT_RULES_DIR: &str = "rules";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a full `tracing` filter directive
pub const LOG_FILTER_ENV: &str = "RULEDOCS_LOG";
