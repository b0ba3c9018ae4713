//! Error handling types

use thiserror::Error;

/// Result type alias for infrastructure operations
pub type Result<T> = std::result::Result<T, Error>;

/// Infrastructure error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the problem
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O failure with context
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Logging could not be initialised
    #[error("Logging error: {message}")]
    Logging {
        /// Description of the problem
        message: String,
    },
}

impl Error {
    /// Configuration error without a source
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}
