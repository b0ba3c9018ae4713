//! Error handling types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while ingesting rule files
#[derive(Error, Debug)]
pub enum Error {
    /// I/O failure tied to a specific path
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being read or listed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The rules directory is missing or is not a directory
    #[error("Rules directory not found: {path}")]
    RulesDirNotFound {
        /// The configured rules directory
        path: PathBuf,
    },

    /// Directory traversal error
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Frontmatter block that cannot be used as metadata
    #[error("Frontmatter error in {file}: {message}")]
    Frontmatter {
        /// File containing the frontmatter
        file: PathBuf,
        /// What went wrong
        message: String,
    },

    /// YAML decoding error
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Attach the offending file to a frontmatter or YAML error
    pub fn in_file(self, file: impl Into<PathBuf>) -> Self {
        match self {
            Self::Frontmatter { message, .. } => Self::Frontmatter {
                file: file.into(),
                message,
            },
            Self::Yaml(e) => Self::Frontmatter {
                file: file.into(),
                message: e.to_string(),
            },
            other => other,
        }
    }
}
