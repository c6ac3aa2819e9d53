//! Error types for the factoring pipeline.
//!
//! Malformed CSS never produces an [`Error`]: syntax problems are collected
//! by the parser as [`ParseError`](crate::parser::ParseError) values instead.
//! This type only covers the host-facing surface (configuration and I/O).

use std::path::PathBuf;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the CSS core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be deserialized.
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Unknown processing mode name.
    #[error("Unknown mode '{0}' (expected factor, explode or identity)")]
    InvalidMode(String),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.message())
    }
}
