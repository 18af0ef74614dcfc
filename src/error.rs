//! Error handling for bins-analyzer
//!
//! Record and session decoding have their own error types
//! ([`crate::record::FormatError`], [`DecodeError`]); this module defines the
//! application-level error used by the collection, configuration and report
//! layers, and a Result alias for them.

use std::path::PathBuf;

use thiserror::Error;

use crate::session::DecodeError;
use crate::types::Representation;

/// Main error type for bins-analyzer operations
#[derive(Error, Debug)]
pub enum BinsError {
    /// A log source that could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A path that is neither a directory nor a supported log file
    #[error("Unsupported source: {}", .0.display())]
    UnsupportedSource(PathBuf),

    /// A path that does not exist
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Conversion that cannot be carried out
    #[error("Cannot convert {} to {target}", path.display())]
    Conversion {
        path: PathBuf,
        target: Representation,
    },

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<BinsError>,
    },
}

impl BinsError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        BinsError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<serde_json::Error> for BinsError {
    fn from(err: serde_json::Error) -> Self {
        BinsError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for BinsError {
    fn from(err: toml::ser::Error) -> Self {
        BinsError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for BinsError {
    fn from(err: toml::de::Error) -> Self {
        BinsError::Config(err.to_string())
    }
}

/// Result type alias for bins-analyzer operations
pub type Result<T> = std::result::Result<T, BinsError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<BinsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| BinsError::with_context(e.into(), context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| BinsError::with_context(e.into(), f()))
    }
}
