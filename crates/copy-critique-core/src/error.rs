//! Error types for copy-critique-core.
//!
//! The analysis functions themselves are total; only configuration loading
//! and parsing of user-supplied labels can fail.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A content type label that does not name any known content type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown content type: {name}. Use: {available}")]
pub struct ParseContentTypeError {
    /// The label that was requested.
    pub name: String,
    /// Comma-separated list of accepted labels.
    pub available: String,
}
