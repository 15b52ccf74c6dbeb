//! Error types for pagepulse library.

use std::io;
use thiserror::Error;

/// Result type alias for pagepulse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while analyzing content.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading content or configuration files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Reading speed must be a positive number of words per minute.
    #[error("Invalid reading speed: {0} words per minute (must be greater than zero)")]
    InvalidReadingSpeed(u32),

    /// A timestamp could not be parsed as an ISO-8601 date.
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp {
        /// The rejected input
        value: String,
        /// Why parsing failed
        reason: String,
    },

    /// Widget configuration could not be loaded.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error while rendering output (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    pub(crate) fn invalid_timestamp(value: &str, reason: impl Into<String>) -> Self {
        Error::InvalidTimestamp {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
