//! Error types for musebox.

use thiserror::Error;

/// Result type alias using musebox's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for musebox operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration value missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
