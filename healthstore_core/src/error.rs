//! Error types for the healthstore_core library.
//!
//! Business outcomes of store writes (success, failure, policy denial) are
//! never reported through this type; see [`crate::OperationResult`].

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for healthstore_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A store address could not be parsed
    #[error("Invalid store uri: {0}")]
    InvalidUri(String),

    /// The store could not complete a call at all
    #[error("Store transport error: {0}")]
    Transport(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
