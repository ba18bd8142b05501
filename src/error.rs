//! Embernote error types

use thiserror::Error;

/// Embernote error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Operation referenced a note absent from the owner's store
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed request input
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for embernote operations
pub type Result<T> = std::result::Result<T, Error>;
