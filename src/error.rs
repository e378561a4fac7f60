//! Error types for restconf-client

use thiserror::Error;

/// Main error type for RESTCONF client operations
#[derive(Debug, Error)]
pub enum RestconfError {
    /// JSON serialization error while building a request body
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Network or HTTP-level failure (DNS, connection refused, timeout)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// IO error (configuration files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for RESTCONF client operations
pub type Result<T> = std::result::Result<T, RestconfError>;
