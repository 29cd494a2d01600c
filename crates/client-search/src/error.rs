//! Error types for the client search front ends.

use client_search_core::SourceError;
use thiserror::Error;

/// Common error type for CLI and server operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Record source error (message is already user-facing)
    #[error("{0}")]
    Source(#[from] SourceError),

    /// CSV writer error
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP client construction error
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("{0}")]
    Internal(String),
}

/// Result type alias using the crate Error.
pub type Result<T> = std::result::Result<T, Error>;
