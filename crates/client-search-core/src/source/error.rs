//! Record source error types

use thiserror::Error;

/// Errors a record source can report.
///
/// Messages are written for end users; the CLI prints them verbatim after
/// `Error: `.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Local file does not exist
    #[error("File not found: {0}")]
    NotFound(String),

    /// Payload is not valid JSON
    #[error("Invalid JSON format: {0}")]
    InvalidJson(String),

    /// Remote end refused the connection
    #[error("Connection refused")]
    ConnectionRefused,

    /// Request did not complete in time
    #[error("Network timeout")]
    Timeout,

    /// Payload decoded but is not a record list
    #[error("API returned invalid data: {0}")]
    InvalidData(String),

    /// Remote end answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Anything else from the transport or filesystem
    #[error("{0}")]
    Backend(String),
}

impl SourceError {
    /// Build an API error with the standard message for `status`.
    pub fn from_status(status: u16, reason: &str) -> Self {
        let message = match status {
            404 => "Resource not found (404)".to_string(),
            401 => "Unauthorized access (401)".to_string(),
            403 => "Forbidden access (403)".to_string(),
            500 => "Server error (500)".to_string(),
            _ => format!("API Error: {} - {}", status, reason),
        };
        SourceError::Api { status, message }
    }
}

/// Result type for record source operations
pub type SourceResult<T> = Result<T, SourceError>;
