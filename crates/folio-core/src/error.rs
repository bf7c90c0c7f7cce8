//! Error types for the Folio workspace.

use thiserror::Error;

/// A shared error type for the folio crates.
///
/// Failures that reach the remote-service adapters are carried in typed
/// variants here, then fully absorbed at the `CompletionClient` and
/// `RepositoryFeed` boundaries. Nothing above those boundaries observes a
/// `FolioError`.
#[derive(Error, Debug, Clone)]
pub enum FolioError {
    /// Configuration error (missing credential, bad environment value)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote request failure, with retryability classification
    #[error("Request error: {message}")]
    Request {
        status_code: Option<u16>,
        message: String,
        is_retryable: bool,
    },

    /// Response body could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FolioError {
    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Request error with no HTTP status attached
    pub fn request(message: impl Into<String>, is_retryable: bool) -> Self {
        Self::Request {
            status_code: None,
            message: message.into(),
            is_retryable,
        }
    }

    /// Creates a Request error carrying an HTTP status code
    pub fn request_with_status(
        status_code: u16,
        message: impl Into<String>,
        is_retryable: bool,
    ) -> Self {
        Self::Request {
            status_code: Some(status_code),
            message: message.into(),
            is_retryable,
        }
    }

    /// Creates a Parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a Config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if the failure is worth retrying by hand (the system itself
    /// never retries; this is surfaced for logging only)
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Request { is_retryable: true, .. })
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// A type alias for `Result<T, FolioError>`.
pub type Result<T> = std::result::Result<T, FolioError>;
