//! Error types for the Slate runtime.
//!
//! `ApiError::Usage` is the user-facing error raised for API misuse
//! (mutating read-only views, invalid element arguments). The remaining
//! variants cover runtime internals.

use thiserror::Error;

/// Application-level errors for the session runtime.
#[derive(Error, Debug)]
pub enum ApiError {
    /// User-facing API misuse error (invalid argument, illegal mutation)
    #[error("{0}")]
    Usage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session error (missing or torn-down session context)
    #[error("Session error: {0}")]
    Session(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Create a user-facing API misuse error.
    pub fn usage(msg: impl Into<String>) -> Self {
        ApiError::Usage(msg.into())
    }
}

/// Result type alias using ApiError.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Config(err.to_string())
    }
}
