//! Storage error types.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors returned by a [`LanguageStore`](super::LanguageStore).
#[derive(Debug, Error)]
pub enum StorageError {
    /// No password configured; no connection was attempted.
    #[error("Database password not configured. Please set DB_PASSWORD environment variable.")]
    MissingCredential,

    /// The connection could not be established.
    #[error("could not connect to {target}: {message}")]
    Connection { target: String, message: String },

    /// Establishing the connection took longer than the configured bound.
    #[error("connection to {target} timed out after {secs}s")]
    Timeout { target: String, secs: u64 },

    /// The statement itself failed.
    #[error("{0}")]
    Query(String),
}

impl StorageError {
    /// Create a connection error.
    pub fn connection(target: impl Into<String>, message: impl ToString) -> Self {
        Self::Connection {
            target: target.into(),
            message: message.to_string(),
        }
    }

    /// Create a query error.
    pub fn query(err: impl ToString) -> Self {
        Self::Query(err.to_string())
    }

    /// True for configuration problems, as opposed to database failures.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }
}
