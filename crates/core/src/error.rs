//! Error types for Bookdeck
//!
//! Every operation in this system is a synchronous in-memory read, so
//! there is no retry or recovery machinery. Errors either occur at
//! startup (unreadable dataset) or are degraded to fallback display
//! values inside the UI.

use thiserror::Error;

/// Main error type for Bookdeck
#[derive(Error, Debug)]
pub enum AppError {
    /// Record not found by id
    #[error("Record not found: {entity} with {identifier}")]
    RecordNotFound { entity: String, identifier: String },

    /// Invalid argument provided
    #[error("Invalid argument: {argument} - {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// General I/O error
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Returns a user-friendly error message suitable for display
    pub fn user_message(&self) -> String {
        match self {
            Self::RecordNotFound { entity, .. } => {
                format!("The requested {} was not found.", entity)
            }
            Self::InvalidArgument { .. } => "Invalid input provided.".to_string(),
            Self::IoError { .. } => "A file operation failed. Please try again.".to_string(),
        }
    }

    /// Helper to create a not-found error
    pub fn not_found(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::RecordNotFound {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    /// Helper to create an invalid-argument error
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results using AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}
