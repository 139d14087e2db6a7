//! Error types for the catalog crate

use bookdeck_core::AppError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur in catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Dataset JSON could not be parsed
    #[error("Failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Dataset file could not be read
    #[error("Failed to read catalog file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Core domain error
    #[error(transparent)]
    Core(#[from] AppError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err: CatalogError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().contains("parse catalog data"));
    }

    #[test]
    fn test_read_error_display() {
        let err = CatalogError::Read {
            path: PathBuf::from("/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/missing.json"));
    }
}
