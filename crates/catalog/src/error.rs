//! Error types for the catalog loader

use servicesearch_core::{Error, ErrorCode};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog loading errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Payload is not a JSON document list
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a local catalog failed
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Source answered with a non-success status
    #[error("Catalog source returned {status} for {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// All retry attempts exhausted
    #[error("All {attempts} attempts to load the catalog failed: {last_error}")]
    RetriesExhausted {
        /// Number of attempts made
        attempts: u32,
        /// Last error message
        last_error: String,
    },
}

impl CatalogError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this error is retryable
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(e) => e.is_connect() || e.is_timeout(),
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::Json(_) | Self::Io { .. } | Self::Config(_) | Self::RetriesExhausted { .. } => {
                false
            }
        }
    }

    /// Error code in the servicesearch-core numbering
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Json(_) => ErrorCode::CatalogParseError,
            Self::Io { .. } => ErrorCode::FileNotFound,
            Self::Config(_) => ErrorCode::ConfigValidationError,
            Self::Request(_) | Self::Status { .. } | Self::RetriesExhausted { .. } => {
                ErrorCode::CatalogUnavailable
            }
        }
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        let code = err.code();
        let message = err.to_string();
        let error = match code {
            ErrorCode::CatalogUnavailable => Error::catalog_unavailable(message),
            _ => Error::new(code, message),
        };
        error.with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_retryable() {
        let server = CatalogError::Status { status: 503, url: "u".into() };
        let throttled = CatalogError::Status { status: 429, url: "u".into() };
        let missing = CatalogError::Status { status: 404, url: "u".into() };

        assert!(server.is_retryable());
        assert!(throttled.is_retryable());
        assert!(!missing.is_retryable());
    }

    #[test]
    fn test_core_conversion() {
        let err: Error = CatalogError::Status { status: 502, url: "u".into() }.into();
        assert_eq!(err.code, ErrorCode::CatalogUnavailable);
        assert!(err.suggestion.is_some());
        assert!(!err.is_client_error());

        let json = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: Error = CatalogError::from(json).into();
        assert_eq!(err.code, ErrorCode::CatalogParseError);
    }
}
