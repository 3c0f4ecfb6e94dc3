//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur around the ranking pass.
///
/// Ranking itself is total; these cover the caller-facing knobs.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Unknown result ordering name
    #[error("Invalid sort order '{0}': expected one of input, score, distance")]
    InvalidSortOrder(String),
}
