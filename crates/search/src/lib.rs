//! Text similarity and geo-aware ranking for Service Search.
//!
//! This crate provides:
//! - Levenshtein edit distance
//! - Normalized similarity scoring
//! - The filter-and-score ranking pass over a catalog
//!
//! # Example
//!
//! ```
//! use servicesearch_geo::GeoPoint;
//! use servicesearch_search::{rank, Document, Query};
//!
//! let documents = vec![
//!     Document::new(1, "Plumbing", GeoPoint::new(59.33, 18.06)),
//!     Document::new(2, "Electric", GeoPoint::new(59.34, 18.07)),
//! ];
//! let query = Query::new("plumb", GeoPoint::new(59.30, 18.00));
//!
//! let response = rank(&documents, &query);
//! assert_eq!(response.total_documents, 2);
//! assert_eq!(response.total_hits, 1);
//! assert_eq!(response.results[0].id, 1);
//! ```

mod error;
mod levenshtein;
mod ranking;
mod similarity;
mod types;

pub use error::{Result, SearchError};
pub use levenshtein::levenshtein_distance;
pub use ranking::{matches_term, rank, score_document};
#[cfg(feature = "parallel")]
pub use ranking::rank_parallel;
pub use similarity::{similarity, similarity_opt};
pub use types::{Document, Query, RankedResponse, ScoredResult, SortOrder};
