//! The filter-and-score pass over a catalog.
//!
//! A document matches when its lowercased name contains the lowercased query
//! term. Every match is scored for name similarity and distance from the query
//! origin. Results keep catalog order; reordering is left to
//! [`RankedResponse::sorted_by`].

use crate::similarity::similarity;
use crate::types::{Document, Query, RankedResponse, ScoredResult};
use servicesearch_geo::distance_km;
use tracing::debug;

/// Rank `documents` against `query`.
///
/// Total over any input. An empty term matches every document, since the empty
/// string is a substring of every name; request validation rejects empty terms
/// before they get here.
///
/// # Example
/// ```
/// use servicesearch_geo::GeoPoint;
/// use servicesearch_search::{rank, Document, Query};
///
/// let documents = vec![Document::new(1, "Electrician", GeoPoint::new(59.3, 18.0))];
/// let response = rank(&documents, &Query::new("ELEC", GeoPoint::new(59.3, 18.0)));
/// assert_eq!(response.total_hits, 1);
/// ```
pub fn rank(documents: &[Document], query: &Query) -> RankedResponse {
    let needle = query.term.to_lowercase();

    let results: Vec<ScoredResult> = documents
        .iter()
        .filter(|doc| contains_lowercase(&doc.name, &needle))
        .map(|doc| score_document(doc, query))
        .collect();

    debug!(
        documents = documents.len(),
        hits = results.len(),
        term = %query.term,
        "Ranked catalog"
    );

    into_response(documents.len(), results)
}

/// Rank across documents in parallel.
///
/// Same output as [`rank`], including result order.
#[cfg(feature = "parallel")]
pub fn rank_parallel(documents: &[Document], query: &Query) -> RankedResponse {
    use rayon::prelude::*;

    let needle = query.term.to_lowercase();

    let results: Vec<ScoredResult> = documents
        .par_iter()
        .filter(|doc| contains_lowercase(&doc.name, &needle))
        .map(|doc| score_document(doc, query))
        .collect();

    debug!(
        documents = documents.len(),
        hits = results.len(),
        term = %query.term,
        "Ranked catalog in parallel"
    );

    into_response(documents.len(), results)
}

/// Case-insensitive substring test used by the ranking filter.
#[inline]
pub fn matches_term(name: &str, term: &str) -> bool {
    contains_lowercase(name, &term.to_lowercase())
}

/// Score a single document against the query.
///
/// Similarity compares the original-case name with the original-case term.
#[inline]
pub fn score_document(doc: &Document, query: &Query) -> ScoredResult {
    ScoredResult {
        id: doc.id,
        name: doc.name.clone(),
        position: doc.position,
        distance_km: distance_km(&query.origin, &doc.position),
        similarity: similarity(&doc.name, &query.term),
    }
}

#[inline]
fn contains_lowercase(name: &str, lowered_term: &str) -> bool {
    name.to_lowercase().contains(lowered_term)
}

fn into_response(total_documents: usize, results: Vec<ScoredResult>) -> RankedResponse {
    RankedResponse {
        total_hits: results.len(),
        total_documents,
        results,
    }
}
