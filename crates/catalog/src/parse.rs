//! Catalog payload parsing

use crate::error::CatalogResult;
use servicesearch_search::Document;

/// Parse a JSON document list.
///
/// Line breaks are stripped before parsing, matching the feed's habit of
/// wrapping long lines. A blank payload is an empty catalog.
pub fn parse_documents(body: &str) -> CatalogResult<Vec<Document>> {
    let flattened: String = body.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();

    if flattened.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(&flattened)?)
}
