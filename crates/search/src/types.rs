//! Catalog, query and response types.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use servicesearch_geo::GeoPoint;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A named, geolocated catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Catalog identifier
    pub id: i64,
    /// Display name, matched against the query term
    pub name: String,
    /// Location of the service
    pub position: GeoPoint,
}

impl Document {
    /// Creates a new document.
    pub fn new(id: i64, name: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            id,
            name: name.into(),
            position,
        }
    }
}

/// A validated search query.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Text matched against document names
    pub term: String,
    /// Point distances are measured from
    pub origin: GeoPoint,
}

impl Query {
    /// Creates a query. Callers are expected to have validated both parts.
    pub fn new(term: impl Into<String>, origin: GeoPoint) -> Self {
        Self {
            term: term.into(),
            origin,
        }
    }
}

/// A matched document with its score and distance from the query origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    /// Catalog identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Location of the service
    pub position: GeoPoint,
    /// Great-circle distance from the query origin in kilometers
    #[serde(rename = "distance")]
    pub distance_km: f64,
    /// Name similarity to the query term, in `[0, 1]`
    #[serde(rename = "score")]
    pub similarity: f64,
}

/// The outcome of one ranking pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResponse {
    /// Number of results, always `results.len()`
    pub total_hits: usize,
    /// Number of documents scanned
    pub total_documents: usize,
    /// Matches in catalog order
    pub results: Vec<ScoredResult>,
}

impl RankedResponse {
    /// An empty response for an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reorders the results according to `order`.
    ///
    /// Sorting is stable, so ties keep catalog order. Counts are unchanged.
    #[must_use]
    pub fn sorted_by(mut self, order: SortOrder) -> Self {
        match order {
            SortOrder::Input => {}
            SortOrder::Score => self.results.sort_by(|a, b| {
                b.similarity
                    .partial_cmp(&a.similarity)
                    .unwrap_or(Ordering::Equal)
            }),
            SortOrder::Distance => self.results.sort_by(|a, b| {
                a.distance_km
                    .partial_cmp(&b.distance_km)
                    .unwrap_or(Ordering::Equal)
            }),
        }
        self
    }
}

/// Caller-level ordering applied on top of a ranking pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Catalog order
    #[default]
    Input,
    /// Highest similarity first
    Score,
    /// Closest first
    Distance,
}

impl FromStr for SortOrder {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "input" | "none" => Ok(Self::Input),
            "score" | "similarity" => Ok(Self::Score),
            "distance" => Ok(Self::Distance),
            other => Err(SearchError::InvalidSortOrder(other.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Input => "input",
            Self::Score => "score",
            Self::Distance => "distance",
        };
        f.write_str(name)
    }
}
