//! Search service entry point
//!
//! Validates a request, runs the ranking pass over a loaded catalog and
//! applies the configured ordering. Configuration is passed in explicitly.

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::validation::{validate_request, SearchRequest};
use serde::{Deserialize, Serialize};
use servicesearch_search::{rank, Document, Query, RankedResponse};
use std::time::Instant;
use tracing::{debug, info};

/// The whole catalog, as returned by the listing operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogListing {
    /// Number of documents
    pub total_documents: usize,
    /// Documents in catalog order
    pub documents: Vec<Document>,
}

/// Request-handling front of the ranking core
#[derive(Debug, Clone, Default)]
pub struct SearchService {
    config: ServiceConfig,
}

impl SearchService {
    /// Create a service with explicit settings
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Current settings
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Validate `request`, rank `documents` and order the results
    pub fn search(&self, documents: &[Document], request: &SearchRequest) -> Result<RankedResponse> {
        let query = self.validate(request)?;
        Ok(self.search_query(documents, &query))
    }

    /// Check a request against the configured limits without touching a catalog
    pub fn validate(&self, request: &SearchRequest) -> Result<Query> {
        validate_request(request, self.config.max_term_length)
    }

    /// Rank an already-validated query
    pub fn search_query(&self, documents: &[Document], query: &Query) -> RankedResponse {
        let start = Instant::now();

        let response = self.rank(documents, query).sorted_by(self.config.sort);

        info!(
            term = %query.term,
            total_documents = response.total_documents,
            total_hits = response.total_hits,
            sort = %self.config.sort,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Search completed"
        );

        response
    }

    /// The whole catalog
    pub fn list(&self, documents: &[Document]) -> CatalogListing {
        debug!(total_documents = documents.len(), "Listing catalog");
        CatalogListing {
            total_documents: documents.len(),
            documents: documents.to_vec(),
        }
    }

    #[cfg(feature = "parallel")]
    fn rank(&self, documents: &[Document], query: &Query) -> RankedResponse {
        if documents.len() >= self.config.parallel_threshold {
            servicesearch_search::rank_parallel(documents, query)
        } else {
            rank(documents, query)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn rank(&self, documents: &[Document], query: &Query) -> RankedResponse {
        rank(documents, query)
    }
}
