//! Core services for Service Search
//!
//! This crate wraps the ranking engine with what a request layer needs:
//!
//! - **Error handling**: errors with codes, kinds, context and recovery suggestions
//! - **Validation**: turning raw search requests into trusted queries
//! - **Configuration**: TOML-based configuration with environment overrides
//! - **Retry**: backoff policy for catalog loading
//! - **Service**: the search and listing entry points
//!
//! # Example
//!
//! ```rust
//! use servicesearch_core::prelude::*;
//! use servicesearch_geo::GeoPoint;
//! use servicesearch_search::Document;
//!
//! let documents = vec![Document::new(1, "Electrician", GeoPoint::new(59.33, 18.06))];
//! let service = SearchService::new(Config::defaults().schema.search);
//!
//! let response = service
//!     .search(&documents, &SearchRequest::new("ELEC", GeoPoint::new(59.30, 18.00)))
//!     .unwrap();
//! assert_eq!(response.total_hits, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod retry;
pub mod service;
pub mod validation;

pub use error::{Error, ErrorCode, ErrorKind, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema, ServiceConfig};
    pub use crate::error::{exit_codes, Error, ErrorCode, ErrorKind, Result, ResultExt};
    pub use crate::retry::RetryConfig;
    pub use crate::service::{CatalogListing, SearchService};
    pub use crate::validation::{validate_request, SearchRequest};
}
