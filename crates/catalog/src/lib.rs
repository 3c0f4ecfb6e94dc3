//! Catalog loader for Service Search
//!
//! Fetches the document list the ranking core works on.
//!
//! # Features
//!
//! - **HTTP or file sources**: `http(s)://` locations are fetched, anything else is read from disk
//! - **Retry with exponential backoff**: automatic retry for transient HTTP failures
//! - **Empty-catalog fallback**: [`CatalogClient::load`] never fails; an unavailable source yields no documents
//! - **Request correlation**: each fetch carries a unique `X-Request-ID`
//!
//! # Example
//!
//! ```rust,no_run
//! use servicesearch_catalog::{CatalogClient, CatalogConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::with_config(CatalogConfig::default())?;
//!
//!     let documents = client.load().await;
//!     println!("Loaded {} documents", documents.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod parse;

pub use client::{load_from_file, CatalogClient};
pub use config::{CatalogConfig, CatalogSource};
pub use error::{CatalogError, CatalogResult};
pub use parse::parse_documents;
