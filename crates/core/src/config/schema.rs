//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use servicesearch_search::SortOrder;

/// Public catalog feed used when nothing else is configured
pub const DEFAULT_CATALOG_SOURCE: &str =
    "https://raw.githubusercontent.com/bokadirekt/search-service-test/master/data.json";

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub search: ServiceConfig,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the catalog comes from and how hard to try
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogSettings {
    /// HTTP(S) URL or local file path
    #[serde(default = "default_source")]
    pub source: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Attempts per load, including the first
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
        }
    }
}

/// Settings handed to [`crate::service::SearchService`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    /// Ordering applied after ranking
    #[serde(default)]
    pub sort: SortOrder,

    /// Longest accepted query term, in characters
    #[serde(default = "default_max_term_length")]
    pub max_term_length: usize,

    /// Catalog size from which ranking runs across threads
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            sort: SortOrder::default(),
            max_term_length: default_max_term_length(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `servicesearch_catalog=debug`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_source() -> String {
    DEFAULT_CATALOG_SOURCE.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_attempts() -> u32 {
    3
}

fn default_max_term_length() -> usize {
    256
}

fn default_parallel_threshold() -> usize {
    10_000
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let schema = ConfigSchema::default();
        assert_eq!(schema.catalog.source, DEFAULT_CATALOG_SOURCE);
        assert_eq!(schema.catalog.timeout_secs, 30);
        assert_eq!(schema.catalog.max_attempts, 3);
        assert_eq!(schema.search.sort, SortOrder::Input);
        assert_eq!(schema.search.max_term_length, 256);
        assert_eq!(schema.logging.level, "info");
        assert!(!schema.logging.json);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [search]
            sort = "distance"

            [logging]
            json = true
            "#,
        )
        .unwrap();

        assert_eq!(schema.search.sort, SortOrder::Distance);
        assert_eq!(schema.search.max_term_length, 256);
        assert!(schema.logging.json);
        assert_eq!(schema.logging.level, "info");
        assert_eq!(schema.catalog, CatalogSettings::default());
    }
}
