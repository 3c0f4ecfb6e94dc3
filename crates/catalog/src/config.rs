//! Configuration for the catalog loader

use crate::error::{CatalogError, CatalogResult};
use servicesearch_core::config::{CatalogSettings, DEFAULT_CATALOG_SOURCE};
use servicesearch_core::retry::RetryConfig;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Where documents are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Fetched over HTTP(S)
    Url(String),
    /// Read from a local JSON file
    File(PathBuf),
}

impl CatalogSource {
    /// `http://` and `https://` locations are URLs, anything else is a path
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loader configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Document source
    pub source: CatalogSource,
    /// Request timeout
    pub timeout: Duration,
    /// Retry policy for HTTP sources
    pub retry: RetryConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: CatalogSource::Url(DEFAULT_CATALOG_SOURCE.to_string()),
            timeout: Duration::from_secs(30),
            retry: RetryConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Build from the `[catalog]` section of the configuration file
    pub fn from_settings(settings: &CatalogSettings) -> Self {
        Self {
            source: CatalogSource::parse(&settings.source),
            timeout: Duration::from_secs(settings.timeout_secs),
            retry: RetryConfig::default().with_max_attempts(settings.max_attempts),
        }
    }

    /// Builder-style method to set the source
    #[must_use]
    pub fn with_source(mut self, location: &str) -> Self {
        self.source = CatalogSource::parse(location);
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to set retry config
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> CatalogResult<()> {
        match &self.source {
            CatalogSource::Url(url) if url.split("://").nth(1).is_none_or(str::is_empty) => {
                return Err(CatalogError::config("catalog URL has no host"));
            }
            CatalogSource::File(path) if path.as_os_str().is_empty() => {
                return Err(CatalogError::config("catalog path cannot be empty"));
            }
            _ => {}
        }

        if self.timeout.is_zero() {
            return Err(CatalogError::config("timeout cannot be zero"));
        }

        if self.retry.max_attempts == 0 {
            return Err(CatalogError::config("max_attempts must be at least 1"));
        }

        Ok(())
    }
}
