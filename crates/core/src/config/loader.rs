//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::Path;

/// Environment variable overriding `catalog.source`
pub const ENV_SOURCE: &str = "SERVICESEARCH_SOURCE";
/// Environment variable overriding `logging.level`
pub const ENV_LOG: &str = "SERVICESEARCH_LOG";
/// Environment variable overriding `catalog.timeout_secs`
pub const ENV_TIMEOUT_SECS: &str = "SERVICESEARCH_TIMEOUT_SECS";

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults, then apply
    /// environment overrides
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = path
            .map(String::from)
            .or_else(find_config_file);

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        let config = Self {
            schema,
            path: config_path,
        }
        .with_overrides_from(|key| std::env::var(key).ok());

        config.validate()?;
        Ok(config)
    }

    /// Load with defaults only (no file)
    pub fn defaults() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }

    /// Apply overrides from a variable lookup
    ///
    /// Unparseable numeric values are ignored.
    #[must_use]
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup(ENV_SOURCE).filter(|s| !s.trim().is_empty()) {
            self.schema.catalog.source = source;
        }
        if let Some(level) = lookup(ENV_LOG).filter(|s| !s.trim().is_empty()) {
            self.schema.logging.level = level;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS).and_then(|s| s.trim().parse().ok()) {
            self.schema.catalog.timeout_secs = secs;
        }
        self
    }

    /// Reject settings the catalog loader or service cannot work with
    pub fn validate(&self) -> Result<()> {
        let catalog = &self.schema.catalog;
        if catalog.source.trim().is_empty() {
            return Err(Error::config_invalid("catalog.source cannot be empty"));
        }
        if catalog.timeout_secs == 0 {
            return Err(Error::config_invalid("catalog.timeout_secs cannot be zero"));
        }
        if catalog.max_attempts == 0 {
            return Err(Error::config_invalid("catalog.max_attempts must be at least 1"));
        }
        if self.schema.search.max_term_length == 0 {
            return Err(Error::config_invalid("search.max_term_length must be at least 1"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [
        ".servicesearch.toml",
        "servicesearch.toml",
        ".config/servicesearch.toml",
    ];

    candidates
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(String::from)
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    if !Path::new(path).exists() {
        return Err(Error::config_not_found(path));
    }

    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Failed to read config file {}", path))?;

    toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("Failed to parse config file {}", path))
}
