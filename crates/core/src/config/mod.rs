//! Configuration loading and schema definitions
//!
//! Settings come from a TOML file, then environment overrides.

mod loader;
mod schema;

pub use loader::{Config, ENV_LOG, ENV_SOURCE, ENV_TIMEOUT_SECS};
pub use schema::*;
