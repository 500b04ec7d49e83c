//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for icon-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods at the outer layers.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a single icon cannot be resolved by name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Neither an exact identifier nor a case-insensitive top hit matched.
    #[error("icon not found: {name}")]
    NotFound { name: String },
}

/// Error returned when loading a configuration file fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
