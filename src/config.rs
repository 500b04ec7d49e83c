//! TOML configuration for the CLI and server front ends.
//!
//! Lookup order: an explicit path, then `$ICON_SEARCH_CONFIG`, then
//! `<config dir>/icon-search/config.toml` if it exists, then defaults.
//!
//! ```toml
//! catalog = "~/icons/lucide.json"
//! search_limit = 20
//!
//! [usage]
//! direct = "@icon.{function}()"
//! ```

use crate::catalog::{self, Catalog};
use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "ICON_SEARCH_CONFIG";

/// Default cap on `search` results.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON catalog to load instead of the built-in table.
    pub catalog: Option<PathBuf>,
    /// Maximum number of search results; 0 means unlimited.
    pub search_limit: usize,
    /// Usage snippet templates keyed by snippet name. `{function}` and
    /// `{constant}` are substituted per icon. Replaces the defaults when set.
    pub usage: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            search_limit: DEFAULT_SEARCH_LIMIT,
            usage: default_usage(),
        }
    }
}

fn default_usage() -> BTreeMap<String, String> {
    [
        ("import", r#"import "github.com/riclib/icon""#),
        ("direct", "@icon.{function}()"),
        (
            "with_attrs",
            r#"@icon.{function}WithAttrs(templ.Attributes{"class": "w-4 h-4"})"#,
        ),
        (
            "generic",
            r#"@icon.Icon(icon.{constant}, templ.Attributes{"class": "w-4 h-4"})"#,
        ),
        ("raw_svg", "icon.{function}SVG()"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Config {
    /// Resolve and load the configuration, falling back to defaults when no
    /// file is found.
    pub fn load(explicit: Option<&Path>) -> std::result::Result<Self, ConfigError> {
        let path = config_path(
            explicit,
            std::env::var_os(CONFIG_ENV),
            Self::default_path(),
        );

        match path {
            Some(path) => Self::from_file(&path),
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `<config dir>/icon-search/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("icon-search").join("config.toml"))
    }

    pub fn from_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Catalog path with `~` expanded.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog
            .as_deref()
            .map(|p| PathBuf::from(expand_tilde(&p.to_string_lossy()).into_owned()))
    }

    /// Load the configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match self.catalog_path() {
            Some(path) => Catalog::load(&path),
            None => {
                let catalog = catalog::builtin();
                tracing::info!("Using built-in catalog ({} icons)", catalog.len());
                Ok(catalog)
            }
        }
    }
}

/// Pick the config file: `explicit`, then the `env` value, then `default`
/// when it exists on disk. An empty `env` value is ignored.
fn config_path(
    explicit: Option<&Path>,
    env: Option<OsString>,
    default: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(|| default.filter(|p| p.is_file()))
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
