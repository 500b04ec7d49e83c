//! Shared test fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `scenario`: a small hand-written catalog with known tiers for every query
//! - `builtin`: the built-in Lucide catalog
//! - `context`: an [`IconContext`] over `scenario` with default config
//!
//! [`TempCatalog`] writes catalog and config files into a temp directory for
//! tests that exercise loading from disk.

#![allow(dead_code)] // Fixtures are shared across integration test crates

use icon_search::{Catalog, CatalogEntry, Config, IconContext, IconSearcher, catalog};
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Catalog used by most property tests.
///
/// - `user-round` is a prefix match for "user" and carries tag `person`.
/// - `contact-card` only reaches "user" through its `user-data` tag (substring).
/// - `circle-user` contains "user" in its name (substring).
/// - `user` is the exact match.
/// - `blank` has no tags or categories at all.
/// - `empty-tag` carries an empty tag string.
pub fn scenario_catalog() -> Catalog {
    [
        ("user-round", CatalogEntry::new(["person", "account"], ["people"])),
        ("contact-card", CatalogEntry::new(["user-data", "vcard"], ["account"])),
        ("circle-user", CatalogEntry::new(["person", "avatar"], ["account"])),
        ("user", CatalogEntry::new(["person"], ["account"])),
        ("house", CatalogEntry::new(["home", "building"], ["buildings"])),
        ("users", CatalogEntry::new(["group", "people"], ["account"])),
        ("blank", CatalogEntry::default()),
        ("empty-tag", CatalogEntry::new([""], ["misc"])),
    ]
    .into_iter()
    .collect()
}

#[fixture]
pub fn scenario() -> IconSearcher {
    icon_search::tracing::init(false);
    IconSearcher::new(scenario_catalog())
}

#[fixture]
pub fn builtin() -> IconSearcher {
    icon_search::tracing::init(false);
    IconSearcher::new(catalog::builtin())
}

#[fixture]
pub fn context() -> IconContext {
    icon_search::tracing::init(false);
    IconContext::new(IconSearcher::new(scenario_catalog()), Config::default())
}

/// A temporary directory holding catalog and config files.
pub struct TempCatalog {
    dir: TempDir,
}

impl TempCatalog {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `name` inside the temp dir and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write temp file");
        path
    }
}
