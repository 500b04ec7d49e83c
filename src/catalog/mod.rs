//! Static icon catalog: identifiers with their tags and categories.
//!
//! The catalog is assembled once (from the built-in table or a JSON file) and
//! handed to [`IconSearcher::new`](crate::search::IconSearcher::new), which owns
//! it for the rest of the process.

mod builtin;

pub use builtin::builtin;

use crate::error::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Name of a single icon, e.g. `user-round`.
///
/// Cheap to clone; the catalog, both indices and every search hit share the
/// same allocation.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconName(Arc<str>);

impl IconName {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl Borrow<str> for IconName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IconName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for IconName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for IconName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Descriptive tokens attached to one icon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub categories: BTreeSet<String>,
}

impl CatalogEntry {
    /// Build an entry, lowercasing every token.
    pub fn new<T, C>(tags: T, categories: C) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        Self {
            tags: tags.into_iter().map(|t| t.as_ref().to_lowercase()).collect(),
            categories: categories
                .into_iter()
                .map(|c| c.as_ref().to_lowercase())
                .collect(),
        }
    }

    fn normalized(self) -> Self {
        Self::new(self.tags, self.categories)
    }
}

/// The full icon table, keyed and iterated in lexical identifier order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<IconName, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an icon. Only meaningful while assembling the table.
    pub fn insert(&mut self, name: impl Into<IconName>, entry: CatalogEntry) {
        self.entries.insert(name.into(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// Resolve `name` to the shared handle stored in the catalog.
    pub fn name(&self, name: &str) -> Option<&IconName> {
        self.entries.get_key_value(name).map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&IconName, &CatalogEntry)> {
        self.entries.iter()
    }

    /// Parse a JSON catalog of the form `{"name": {"tags": [..], "categories": [..]}}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, CatalogEntry> =
            serde_json::from_str(json).context("Failed to parse icon catalog JSON")?;

        Ok(raw
            .into_iter()
            .map(|(name, entry)| (name, entry.normalized()))
            .collect())
    }

    /// Load a JSON catalog from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read icon catalog at {}", path.display()))?;
        let catalog = Self::from_json_str(&content)
            .with_context(|| format!("Invalid icon catalog at {}", path.display()))?;

        tracing::info!(
            "Loaded {} icons from catalog file {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }
}

impl<N: Into<IconName>> FromIterator<(N, CatalogEntry)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (N, CatalogEntry)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (name, entry) in iter {
            catalog.insert(name, entry);
        }
        catalog
    }
}

impl From<String> for IconName {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_json_catalog_lowercases_tokens_and_defaults_missing_fields() {
        let catalog = Catalog::from_json_str(
            r#"{
                "user-round": {"tags": ["Person", "account"], "categories": ["People"]},
                "dot": {}
            }"#,
        )
        .unwrap();

        check!(catalog.len() == 2);
        let user = catalog.get("user-round").unwrap();
        check!(user.tags.contains("person"));
        check!(user.categories.contains("people"));
        check!(catalog.get("dot") == Some(&CatalogEntry::default()));
    }

    #[test]
    fn test_json_catalog_rejects_garbage() {
        check!(Catalog::from_json_str("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_name_returns_shared_handle() {
        let catalog: Catalog = [("house", CatalogEntry::new(["home"], ["buildings"]))]
            .into_iter()
            .collect();
        check!(catalog.name("house").map(IconName::as_str) == Some("house"));
        check!(catalog.name("House").is_none());
    }

    #[test]
    fn test_iteration_is_lexical() {
        let catalog: Catalog = ["zap", "anchor", "mail"]
            .into_iter()
            .map(|n| (n, CatalogEntry::default()))
            .collect();
        let names: Vec<&str> = catalog.iter().map(|(n, _)| n.as_str()).collect();
        check!(names == ["anchor", "mail", "zap"]);
    }
}
