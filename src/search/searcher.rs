//! The built, immutable search state and its read operations.

use super::index::CatalogIndex;
use super::query::{SearchHit, match_query, normalize_query};
use super::rank::rank;
use crate::catalog::{Catalog, IconName};
use crate::error::LookupError;
use std::collections::BTreeSet;

/// Catalog plus inverted indices, frozen at construction.
///
/// Every method takes `&self`; share one instance across threads behind an
/// `Arc` without further locking.
#[derive(Debug, Clone, Default)]
pub struct IconSearcher {
    catalog: Catalog,
    index: CatalogIndex,
}

impl IconSearcher {
    /// Build both indices over `catalog`. An empty catalog gives an empty searcher.
    pub fn new(catalog: Catalog) -> Self {
        let index = CatalogIndex::build(&catalog);
        Self { catalog, index }
    }

    /// Ranked, deduplicated hits for a free-text query.
    ///
    /// The empty query lists every icon with the same low relevance, in
    /// lexical order.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        rank(match_query(query, &self.catalog, &self.index))
    }

    /// Tags of `name`, empty for unknown icons.
    pub fn tags_for(&self, name: &str) -> BTreeSet<String> {
        self.catalog
            .get(name)
            .map(|entry| entry.tags.clone())
            .unwrap_or_default()
    }

    /// Categories of `name`, empty for unknown icons.
    pub fn categories_for(&self, name: &str) -> BTreeSet<String> {
        self.catalog
            .get(name)
            .map(|entry| entry.categories.clone())
            .unwrap_or_default()
    }

    /// Icons in `category`, in lexical order.
    pub fn by_category(&self, category: &str) -> Vec<IconName> {
        self.index.categories().get(category).cloned().collect()
    }

    /// Icons carrying `tag`, in lexical order.
    pub fn by_tag(&self, tag: &str) -> Vec<IconName> {
        self.index.tags().get(tag).cloned().collect()
    }

    /// Every distinct category.
    pub fn all_categories(&self) -> BTreeSet<String> {
        self.index.categories().tokens().map(str::to_owned).collect()
    }

    /// Number of icons in the catalog.
    pub fn count(&self) -> usize {
        self.catalog.len()
    }

    /// Resolve a single icon by name.
    ///
    /// Exact identifiers win. Otherwise the query matcher runs and its top hit
    /// is accepted only when it equals `name` ignoring case.
    pub fn resolve(&self, name: &str) -> Result<IconName, LookupError> {
        let name = name.trim();
        if let Some(found) = self.catalog.name(name) {
            return Ok(found.clone());
        }

        let wanted = normalize_query(name);
        self.search(&wanted)
            .into_iter()
            .next()
            .filter(|top| top.name.as_str().to_lowercase() == wanted)
            .map(|top| top.name)
            .ok_or_else(|| LookupError::NotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::search::MatchType;
    use assert2::check;

    fn searcher() -> IconSearcher {
        IconSearcher::new(
            [
                ("user-round", CatalogEntry::new(["person", "account"], ["people"])),
                ("users", CatalogEntry::new(["group"], ["account"])),
                ("House", CatalogEntry::new(["home"], ["buildings"])),
                ("house-plus", CatalogEntry::new(["home", "new"], ["buildings"])),
            ]
            .into_iter()
            .collect(),
        )
    }

    #[test]
    fn test_searcher_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IconSearcher>();
    }

    #[test]
    fn test_resolve_exact() {
        check!(searcher().resolve("users").unwrap() == "users");
        check!(searcher().resolve("  users ").unwrap() == "users");
    }

    #[test]
    fn test_resolve_case_insensitive_fallback() {
        // No identifier is literally "house"; the matcher ranks "House" first
        // and it equals the request ignoring case.
        check!(searcher().resolve("house").unwrap() == "House");
    }

    #[test]
    fn test_resolve_rejects_non_matching_top_hit() {
        let err = searcher().resolve("user").unwrap_err();
        check!(
            err == LookupError::NotFound {
                name: "user".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_unknown() {
        check!(searcher().resolve("zebra").is_err());
    }

    #[test]
    fn test_direct_lookups() {
        let s = searcher();
        check!(s.by_category("buildings") == vec![IconName::from("House"), "house-plus".into()]);
        check!(s.by_tag("person") == vec![IconName::from("user-round")]);
        check!(s.tags_for("users") == BTreeSet::from(["group".to_string()]));
        check!(s.categories_for("nope").is_empty());
        check!(s.all_categories().contains("people"));
        check!(s.count() == 4);
    }

    #[test]
    fn test_tag_only_query() {
        // "home" hits House and house-plus via the tag index only.
        let hits = searcher().search("home");
        check!(hits.len() == 2);
        check!(hits.iter().all(|h| h.match_type == MatchType::Tag));
    }
}
