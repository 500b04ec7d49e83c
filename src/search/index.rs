//! Inverted token indices over the catalog.

use crate::catalog::{Catalog, IconName};
use ahash::AHashMap;
use std::collections::BTreeSet;

/// Map from a token (tag or category) to the icons carrying it.
///
/// Postings are kept in a `BTreeSet` so reads come out in lexical order
/// without a sort per lookup.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: AHashMap<String, BTreeSet<IconName>>,
}

impl InvertedIndex {
    fn insert(&mut self, token: &str, name: &IconName) {
        self.postings
            .entry(token.to_owned())
            .or_default()
            .insert(name.clone());
    }

    /// Icons carrying `token`, in lexical order. Unknown tokens yield nothing.
    pub fn get<'a>(&'a self, token: &str) -> impl Iterator<Item = &'a IconName> + use<'a> {
        self.postings.get(token).into_iter().flatten()
    }

    /// All distinct tokens, unordered.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Number of distinct tokens.
    pub fn token_count(&self) -> usize {
        self.postings.len()
    }
}

/// Tag and category indices built in a single pass over the catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    pub(crate) tags: InvertedIndex,
    pub(crate) categories: InvertedIndex,
}

impl CatalogIndex {
    pub fn build(catalog: &Catalog) -> Self {
        let start = std::time::Instant::now();
        let mut index = Self::default();

        for (name, entry) in catalog.iter() {
            for tag in &entry.tags {
                if tag.is_empty() {
                    tracing::warn!("Icon '{}' has an empty tag", name);
                }
                index.tags.insert(tag, name);
            }
            for category in &entry.categories {
                if category.is_empty() {
                    tracing::warn!("Icon '{}' has an empty category", name);
                }
                index.categories.insert(category, name);
            }
        }

        tracing::debug!(
            "Built icon index in {:?} ({} icons, {} tags, {} categories)",
            start.elapsed(),
            catalog.len(),
            index.tags.token_count(),
            index.categories.token_count()
        );
        index
    }

    pub fn tags(&self) -> &InvertedIndex {
        &self.tags
    }

    pub fn categories(&self) -> &InvertedIndex {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use assert2::check;

    fn catalog() -> Catalog {
        [
            ("user", CatalogEntry::new(["person", "account"], ["account"])),
            ("user-round", CatalogEntry::new(["person"], ["account", "people"])),
            ("blank", CatalogEntry::new([""], Vec::<&str>::new())),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_postings_are_lexical() {
        let index = CatalogIndex::build(&catalog());
        let people: Vec<&str> = index.tags().get("person").map(IconName::as_str).collect();
        check!(people == ["user", "user-round"]);
    }

    #[test]
    fn test_unknown_token_is_empty() {
        let index = CatalogIndex::build(&catalog());
        check!(index.categories().get("weather").next().is_none());
    }

    #[test]
    fn test_empty_tokens_are_indexed_harmlessly() {
        let index = CatalogIndex::build(&catalog());
        let blank: Vec<&str> = index.tags().get("").map(IconName::as_str).collect();
        check!(blank == ["blank"]);
    }

    #[test]
    fn test_token_counts() {
        let index = CatalogIndex::build(&catalog());
        check!(index.tags().token_count() == 3);
        check!(index.categories().token_count() == 2);
    }

    #[test]
    fn test_empty_catalog() {
        let index = CatalogIndex::build(&Catalog::new());
        check!(index.tags().token_count() == 0);
        check!(index.categories().tokens().next().is_none());
    }
}
