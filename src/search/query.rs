//! Tiered query matching against the catalog and its indices.

use super::index::CatalogIndex;
use super::scoring::{
    CATEGORY_SCORE, LIST_ALL_SCORE, MatchType, SUBSTRING_MAX, TAG_SCORE, name_relevance,
    substring_score,
};
use crate::catalog::{Catalog, IconName};
use serde::Serialize;
use std::borrow::Cow;

/// One candidate result of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub name: IconName,
    pub relevance: u32,
    pub match_type: MatchType,
}

impl SearchHit {
    pub fn new(name: IconName, relevance: u32, match_type: MatchType) -> Self {
        Self {
            name,
            relevance,
            match_type,
        }
    }

    /// Whether `self` should replace `other` as the hit for the same icon.
    pub fn outranks(&self, other: &Self) -> bool {
        (self.relevance, self.match_type) > (other.relevance, other.match_type)
    }
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Lowercase an identifier for comparison, borrowing when it already is.
fn fold_case(name: &str) -> Cow<'_, str> {
    if name.chars().any(char::is_uppercase) {
        Cow::Owned(name.to_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

/// Collect every candidate hit for `query`.
///
/// Tag and category tiers come straight from the inverted indices. Identifier
/// tiers and token substrings come from one pass over the catalog that emits
/// at most one hit per icon; identifiers are compared ignoring case. The same
/// icon may therefore appear more than once in the output;
/// [`rank`](super::rank::rank) collapses those.
pub fn match_query(query: &str, catalog: &Catalog, index: &CatalogIndex) -> Vec<SearchHit> {
    let query = normalize_query(query);

    if query.is_empty() {
        return catalog
            .iter()
            .map(|(name, _)| SearchHit::new(name.clone(), LIST_ALL_SCORE, MatchType::Substring))
            .collect();
    }

    let mut hits: Vec<SearchHit> = index
        .tags()
        .get(&query)
        .map(|name| SearchHit::new(name.clone(), TAG_SCORE, MatchType::Tag))
        .collect();
    hits.extend(
        index
            .categories()
            .get(&query)
            .map(|name| SearchHit::new(name.clone(), CATEGORY_SCORE, MatchType::Category)),
    );

    let query_len = query.chars().count();
    for (name, entry) in catalog.iter() {
        let mut best = name_relevance(&fold_case(name.as_str()), &query);

        if best.is_none_or(|(score, _)| score < SUBSTRING_MAX) {
            let token_best = entry
                .tags
                .iter()
                .chain(&entry.categories)
                .filter(|token| token.as_str() != query && token.contains(&query))
                .map(|token| substring_score(query_len, token.chars().count()))
                .max();

            if let Some(score) = token_best
                && best.is_none_or(|(current, _)| score > current)
            {
                best = Some((score, MatchType::Substring));
            }
        }

        if let Some((relevance, match_type)) = best {
            hits.push(SearchHit::new(name.clone(), relevance, match_type));
        }
    }

    tracing::debug!("Query '{}' produced {} candidate hits", query, hits.len());
    hits
}
