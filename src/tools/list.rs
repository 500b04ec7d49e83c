//! Structured listings: by category, by tag, everything, and the category set.

use crate::catalog::IconName;
use crate::context::IconContext;
use crate::format::ListItem;
use crate::search::normalize_query;
use rmcp::schemars;
use serde::Deserialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct ListRequest {
    /// Only icons in this category
    #[serde(default)]
    pub category: Option<String>,
    /// Only icons carrying this tag
    #[serde(default)]
    pub tag: Option<String>,
    /// Maximum number of icons; 0 or absent returns everything
    #[serde(default)]
    pub limit: Option<usize>,
}

/// List icons, filtered by category and/or tag.
///
/// Filters are trimmed and lowercased. With both filters the result is their
/// intersection in category order. Without filters every icon is listed in
/// lexical order.
pub fn handle_list(context: &IconContext, request: ListRequest) -> Vec<ListItem> {
    let searcher = context.searcher();
    let category = request
        .category
        .as_deref()
        .map(normalize_query)
        .filter(|c| !c.is_empty());
    let tag = request
        .tag
        .as_deref()
        .map(normalize_query)
        .filter(|t| !t.is_empty());

    let mut icons: Vec<IconName> = match (category.as_deref(), tag.as_deref()) {
        (Some(category), Some(tag)) => {
            let tagged: BTreeSet<IconName> = searcher.by_tag(tag).into_iter().collect();
            searcher
                .by_category(category)
                .into_iter()
                .filter(|name| tagged.contains(name))
                .collect()
        }
        (Some(category), None) => searcher.by_category(category),
        (None, Some(tag)) => searcher.by_tag(tag),
        (None, None) => searcher.search("").into_iter().map(|hit| hit.name).collect(),
    };

    if let Some(limit) = request.limit.filter(|&l| l > 0) {
        icons.truncate(limit);
    }

    icons.into_iter().map(ListItem::from).collect()
}

/// Every category, sorted.
pub fn handle_categories(context: &IconContext) -> Vec<String> {
    context.searcher().all_categories().into_iter().collect()
}
