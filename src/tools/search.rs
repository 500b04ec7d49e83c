//! Free-text icon search.

use crate::context::IconContext;
use crate::format::SearchRecord;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Free-text query matched against icon names, tags and categories
    pub query: String,
    /// Maximum number of results; 0 returns everything (default: configured limit)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Run the query and attach tags, categories and display names to each hit.
pub fn handle_search(context: &IconContext, request: SearchRequest) -> Vec<SearchRecord> {
    let searcher = context.searcher();
    let limit = request.limit.unwrap_or(context.config().search_limit);

    let mut hits = searcher.search(&request.query);
    if limit > 0 {
        hits.truncate(limit);
    }

    tracing::debug!(
        "search '{}' returned {} results (limit {})",
        request.query,
        hits.len(),
        limit
    );

    hits.into_iter()
        .map(|hit| {
            let tags = searcher.tags_for(hit.name.as_str());
            let categories = searcher.categories_for(hit.name.as_str());
            SearchRecord::new(hit, tags, categories)
        })
        .collect()
}
