//! Single-icon metadata lookup.

use crate::context::IconContext;
use crate::error::LookupError;
use crate::format::{IconInfo, render_usage};
use crate::naming::{constant_name, function_name};
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct InfoRequest {
    /// Icon name, e.g. "arrow-up" (case-insensitive)
    pub name: String,
}

/// Resolve one icon and describe it, including rendered usage snippets.
pub fn handle_info(context: &IconContext, request: InfoRequest) -> Result<IconInfo, LookupError> {
    let searcher = context.searcher();
    let name = searcher.resolve(&request.name)?;

    let function = function_name(name.as_str());
    let constant = constant_name(name.as_str());
    let usage = context
        .config()
        .usage
        .iter()
        .map(|(key, template)| (key.clone(), render_usage(template, &function, &constant)))
        .collect();

    Ok(IconInfo {
        tags: searcher.tags_for(name.as_str()).into_iter().collect(),
        categories: searcher.categories_for(name.as_str()).into_iter().collect(),
        name,
        constant,
        function,
        usage,
    })
}
