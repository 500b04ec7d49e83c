//! Output records for the CLI and MCP front ends.
//!
//! Records are plain serde structs; both front ends print them as
//! pretty-printed JSON via [`to_json`].

use crate::catalog::IconName;
use crate::naming::{constant_name, function_name};
use crate::search::{MatchType, SearchHit};
use anyhow::Context;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRecord {
    pub name: IconName,
    pub constant: String,
    pub function: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub relevance: u32,
    pub match_type: MatchType,
}

impl SearchRecord {
    pub fn new(hit: SearchHit, tags: BTreeSet<String>, categories: BTreeSet<String>) -> Self {
        Self {
            constant: constant_name(hit.name.as_str()),
            function: function_name(hit.name.as_str()),
            name: hit.name,
            tags: tags.into_iter().collect(),
            categories: categories.into_iter().collect(),
            relevance: hit.relevance,
            match_type: hit.match_type,
        }
    }
}

/// Full metadata for a single resolved icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconInfo {
    pub name: IconName,
    pub constant: String,
    pub function: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub usage: BTreeMap<String, String>,
}

/// Name-only listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub name: IconName,
    pub constant: String,
    pub function: String,
}

impl From<IconName> for ListItem {
    fn from(name: IconName) -> Self {
        Self {
            constant: constant_name(name.as_str()),
            function: function_name(name.as_str()),
            name,
        }
    }
}

/// Substitute `{function}` and `{constant}` in a usage template.
pub fn render_usage(template: &str, function: &str, constant: &str) -> String {
    template
        .replace("{function}", function)
        .replace("{constant}", constant)
}

/// Pretty-printed JSON with two-space indentation.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> crate::error::Result<String> {
    serde_json::to_string_pretty(value).context("Failed to encode JSON output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_render_usage() {
        check!(
            render_usage("@icon.Icon(icon.{constant}) // {function}", "ArrowUp", "IconArrowUp")
                == "@icon.Icon(icon.IconArrowUp) // ArrowUp"
        );
        check!(render_usage("no placeholders", "A", "B") == "no placeholders");
    }

    #[test]
    fn test_search_record_json_shape() {
        let record = SearchRecord::new(
            SearchHit::new("user-round".into(), 81, MatchType::Prefix),
            BTreeSet::from(["person".to_string(), "account".to_string()]),
            BTreeSet::from(["people".to_string()]),
        );
        let json: serde_json::Value = serde_json::from_str(&to_json(&record).unwrap()).unwrap();

        check!(json["name"] == "user-round");
        check!(json["constant"] == "IconUserRound");
        check!(json["function"] == "UserRound");
        check!(json["tags"] == serde_json::json!(["account", "person"]));
        check!(json["relevance"] == 81);
        check!(json["match_type"] == "prefix");
    }

    #[test]
    fn test_list_item_from_name() {
        let item = ListItem::from(IconName::from("trash-2"));
        check!(item.function == "Trash2");
        check!(item.constant == "IconTrash2");
    }
}
