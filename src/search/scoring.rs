//! Search relevance tiers and scoring bands.
//!
//! Every tier owns a disjoint relevance band, so sorting by relevance alone
//! already respects tier order:
//!
//! | tier      | relevance                                  |
//! |-----------|--------------------------------------------|
//! | exact     | 100                                        |
//! | prefix    | 70..=99, scaled by query/identifier length |
//! | tag       | 60                                         |
//! | category  | 50                                         |
//! | substring | 10..=39, scaled by query/token length      |
//! | list-all  | 1                                          |

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

pub const EXACT_SCORE: u32 = 100;
pub const PREFIX_BASE: u32 = 70;
pub const PREFIX_MAX: u32 = 99;
pub const TAG_SCORE: u32 = 60;
pub const CATEGORY_SCORE: u32 = 50;
pub const SUBSTRING_BASE: u32 = 10;
pub const SUBSTRING_MAX: u32 = 39;
/// Relevance given to every icon by the empty ("list all") query.
pub const LIST_ALL_SCORE: u32 = 1;

/// Width of the scaled part of the prefix and substring bands.
const SCALE_SPAN: u32 = 29;

/// Which strategy produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Prefix,
    Tag,
    Category,
    Substring,
}

impl MatchType {
    /// Tie-break priority between hits of equal relevance. Higher wins.
    pub const fn priority(self) -> u8 {
        match self {
            Self::Exact => 4,
            Self::Prefix => 3,
            Self::Tag => 2,
            Self::Category => 1,
            Self::Substring => 0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Prefix => "prefix",
            Self::Tag => "tag",
            Self::Category => "category",
            Self::Substring => "substring",
        }
    }
}

impl PartialOrd for MatchType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MatchType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scale `covered / total` into `base..=max`.
fn scaled(base: u32, max: u32, covered: usize, total: usize) -> u32 {
    if total == 0 {
        return max;
    }
    let bonus = (SCALE_SPAN as usize * covered / total) as u32;
    (base + bonus).min(max)
}

/// Relevance for an identifier that starts with the query.
pub fn prefix_score(query_len: usize, name_len: usize) -> u32 {
    scaled(PREFIX_BASE, PREFIX_MAX, query_len, name_len)
}

/// Relevance for a query found inside a token of `token_len` characters.
pub fn substring_score(query_len: usize, token_len: usize) -> u32 {
    scaled(SUBSTRING_BASE, SUBSTRING_MAX, query_len, token_len)
}

/// Classify `name` against a normalized, non-empty query using the
/// identifier-only tiers (exact, prefix, substring).
pub fn name_relevance(name: &str, query: &str) -> Option<(u32, MatchType)> {
    if name == query {
        Some((EXACT_SCORE, MatchType::Exact))
    } else if name.starts_with(query) {
        Some((
            prefix_score(query.chars().count(), name.chars().count()),
            MatchType::Prefix,
        ))
    } else if name.contains(query) {
        Some((
            substring_score(query.chars().count(), name.chars().count()),
            MatchType::Substring,
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("user", "user", Some((100, MatchType::Exact)))]
    #[case("user-round", "user", Some((81, MatchType::Prefix)))] // 70 + 29*4/10
    #[case("users", "user", Some((93, MatchType::Prefix)))] // 70 + 29*4/5
    #[case("circle-user", "user", Some((20, MatchType::Substring)))] // 10 + 29*4/11
    #[case("house", "user", None)]
    fn test_name_relevance(
        #[case] name: &str,
        #[case] query: &str,
        #[case] expected: Option<(u32, MatchType)>,
    ) {
        check!(name_relevance(name, query) == expected);
    }

    #[test]
    fn test_bands_are_disjoint() {
        // Longest possible prefix that is not exact, shortest possible prefix.
        check!(prefix_score(99, 100) < EXACT_SCORE);
        check!(prefix_score(1, 100) > TAG_SCORE);
        check!(TAG_SCORE > CATEGORY_SCORE);
        check!(substring_score(99, 100) < CATEGORY_SCORE);
        check!(substring_score(1, 100) > LIST_ALL_SCORE);
    }

    #[test]
    fn test_scores_are_capped() {
        check!(prefix_score(10, 10) == PREFIX_MAX);
        check!(substring_score(10, 10) == SUBSTRING_MAX);
        check!(substring_score(3, 0) == SUBSTRING_MAX);
    }

    #[test]
    fn test_match_type_priority_order() {
        check!(MatchType::Exact > MatchType::Prefix);
        check!(MatchType::Prefix > MatchType::Tag);
        check!(MatchType::Tag > MatchType::Category);
        check!(MatchType::Category > MatchType::Substring);
    }

    #[test]
    fn test_match_type_serializes_snake_case() {
        check!(serde_json::to_string(&MatchType::Substring).unwrap() == "\"substring\"");
    }
}
