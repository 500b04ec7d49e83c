//! Tiered search over the icon catalog.
//!
//! This module provides the inverted tag/category indices, the query matcher
//! with its scoring bands, and the merger that turns candidate hits into a
//! ranked, deduplicated result list.

// Module declarations
pub(crate) mod index;
pub(crate) mod query;
pub(crate) mod rank;
pub mod scoring;
pub(crate) mod searcher;

// Public re-exports (used via lib.rs)
pub use index::{CatalogIndex, InvertedIndex};
pub use query::{SearchHit, match_query, normalize_query};
pub use rank::rank;
pub use scoring::MatchType;
pub use searcher::IconSearcher;
