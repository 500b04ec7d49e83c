//! Tiered search over a static icon catalog.
//!
//! Build an [`IconSearcher`] once from a [`Catalog`], then query it from any
//! number of threads:
//!
//! ```
//! use icon_search::{IconSearcher, MatchType, catalog};
//!
//! let searcher = IconSearcher::new(catalog::builtin());
//! let hits = searcher.search("user");
//! assert_eq!(hits[0].name.as_str(), "user");
//! assert_eq!(hits[0].match_type, MatchType::Exact);
//! assert_eq!(searcher.by_tag("person")[0].as_str(), "circle-user");
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod naming;
pub mod search;
pub mod server;
pub mod tools;
pub mod tracing;

pub use catalog::{Catalog, CatalogEntry, IconName};
pub use config::Config;
pub use context::IconContext;
pub use error::{ConfigError, LookupError};
pub use search::{IconSearcher, MatchType, SearchHit};
