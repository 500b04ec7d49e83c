//! Shared state handed to every tool handler.

use crate::config::Config;
use crate::error::Result;
use crate::search::IconSearcher;

/// The built searcher plus the configuration it was built from.
///
/// Read-only after construction; the server shares one instance behind an
/// `Arc`, the CLI builds one per invocation.
#[derive(Debug)]
pub struct IconContext {
    searcher: IconSearcher,
    config: Config,
}

impl IconContext {
    pub fn new(searcher: IconSearcher, config: Config) -> Self {
        Self { searcher, config }
    }

    /// Load the configured catalog and build the searcher over it.
    pub fn from_config(config: Config) -> Result<Self> {
        let catalog = config.load_catalog()?;
        let searcher = IconSearcher::new(catalog);
        tracing::info!("Icon searcher ready ({} icons)", searcher.count());
        Ok(Self::new(searcher, config))
    }

    pub fn searcher(&self) -> &IconSearcher {
        &self.searcher
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
