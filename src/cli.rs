use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "icon-search")]
#[command(about = "Query the icon catalog by name, tag or category", long_about = None)]
pub struct Cli {
    /// Config file (default: $ICON_SEARCH_CONFIG or <config dir>/icon-search/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// JSON catalog to load instead of the configured or built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ranked free-text search
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Maximum results, 0 for all (default: configured limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Metadata and usage snippets for one icon
    Info { name: String },
    /// All categories
    Categories,
    /// Icons filtered by category and/or tag
    List {
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        tag: Option<String>,
        /// Maximum results, 0 for all
        #[arg(short = 'n', long, default_value = "0")]
        limit: usize,
    },
    /// Serve the catalog as an MCP server over stdio
    Serve,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    #[test]
    fn test_search_takes_multiple_words() {
        let cli = Cli::parse_from(["icon-search", "search", "arrow", "up", "--limit", "3"]);
        let_assert!(Commands::Search { query, limit } = cli.command);
        check!(query == ["arrow", "up"]);
        check!(limit == Some(3));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["icon-search", "categories", "--catalog", "icons.json"]);
        check!(cli.catalog == Some(PathBuf::from("icons.json")));
        check!(matches!(cli.command, Commands::Categories));
    }

    #[test]
    fn test_list_defaults() {
        let cli = Cli::parse_from(["icon-search", "list", "--tag", "home"]);
        let_assert!(Commands::List { category, tag, limit } = cli.command);
        check!(category.is_none());
        check!(tag.as_deref() == Some("home"));
        check!(limit == 0);
    }

    #[test]
    fn test_search_requires_query() {
        check!(Cli::try_parse_from(["icon-search", "search"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
