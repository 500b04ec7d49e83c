use anyhow::Context;
use clap::Parser;
use icon_search::cli::{Cli, Commands};
use icon_search::format::to_json;
use icon_search::server::IconServer;
use icon_search::tools::{
    InfoRequest, ListRequest, SearchRequest, handle_categories, handle_info, handle_list,
    handle_search,
};
use icon_search::{Config, IconContext};
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let serving = matches!(cli.command, Commands::Serve);
    icon_search::tracing::init(serving);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(catalog) = cli.catalog {
        config.catalog = Some(catalog);
    }
    let context = IconContext::from_config(config)?;

    let output = match cli.command {
        Commands::Search { query, limit } => {
            let request = SearchRequest {
                query: query.join(" "),
                limit,
            };
            to_json(&handle_search(&context, request))?
        }
        Commands::Info { name } => {
            let info = handle_info(&context, InfoRequest { name })?;
            to_json(&info)?
        }
        Commands::Categories => to_json(&handle_categories(&context))?,
        Commands::List {
            category,
            tag,
            limit,
        } => {
            let request = ListRequest {
                category,
                tag,
                limit: Some(limit),
            };
            to_json(&handle_list(&context, request))?
        }
        Commands::Serve => return serve(context),
    };

    println!("{output}");
    Ok(())
}

fn serve(context: IconContext) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?;

    runtime.block_on(async move {
        tracing::info!("Starting icon-search MCP server");

        // Create and serve the MCP server over stdio
        let server = IconServer::new(Arc::new(context));
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!("Error serving MCP server: {:?}", e);
        })?;

        // Wait for the service to complete
        service.waiting().await?;
        Ok::<(), anyhow::Error>(())
    })
}
