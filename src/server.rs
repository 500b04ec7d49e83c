//! MCP server exposing icon search over stdio.

use crate::context::IconContext;
use crate::format::to_json;
use crate::tools::{
    InfoRequest, ListRequest, SearchRequest, handle_categories, handle_info, handle_list,
    handle_search,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP server for icon catalog queries
#[derive(Clone)]
pub struct IconServer {
    /// Shared, read-only searcher and configuration
    context: Arc<IconContext>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for IconServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconServer")
            .field("icons", &self.context.searcher().count())
            .finish()
    }
}

#[tool_router]
impl IconServer {
    pub fn new(context: Arc<IconContext>) -> Self {
        Self {
            context,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Search icons by free text. Matches icon names exactly, by prefix, by tag, by category and by substring; returns ranked JSON records with relevance and match_type.",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    fn search_icons(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        let records = handle_search(&self.context, request);
        to_json(&records).map_err(|e| e.to_string())
    }

    #[tool(
        description = "Show metadata for one icon: display names, tags, categories and usage snippets. The name is matched case-insensitively.",
        input_schema = inline_schema_for_type::<InfoRequest>()
    )]
    fn icon_info(
        &self,
        Parameters(request): Parameters<InfoRequest>,
    ) -> std::result::Result<String, String> {
        let info = handle_info(&self.context, request).map_err(|e| e.to_string())?;
        to_json(&info).map_err(|e| e.to_string())
    }

    #[tool(description = "List every icon category.")]
    fn list_categories(&self) -> std::result::Result<String, String> {
        to_json(&handle_categories(&self.context)).map_err(|e| e.to_string())
    }

    #[tool(
        description = "List icons, optionally filtered by exact category and/or tag. With both filters, returns icons matching both.",
        input_schema = inline_schema_for_type::<ListRequest>()
    )]
    fn list_icons(
        &self,
        Parameters(request): Parameters<ListRequest>,
    ) -> std::result::Result<String, String> {
        to_json(&handle_list(&self.context, request)).map_err(|e| e.to_string())
    }
}

#[tool_handler]
impl ServerHandler for IconServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(format!(
                "icon-search: query a catalog of {} icons. Use search_icons for free text, \
                 icon_info for a single icon, list_categories and list_icons for structured browsing.",
                self.context.searcher().count()
            ))
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Unlike rmcp's default `schema_for_type()`, this function sets `inline_subschemas = true`
/// so optional fields render as plain inputs rather than `$ref` patterns.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();

    match serde_json::to_value(schema) {
        Ok(serde_json::Value::Object(object)) => Arc::new(object),
        _ => Arc::new(JsonObject::new()),
    }
}
