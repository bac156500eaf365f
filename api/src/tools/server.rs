use anyhow::{Context, Result};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ErrorData as McpError, Implementation,
    JsonObject, ListToolsResult, PaginatedRequestParam, ProtocolVersion, ServerCapabilities,
    ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler, ServiceExt};
use serde_json::{json, Value};
use std::borrow::Cow;
use std::future::{self, Future};
use std::sync::Arc;

use crate::error::INVALID_QUERY_MESSAGE;
use crate::service::SearchService;

pub const SEARCH_CARS_TOOL: &str = "search_cars";
pub const SERVER_NAME: &str = "car-search";

/// MCP server exposing the car search as its only tool
#[derive(Clone)]
pub struct ToolServer {
    service: Arc<SearchService>,
}

impl ToolServer {
    pub fn new(service: Arc<SearchService>) -> Self {
        Self { service }
    }

    pub fn search_cars_tool() -> Tool {
        let schema = json!({
            "type": "object",
            "properties": {
                "user_query": {
                    "type": "string",
                    "description": "Free-text car search, e.g. \"a red Honda with less than 50,000 km\""
                }
            },
            "required": ["user_query"]
        });
        let input_schema = match schema {
            Value::Object(map) => map,
            _ => JsonObject::new(),
        };

        Tool {
            name: Cow::Borrowed(SEARCH_CARS_TOOL),
            description: Cow::Borrowed(
                "Search cars in the database using a natural-language description of what the user wants. Returns a formatted table or an error message.",
            ),
            input_schema: Arc::new(input_schema),
        }
    }

    /// Runs `search_cars`; a missing or non-string query gets the invalid-query text
    pub async fn search_cars(&self, arguments: Option<&JsonObject>) -> String {
        match arguments
            .and_then(|args| args.get("user_query"))
            .and_then(Value::as_str)
        {
            Some(user_query) => self.service.search(user_query).await,
            None => {
                tracing::warn!("search_cars called without a string user_query");
                INVALID_QUERY_MESSAGE.to_string()
            }
        }
    }

    /// Serves on stdin/stdout until the client disconnects
    pub async fn run_stdio(self) -> Result<()> {
        tracing::info!("Starting {} tool server on stdio", SERVER_NAME);
        let running = self
            .serve((tokio::io::stdin(), tokio::io::stdout()))
            .await
            .context("Failed to start MCP session on stdio")?;
        let reason = running
            .waiting()
            .await
            .context("MCP session task failed")?;
        tracing::info!("Tool server stopped: {:?}", reason);
        Ok(())
    }
}

impl ServerHandler for ToolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "Call search_cars with a plain-language description of the car you want."
                    .to_string(),
            ),
        }
    }

    fn list_tools(
        &self,
        _request: PaginatedRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        future::ready(Ok(ListToolsResult {
            tools: vec![Self::search_cars_tool()],
            next_cursor: None,
        }))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            tracing::debug!("Handling call_tool request for name='{}'", request.name);
            if request.name != SEARCH_CARS_TOOL {
                return Err(McpError::invalid_params(
                    format!("Unknown tool: {}", request.name),
                    None,
                ));
            }

            let text = self.search_cars(request.arguments.as_ref()).await;
            Ok(CallToolResult::success(vec![Content::text(text)]))
        }
    }
}

/// Text of the first text content item of a tool result
pub fn tool_result_text(result: &CallToolResult) -> Option<&str> {
    result
        .content
        .iter()
        .find_map(|content| content.as_text())
        .map(|text| text.text.as_str())
}
