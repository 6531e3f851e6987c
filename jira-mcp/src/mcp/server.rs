//! MCP server implementation for the Jira tool catalog

use crate::jira::JiraClient;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

use super::responses::create_error_response;
use super::tool_registry::{ToolContext, ToolRegistry};
use super::tools::register_tools;

/// MCP server exposing the Jira tool catalog.
///
/// The registry is built once here and never mutated; the client handle is
/// injected by the caller and shared across all invocations.
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    tool_context: ToolContext,
}

impl McpServer {
    /// Create a new MCP server around a Jira client handle.
    pub fn new(client: Arc<dyn JiraClient>) -> Self {
        let mut registry = ToolRegistry::new();
        register_tools(&mut registry);

        Self {
            tool_registry: Arc::new(registry),
            tool_context: ToolContext::new(client),
        }
    }

    /// Access the tool registry (capability advertisement).
    pub fn tool_registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Dispatch one tool call to its handler, producing exactly one result
    /// envelope.
    ///
    /// This is the error boundary of the dispatch layer: unknown tool names
    /// are reported without touching the Jira client, and a handler error is
    /// converted into a single-line failure envelope rather than propagated.
    pub async fn handle_tool_call(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> CallToolResult {
        let Some(tool) = self.tool_registry.get_tool(name) else {
            tracing::warn!("Unknown tool requested: {name}");
            return create_error_response(format!("❌ Unknown tool: {name}"));
        };

        tracing::debug!("Dispatching tool call: {name}");
        match tool.execute(arguments, &self.tool_context).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Tool '{name}' failed: {}", e.message);
                create_error_response(format!("❌ Error: {}", e.message))
            }
        }
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            prompts: None,
            tools: Some(ToolsCapability {
                list_changed: None,
            }),
            resources: None,
            logging: None,
            completions: None,
            experimental: None,
        }
    }

    fn instructions() -> String {
        "A Jira integration server. Use jira_search_issues to query issues with JQL, \
         jira_get_issue / jira_create_issue / jira_update_issue to read and write issues, \
         jira_add_comment to comment, jira_transition_issue and jira_get_transitions to \
         manage issue status, and jira_list_projects to discover projects."
            .to_string()
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        Ok(InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            instructions: Some(Self::instructions()),
            server_info: Implementation {
                name: "jira-mcp".into(),
                version: crate::VERSION.into(),
            },
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(self
            .handle_tool_call(&request.name, request.arguments.unwrap_or_default())
            .await)
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Implementation {
                name: "jira-mcp".into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(Self::instructions()),
        }
    }
}
