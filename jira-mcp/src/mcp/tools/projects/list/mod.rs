//! Project listing tool
//!
//! Lists accessible projects; archived projects are filtered out unless the
//! caller opts in to seeing them.

use crate::mcp::responses::create_payload_response;
use crate::mcp::shared_utils::{McpErrorHandler, McpFormatter};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ListProjectsRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for listing accessible projects
#[derive(Default)]
pub struct ListProjectsTool;

impl ListProjectsTool {
    /// Creates a new instance of the ListProjectsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListProjectsTool {
    fn name(&self) -> &'static str {
        "jira_list_projects"
    }

    fn description(&self) -> &'static str {
        "List all accessible Jira projects"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "include_archived": {
                    "type": "boolean",
                    "description": "Include archived projects",
                    "default": false
                }
            }
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListProjectsRequest = BaseToolImpl::parse_arguments(arguments)?;

        match context.client.list_projects().await {
            Ok(mut projects) => {
                if !request.include_archived {
                    projects.retain(|p| !p.archived);
                }
                Ok(create_payload_response(
                    &McpFormatter::format_count_summary("project", projects.len()),
                    &projects,
                ))
            }
            Err(e) => Ok(McpErrorHandler::handle_error(e, "list projects")),
        }
    }
}
