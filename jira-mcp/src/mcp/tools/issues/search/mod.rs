//! Issue search tool
//!
//! Runs a JQL query against Jira and returns issue summaries.

use crate::mcp::responses::create_payload_response;
use crate::mcp::shared_utils::{McpErrorHandler, McpFormatter, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::SearchIssuesRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for searching issues with JQL
#[derive(Default)]
pub struct SearchIssuesTool;

impl SearchIssuesTool {
    /// Creates a new instance of the SearchIssuesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SearchIssuesTool {
    fn name(&self) -> &'static str {
        "jira_search_issues"
    }

    fn description(&self) -> &'static str {
        "Search Jira issues using JQL (Jira Query Language)"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "jql": {
                    "type": "string",
                    "description": "JQL query string (e.g., 'project = MYPROJ AND status = Open')"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of results to return",
                    "default": 50
                },
                "fields": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Specific fields to return (optional)"
                }
            },
            "required": ["jql"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SearchIssuesRequest = BaseToolImpl::parse_arguments(arguments)?;

        if let Err(e) = McpValidation::validate_not_empty(&request.jql, "jql") {
            return Ok(McpErrorHandler::handle_error(e, "search issues"));
        }

        tracing::debug!("Searching issues: {}", request.jql);
        match context
            .client
            .search_issues(&request.jql, request.max_results, request.fields.as_deref())
            .await
        {
            Ok(issues) => Ok(create_payload_response(
                &McpFormatter::format_count_summary("issue", issues.len()),
                &issues,
            )),
            Err(e) => Ok(McpErrorHandler::handle_error(e, "search issues")),
        }
    }
}
