//! Issue retrieval tool
//!
//! Fetches one issue by key, optionally expanding comments.

use crate::mcp::responses::create_payload_response;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for fetching a single issue
#[derive(Default)]
pub struct GetIssueTool;

impl GetIssueTool {
    /// Creates a new instance of the GetIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetIssueTool {
    fn name(&self) -> &'static str {
        "jira_get_issue"
    }

    fn description(&self) -> &'static str {
        "Get detailed information about a specific Jira issue"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Issue key (e.g., 'PROJ-123')"
                },
                "expand": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Additional data to expand (e.g., ['changelog', 'comments'])"
                }
            },
            "required": ["issue_key"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: GetIssueRequest = BaseToolImpl::parse_arguments(arguments)?;

        if let Err(e) = McpValidation::validate_not_empty(&request.issue_key, "issue key") {
            return Ok(McpErrorHandler::handle_error(e, "get issue"));
        }

        tracing::debug!("Fetching issue {}", request.issue_key);
        let mut issue = match context
            .client
            .get_issue(&request.issue_key, &request.expand)
            .await
        {
            Ok(issue) => issue,
            Err(e) => return Ok(McpErrorHandler::handle_error(e, "get issue")),
        };

        // Comments are a separate sub-resource; attach them only when the
        // expand set names them.
        if request.expand.iter().any(|e| e == "comments") {
            match context.client.get_comments(&request.issue_key).await {
                Ok(comments) => issue.comments = Some(comments),
                Err(e) => return Ok(McpErrorHandler::handle_error(e, "get issue comments")),
            }
        }

        let summary = format!("Issue {}:", issue.key);
        Ok(create_payload_response(&summary, &issue))
    }
}
