//! Issue update tool
//!
//! Partial update: only fields present in the call are sent to Jira. A
//! present-but-empty label list is an explicit clear, which is why the
//! request keeps every field optional.

use crate::jira::IssueFieldUpdates;
use crate::mcp::responses::create_update_response;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::UpdateIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for updating existing issues
#[derive(Default)]
pub struct UpdateIssueTool;

impl UpdateIssueTool {
    /// Creates a new instance of the UpdateIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for UpdateIssueTool {
    fn name(&self) -> &'static str {
        "jira_update_issue"
    }

    fn description(&self) -> &'static str {
        "Update an existing Jira issue"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Issue key (e.g., 'PROJ-123')"
                },
                "summary": {
                    "type": "string",
                    "description": "New summary/title"
                },
                "description": {
                    "type": "string",
                    "description": "New description"
                },
                "priority": {
                    "type": "string",
                    "description": "New priority"
                },
                "assignee": {
                    "type": "string",
                    "description": "New assignee username or email"
                },
                "labels": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "New labels (an empty list clears all labels)"
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
        let request: UpdateIssueRequest = BaseToolImpl::parse_arguments(arguments)?;

        if let Err(e) = McpValidation::validate_not_empty(&request.issue_key, "issue key") {
            return Ok(McpErrorHandler::handle_error(e, "update issue"));
        }

        let updates = IssueFieldUpdates {
            summary: request.summary,
            description: request.description,
            priority: request.priority,
            assignee: request.assignee,
            labels: request.labels,
        };

        tracing::debug!("Updating issue {}", request.issue_key);
        match context.client.update_issue(&request.issue_key, &updates).await {
            Ok(()) => {
                tracing::info!("Updated issue {}", request.issue_key);
                Ok(create_update_response(&request.issue_key))
            }
            Err(e) => Ok(McpErrorHandler::handle_error(e, "update issue")),
        }
    }
}
