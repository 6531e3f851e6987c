//! Comment tool
//!
//! Appends a comment to an issue verbatim.

use crate::mcp::responses::create_comment_response;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AddCommentRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for adding comments to issues
#[derive(Default)]
pub struct AddCommentTool;

impl AddCommentTool {
    /// Creates a new instance of the AddCommentTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AddCommentTool {
    fn name(&self) -> &'static str {
        "jira_add_comment"
    }

    fn description(&self) -> &'static str {
        "Add a comment to a Jira issue"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Issue key (e.g., 'PROJ-123')"
                },
                "comment": {
                    "type": "string",
                    "description": "Comment text (supports Jira markdown)"
                }
            },
            "required": ["issue_key", "comment"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: AddCommentRequest = BaseToolImpl::parse_arguments(arguments)?;

        for (value, field) in [
            (&request.issue_key, "issue key"),
            (&request.comment, "comment"),
        ] {
            if let Err(e) = McpValidation::validate_not_empty(value, field) {
                return Ok(McpErrorHandler::handle_error(e, "add comment"));
            }
        }

        tracing::debug!("Adding comment to {}", request.issue_key);
        match context
            .client
            .add_comment(&request.issue_key, &request.comment)
            .await
        {
            Ok(()) => Ok(create_comment_response(&request.issue_key)),
            Err(e) => Ok(McpErrorHandler::handle_error(e, "add comment")),
        }
    }
}
