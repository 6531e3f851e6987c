//! Issue transition tool
//!
//! Resolves a free-form transition token against the transitions Jira
//! currently offers, then applies the resolved transition. An unmatched
//! token is reported as retryable guidance listing the valid tokens, not as
//! a hard failure.

use crate::mcp::responses::create_transition_response;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::transitions::resolve_transition;
use crate::mcp::types::TransitionIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for transitioning issues between statuses
#[derive(Default)]
pub struct TransitionIssueTool;

impl TransitionIssueTool {
    /// Creates a new instance of the TransitionIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for TransitionIssueTool {
    fn name(&self) -> &'static str {
        "jira_transition_issue"
    }

    fn description(&self) -> &'static str {
        "Change the status of a Jira issue (e.g., move to In Progress, Done)"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Issue key (e.g., 'PROJ-123')"
                },
                "transition": {
                    "type": "string",
                    "description": "Transition name or ID (e.g., 'In Progress', 'Done', '21')"
                },
                "comment": {
                    "type": "string",
                    "description": "Optional comment when transitioning"
                }
            },
            "required": ["issue_key", "transition"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: TransitionIssueRequest = BaseToolImpl::parse_arguments(arguments)?;

        for (value, field) in [
            (&request.issue_key, "issue key"),
            (&request.transition, "transition"),
        ] {
            if let Err(e) = McpValidation::validate_not_empty(value, field) {
                return Ok(McpErrorHandler::handle_error(e, "transition issue"));
            }
        }

        // Transitions are looked up fresh on every call; the valid set
        // depends on the issue's current status.
        let candidates = match context.client.list_transitions(&request.issue_key).await {
            Ok(candidates) => candidates,
            Err(e) => return Ok(McpErrorHandler::handle_error(e, "transition issue")),
        };

        let resolved = match resolve_transition(&candidates, &request.transition) {
            Ok(transition) => transition.clone(),
            Err(e) => return Ok(McpErrorHandler::handle_error(e, "transition issue")),
        };

        tracing::debug!(
            "Applying transition '{}' ({}) to {}",
            resolved.name,
            resolved.id,
            request.issue_key
        );
        match context
            .client
            .transition_issue(&request.issue_key, &resolved.id, request.comment.as_deref())
            .await
        {
            Ok(()) => {
                tracing::info!(
                    "Transitioned {} to '{}'",
                    request.issue_key,
                    resolved.name
                );
                Ok(create_transition_response(&request.issue_key, &resolved.name))
            }
            Err(e) => Ok(McpErrorHandler::handle_error(e, "transition issue")),
        }
    }
}
