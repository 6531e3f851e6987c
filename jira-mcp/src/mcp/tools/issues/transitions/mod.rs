//! Transition listing tool
//!
//! Returns the transitions Jira currently offers for an issue, verbatim.

use crate::mcp::responses::create_payload_response;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetTransitionsRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for listing available transitions
#[derive(Default)]
pub struct GetTransitionsTool;

impl GetTransitionsTool {
    /// Creates a new instance of the GetTransitionsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetTransitionsTool {
    fn name(&self) -> &'static str {
        "jira_get_transitions"
    }

    fn description(&self) -> &'static str {
        "Get available transitions (status changes) for a Jira issue"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Issue key (e.g., 'PROJ-123')"
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
        let request: GetTransitionsRequest = BaseToolImpl::parse_arguments(arguments)?;

        if let Err(e) = McpValidation::validate_not_empty(&request.issue_key, "issue key") {
            return Ok(McpErrorHandler::handle_error(e, "get transitions"));
        }

        match context.client.list_transitions(&request.issue_key).await {
            Ok(transitions) => {
                let payload = serde_json::json!({
                    "issue": request.issue_key,
                    "available_transitions": transitions,
                });
                let summary = format!(
                    "Found {} transition(s) for {}:",
                    transitions.len(),
                    request.issue_key
                );
                Ok(create_payload_response(&summary, &payload))
            }
            Err(e) => Ok(McpErrorHandler::handle_error(e, "get transitions")),
        }
    }
}
