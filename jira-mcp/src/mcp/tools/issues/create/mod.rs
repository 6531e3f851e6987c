//! Issue creation tool
//!
//! Builds a Jira-native field map from the request and submits it; optional
//! fields left unset never appear in the submitted map.

use crate::jira::NewIssueFields;
use crate::mcp::responses::create_issue_created_response;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for creating new issues
#[derive(Default)]
pub struct CreateIssueTool;

impl CreateIssueTool {
    /// Creates a new instance of the CreateIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateIssueTool {
    fn name(&self) -> &'static str {
        "jira_create_issue"
    }

    fn description(&self) -> &'static str {
        "Create a new Jira issue"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "project": {
                    "type": "string",
                    "description": "Project key (e.g., 'PROJ')"
                },
                "summary": {
                    "type": "string",
                    "description": "Issue summary/title"
                },
                "description": {
                    "type": "string",
                    "description": "Issue description"
                },
                "issue_type": {
                    "type": "string",
                    "description": "Issue type (e.g., 'Bug', 'Story', 'Task')",
                    "default": "Task"
                },
                "priority": {
                    "type": "string",
                    "description": "Priority (e.g., 'High', 'Medium', 'Low')"
                },
                "assignee": {
                    "type": "string",
                    "description": "Assignee username or email"
                },
                "labels": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Issue labels"
                }
            },
            "required": ["project", "summary"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateIssueRequest = BaseToolImpl::parse_arguments(arguments)?;

        for (value, field) in [
            (&request.project, "project"),
            (&request.summary, "summary"),
            (&request.issue_type, "issue type"),
        ] {
            if let Err(e) = McpValidation::validate_not_empty(value, field) {
                return Ok(McpErrorHandler::handle_error(e, "create issue"));
            }
        }

        let fields = NewIssueFields {
            project: request.project,
            summary: request.summary,
            description: request.description,
            issue_type: request.issue_type,
            priority: request.priority,
            assignee: request.assignee,
            labels: request.labels,
        };

        tracing::debug!("Creating issue in project {}", fields.project);
        match context.client.create_issue(&fields).await {
            Ok(created) => {
                tracing::info!("Created issue {}", created.key);
                let url = context.client.browse_url(&created.key);
                Ok(create_issue_created_response(
                    &created.key,
                    &url,
                    &fields.summary,
                ))
            }
            Err(e) => Ok(McpErrorHandler::handle_error(e, "create issue")),
        }
    }
}
