//! Shared utilities for MCP operations
//!
//! Holds the error classifier that every tool routes its failures through,
//! plus small validation and formatting helpers.

use crate::error::{JiraMcpError, Result};
use crate::mcp::responses::{create_error_response, create_success_response};
use rmcp::model::CallToolResult;

/// Common error handling for MCP operations.
///
/// Exactly three reported shapes exist: upstream failures keep Jira's status
/// and detail, an unmatched transition token becomes a non-fatal message
/// listing the valid tokens, and everything else is reported as a generic
/// error line.
pub struct McpErrorHandler;

impl McpErrorHandler {
    /// Convert a library error into the uniform result envelope.
    pub fn handle_error(error: JiraMcpError, operation: &str) -> CallToolResult {
        match error {
            JiraMcpError::Upstream { status, detail } => {
                tracing::error!("MCP operation '{operation}' failed upstream: {status} - {detail}");
                create_error_response(format!("❌ Jira error: {status} - {detail}"))
            }
            // Deliberately not an error envelope: the caller is expected to
            // retry with one of the listed tokens.
            JiraMcpError::TransitionNotFound { token, available } => {
                tracing::warn!("MCP operation '{operation}': transition '{token}' not found");
                create_success_response(format!(
                    "❌ Transition '{token}' not found.\n\nAvailable transitions: {}",
                    available.join(", ")
                ))
            }
            other => {
                tracing::error!("MCP operation '{operation}' failed: {other}");
                create_error_response(format!("❌ Error: {other}"))
            }
        }
    }
}

/// Validation utilities for MCP requests
pub struct McpValidation;

impl McpValidation {
    /// Validate a string is not empty or whitespace-only.
    pub fn validate_not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(JiraMcpError::Validation(format!(
                "{field} cannot be empty"
            )));
        }
        Ok(())
    }
}

/// Formatting utilities for consistent MCP responses
pub struct McpFormatter;

impl McpFormatter {
    /// Summary line for list results, e.g. `Found 3 issue(s):`.
    pub fn format_count_summary(item_name: &str, count: usize) -> String {
        format!("Found {count} {item_name}(s):")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_upstream_error_keeps_status_and_detail() {
        let result = McpErrorHandler::handle_error(
            JiraMcpError::Upstream {
                status: 403,
                detail: "You do not have permission".to_string(),
            },
            "update issue",
        );
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "❌ Jira error: 403 - You do not have permission"
        );
    }

    #[test]
    fn test_transition_not_found_is_informational() {
        let result = McpErrorHandler::handle_error(
            JiraMcpError::TransitionNotFound {
                token: "progress".to_string(),
                available: vec!["In Progress".to_string(), "Done".to_string()],
            },
            "transition issue",
        );
        // Non-fatal guidance, not a hard failure
        assert_eq!(result.is_error, Some(false));
        let text = text_of(&result);
        assert!(text.contains("❌ Transition 'progress' not found"));
        assert!(text.contains("Available transitions: In Progress, Done"));
    }

    #[test]
    fn test_other_errors_become_generic_error_line() {
        let result = McpErrorHandler::handle_error(
            JiraMcpError::Validation("Jql cannot be empty".to_string()),
            "search issues",
        );
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "❌ Error: Validation error: Jql cannot be empty"
        );
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(McpValidation::validate_not_empty("PROJ-1", "issue key").is_ok());
        assert!(McpValidation::validate_not_empty("   ", "issue key").is_err());
    }

    #[test]
    fn test_count_summary() {
        assert_eq!(
            McpFormatter::format_count_summary("issue", 0),
            "Found 0 issue(s):"
        );
        assert_eq!(
            McpFormatter::format_count_summary("project", 2),
            "Found 2 project(s):"
        );
    }
}
