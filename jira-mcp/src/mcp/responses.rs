//! Response creation utilities for MCP operations
//!
//! Rendering convention: success envelopes are a short summary line followed
//! by pretty-printed JSON; failure envelopes are a single line prefixed with
//! `❌` and a category label.

use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent};
use serde::Serialize;

/// Create a success response for MCP tool calls
pub fn create_success_response(message: String) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent { text: message }),
            None,
        )],
        is_error: Some(false),
    }
}

/// Create an error response for MCP tool calls
pub fn create_error_response(message: String) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent { text: message }),
            None,
        )],
        is_error: Some(true),
    }
}

/// Render a payload as a summary line followed by indented JSON.
pub fn create_payload_response<T: Serialize>(summary: &str, payload: &T) -> CallToolResult {
    let rendered = serde_json::to_string_pretty(payload)
        .unwrap_or_else(|e| format!("<unrenderable payload: {e}>"));
    create_success_response(format!("{summary}\n\n{rendered}"))
}

/// Create a standardized response for issue creation
pub fn create_issue_created_response(key: &str, url: &str, summary: &str) -> CallToolResult {
    create_success_response(format!(
        "✅ Issue created successfully!\n\nKey: {key}\nURL: {url}\nSummary: {summary}"
    ))
}

/// Create a standardized response for issue update operations
pub fn create_update_response(issue_key: &str) -> CallToolResult {
    create_success_response(format!("✅ Issue {issue_key} updated successfully!"))
}

/// Create a standardized response for comment operations
pub fn create_comment_response(issue_key: &str) -> CallToolResult {
    create_success_response(format!("✅ Comment added to {issue_key}"))
}

/// Create a standardized response for a completed transition
pub fn create_transition_response(issue_key: &str, transition_name: &str) -> CallToolResult {
    create_success_response(format!(
        "✅ Issue {issue_key} transitioned to '{transition_name}'"
    ))
}
