//! Issue tools for MCP operations
//!
//! Each tool is in its own submodule with a dedicated implementation.

pub mod comment;
pub mod create;
pub mod get;
pub mod search;
pub mod transition;
pub mod transitions;
pub mod update;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all issue-related tools with the registry.
pub fn register_issue_tools(registry: &mut ToolRegistry) {
    registry.register(search::SearchIssuesTool::new());
    registry.register(get::GetIssueTool::new());
    registry.register(create::CreateIssueTool::new());
    registry.register(update::UpdateIssueTool::new());
    registry.register(comment::AddCommentTool::new());
    registry.register(transition::TransitionIssueTool::new());
    registry.register(transitions::GetTransitionsTool::new());
}
