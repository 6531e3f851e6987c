//! MCP tool implementations
//!
//! Each tool lives in its own submodule, grouped by noun. Registration
//! happens once at server construction.

pub mod issues;
pub mod projects;

use crate::mcp::tool_registry::ToolRegistry;

/// Register the complete tool catalog with the registry.
pub fn register_tools(registry: &mut ToolRegistry) {
    issues::register_issue_tools(registry);
    projects::register_project_tools(registry);
}
