//! Model Context Protocol (MCP) server support
//!
//! This module holds the tool dispatch layer: the registry of tool schemas,
//! typed request structs, the transition resolver, response shaping, and the
//! error-classifying dispatch boundary.

// Module declarations
pub mod responses;
pub mod server;
pub mod shared_utils;
pub mod tool_registry;
pub mod tools;
pub mod transitions;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used items from submodules
pub use server::McpServer;
pub use tool_registry::{McpTool, ToolContext, ToolRegistry};
pub use transitions::resolve_transition;
