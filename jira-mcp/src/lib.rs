//! # Jira MCP
//!
//! An MCP (Model Context Protocol) server that exposes a fixed catalog of
//! Jira tools: searching, reading, creating, updating, commenting on, and
//! transitioning issues, plus project listing.
//!
//! ## Architecture
//!
//! - **Tool registry**: every tool declares its name, description, and JSON
//!   schema once at startup; the registry is immutable afterwards
//! - **Typed requests**: raw argument maps are deserialized into per-tool
//!   request structs before any handler logic runs
//! - **Injected client**: handlers talk to Jira through the [`JiraClient`]
//!   trait, so the backend is substitutable in tests
//! - **Uniform envelopes**: every invocation produces exactly one text
//!   result; failures are classified (upstream / transition-not-found /
//!   internal / unknown tool) and never escape unwrapped
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use jira_mcp::{config::JiraConfig, jira::HttpJiraClient, mcp::McpServer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = JiraConfig::from_env()?;
//! let client = Arc::new(HttpJiraClient::new(config)?);
//! let server = McpServer::new(client);
//! // hand `server` to rmcp's serve_server with a stdio transport
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Environment-based configuration
pub mod config;

/// Unified error handling
pub mod error;

/// Jira client trait, domain types, and REST implementation
pub mod jira;

/// Model Context Protocol (MCP) server support
pub mod mcp;

pub use config::JiraConfig;
pub use error::{JiraMcpError, Result};
pub use jira::{HttpJiraClient, JiraClient};

/// Crate version, reported to MCP clients during initialization.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
