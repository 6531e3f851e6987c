use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jira-mcp")]
#[command(version)]
#[command(about = "An MCP server exposing Jira issue tracking tools")]
#[command(long_about = "
jira-mcp is an MCP (Model Context Protocol) server that exposes a fixed
catalog of Jira tools: searching, reading, creating, updating, commenting
on, and transitioning issues, plus project listing.

Configuration is taken from the environment:
  JIRA_URL        Base URL of the Jira instance
  JIRA_EMAIL      Account email for basic auth
  JIRA_API_TOKEN  API token for basic auth

Example usage:
  jira-mcp serve     # Run as MCP server over stdio
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs jira-mcp as an MCP server over stdio. This is the mode MCP hosts
(e.g., Claude Code) use. The server will:

- Advertise the Jira tool catalog via list_tools
- Dispatch tool calls against the configured Jira instance
- Report every outcome as a single text result

Example:
  jira-mcp serve
  # Or configure in your MCP host's server settings
")]
    Serve,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    #[allow(dead_code)]
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }
}
