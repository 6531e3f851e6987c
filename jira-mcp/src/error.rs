//! Unified error handling for the Jira MCP library
//!
//! Every failure the dispatch layer can encounter is represented here so the
//! MCP boundary can classify it into a stable reported outcome.

use thiserror::Error;

/// The main error type for the Jira MCP library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JiraMcpError {
    /// Jira rejected or failed the request, carrying its status and detail
    #[error("Jira error: {status} - {detail}")]
    Upstream {
        /// HTTP status code reported by Jira
        status: u16,
        /// Descriptive text from the Jira response body
        detail: String,
    },

    /// A transition token matched none of the transitions Jira offered
    #[error("Transition '{token}' not found")]
    TransitionNotFound {
        /// The token the caller supplied
        token: String,
        /// Names of the transitions that were available
        available: Vec<String>,
    },

    /// Caller-supplied arguments were missing or malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport failure before Jira produced a response
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

/// Result type for Jira MCP operations
pub type Result<T> = std::result::Result<T, JiraMcpError>;
