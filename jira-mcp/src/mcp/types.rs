//! Request types for MCP operations
//!
//! These structs are the argument normalizer: deserializing the raw JSON
//! argument map into one of them enforces required fields, applies declared
//! defaults, and ignores undeclared keys. Handlers never see untyped maps.

use serde::Deserialize;

fn default_max_results() -> u32 {
    50
}

fn default_issue_type() -> String {
    "Task".to_string()
}

/// Request to search issues with a JQL query
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchIssuesRequest {
    /// JQL query string
    pub jql: String,
    /// Maximum number of results to return
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// Specific fields to return (optional projection)
    #[serde(default)]
    pub fields: Option<Vec<String>>,
}

/// Request to fetch a single issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetIssueRequest {
    /// Issue key (e.g. `PROJ-123`)
    pub issue_key: String,
    /// Additional sub-resources to expand (e.g. `comments`)
    #[serde(default)]
    pub expand: Vec<String>,
}

/// Request to create a new issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateIssueRequest {
    /// Project key (e.g. `PROJ`)
    pub project: String,
    /// Issue summary/title
    pub summary: String,
    /// Issue description
    #[serde(default)]
    pub description: String,
    /// Issue type (e.g. `Bug`, `Story`, `Task`)
    #[serde(default = "default_issue_type")]
    pub issue_type: String,
    /// Priority (e.g. `High`, `Medium`, `Low`)
    pub priority: Option<String>,
    /// Assignee username or email
    pub assignee: Option<String>,
    /// Issue labels
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Request to update an existing issue.
///
/// Every field is optional and `None` means "leave untouched": the partial
/// update invariant requires distinguishing an absent `labels` from an
/// explicit empty list, which `Option<Vec<_>>` preserves.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateIssueRequest {
    /// Issue key to update
    pub issue_key: String,
    /// New summary/title
    pub summary: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New priority
    pub priority: Option<String>,
    /// New assignee username or email
    pub assignee: Option<String>,
    /// New labels; an empty list clears all labels
    pub labels: Option<Vec<String>>,
}

/// Request to add a comment to an issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddCommentRequest {
    /// Issue key to comment on
    pub issue_key: String,
    /// Comment text (supports Jira markup)
    pub comment: String,
}

/// Request to transition an issue to a new status
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TransitionIssueRequest {
    /// Issue key to transition
    pub issue_key: String,
    /// Transition name or id (e.g. `In Progress`, `Done`, `21`)
    pub transition: String,
    /// Optional comment to attach when transitioning
    pub comment: Option<String>,
}

/// Request to list the available transitions for an issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetTransitionsRequest {
    /// Issue key to inspect
    pub issue_key: String,
}

/// Request to list accessible projects
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListProjectsRequest {
    /// Include archived projects
    #[serde(default)]
    pub include_archived: bool,
}
