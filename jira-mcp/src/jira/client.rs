//! The client trait the tool dispatch layer depends on
//!
//! Handlers never talk to Jira directly; they receive a shared
//! [`JiraClient`] handle constructed by the caller, which keeps the backend
//! substitutable in tests.

use crate::error::Result;
use crate::jira::types::{
    Comment, CreatedIssue, IssueDetails, IssueFieldUpdates, IssueSummary, NewIssueFields, Project,
    Transition,
};

/// Capability set the dispatch layer requires from the issue tracker.
///
/// Implementations must be safe for concurrent use; the dispatch layer
/// shares one handle across all invocations without additional locking.
#[async_trait::async_trait]
pub trait JiraClient: Send + Sync {
    /// Run a JQL query, bounded by `max_results`, optionally projecting
    /// specific fields.
    async fn search_issues(
        &self,
        jql: &str,
        max_results: u32,
        fields: Option<&[String]>,
    ) -> Result<Vec<IssueSummary>>;

    /// Fetch one issue by key, expanding the named sub-resources.
    async fn get_issue(&self, issue_key: &str, expand: &[String]) -> Result<IssueDetails>;

    /// Fetch the comments of an issue.
    async fn get_comments(&self, issue_key: &str) -> Result<Vec<Comment>>;

    /// Create an issue from a field map.
    async fn create_issue(&self, fields: &NewIssueFields) -> Result<CreatedIssue>;

    /// Apply a partial update; fields absent from `updates` are untouched.
    async fn update_issue(&self, issue_key: &str, updates: &IssueFieldUpdates) -> Result<()>;

    /// Append a comment to an issue verbatim.
    async fn add_comment(&self, issue_key: &str, comment: &str) -> Result<()>;

    /// List the transitions currently available for an issue.
    async fn list_transitions(&self, issue_key: &str) -> Result<Vec<Transition>>;

    /// Apply a transition by id, optionally attaching a comment.
    async fn transition_issue(
        &self,
        issue_key: &str,
        transition_id: &str,
        comment: Option<&str>,
    ) -> Result<()>;

    /// List all accessible projects, archived ones included.
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Construct the browse URL for an issue or project key.
    fn browse_url(&self, key: &str) -> String;
}
