//! Jira client support
//!
//! The [`JiraClient`] trait is the seam between the tool dispatch layer and
//! the remote tracker; [`HttpJiraClient`] implements it against the Jira
//! REST API v2.

pub mod client;
pub mod http;
pub mod types;

pub use client::JiraClient;
pub use http::HttpJiraClient;
pub use types::{
    Comment, CreatedIssue, IssueDetails, IssueFieldUpdates, IssueSummary, NewIssueFields, Project,
    Transition,
};
