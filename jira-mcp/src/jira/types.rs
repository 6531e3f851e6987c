//! Domain types exchanged with the Jira client
//!
//! Timestamps are carried as the opaque strings Jira returns; this layer
//! does not reinterpret them.

use serde::Serialize;
use serde_json::{json, Map, Value};

/// One row of a search result
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IssueSummary {
    /// Issue key (e.g. `PROJ-123`)
    pub key: String,
    /// Issue summary/title
    pub summary: String,
    /// Current status name
    pub status: String,
    /// Issue type name
    pub issue_type: String,
    /// Assignee display name, or `"Unassigned"`
    pub assignee: String,
    /// Reporter display name, if any
    pub reporter: Option<String>,
    /// Priority name, if any
    pub priority: Option<String>,
    /// Creation timestamp as reported by Jira
    pub created: String,
    /// Last-update timestamp as reported by Jira
    pub updated: String,
}

/// A full issue record
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IssueDetails {
    /// Issue key
    pub key: String,
    /// Issue summary/title
    pub summary: String,
    /// Issue description, if any
    pub description: Option<String>,
    /// Current status name
    pub status: String,
    /// Issue type name
    pub issue_type: String,
    /// Assignee display name, or `"Unassigned"`
    pub assignee: String,
    /// Reporter display name, if any
    pub reporter: Option<String>,
    /// Priority name, if any
    pub priority: Option<String>,
    /// Issue labels
    pub labels: Vec<String>,
    /// Creation timestamp as reported by Jira
    pub created: String,
    /// Last-update timestamp as reported by Jira
    pub updated: String,
    /// Browse URL for the issue
    pub url: String,
    /// Comments, present only when the caller expanded them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

/// A single issue comment
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Comment {
    /// Author display name
    pub author: String,
    /// Comment body
    pub body: String,
    /// Creation timestamp as reported by Jira
    pub created: String,
}

/// A status transition Jira currently offers for an issue.
///
/// Supplied fresh by the client on every lookup; never cached across calls.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Transition {
    /// Opaque transition identifier
    pub id: String,
    /// Human-readable transition name
    pub name: String,
    /// Status the issue moves to when the transition is applied
    pub to_status: String,
}

/// A Jira project summary
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Project {
    /// Project key
    pub key: String,
    /// Project name
    pub name: String,
    /// Project lead display name, if known
    pub lead: Option<String>,
    /// Browse URL for the project
    pub url: String,
    /// Whether the project is archived; used for filtering, never rendered
    #[serde(skip_serializing)]
    pub archived: bool,
}

/// Key of a freshly created issue
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedIssue {
    /// Issue key assigned by Jira
    pub key: String,
}

/// Field map for creating an issue.
///
/// `priority`, `assignee`, and an empty label list are omitted from the wire
/// shape entirely; Jira treats absent keys as "use the project default".
#[derive(Debug, Clone, PartialEq)]
pub struct NewIssueFields {
    /// Key of the project to create the issue in
    pub project: String,
    /// Issue summary/title
    pub summary: String,
    /// Issue description
    pub description: String,
    /// Issue type name (e.g. `Bug`, `Story`, `Task`)
    pub issue_type: String,
    /// Priority name, if requested
    pub priority: Option<String>,
    /// Assignee name, if requested
    pub assignee: Option<String>,
    /// Issue labels
    pub labels: Vec<String>,
}

impl NewIssueFields {
    /// Build the Jira-native nested field map.
    pub fn to_wire(&self) -> Value {
        let mut fields = Map::new();
        fields.insert("project".into(), json!({ "key": self.project }));
        fields.insert("summary".into(), json!(self.summary));
        fields.insert("description".into(), json!(self.description));
        fields.insert("issuetype".into(), json!({ "name": self.issue_type }));

        if let Some(priority) = &self.priority {
            fields.insert("priority".into(), json!({ "name": priority }));
        }
        if let Some(assignee) = &self.assignee {
            fields.insert("assignee".into(), json!({ "name": assignee }));
        }
        if !self.labels.is_empty() {
            fields.insert("labels".into(), json!(self.labels));
        }

        Value::Object(fields)
    }
}

/// Field map for a partial issue update.
///
/// `None` means "leave the field untouched"; a present value is sent even
/// when empty, so `labels: Some(vec![])` is an explicit clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueFieldUpdates {
    /// New summary, if changing
    pub summary: Option<String>,
    /// New description, if changing
    pub description: Option<String>,
    /// New priority name, if changing
    pub priority: Option<String>,
    /// New assignee name, if changing
    pub assignee: Option<String>,
    /// New label list, if changing; an empty list clears all labels
    pub labels: Option<Vec<String>>,
}

impl IssueFieldUpdates {
    /// Whether no field was requested to change.
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.assignee.is_none()
            && self.labels.is_none()
    }

    /// Build the Jira-native nested field map containing only the fields
    /// that were explicitly set.
    pub fn to_wire(&self) -> Value {
        let mut fields = Map::new();
        if let Some(summary) = &self.summary {
            fields.insert("summary".into(), json!(summary));
        }
        if let Some(description) = &self.description {
            fields.insert("description".into(), json!(description));
        }
        if let Some(priority) = &self.priority {
            fields.insert("priority".into(), json!({ "name": priority }));
        }
        if let Some(assignee) = &self.assignee {
            fields.insert("assignee".into(), json!({ "name": assignee }));
        }
        if let Some(labels) = &self.labels {
            fields.insert("labels".into(), json!(labels));
        }
        Value::Object(fields)
    }
}
