//! Integration tests for the MCP dispatch layer
//!
//! These drive `McpServer::handle_tool_call` end to end against a mock
//! Jira client that records every call it receives.

use crate::error::{JiraMcpError, Result};
use crate::jira::{
    Comment, CreatedIssue, IssueDetails, IssueFieldUpdates, IssueSummary, JiraClient,
    NewIssueFields, Project, Transition,
};
use crate::mcp::server::McpServer;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;

/// Everything the mock observed, for assertions on side effects.
#[derive(Default)]
pub struct RecordedCalls {
    pub total: usize,
    pub created: Option<NewIssueFields>,
    pub updated: Option<(String, IssueFieldUpdates)>,
    pub comments: Vec<(String, String)>,
    pub transitions_applied: Vec<(String, String, Option<String>)>,
}

/// Mock Jira client with canned data and call recording.
pub struct MockJiraClient {
    pub issues: Vec<IssueSummary>,
    pub details: Option<IssueDetails>,
    pub comments: Vec<Comment>,
    pub transitions: Vec<Transition>,
    pub projects: Vec<Project>,
    pub created_key: String,
    /// When set, every call fails upstream with this status and detail.
    pub fail_upstream: Option<(u16, String)>,
    pub recorded: Mutex<RecordedCalls>,
}

impl MockJiraClient {
    pub fn new() -> Self {
        Self {
            issues: Vec::new(),
            details: None,
            comments: Vec::new(),
            transitions: Vec::new(),
            projects: Vec::new(),
            created_key: "PROJ-1".to_string(),
            fail_upstream: None,
            recorded: Mutex::new(RecordedCalls::default()),
        }
    }

    fn record(&self) -> Result<()> {
        self.recorded.lock().unwrap().total += 1;
        if let Some((status, detail)) = &self.fail_upstream {
            return Err(JiraMcpError::Upstream {
                status: *status,
                detail: detail.clone(),
            });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl JiraClient for MockJiraClient {
    async fn search_issues(
        &self,
        _jql: &str,
        _max_results: u32,
        _fields: Option<&[String]>,
    ) -> Result<Vec<IssueSummary>> {
        self.record()?;
        Ok(self.issues.clone())
    }

    async fn get_issue(&self, _issue_key: &str, _expand: &[String]) -> Result<IssueDetails> {
        self.record()?;
        self.details
            .clone()
            .ok_or_else(|| JiraMcpError::Upstream {
                status: 404,
                detail: "Issue does not exist".to_string(),
            })
    }

    async fn get_comments(&self, _issue_key: &str) -> Result<Vec<Comment>> {
        self.record()?;
        Ok(self.comments.clone())
    }

    async fn create_issue(&self, fields: &NewIssueFields) -> Result<CreatedIssue> {
        self.record()?;
        self.recorded.lock().unwrap().created = Some(fields.clone());
        Ok(CreatedIssue {
            key: self.created_key.clone(),
        })
    }

    async fn update_issue(&self, issue_key: &str, updates: &IssueFieldUpdates) -> Result<()> {
        self.record()?;
        self.recorded.lock().unwrap().updated = Some((issue_key.to_string(), updates.clone()));
        Ok(())
    }

    async fn add_comment(&self, issue_key: &str, comment: &str) -> Result<()> {
        self.record()?;
        self.recorded
            .lock()
            .unwrap()
            .comments
            .push((issue_key.to_string(), comment.to_string()));
        Ok(())
    }

    async fn list_transitions(&self, _issue_key: &str) -> Result<Vec<Transition>> {
        self.record()?;
        Ok(self.transitions.clone())
    }

    async fn transition_issue(
        &self,
        issue_key: &str,
        transition_id: &str,
        comment: Option<&str>,
    ) -> Result<()> {
        self.record()?;
        self.recorded.lock().unwrap().transitions_applied.push((
            issue_key.to_string(),
            transition_id.to_string(),
            comment.map(|c| c.to_string()),
        ));
        Ok(())
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        self.record()?;
        Ok(self.projects.clone())
    }

    fn browse_url(&self, key: &str) -> String {
        format!("https://jira.test/browse/{key}")
    }
}

fn text_of(result: &CallToolResult) -> String {
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        _ => panic!("Expected text content"),
    }
}

fn args(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("Expected a JSON object"),
    }
}

fn sample_transitions() -> Vec<Transition> {
    vec![
        Transition {
            id: "21".to_string(),
            name: "In Progress".to_string(),
            to_status: "In Progress".to_string(),
        },
        Transition {
            id: "31".to_string(),
            name: "Done".to_string(),
            to_status: "Done".to_string(),
        },
    ]
}

fn server_with(mock: MockJiraClient) -> (McpServer, Arc<MockJiraClient>) {
    let mock = Arc::new(mock);
    (McpServer::new(mock.clone()), mock)
}

#[tokio::test]
async fn test_all_eight_tools_are_advertised() {
    let (server, _mock) = server_with(MockJiraClient::new());
    let names = server.tool_registry().list_tool_names();
    assert_eq!(
        names,
        vec![
            "jira_add_comment",
            "jira_create_issue",
            "jira_get_issue",
            "jira_get_transitions",
            "jira_list_projects",
            "jira_search_issues",
            "jira_transition_issue",
            "jira_update_issue",
        ]
    );
}

#[tokio::test]
async fn test_unknown_tool_never_touches_the_client() {
    let (server, mock) = server_with(MockJiraClient::new());
    let result = server
        .handle_tool_call("jira_delete_everything", serde_json::Map::new())
        .await;

    assert_eq!(result.is_error, Some(true));
    assert_eq!(text_of(&result), "❌ Unknown tool: jira_delete_everything");
    assert_eq!(mock.recorded.lock().unwrap().total, 0);
}

#[tokio::test]
async fn test_search_with_zero_matches_is_a_success() {
    let (server, _mock) = server_with(MockJiraClient::new());
    let result = server
        .handle_tool_call("jira_search_issues", args(json!({ "jql": "project = NONE" })))
        .await;

    assert_eq!(result.is_error, Some(false));
    let text = text_of(&result);
    assert!(text.starts_with("Found 0 issue(s):"));
    assert!(text.contains("[]"));
}

#[tokio::test]
async fn test_search_missing_jql_fails_before_the_client() {
    let (server, mock) = server_with(MockJiraClient::new());
    let result = server
        .handle_tool_call("jira_search_issues", serde_json::Map::new())
        .await;

    assert_eq!(result.is_error, Some(true));
    assert!(text_of(&result).contains("jql"));
    assert_eq!(mock.recorded.lock().unwrap().total, 0);
}

#[tokio::test]
async fn test_create_minimal_issue_omits_unset_optionals() {
    let (server, mock) = server_with(MockJiraClient::new());
    let result = server
        .handle_tool_call(
            "jira_create_issue",
            args(json!({
                "project": "PROJ",
                "summary": "Fix bug",
                "issue_type": "Bug",
            })),
        )
        .await;

    assert_eq!(result.is_error, Some(false));
    let text = text_of(&result);
    assert!(text.contains("Key: PROJ-1"));
    assert!(text.contains("https://jira.test/browse/PROJ-1"));

    let recorded = mock.recorded.lock().unwrap();
    let wire = recorded.created.as_ref().unwrap().to_wire();
    let fields = wire.as_object().unwrap();
    assert!(!fields.contains_key("priority"));
    assert!(!fields.contains_key("assignee"));
    assert!(!fields.contains_key("labels"));
    assert_eq!(wire["issuetype"]["name"], "Bug");
}

#[tokio::test]
async fn test_create_defaults_issue_type_to_task() {
    let (server, mock) = server_with(MockJiraClient::new());
    server
        .handle_tool_call(
            "jira_create_issue",
            args(json!({ "project": "PROJ", "summary": "Chore" })),
        )
        .await;

    let recorded = mock.recorded.lock().unwrap();
    assert_eq!(recorded.created.as_ref().unwrap().issue_type, "Task");
}

#[tokio::test]
async fn test_update_with_empty_labels_is_an_explicit_clear() {
    let (server, mock) = server_with(MockJiraClient::new());
    let result = server
        .handle_tool_call(
            "jira_update_issue",
            args(json!({ "issue_key": "X-1", "labels": [] })),
        )
        .await;

    assert_eq!(result.is_error, Some(false));
    let recorded = mock.recorded.lock().unwrap();
    let (key, updates) = recorded.updated.as_ref().unwrap();
    assert_eq!(key, "X-1");
    let wire = updates.to_wire();
    assert_eq!(wire["labels"], json!([]));
}

#[tokio::test]
async fn test_update_without_labels_leaves_them_untouched() {
    let (server, mock) = server_with(MockJiraClient::new());
    server
        .handle_tool_call(
            "jira_update_issue",
            args(json!({ "issue_key": "X-1", "summary": "New title" })),
        )
        .await;

    let recorded = mock.recorded.lock().unwrap();
    let (_, updates) = recorded.updated.as_ref().unwrap();
    let wire = updates.to_wire();
    let fields = wire.as_object().unwrap();
    assert!(!fields.contains_key("labels"));
    assert_eq!(wire["summary"], "New title");
}

#[tokio::test]
async fn test_add_comment_confirms_by_issue_key() {
    let (server, mock) = server_with(MockJiraClient::new());
    let result = server
        .handle_tool_call(
            "jira_add_comment",
            args(json!({ "issue_key": "PROJ-7", "comment": "Looks good" })),
        )
        .await;

    assert_eq!(text_of(&result), "✅ Comment added to PROJ-7");
    let recorded = mock.recorded.lock().unwrap();
    assert_eq!(
        recorded.comments,
        vec![("PROJ-7".to_string(), "Looks good".to_string())]
    );
}

#[tokio::test]
async fn test_transition_resolves_name_case_insensitively() {
    let mut mock = MockJiraClient::new();
    mock.transitions = sample_transitions();
    let (server, mock) = server_with(mock);

    let result = server
        .handle_tool_call(
            "jira_transition_issue",
            args(json!({ "issue_key": "PROJ-1", "transition": "in progress" })),
        )
        .await;

    assert_eq!(result.is_error, Some(false));
    assert_eq!(
        text_of(&result),
        "✅ Issue PROJ-1 transitioned to 'In Progress'"
    );
    let recorded = mock.recorded.lock().unwrap();
    assert_eq!(
        recorded.transitions_applied,
        vec![("PROJ-1".to_string(), "21".to_string(), None)]
    );
}

#[tokio::test]
async fn test_transition_by_exact_id_with_comment() {
    let mut mock = MockJiraClient::new();
    mock.transitions = sample_transitions();
    let (server, mock) = server_with(mock);

    server
        .handle_tool_call(
            "jira_transition_issue",
            args(json!({
                "issue_key": "PROJ-1",
                "transition": "31",
                "comment": "Closing out",
            })),
        )
        .await;

    let recorded = mock.recorded.lock().unwrap();
    assert_eq!(
        recorded.transitions_applied,
        vec![(
            "PROJ-1".to_string(),
            "31".to_string(),
            Some("Closing out".to_string())
        )]
    );
}

#[tokio::test]
async fn test_unmatched_transition_token_is_retryable_guidance() {
    let mut mock = MockJiraClient::new();
    mock.transitions = sample_transitions();
    let (server, mock) = server_with(mock);

    let result = server
        .handle_tool_call(
            "jira_transition_issue",
            args(json!({ "issue_key": "PROJ-1", "transition": "progress" })),
        )
        .await;

    // Informational, not a hard failure: the caller should retry with one
    // of the listed tokens.
    assert_eq!(result.is_error, Some(false));
    let text = text_of(&result);
    assert!(text.contains("❌ Transition 'progress' not found"));
    assert!(text.contains("Available transitions: In Progress, Done"));

    let recorded = mock.recorded.lock().unwrap();
    assert!(recorded.transitions_applied.is_empty());
}

#[tokio::test]
async fn test_get_transitions_lists_them_verbatim() {
    let mut mock = MockJiraClient::new();
    mock.transitions = sample_transitions();
    let (server, _mock) = server_with(mock);

    let result = server
        .handle_tool_call(
            "jira_get_transitions",
            args(json!({ "issue_key": "PROJ-1" })),
        )
        .await;

    assert_eq!(result.is_error, Some(false));
    let text = text_of(&result);
    assert!(text.starts_with("Found 2 transition(s) for PROJ-1:"));
    assert!(text.contains("\"id\": \"21\""));
    assert!(text.contains("\"to_status\": \"Done\""));
}

#[tokio::test]
async fn test_get_issue_expands_comments_only_on_request() {
    let details = IssueDetails {
        key: "PROJ-3".to_string(),
        summary: "A bug".to_string(),
        description: Some("Details".to_string()),
        status: "Open".to_string(),
        issue_type: "Bug".to_string(),
        assignee: "Unassigned".to_string(),
        reporter: Some("Jane Doe".to_string()),
        priority: Some("High".to_string()),
        labels: vec!["backend".to_string()],
        created: "2024-01-01T00:00:00.000+0000".to_string(),
        updated: "2024-01-02T00:00:00.000+0000".to_string(),
        url: "https://jira.test/browse/PROJ-3".to_string(),
        comments: None,
    };
    let mut mock = MockJiraClient::new();
    mock.details = Some(details);
    mock.comments = vec![Comment {
        author: "Jane Doe".to_string(),
        body: "First!".to_string(),
        created: "2024-01-01T01:00:00.000+0000".to_string(),
    }];
    let (server, _mock) = server_with(mock);

    let plain = server
        .handle_tool_call("jira_get_issue", args(json!({ "issue_key": "PROJ-3" })))
        .await;
    assert!(!text_of(&plain).contains("comments"));

    let expanded = server
        .handle_tool_call(
            "jira_get_issue",
            args(json!({ "issue_key": "PROJ-3", "expand": ["comments"] })),
        )
        .await;
    let text = text_of(&expanded);
    assert!(text.starts_with("Issue PROJ-3:"));
    assert!(text.contains("First!"));
}

#[tokio::test]
async fn test_list_projects_filters_archived_by_default() {
    let mut mock = MockJiraClient::new();
    mock.projects = vec![
        Project {
            key: "LIVE".to_string(),
            name: "Live project".to_string(),
            lead: Some("Jane Doe".to_string()),
            url: "https://jira.test/browse/LIVE".to_string(),
            archived: false,
        },
        Project {
            key: "OLD".to_string(),
            name: "Archived project".to_string(),
            lead: None,
            url: "https://jira.test/browse/OLD".to_string(),
            archived: true,
        },
    ];
    let (server, _mock) = server_with(mock);

    let default = server
        .handle_tool_call("jira_list_projects", serde_json::Map::new())
        .await;
    let text = text_of(&default);
    assert!(text.starts_with("Found 1 project(s):"));
    assert!(text.contains("LIVE"));
    assert!(!text.contains("OLD"));

    let with_archived = server
        .handle_tool_call(
            "jira_list_projects",
            args(json!({ "include_archived": true })),
        )
        .await;
    let text = text_of(&with_archived);
    assert!(text.starts_with("Found 2 project(s):"));
    assert!(text.contains("OLD"));
}

#[tokio::test]
async fn test_upstream_failure_surfaces_status_and_detail() {
    let mut mock = MockJiraClient::new();
    mock.fail_upstream = Some((403, "You do not have permission".to_string()));
    let (server, _mock) = server_with(mock);

    let result = server
        .handle_tool_call(
            "jira_add_comment",
            args(json!({ "issue_key": "PROJ-1", "comment": "hi" })),
        )
        .await;

    assert_eq!(result.is_error, Some(true));
    assert_eq!(
        text_of(&result),
        "❌ Jira error: 403 - You do not have permission"
    );
}

#[tokio::test]
async fn test_search_renders_issue_summaries() {
    let mut mock = MockJiraClient::new();
    mock.issues = vec![IssueSummary {
        key: "PROJ-9".to_string(),
        summary: "Crash on save".to_string(),
        status: "Open".to_string(),
        issue_type: "Bug".to_string(),
        assignee: "Unassigned".to_string(),
        reporter: Some("Jane Doe".to_string()),
        priority: None,
        created: "2024-03-01T09:00:00.000+0000".to_string(),
        updated: "2024-03-02T09:00:00.000+0000".to_string(),
    }];
    let (server, _mock) = server_with(mock);

    let result = server
        .handle_tool_call(
            "jira_search_issues",
            args(json!({ "jql": "project = PROJ", "max_results": 10 })),
        )
        .await;

    let text = text_of(&result);
    assert!(text.starts_with("Found 1 issue(s):"));
    assert!(text.contains("\"key\": \"PROJ-9\""));
    assert!(text.contains("\"assignee\": \"Unassigned\""));
}
