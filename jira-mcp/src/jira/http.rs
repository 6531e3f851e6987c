//! Jira REST API v2 client
//!
//! Thin translation layer between the [`JiraClient`] trait and Jira's wire
//! shapes. Non-2xx responses become [`JiraMcpError::Upstream`] carrying the
//! remote status and Jira's own error text; nothing is retried or cached.

use crate::config::JiraConfig;
use crate::error::{JiraMcpError, Result};
use crate::jira::client::JiraClient;
use crate::jira::types::{
    Comment, CreatedIssue, IssueDetails, IssueFieldUpdates, IssueSummary, NewIssueFields, Project,
    Transition,
};
use serde::Deserialize;
use serde_json::json;

/// [`JiraClient`] implementation backed by the Jira REST API v2.
///
/// `reqwest::Client` pools connections internally and is safe to share, so
/// one `HttpJiraClient` serves all concurrent invocations.
pub struct HttpJiraClient {
    http: reqwest::Client,
    config: JiraConfig,
}

impl HttpJiraClient {
    /// Create a client from a validated configuration.
    pub fn new(config: JiraConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("jira-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.config.api_url(path))
            .basic_auth(&self.config.email, Some(&self.config.api_token))
    }

    /// Turn a non-2xx response into an `Upstream` error with Jira's detail.
    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(JiraMcpError::Upstream {
            status: status.as_u16(),
            detail: extract_error_detail(&body, status.canonical_reason().unwrap_or("error")),
        })
    }
}

/// Pull a human-readable message out of a Jira error body.
///
/// Jira reports errors as `{"errorMessages": [...], "errors": {field: msg}}`;
/// fall back to the canonical status reason when the body has neither.
fn extract_error_detail(body: &str, fallback: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default, rename = "errorMessages")]
        error_messages: Vec<String>,
        #[serde(default)]
        errors: std::collections::BTreeMap<String, String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        let mut parts = parsed.error_messages;
        parts.extend(
            parsed
                .errors
                .into_iter()
                .map(|(field, message)| format!("{field}: {message}")),
        );
        if !parts.is_empty() {
            return parts.join("; ");
        }
    }
    fallback.to_string()
}

#[derive(Deserialize)]
struct Named {
    name: String,
}

#[derive(Deserialize)]
struct RawUser {
    #[serde(rename = "displayName")]
    display_name: String,
}

#[derive(Deserialize)]
struct RawFields {
    #[serde(default)]
    summary: String,
    #[serde(default)]
    description: Option<String>,
    status: Option<Named>,
    issuetype: Option<Named>,
    assignee: Option<RawUser>,
    reporter: Option<RawUser>,
    priority: Option<Named>,
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    created: String,
    #[serde(default)]
    updated: String,
}

#[derive(Deserialize)]
struct RawIssue {
    key: String,
    fields: RawFields,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    issues: Vec<RawIssue>,
}

#[derive(Deserialize)]
struct RawComment {
    author: Option<RawUser>,
    #[serde(default)]
    body: String,
    #[serde(default)]
    created: String,
}

#[derive(Deserialize)]
struct CommentsResponse {
    #[serde(default)]
    comments: Vec<RawComment>,
}

#[derive(Deserialize)]
struct RawTransition {
    id: String,
    name: String,
    to: Option<Named>,
}

#[derive(Deserialize)]
struct TransitionsResponse {
    #[serde(default)]
    transitions: Vec<RawTransition>,
}

#[derive(Deserialize)]
struct RawProject {
    key: String,
    name: String,
    lead: Option<RawUser>,
    #[serde(default)]
    archived: bool,
}

#[derive(Deserialize)]
struct CreatedResponse {
    key: String,
}

fn summarize(issue: RawIssue) -> IssueSummary {
    let fields = issue.fields;
    IssueSummary {
        key: issue.key,
        summary: fields.summary,
        status: fields.status.map(|s| s.name).unwrap_or_default(),
        issue_type: fields.issuetype.map(|t| t.name).unwrap_or_default(),
        assignee: fields
            .assignee
            .map(|u| u.display_name)
            .unwrap_or_else(|| "Unassigned".to_string()),
        reporter: fields.reporter.map(|u| u.display_name),
        priority: fields.priority.map(|p| p.name),
        created: fields.created,
        updated: fields.updated,
    }
}

#[async_trait::async_trait]
impl JiraClient for HttpJiraClient {
    async fn search_issues(
        &self,
        jql: &str,
        max_results: u32,
        fields: Option<&[String]>,
    ) -> Result<Vec<IssueSummary>> {
        let mut body = json!({
            "jql": jql,
            "maxResults": max_results,
        });
        if let Some(fields) = fields {
            body["fields"] = json!(fields);
        }

        tracing::debug!("Searching issues with JQL: {jql}");
        let response = self
            .request(reqwest::Method::POST, "search")
            .json(&body)
            .send()
            .await?;
        let parsed: SearchResponse = self.check(response).await?.json().await?;
        Ok(parsed.issues.into_iter().map(summarize).collect())
    }

    async fn get_issue(&self, issue_key: &str, expand: &[String]) -> Result<IssueDetails> {
        let mut request = self.request(reqwest::Method::GET, &format!("issue/{issue_key}"));
        if !expand.is_empty() {
            request = request.query(&[("expand", expand.join(","))]);
        }

        let response = request.send().await?;
        let raw: RawIssue = self.check(response).await?.json().await?;
        let url = self.browse_url(&raw.key);
        let fields = raw.fields;
        Ok(IssueDetails {
            key: raw.key,
            summary: fields.summary,
            description: fields.description,
            status: fields.status.map(|s| s.name).unwrap_or_default(),
            issue_type: fields.issuetype.map(|t| t.name).unwrap_or_default(),
            assignee: fields
                .assignee
                .map(|u| u.display_name)
                .unwrap_or_else(|| "Unassigned".to_string()),
            reporter: fields.reporter.map(|u| u.display_name),
            priority: fields.priority.map(|p| p.name),
            labels: fields.labels,
            created: fields.created,
            updated: fields.updated,
            url,
            comments: None,
        })
    }

    async fn get_comments(&self, issue_key: &str) -> Result<Vec<Comment>> {
        let response = self
            .request(reqwest::Method::GET, &format!("issue/{issue_key}/comment"))
            .send()
            .await?;
        let parsed: CommentsResponse = self.check(response).await?.json().await?;
        Ok(parsed
            .comments
            .into_iter()
            .map(|c| Comment {
                author: c
                    .author
                    .map(|u| u.display_name)
                    .unwrap_or_else(|| "Anonymous".to_string()),
                body: c.body,
                created: c.created,
            })
            .collect())
    }

    async fn create_issue(&self, fields: &NewIssueFields) -> Result<CreatedIssue> {
        tracing::debug!("Creating issue in project {}", fields.project);
        let response = self
            .request(reqwest::Method::POST, "issue")
            .json(&json!({ "fields": fields.to_wire() }))
            .send()
            .await?;
        let created: CreatedResponse = self.check(response).await?.json().await?;
        tracing::info!("Created issue {}", created.key);
        Ok(CreatedIssue { key: created.key })
    }

    async fn update_issue(&self, issue_key: &str, updates: &IssueFieldUpdates) -> Result<()> {
        let response = self
            .request(reqwest::Method::PUT, &format!("issue/{issue_key}"))
            .json(&json!({ "fields": updates.to_wire() }))
            .send()
            .await?;
        self.check(response).await?;
        tracing::info!("Updated issue {issue_key}");
        Ok(())
    }

    async fn add_comment(&self, issue_key: &str, comment: &str) -> Result<()> {
        let response = self
            .request(reqwest::Method::POST, &format!("issue/{issue_key}/comment"))
            .json(&json!({ "body": comment }))
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    async fn list_transitions(&self, issue_key: &str) -> Result<Vec<Transition>> {
        let response = self
            .request(
                reqwest::Method::GET,
                &format!("issue/{issue_key}/transitions"),
            )
            .send()
            .await?;
        let parsed: TransitionsResponse = self.check(response).await?.json().await?;
        Ok(parsed
            .transitions
            .into_iter()
            .map(|t| Transition {
                id: t.id,
                name: t.name,
                to_status: t.to.map(|s| s.name).unwrap_or_default(),
            })
            .collect())
    }

    async fn transition_issue(
        &self,
        issue_key: &str,
        transition_id: &str,
        comment: Option<&str>,
    ) -> Result<()> {
        let mut body = json!({ "transition": { "id": transition_id } });
        if let Some(comment) = comment {
            body["update"] = json!({ "comment": [{ "add": { "body": comment } }] });
        }

        let response = self
            .request(
                reqwest::Method::POST,
                &format!("issue/{issue_key}/transitions"),
            )
            .json(&body)
            .send()
            .await?;
        self.check(response).await?;
        tracing::info!("Applied transition {transition_id} to {issue_key}");
        Ok(())
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let response = self.request(reqwest::Method::GET, "project").send().await?;
        let parsed: Vec<RawProject> = self.check(response).await?.json().await?;
        Ok(parsed
            .into_iter()
            .map(|p| {
                let url = self.browse_url(&p.key);
                Project {
                    key: p.key,
                    name: p.name,
                    lead: p.lead.map(|u| u.display_name),
                    url,
                    archived: p.archived,
                }
            })
            .collect())
    }

    fn browse_url(&self, key: &str) -> String {
        self.config.browse_url(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_detail_prefers_error_messages() {
        let body = r#"{"errorMessages": ["Issue does not exist"], "errors": {}}"#;
        assert_eq!(
            extract_error_detail(body, "Not Found"),
            "Issue does not exist"
        );
    }

    #[test]
    fn test_extract_error_detail_includes_field_errors() {
        let body = r#"{"errorMessages": [], "errors": {"summary": "Summary is required"}}"#;
        assert_eq!(
            extract_error_detail(body, "Bad Request"),
            "summary: Summary is required"
        );
    }

    #[test]
    fn test_extract_error_detail_falls_back_to_status_reason() {
        assert_eq!(extract_error_detail("", "Unauthorized"), "Unauthorized");
        assert_eq!(
            extract_error_detail("<html>gateway</html>", "Bad Gateway"),
            "Bad Gateway"
        );
    }

    #[test]
    fn test_search_response_tolerates_projected_fields() {
        // With a `fields` projection Jira omits everything not requested.
        let body = r#"{"issues": [{"key": "PROJ-1", "fields": {"summary": "Only summary"}}]}"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        let summary = summarize(parsed.issues.into_iter().next().unwrap());
        assert_eq!(summary.key, "PROJ-1");
        assert_eq!(summary.summary, "Only summary");
        assert_eq!(summary.assignee, "Unassigned");
        assert_eq!(summary.reporter, None);
    }

    #[test]
    fn test_transitions_response_parsing() {
        let body = r#"{"transitions": [
            {"id": "21", "name": "In Progress", "to": {"name": "In Progress"}},
            {"id": "31", "name": "Done", "to": {"name": "Done"}}
        ]}"#;
        let parsed: TransitionsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.transitions.len(), 2);
        assert_eq!(parsed.transitions[0].id, "21");
        assert_eq!(parsed.transitions[1].to.as_ref().unwrap().name, "Done");
    }
}
