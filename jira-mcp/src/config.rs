//! Environment-based configuration for the Jira connection
//!
//! The server is configured entirely through environment variables, matching
//! how MCP hosts launch stdio servers: `JIRA_URL`, `JIRA_EMAIL`, and
//! `JIRA_API_TOKEN` are all required.

use crate::error::{JiraMcpError, Result};
use url::Url;

/// Environment variable holding the Jira base URL
pub const ENV_JIRA_URL: &str = "JIRA_URL";
/// Environment variable holding the account email used for basic auth
pub const ENV_JIRA_EMAIL: &str = "JIRA_EMAIL";
/// Environment variable holding the API token used for basic auth
pub const ENV_JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";

/// Connection settings for a Jira instance
#[derive(Debug, Clone)]
pub struct JiraConfig {
    /// Base URL of the Jira instance (e.g. `https://company.atlassian.net`)
    pub base_url: Url,
    /// Account email for basic authentication
    pub email: String,
    /// API token for basic authentication
    pub api_token: String,
}

impl JiraConfig {
    /// Load configuration from the environment.
    ///
    /// All three variables are required; the error names every missing one
    /// at once so a misconfigured host can be fixed in a single pass.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(ENV_JIRA_URL).ok().filter(|v| !v.is_empty());
        let email = std::env::var(ENV_JIRA_EMAIL).ok().filter(|v| !v.is_empty());
        let token = std::env::var(ENV_JIRA_API_TOKEN)
            .ok()
            .filter(|v| !v.is_empty());

        let mut missing = Vec::new();
        if url.is_none() {
            missing.push(ENV_JIRA_URL);
        }
        if email.is_none() {
            missing.push(ENV_JIRA_EMAIL);
        }
        if token.is_none() {
            missing.push(ENV_JIRA_API_TOKEN);
        }
        if !missing.is_empty() {
            return Err(JiraMcpError::Config(format!(
                "Missing Jira configuration. Required environment variables: {}",
                missing.join(", ")
            )));
        }

        Self::new(&url.unwrap(), email.unwrap(), token.unwrap())
    }

    /// Build a configuration from explicit values, validating the URL.
    pub fn new(base_url: &str, email: String, api_token: String) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| JiraMcpError::Config(format!("Invalid {ENV_JIRA_URL}: {e}")))?;
        Ok(Self {
            base_url,
            email,
            api_token,
        })
    }

    /// Construct the browse URL for an issue or project key.
    pub fn browse_url(&self, key: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/browse/{key}")
    }

    /// Construct a REST API v2 endpoint URL from a path fragment.
    pub fn api_url(&self, path: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/rest/api/2/{path}")
    }
}
