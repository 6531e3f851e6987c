//! Tool registry for MCP operations
//!
//! The registry holds the declarative contract for every tool and is built
//! once at startup; after that it is only read, so concurrent lookups need
//! no locking.

use crate::jira::JiraClient;
use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent, Tool};
use rmcp::Error as McpError;
use std::collections::HashMap;
use std::sync::Arc;

/// Context shared by all tools during execution
#[derive(Clone)]
pub struct ToolContext {
    /// The injected Jira client handle
    pub client: Arc<dyn JiraClient>,
}

impl ToolContext {
    /// Create a new tool context around a client handle
    pub fn new(client: Arc<dyn JiraClient>) -> Self {
        Self { client }
    }
}

/// Trait defining the interface for all MCP tools
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's name
    fn name(&self) -> &'static str;

    /// Get the tool's description
    fn description(&self) -> &'static str;

    /// Get the tool's JSON schema for arguments
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments and context
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry for managing MCP tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool in the registry
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names, sorted
    pub fn list_tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get all registered tools as Tool objects for the MCP list_tools
    /// response, in a stable name order.
    pub fn list_tools(&self) -> Vec<Tool> {
        let mut tools: Vec<&dyn McpTool> = self.tools.values().map(|t| t.as_ref()).collect();
        tools.sort_by_key(|tool| tool.name());

        tools
            .into_iter()
            .map(|tool| {
                let schema = tool.schema();
                let schema_map = if let serde_json::Value::Object(map) = schema {
                    map
                } else {
                    serde_json::Map::new()
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: Arc::new(schema_map),
                    annotations: None,
                }
            })
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed request struct.
    ///
    /// serde enforces the declared contract: missing required fields and
    /// type mismatches fail naming the offending field, declared defaults
    /// are applied, and keys not present in the struct are ignored.
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_request(format!("Invalid arguments: {e}"), None))
    }

    /// Create a success response with text content
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent {
                    text: content.into(),
                }),
                None,
            )],
            is_error: Some(false),
        }
    }

    /// Create an error response with the given error message
    pub fn create_error_response<T: Into<String>>(
        error: T,
        details: Option<String>,
    ) -> CallToolResult {
        let error_text = match details {
            Some(details) => format!("{}: {}", error.into(), details),
            None => error.into(),
        };

        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent { text: error_text }),
                None,
            )],
            is_error: Some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::tests::MockJiraClient;
    use rmcp::model::RawContent;

    /// Mock tool for testing
    struct MockTool {
        name: &'static str,
        description: &'static str,
    }

    #[async_trait::async_trait]
    impl McpTool for MockTool {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            self.description
        }

        fn schema(&self) -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            })
        }

        async fn execute(
            &self,
            _arguments: serde_json::Map<String, serde_json::Value>,
            _context: &ToolContext,
        ) -> std::result::Result<CallToolResult, McpError> {
            Ok(BaseToolImpl::create_success_response(format!(
                "Mock tool {} executed",
                self.name
            )))
        }
    }

    #[test]
    fn test_tool_registry_creation() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_tool_registration_and_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "test_tool",
            description: "A test tool",
        });

        assert_eq!(registry.len(), 1);
        let tool = registry.get_tool("test_tool").unwrap();
        assert_eq!(tool.name(), "test_tool");
        assert_eq!(tool.description(), "A test tool");
        assert!(registry.get_tool("nonexistent").is_none());
    }

    #[test]
    fn test_list_tools_is_sorted_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "zebra",
            description: "Last",
        });
        registry.register(MockTool {
            name: "alpha",
            description: "First",
        });

        let names: Vec<_> = registry
            .list_tools()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(names, vec!["alpha", "zebra"]);
        assert_eq!(registry.list_tool_names(), vec!["alpha", "zebra"]);
    }

    #[tokio::test]
    async fn test_tool_execution() {
        let context = ToolContext::new(std::sync::Arc::new(MockJiraClient::new()));
        let tool = MockTool {
            name: "exec_test",
            description: "Execution test tool",
        };

        let result = tool.execute(serde_json::Map::new(), &context).await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert!(!result.content.is_empty());
    }

    #[test]
    fn test_parse_arguments_missing_required_field() {
        use serde::Deserialize;

        #[derive(Deserialize, Debug)]
        struct TestArgs {
            #[serde(rename = "required_field")]
            _required_field: String,
        }

        let result: std::result::Result<TestArgs, McpError> =
            BaseToolImpl::parse_arguments(serde_json::Map::new());
        let err = result.unwrap_err();
        assert!(err.message.contains("required_field"));
    }

    #[test]
    fn test_parse_arguments_ignores_extra_keys() {
        use serde::Deserialize;

        #[derive(Deserialize, Debug, PartialEq)]
        struct TestArgs {
            name: String,
        }

        let mut args = serde_json::Map::new();
        args.insert("name".to_string(), serde_json::json!("value"));
        args.insert("unexpected".to_string(), serde_json::json!(42));

        let parsed: TestArgs = BaseToolImpl::parse_arguments(args).unwrap();
        assert_eq!(parsed.name, "value");
    }

    #[test]
    fn test_create_success_and_error_responses() {
        let ok = BaseToolImpl::create_success_response("Success message");
        assert_eq!(ok.is_error, Some(false));
        if let RawContent::Text(text) = &ok.content[0].raw {
            assert_eq!(text.text, "Success message");
        } else {
            panic!("Expected text content");
        }

        let err =
            BaseToolImpl::create_error_response("Error message", Some("details".to_string()));
        assert_eq!(err.is_error, Some(true));
        if let RawContent::Text(text) = &err.content[0].raw {
            assert_eq!(text.text, "Error message: details");
        } else {
            panic!("Expected text content");
        }
    }
}
