// Workspace notebook tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::registry::{default_connection, gateway_result, parse_args};
use crate::tools::{
    json_schema_connection, json_schema_object, json_schema_string, json_schema_string_default,
    Tool,
};
use anyhow::Result;
use brickgate_core::ToolGateway;
use serde::Deserialize;

fn default_language() -> String {
    "PYTHON".to_string()
}

fn default_root() -> String {
    "/".to_string()
}

/// Tool to create (or overwrite) a notebook
pub struct CreateNotebookTool {
    gateway: ToolGateway,
}

impl CreateNotebookTool {
    pub fn new(gateway: ToolGateway) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct CreateNotebookArgs {
    path: String,
    #[serde(default = "default_language")]
    language: String,
    #[serde(default)]
    content: String,
    #[serde(default = "default_connection")]
    connection_name: String,
}

#[async_trait::async_trait]
impl Tool for CreateNotebookTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create_notebook".to_string(),
            description: "Create a new notebook in the Databricks workspace, \
                          overwriting any existing object at the path"
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "path": json_schema_string("Path where to create the notebook"),
                    "language": {
                        "type": "string",
                        "description": "Programming language (PYTHON, SQL, SCALA, R)",
                        "default": "PYTHON"
                    },
                    "content": json_schema_string_default("Initial content for the notebook", ""),
                    "connection_name": json_schema_connection()
                }),
                vec!["path"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: CreateNotebookArgs = parse_args("create_notebook", arguments)?;

        gateway_result(
            "create_notebook",
            self.gateway
                .create_notebook(&args.connection_name, &args.path, &args.language, &args.content)
                .await,
        )
    }
}

/// Tool to list notebooks and folders under a workspace path
pub struct ListNotebooksTool {
    gateway: ToolGateway,
}

impl ListNotebooksTool {
    pub fn new(gateway: ToolGateway) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct ListNotebooksArgs {
    #[serde(default = "default_root")]
    path: String,
    #[serde(default = "default_connection")]
    connection_name: String,
}

#[async_trait::async_trait]
impl Tool for ListNotebooksTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_notebooks".to_string(),
            description: "List notebooks and folders in the workspace".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "path": json_schema_string_default("Path to list (defaults to root)", "/"),
                    "connection_name": json_schema_connection()
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ListNotebooksArgs = parse_args("list_notebooks", arguments)?;

        gateway_result(
            "list_notebooks",
            self.gateway
                .list_notebooks(&args.connection_name, &args.path)
                .await,
        )
    }
}

/// Tool to read the source of a notebook
pub struct GetNotebookContentTool {
    gateway: ToolGateway,
}

impl GetNotebookContentTool {
    pub fn new(gateway: ToolGateway) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct GetNotebookContentArgs {
    path: String,
    #[serde(default = "default_connection")]
    connection_name: String,
}

#[async_trait::async_trait]
impl Tool for GetNotebookContentTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_notebook_content".to_string(),
            description: "Get the source content of a notebook".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "path": json_schema_string("Path to the notebook"),
                    "connection_name": json_schema_connection()
                }),
                vec!["path"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: GetNotebookContentArgs = parse_args("get_notebook_content", arguments)?;

        gateway_result(
            "get_notebook_content",
            self.gateway
                .get_notebook_content(&args.connection_name, &args.path)
                .await,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brickgate_core::CredentialStore;
    use std::sync::Arc;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway_for(server: &MockServer) -> ToolGateway {
        let store = Arc::new(CredentialStore::new());
        store.register("default", &server.uri(), "tok").unwrap();
        ToolGateway::new(store)
    }

    #[tokio::test]
    async fn test_create_notebook_defaults_to_python() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/workspace/import"))
            .and(body_partial_json(serde_json::json!({
                "path": "/Shared/new",
                "language": "PYTHON",
                "content": "",
                "overwrite": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let tool = CreateNotebookTool::new(gateway_for(&server));
        let result = tool
            .execute(serde_json::json!({ "path": "/Shared/new" }))
            .await
            .unwrap();

        assert_eq!(result.joined_text(), "Notebook created at /Shared/new");
    }

    #[tokio::test]
    async fn test_create_notebook_unsupported_language() {
        let server = MockServer::start().await;
        let tool = CreateNotebookTool::new(gateway_for(&server));

        let result = tool
            .execute(serde_json::json!({ "path": "/Shared/new", "language": "JAVA" }))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.joined_text(), "Error: Unsupported language: JAVA");
    }

    #[tokio::test]
    async fn test_notebook_content_error_is_inline_text() {
        let server = MockServer::start().await;
        Mock::given(path("/api/2.0/workspace/export"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error_code": "RESOURCE_DOES_NOT_EXIST",
                "message": "Path (/nope) doesn't exist."
            })))
            .mount(&server)
            .await;

        let tool = GetNotebookContentTool::new(gateway_for(&server));
        let result = tool
            .execute(serde_json::json!({ "path": "/nope" }))
            .await
            .unwrap();

        assert!(result.is_error.is_none());
        assert_eq!(
            result.joined_text(),
            "Error reading notebook: Path (/nope) doesn't exist."
        );
    }

    #[tokio::test]
    async fn test_unknown_connection_is_error_result() {
        let server = MockServer::start().await;
        let tool = ListNotebooksTool::new(gateway_for(&server));

        let result = tool
            .execute(serde_json::json!({ "connection_name": "staging" }))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(result.joined_text().contains("staging"));
    }
}
