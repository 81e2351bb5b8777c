// Tools for inspecting and registering workspace connections

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::registry::{gateway_result, json_result, parse_args};
use crate::tools::{json_schema_connection, json_schema_object, json_schema_string, Tool};
use anyhow::Result;
use brickgate_core::ToolGateway;
use serde::Deserialize;

/// Tool to list the configured connection names
pub struct ListConnectionsTool {
    gateway: ToolGateway,
}

impl ListConnectionsTool {
    pub fn new(gateway: ToolGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait::async_trait]
impl Tool for ListConnectionsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_databricks_connections".to_string(),
            description: "List all available Databricks connections".to_string(),
            // connection_name is accepted and ignored; some hosts always send it
            input_schema: json_schema_object(
                serde_json::json!({
                    "connection_name": json_schema_connection()
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        json_result(&self.gateway.list_connections())
    }
}

/// Tool to register a connection at runtime
pub struct AddConnectionTool {
    gateway: ToolGateway,
}

impl AddConnectionTool {
    pub fn new(gateway: ToolGateway) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct AddConnectionArgs {
    name: String,
    host: String,
    token: String,
}

#[async_trait::async_trait]
impl Tool for AddConnectionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_databricks_connection".to_string(),
            description: "Add a new Databricks connection. Replaces any connection \
                          with the same name; not saved to the connections file"
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "name": json_schema_string("Name for the connection"),
                    "host": json_schema_string("Databricks workspace URL"),
                    "token": json_schema_string("Databricks access token")
                }),
                vec!["name", "host", "token"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: AddConnectionArgs = parse_args("add_databricks_connection", arguments)?;

        gateway_result(
            "add_databricks_connection",
            self.gateway.add_connection(&args.name, &args.host, &args.token),
        )
    }
}
