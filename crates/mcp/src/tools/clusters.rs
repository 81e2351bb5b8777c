// Compute cluster tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::registry::{default_connection, gateway_result, parse_args};
use crate::tools::{json_schema_connection, json_schema_object, Tool};
use anyhow::Result;
use brickgate_core::ToolGateway;
use serde::Deserialize;

/// Tool to list clusters in the workspace
pub struct ListClustersTool {
    gateway: ToolGateway,
}

impl ListClustersTool {
    pub fn new(gateway: ToolGateway) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct ListClustersArgs {
    #[serde(default = "default_connection")]
    connection_name: String,
}

#[async_trait::async_trait]
impl Tool for ListClustersTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_clusters".to_string(),
            description: "List all clusters in the Databricks workspace".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "connection_name": json_schema_connection()
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ListClustersArgs = parse_args("list_clusters", arguments)?;

        gateway_result(
            "list_clusters",
            self.gateway.list_clusters(&args.connection_name).await,
        )
    }
}
