// SQL execution and warehouse tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::registry::{default_connection, gateway_result, parse_args};
use crate::tools::{json_schema_connection, json_schema_object, json_schema_string, Tool};
use anyhow::Result;
use brickgate_core::ToolGateway;
use serde::Deserialize;

/// Tool to run a SQL statement on a warehouse
pub struct ExecuteSqlQueryTool {
    gateway: ToolGateway,
}

impl ExecuteSqlQueryTool {
    pub fn new(gateway: ToolGateway) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct ExecuteSqlQueryArgs {
    query: String,
    #[serde(default)]
    warehouse_id: Option<String>,
    #[serde(default = "default_connection")]
    connection_name: String,
}

#[async_trait::async_trait]
impl Tool for ExecuteSqlQueryTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "execute_sql_query".to_string(),
            description: "Execute a SQL query on a Databricks SQL warehouse".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "query": json_schema_string("SQL query to execute"),
                    "warehouse_id": json_schema_string(
                        "SQL warehouse ID (uses the first available warehouse if omitted)"
                    ),
                    "connection_name": json_schema_connection()
                }),
                vec!["query"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ExecuteSqlQueryArgs = parse_args("execute_sql_query", arguments)?;

        gateway_result(
            "execute_sql_query",
            self.gateway
                .execute_sql(
                    &args.connection_name,
                    &args.query,
                    args.warehouse_id.as_deref(),
                )
                .await,
        )
    }
}

/// Tool to list SQL warehouses
pub struct ListSqlWarehousesTool {
    gateway: ToolGateway,
}

impl ListSqlWarehousesTool {
    pub fn new(gateway: ToolGateway) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct ListSqlWarehousesArgs {
    #[serde(default = "default_connection")]
    connection_name: String,
}

#[async_trait::async_trait]
impl Tool for ListSqlWarehousesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_sql_warehouses".to_string(),
            description: "List all SQL warehouses in the workspace".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "connection_name": json_schema_connection()
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ListSqlWarehousesArgs = parse_args("list_sql_warehouses", arguments)?;

        gateway_result(
            "list_sql_warehouses",
            self.gateway.list_sql_warehouses(&args.connection_name).await,
        )
    }
}
