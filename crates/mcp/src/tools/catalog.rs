// Unity Catalog browsing tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::registry::{default_connection, gateway_result, parse_args};
use crate::tools::{
    json_schema_connection, json_schema_object, json_schema_string, json_schema_string_default,
    Tool,
};
use anyhow::Result;
use brickgate_core::ToolGateway;
use serde::Deserialize;

fn default_catalog() -> String {
    "main".to_string()
}

fn default_schema() -> String {
    "default".to_string()
}

/// Tool to list Unity Catalog catalogs
pub struct ListCatalogsTool {
    gateway: ToolGateway,
}

impl ListCatalogsTool {
    pub fn new(gateway: ToolGateway) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct ListCatalogsArgs {
    #[serde(default = "default_connection")]
    connection_name: String,
}

#[async_trait::async_trait]
impl Tool for ListCatalogsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_catalogs".to_string(),
            description: "List all catalogs in Unity Catalog".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "connection_name": json_schema_connection()
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ListCatalogsArgs = parse_args("list_catalogs", arguments)?;

        gateway_result(
            "list_catalogs",
            self.gateway.list_catalogs(&args.connection_name).await,
        )
    }
}

/// Tool to list the schemas of a catalog
pub struct ListSchemasTool {
    gateway: ToolGateway,
}

impl ListSchemasTool {
    pub fn new(gateway: ToolGateway) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct ListSchemasArgs {
    #[serde(default = "default_catalog")]
    catalog_name: String,
    #[serde(default = "default_connection")]
    connection_name: String,
}

#[async_trait::async_trait]
impl Tool for ListSchemasTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_schemas".to_string(),
            description: "List schemas in a catalog".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "catalog_name": json_schema_string_default("Name of the catalog", "main"),
                    "connection_name": json_schema_connection()
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ListSchemasArgs = parse_args("list_schemas", arguments)?;

        gateway_result(
            "list_schemas",
            self.gateway
                .list_schemas(&args.connection_name, &args.catalog_name)
                .await,
        )
    }
}

/// Tool to list the tables of a schema
pub struct ListTablesTool {
    gateway: ToolGateway,
}

impl ListTablesTool {
    pub fn new(gateway: ToolGateway) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct ListTablesArgs {
    #[serde(default = "default_catalog")]
    catalog_name: String,
    #[serde(default = "default_schema")]
    schema_name: String,
    #[serde(default = "default_connection")]
    connection_name: String,
}

#[async_trait::async_trait]
impl Tool for ListTablesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_tables".to_string(),
            description: "List tables in a schema".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "catalog_name": json_schema_string_default("Name of the catalog", "main"),
                    "schema_name": json_schema_string_default("Name of the schema", "default"),
                    "connection_name": json_schema_connection()
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ListTablesArgs = parse_args("list_tables", arguments)?;

        gateway_result(
            "list_tables",
            self.gateway
                .list_tables(&args.connection_name, &args.catalog_name, &args.schema_name)
                .await,
        )
    }
}

/// Tool to describe a table and its columns
pub struct GetTableInfoTool {
    gateway: ToolGateway,
}

impl GetTableInfoTool {
    pub fn new(gateway: ToolGateway) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct GetTableInfoArgs {
    table_name: String,
    #[serde(default = "default_catalog")]
    catalog_name: String,
    #[serde(default = "default_schema")]
    schema_name: String,
    #[serde(default = "default_connection")]
    connection_name: String,
}

#[async_trait::async_trait]
impl Tool for GetTableInfoTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_table_info".to_string(),
            description: "Get detailed information about a table, including its columns"
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "table_name": json_schema_string("Name of the table"),
                    "catalog_name": json_schema_string_default("Name of the catalog", "main"),
                    "schema_name": json_schema_string_default("Name of the schema", "default"),
                    "connection_name": json_schema_connection()
                }),
                vec!["table_name"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: GetTableInfoArgs = parse_args("get_table_info", arguments)?;

        gateway_result(
            "get_table_info",
            self.gateway
                .get_table_info(
                    &args.connection_name,
                    &args.catalog_name,
                    &args.schema_name,
                    &args.table_name,
                )
                .await,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brickgate_core::CredentialStore;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway_for(server: &MockServer) -> ToolGateway {
        let store = Arc::new(CredentialStore::new());
        store.register("default", &server.uri(), "tok").unwrap();
        ToolGateway::new(store)
    }

    #[tokio::test]
    async fn test_list_tables_uses_default_location() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/2.1/unity-catalog/tables"))
            .and(query_param("catalog_name", "main"))
            .and(query_param("schema_name", "default"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tables": [{
                    "name": "orders",
                    "catalog_name": "main",
                    "schema_name": "default",
                    "table_type": "MANAGED"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = ListTablesTool::new(gateway_for(&server));
        let result = tool.execute(json!({})).await.unwrap();

        let body: serde_json::Value = serde_json::from_str(&result.joined_text()).unwrap();
        assert_eq!(
            body,
            json!([{
                "name": "orders",
                "catalog_name": "main",
                "schema_name": "default",
                "table_type": "MANAGED",
                "comment": null
            }])
        );
    }

    #[tokio::test]
    async fn test_get_table_info_joins_full_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/2.1/unity-catalog/tables/sales.raw.events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "events",
                "catalog_name": "sales",
                "schema_name": "raw",
                "columns": [{ "name": "id", "type_name": "LONG", "nullable": false }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = GetTableInfoTool::new(gateway_for(&server));
        let result = tool
            .execute(json!({
                "table_name": "events",
                "catalog_name": "sales",
                "schema_name": "raw"
            }))
            .await
            .unwrap();

        let body: serde_json::Value = serde_json::from_str(&result.joined_text()).unwrap();
        assert_eq!(body["name"], "events");
        assert_eq!(body["columns"][0]["type_name"], "LONG");
    }

    #[tokio::test]
    async fn test_get_table_info_failure_is_error_object() {
        let server = MockServer::start().await;
        Mock::given(path("/api/2.1/unity-catalog/tables/main.default.missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error_code": "TABLE_DOES_NOT_EXIST",
                "message": "Table 'main.default.missing' does not exist."
            })))
            .mount(&server)
            .await;

        let tool = GetTableInfoTool::new(gateway_for(&server));
        let result = tool.execute(json!({ "table_name": "missing" })).await.unwrap();

        let body: serde_json::Value = serde_json::from_str(&result.joined_text()).unwrap();
        assert_eq!(
            body,
            json!({ "error": "Table 'main.default.missing' does not exist." })
        );
    }

    #[tokio::test]
    async fn test_list_schemas_requires_known_connection() {
        let server = MockServer::start().await;
        let tool = ListSchemasTool::new(gateway_for(&server));

        let result = tool
            .execute(json!({ "connection_name": "prod" }))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.joined_text(), "Error: Connection 'prod' not found");
    }
}
