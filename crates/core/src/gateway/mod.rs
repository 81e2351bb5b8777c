//! Tool gateway: one operation per workspace capability.
//!
//! Every operation resolves its connection first. A missing connection is a
//! hard [`GatewayError`]; once a client exists, any backend error is folded
//! into the operation's outcome and never returned as `Err`.

mod outcome;
mod records;

pub use outcome::{
    ListOutcome, NotebookContent, ToolFailure, ToolOutcome, NO_WAREHOUSES_AVAILABLE,
};
pub use records::{
    CatalogSummary, ClusterSummary, ColumnDescriptor, ConnectionList, SchemaSummary,
    StatementSummary, TableDetails, TableSummary, WarehouseSummary, WorkspaceEntry,
};

use crate::error::CoreError;
use crate::store::CredentialStore;
use brickgate_sdk::api::{ExecuteStatementRequest, ImportFormat, Language, UploadRequest};
use brickgate_sdk::{SdkError, WorkspaceClient};
use std::sync::Arc;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors that abort an operation before any backend call.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Connection(#[from] CoreError),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

impl GatewayError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Connection(e) if e.is_not_found())
    }
}

/// Map a notebook language tag, case-insensitively, onto the supported set.
pub fn parse_language(tag: &str) -> GatewayResult<Language> {
    match tag.to_ascii_uppercase().as_str() {
        "PYTHON" => Ok(Language::Python),
        "SQL" => Ok(Language::Sql),
        "SCALA" => Ok(Language::Scala),
        "R" => Ok(Language::R),
        _ => Err(GatewayError::UnsupportedLanguage(tag.to_string())),
    }
}

/// Workspace operations over the connections of a [`CredentialStore`].
#[derive(Clone)]
pub struct ToolGateway {
    store: Arc<CredentialStore>,
}

impl ToolGateway {
    pub fn new(store: Arc<CredentialStore>) -> Self {
        Self { store }
    }

    fn connect(&self, connection: &str) -> GatewayResult<WorkspaceClient> {
        tracing::debug!(connection, "Resolving connection");
        Ok(self.store.resolve(connection)?)
    }

    /// Names of all registered connections.
    pub fn list_connections(&self) -> ConnectionList {
        ConnectionList {
            connections: self.store.list(),
        }
    }

    /// Register or replace a connection for the rest of the process.
    pub fn add_connection(&self, name: &str, host: &str, token: &str) -> GatewayResult<String> {
        self.store.register(name, host, token)?;
        Ok(format!("Connection '{}' added successfully", name))
    }

    pub async fn list_clusters(
        &self,
        connection: &str,
    ) -> GatewayResult<ListOutcome<ClusterSummary>> {
        let client = self.connect(connection)?;
        let result = client.clusters().list().await;

        Ok(listing("list_clusters", result))
    }

    /// Upload a notebook, always overwriting whatever is at `path`.
    pub async fn create_notebook(
        &self,
        connection: &str,
        path: &str,
        language: &str,
        content: &str,
    ) -> GatewayResult<ToolOutcome<String>> {
        let client = self.connect(connection)?;
        let language = parse_language(language)?;

        let result = client
            .workspace()
            .upload(&UploadRequest {
                path,
                format: ImportFormat::Source,
                language: Some(language),
                content: content.as_bytes(),
                overwrite: true,
            })
            .await
            .map(|()| format!("Notebook created at {}", path));

        Ok(single("create_notebook", result))
    }

    pub async fn list_notebooks(
        &self,
        connection: &str,
        path: &str,
    ) -> GatewayResult<ListOutcome<WorkspaceEntry>> {
        let client = self.connect(connection)?;
        let result = client.workspace().list(path).await;

        Ok(listing("list_notebooks", result))
    }

    pub async fn get_notebook_content(
        &self,
        connection: &str,
        path: &str,
    ) -> GatewayResult<NotebookContent> {
        let client = self.connect(connection)?;

        let content = match client.workspace().download(path).await {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => NotebookContent::Text(text),
                Err(e) => NotebookContent::Error(e.to_string()),
            },
            Err(e) => NotebookContent::Error(e.to_string()),
        };

        if let NotebookContent::Error(message) = &content {
            tracing::warn!(path, "get_notebook_content failed: {}", message);
        }
        Ok(content)
    }

    /// Run a statement. Without a warehouse id the first warehouse of the
    /// workspace is used.
    pub async fn execute_sql(
        &self,
        connection: &str,
        query: &str,
        warehouse_id: Option<&str>,
    ) -> GatewayResult<ToolOutcome<StatementSummary>> {
        let client = self.connect(connection)?;

        let warehouse_id = match warehouse_id.filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => match first_warehouse(&client).await {
                Ok(Some(id)) => id,
                Ok(None) => {
                    tracing::warn!("execute_sql: {}", NO_WAREHOUSES_AVAILABLE);
                    return Ok(ToolOutcome::Failure(ToolFailure::empty_warehouse_pool()));
                }
                Err(e) => return Ok(single("execute_sql", Err::<StatementSummary, _>(e))),
            },
        };

        tracing::debug!(warehouse_id = %warehouse_id, "Submitting statement");
        let result = client
            .statement_execution()
            .execute_statement(&ExecuteStatementRequest::new(query, warehouse_id))
            .await
            .map(StatementSummary::from);

        Ok(single("execute_sql", result))
    }

    pub async fn list_catalogs(
        &self,
        connection: &str,
    ) -> GatewayResult<ListOutcome<CatalogSummary>> {
        let client = self.connect(connection)?;
        let result = client.catalogs().list().await;

        Ok(listing("list_catalogs", result))
    }

    pub async fn list_schemas(
        &self,
        connection: &str,
        catalog_name: &str,
    ) -> GatewayResult<ListOutcome<SchemaSummary>> {
        let client = self.connect(connection)?;
        let result = client.schemas().list(catalog_name).await;

        Ok(listing("list_schemas", result))
    }

    pub async fn list_tables(
        &self,
        connection: &str,
        catalog_name: &str,
        schema_name: &str,
    ) -> GatewayResult<ListOutcome<TableSummary>> {
        let client = self.connect(connection)?;
        let result = client.tables().list(catalog_name, schema_name).await;

        Ok(listing("list_tables", result))
    }

    pub async fn get_table_info(
        &self,
        connection: &str,
        catalog_name: &str,
        schema_name: &str,
        table_name: &str,
    ) -> GatewayResult<ToolOutcome<TableDetails>> {
        let client = self.connect(connection)?;
        let full_name = format!("{}.{}.{}", catalog_name, schema_name, table_name);

        let result = client
            .tables()
            .get(&full_name)
            .await
            .map(TableDetails::from);

        Ok(single("get_table_info", result))
    }

    pub async fn list_sql_warehouses(
        &self,
        connection: &str,
    ) -> GatewayResult<ListOutcome<WarehouseSummary>> {
        let client = self.connect(connection)?;
        let result = client.warehouses().list().await;

        Ok(listing("list_sql_warehouses", result))
    }
}

async fn first_warehouse(client: &WorkspaceClient) -> Result<Option<String>, SdkError> {
    let warehouses = client.warehouses().list().await?;
    // Entries without an id cannot run statements; skip past them.
    Ok(warehouses.into_iter().find_map(|warehouse| warehouse.id))
}

fn listing<S, T: From<S>>(operation: &str, result: Result<Vec<S>, SdkError>) -> ListOutcome<T> {
    match result {
        Ok(items) => ListOutcome::Items(items.into_iter().map(T::from).collect()),
        Err(e) => {
            tracing::warn!("{} failed: {}", operation, e);
            ListOutcome::failed(e.to_string())
        }
    }
}

fn single<T>(operation: &str, result: Result<T, SdkError>) -> ToolOutcome<T> {
    if let Err(e) = &result {
        tracing::warn!("{} failed: {}", operation, e);
    }
    ToolOutcome::from_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn gateway_for(server: &MockServer) -> ToolGateway {
        let store = Arc::new(CredentialStore::new());
        store.register("default", &server.uri(), "tok").unwrap();
        ToolGateway::new(store)
    }

    fn platform_error(status: u16, message: &str) -> ResponseTemplate {
        ResponseTemplate::new(status).set_body_json(json!({
            "error_code": "PERMISSION_DENIED",
            "message": message
        }))
    }

    #[test]
    fn test_parse_language_is_case_insensitive() {
        for tag in ["python", "Python", "PYTHON"] {
            assert_eq!(parse_language(tag).unwrap(), Language::Python);
        }
        assert_eq!(parse_language("r").unwrap(), Language::R);
        assert!(matches!(
            parse_language("JAVA"),
            Err(GatewayError::UnsupportedLanguage(tag)) if tag == "JAVA"
        ));
    }

    #[tokio::test]
    async fn test_unknown_connection_is_hard_error() {
        let gateway = ToolGateway::new(Arc::new(CredentialStore::new()));

        let err = gateway.list_clusters("staging").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("staging"));
    }

    #[tokio::test]
    async fn test_add_connection_then_list() {
        let gateway = ToolGateway::new(Arc::new(CredentialStore::new()));

        let message = gateway
            .add_connection("x", "https://x.example", "t")
            .unwrap();
        assert_eq!(message, "Connection 'x' added successfully");
        assert_eq!(gateway.list_connections().connections, vec!["x"]);
    }

    #[tokio::test]
    async fn test_list_clusters_projects_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/2.1/clusters/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "clusters": [{
                    "cluster_id": "c-1",
                    "cluster_name": "etl",
                    "state": "RUNNING",
                    "node_type_id": "i3.xlarge",
                    "num_workers": 4,
                    "spark_version": "15.4.x-scala2.12"
                }]
            })))
            .mount(&server)
            .await;

        let outcome = gateway_for(&server).await.list_clusters("default").await.unwrap();
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!([{
                "cluster_id": "c-1",
                "cluster_name": "etl",
                "state": "RUNNING",
                "node_type_id": "i3.xlarge",
                "num_workers": 4
            }])
        );
    }

    #[tokio::test]
    async fn test_listing_failures_become_error_lists() {
        let server = MockServer::start().await;
        for endpoint in [
            "/api/2.1/clusters/list",
            "/api/2.0/sql/warehouses",
            "/api/2.1/unity-catalog/catalogs",
            "/api/2.1/unity-catalog/schemas",
            "/api/2.1/unity-catalog/tables",
            "/api/2.0/workspace/list",
        ] {
            Mock::given(path(endpoint))
                .respond_with(platform_error(403, "denied"))
                .mount(&server)
                .await;
        }

        let gateway = gateway_for(&server).await;
        let expected = json!([{"error": "denied"}]);

        let clusters = gateway.list_clusters("default").await.unwrap();
        assert_eq!(serde_json::to_value(&clusters).unwrap(), expected);
        let warehouses = gateway.list_sql_warehouses("default").await.unwrap();
        assert_eq!(serde_json::to_value(&warehouses).unwrap(), expected);
        let catalogs = gateway.list_catalogs("default").await.unwrap();
        assert_eq!(serde_json::to_value(&catalogs).unwrap(), expected);
        let schemas = gateway.list_schemas("default", "main").await.unwrap();
        assert_eq!(serde_json::to_value(&schemas).unwrap(), expected);
        let tables = gateway.list_tables("default", "main", "default").await.unwrap();
        assert_eq!(serde_json::to_value(&tables).unwrap(), expected);
        let notebooks = gateway.list_notebooks("default", "/").await.unwrap();
        assert_eq!(serde_json::to_value(&notebooks).unwrap(), expected);
    }

    #[tokio::test]
    async fn test_create_notebook_rejects_language_without_backend_call() {
        let server = MockServer::start().await;
        Mock::given(path("/api/2.0/workspace/import"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let err = gateway_for(&server)
            .await
            .create_notebook("default", "/Users/me/nb", "JAVA", "")
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::UnsupportedLanguage(_)));
    }

    #[tokio::test]
    async fn test_create_notebook_accepts_any_case() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/workspace/import"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(3)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        for language in ["python", "Python", "PYTHON"] {
            let outcome = gateway
                .create_notebook("default", "/Users/me/nb", language, "")
                .await
                .unwrap();
            assert_eq!(
                outcome,
                ToolOutcome::Success("Notebook created at /Users/me/nb".to_string())
            );
        }
    }

    #[tokio::test]
    async fn test_create_notebook_backend_failure_is_structured() {
        let server = MockServer::start().await;
        Mock::given(path("/api/2.0/workspace/import"))
            .respond_with(platform_error(400, "Parent folder does not exist"))
            .mount(&server)
            .await;

        let outcome = gateway_for(&server)
            .await
            .create_notebook("default", "/missing/nb", "SQL", "SELECT 1")
            .await
            .unwrap();
        assert_eq!(
            outcome.failure().map(|f| f.error.as_str()),
            Some("Parent folder does not exist")
        );
    }

    #[tokio::test]
    async fn test_get_notebook_content() {
        let server = MockServer::start().await;
        Mock::given(path("/api/2.0/workspace/export"))
            .and(query_param("path", "/Users/me/nb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": "IyBEYXRhYnJpY2tzIG5vdGVib29rIHNvdXJjZQ=="
            })))
            .mount(&server)
            .await;
        Mock::given(path("/api/2.0/workspace/export"))
            .and(query_param("path", "/Users/me/gone"))
            .respond_with(platform_error(404, "Path (/Users/me/gone) doesn't exist."))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;

        let content = gateway
            .get_notebook_content("default", "/Users/me/nb")
            .await
            .unwrap();
        assert_eq!(content, NotebookContent::Text("# Databricks notebook source".to_string()));

        let missing = gateway
            .get_notebook_content("default", "/Users/me/gone")
            .await
            .unwrap();
        assert_eq!(
            missing.render(),
            "Error reading notebook: Path (/Users/me/gone) doesn't exist."
        );
    }

    #[tokio::test]
    async fn test_execute_sql_without_warehouses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/2.0/sql/warehouses"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"warehouses": []})))
            .mount(&server)
            .await;
        Mock::given(path("/api/2.0/sql/statements"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let outcome = gateway_for(&server)
            .await
            .execute_sql("default", "SELECT 1", None)
            .await
            .unwrap();
        assert_eq!(outcome, ToolOutcome::Failure(ToolFailure::empty_warehouse_pool()));
    }

    #[tokio::test]
    async fn test_execute_sql_picks_first_warehouse() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/2.0/sql/warehouses"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "warehouses": [{ "id": "wh-first" }, { "id": "wh-second" }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/sql/statements"))
            .and(wiremock::matchers::body_partial_json(json!({
                "statement": "SELECT 1",
                "warehouse_id": "wh-first"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "statement_id": "s-1",
                "status": { "state": "SUCCEEDED" },
                "manifest": { "schema": { "columns": [{ "name": "1" }] } },
                "result": { "data_array": [["1"]] }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = gateway_for(&server)
            .await
            .execute_sql("default", "SELECT 1", Some(""))
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "statement_id": "s-1",
                "status": "SUCCEEDED",
                "result": [["1"]],
                "schema": ["1"]
            })
        );
    }

    #[tokio::test]
    async fn test_execute_sql_with_explicit_warehouse_skips_listing() {
        let server = MockServer::start().await;
        Mock::given(path("/api/2.0/sql/warehouses"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"warehouses": []})))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/sql/statements"))
            .respond_with(platform_error(400, "Table or view not found: nope"))
            .mount(&server)
            .await;

        let outcome = gateway_for(&server)
            .await
            .execute_sql("default", "SELECT * FROM nope", Some("wh-9"))
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"error": "Table or view not found: nope"})
        );
    }

    #[tokio::test]
    async fn test_get_notebook_content_rejects_non_utf8() {
        let server = MockServer::start().await;
        Mock::given(path("/api/2.0/workspace/export"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": "//4=" })))
            .mount(&server)
            .await;

        let content = gateway_for(&server)
            .await
            .get_notebook_content("default", "/Users/me/binary")
            .await
            .unwrap();

        assert!(matches!(content, NotebookContent::Error(_)));
        assert!(content.render().starts_with("Error reading notebook: "));
    }

    #[tokio::test]
    async fn test_execute_sql_submits_statement_once_after_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/sql/statements"))
            .respond_with(ResponseTemplate::new(502))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/sql/statements"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "statement_id": "s-2",
                "status": { "state": "SUCCEEDED" }
            })))
            .expect(0)
            .mount(&server)
            .await;

        let outcome = gateway_for(&server)
            .await
            .execute_sql("default", "INSERT INTO t VALUES (1)", Some("wh"))
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"error": "request failed with status 502"})
        );
    }

    #[tokio::test]
    async fn test_get_table_info_failure_is_structured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/2.1/unity-catalog/tables/main.sales.missing"))
            .respond_with(platform_error(404, "Table 'main.sales.missing' does not exist."))
            .mount(&server)
            .await;

        let outcome = gateway_for(&server)
            .await
            .get_table_info("default", "main", "sales", "missing")
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"error": "Table 'main.sales.missing' does not exist."})
        );
    }

    #[tokio::test]
    async fn test_get_table_info_uses_three_part_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/2.1/unity-catalog/tables/main.sales.orders"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "orders",
                "catalog_name": "main",
                "schema_name": "sales",
                "table_type": "MANAGED",
                "data_source_format": "DELTA",
                "storage_location": "s3://bucket/orders",
                "columns": [
                    { "name": "id", "type_name": "LONG", "type_text": "bigint", "nullable": false },
                    {
                        "name": "note",
                        "type_name": "STRING",
                        "type_text": "string",
                        "comment": "free text",
                        "nullable": true
                    }
                ]
            })))
            .mount(&server)
            .await;

        let outcome = gateway_for(&server)
            .await
            .get_table_info("default", "main", "sales", "orders")
            .await
            .unwrap();

        let ToolOutcome::Success(details) = outcome else {
            panic!("Expected table details");
        };
        assert_eq!(details.table_type.as_deref(), Some("MANAGED"));
        assert_eq!(details.data_source_format.as_deref(), Some("DELTA"));
        assert_eq!(details.columns.len(), 2);
        assert_eq!(details.columns[1].comment.as_deref(), Some("free text"));
    }
}
