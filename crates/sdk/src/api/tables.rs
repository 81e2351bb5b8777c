//! Unity Catalog tables API endpoints.

use crate::client::WorkspaceClient;
use crate::error::SdkResult;
use crate::transport::Paginated;
use serde::{Deserialize, Serialize};

wire_enum!(
    /// Kind of securable table.
    TableType {
        Managed => "MANAGED",
        External => "EXTERNAL",
        View => "VIEW",
        MaterializedView => "MATERIALIZED_VIEW",
        StreamingTable => "STREAMING_TABLE",
        ManagedShallowClone => "MANAGED_SHALLOW_CLONE",
        ExternalShallowClone => "EXTERNAL_SHALLOW_CLONE",
        Foreign => "FOREIGN",
    }
);

wire_enum!(
    /// Storage format of a table's data files.
    DataSourceFormat {
        Delta => "DELTA",
        Csv => "CSV",
        Json => "JSON",
        Avro => "AVRO",
        Parquet => "PARQUET",
        Orc => "ORC",
        Text => "TEXT",
        UnityCatalog => "UNITY_CATALOG",
        DeltaSharing => "DELTASHARING",
    }
);

/// Tables API.
pub struct TablesApi<'a> {
    client: &'a WorkspaceClient,
}

impl<'a> TablesApi<'a> {
    pub(crate) fn new(client: &'a WorkspaceClient) -> Self {
        Self { client }
    }

    /// List the tables of a schema.
    pub async fn list(&self, catalog_name: &str, schema_name: &str) -> SdkResult<Vec<TableInfo>> {
        self.client
            .http
            .get_all_pages::<ListTablesResponse>(
                "/api/2.1/unity-catalog/tables",
                &[("catalog_name", catalog_name), ("schema_name", schema_name)],
            )
            .await
    }

    /// Get a table by its three-part `catalog.schema.table` name.
    pub async fn get(&self, full_name: &str) -> SdkResult<TableInfo> {
        self.client
            .http
            .get(&format!("/api/2.1/unity-catalog/tables/{}", full_name))
            .await
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub catalog_name: Option<String>,
    #[serde(default)]
    pub schema_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub table_type: Option<TableType>,
    #[serde(default)]
    pub data_source_format: Option<DataSourceFormat>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub storage_location: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub columns: Option<Vec<ColumnInfo>>,
}

/// A column of a catalog table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub type_text: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub nullable: Option<bool>,
    #[serde(default)]
    pub position: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ListTablesResponse {
    #[serde(default)]
    tables: Vec<TableInfo>,
    #[serde(default)]
    next_page_token: Option<String>,
}

impl Paginated for ListTablesResponse {
    type Item = TableInfo;

    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }

    fn into_items(self) -> Vec<TableInfo> {
        self.tables
    }
}
