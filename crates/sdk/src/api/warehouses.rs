//! SQL Warehouses API endpoints.

use crate::client::WorkspaceClient;
use crate::error::SdkResult;
use serde::{Deserialize, Serialize};

wire_enum!(
    /// Lifecycle state of a SQL warehouse.
    WarehouseState {
        Starting => "STARTING",
        Running => "RUNNING",
        Stopping => "STOPPING",
        Stopped => "STOPPED",
        Deleting => "DELETING",
        Deleted => "DELETED",
    }
);

/// Warehouses API for SQL compute endpoints.
pub struct WarehousesApi<'a> {
    client: &'a WorkspaceClient,
}

impl<'a> WarehousesApi<'a> {
    pub(crate) fn new(client: &'a WorkspaceClient) -> Self {
        Self { client }
    }

    /// List all SQL warehouses visible to the caller.
    pub async fn list(&self) -> SdkResult<Vec<EndpointInfo>> {
        let response: ListWarehousesResponse =
            self.client.http.get("/api/2.0/sql/warehouses").await?;
        Ok(response.warehouses)
    }
}

/// A SQL warehouse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state: Option<WarehouseState>,
    #[serde(default)]
    pub cluster_size: Option<String>,
    #[serde(default)]
    pub num_clusters: Option<i64>,
    #[serde(default)]
    pub auto_stop_mins: Option<i64>,
    #[serde(default)]
    pub creator_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ListWarehousesResponse {
    #[serde(default)]
    warehouses: Vec<EndpointInfo>,
}
