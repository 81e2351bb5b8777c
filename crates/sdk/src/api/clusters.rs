//! Clusters API endpoints.

use crate::client::WorkspaceClient;
use crate::error::SdkResult;
use crate::transport::Paginated;
use serde::{Deserialize, Serialize};

wire_enum!(
    /// Lifecycle state of a compute cluster.
    ClusterState {
        Pending => "PENDING",
        Running => "RUNNING",
        Restarting => "RESTARTING",
        Resizing => "RESIZING",
        Terminating => "TERMINATING",
        Terminated => "TERMINATED",
        Error => "ERROR",
        Unknown => "UNKNOWN",
    }
);

/// Clusters API for inspecting compute clusters.
pub struct ClustersApi<'a> {
    client: &'a WorkspaceClient,
}

impl<'a> ClustersApi<'a> {
    pub(crate) fn new(client: &'a WorkspaceClient) -> Self {
        Self { client }
    }

    /// List all clusters, following pagination.
    pub async fn list(&self) -> SdkResult<Vec<ClusterDetails>> {
        self.client
            .http
            .get_all_pages::<ListClustersResponse>("/api/2.1/clusters/list", &[])
            .await
    }
}

/// A compute cluster as reported by the workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterDetails {
    #[serde(default)]
    pub cluster_id: Option<String>,
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub state: Option<ClusterState>,
    #[serde(default)]
    pub state_message: Option<String>,
    #[serde(default)]
    pub node_type_id: Option<String>,
    #[serde(default)]
    pub driver_node_type_id: Option<String>,
    #[serde(default)]
    pub num_workers: Option<i64>,
    #[serde(default)]
    pub spark_version: Option<String>,
    #[serde(default)]
    pub creator_user_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ListClustersResponse {
    #[serde(default)]
    clusters: Vec<ClusterDetails>,
    #[serde(default)]
    next_page_token: Option<String>,
}

impl Paginated for ListClustersResponse {
    type Item = ClusterDetails;

    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }

    fn into_items(self) -> Vec<ClusterDetails> {
        self.clusters
    }
}
