//! Unity Catalog catalogs API endpoints.

use crate::client::WorkspaceClient;
use crate::error::SdkResult;
use crate::transport::Paginated;
use serde::{Deserialize, Serialize};

wire_enum!(
    /// How a catalog is backed.
    CatalogType {
        Managed => "MANAGED_CATALOG",
        DeltaSharing => "DELTASHARING_CATALOG",
        System => "SYSTEM_CATALOG",
        Foreign => "FOREIGN_CATALOG",
        Internal => "INTERNAL_CATALOG",
    }
);

/// Catalogs API.
pub struct CatalogsApi<'a> {
    client: &'a WorkspaceClient,
}

impl<'a> CatalogsApi<'a> {
    pub(crate) fn new(client: &'a WorkspaceClient) -> Self {
        Self { client }
    }

    /// List all catalogs in the metastore, following pagination.
    pub async fn list(&self) -> SdkResult<Vec<CatalogInfo>> {
        self.client
            .http
            .get_all_pages::<ListCatalogsResponse>("/api/2.1/unity-catalog/catalogs", &[])
            .await
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub catalog_type: Option<CatalogType>,
    #[serde(default)]
    pub owner: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListCatalogsResponse {
    #[serde(default)]
    catalogs: Vec<CatalogInfo>,
    #[serde(default)]
    next_page_token: Option<String>,
}

impl Paginated for ListCatalogsResponse {
    type Item = CatalogInfo;

    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }

    fn into_items(self) -> Vec<CatalogInfo> {
        self.catalogs
    }
}
