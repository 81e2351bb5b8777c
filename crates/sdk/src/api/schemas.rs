//! Unity Catalog schemas API endpoints.

use crate::client::WorkspaceClient;
use crate::error::SdkResult;
use crate::transport::Paginated;
use serde::{Deserialize, Serialize};

/// Schemas API.
pub struct SchemasApi<'a> {
    client: &'a WorkspaceClient,
}

impl<'a> SchemasApi<'a> {
    pub(crate) fn new(client: &'a WorkspaceClient) -> Self {
        Self { client }
    }

    /// List the schemas of a catalog.
    pub async fn list(&self, catalog_name: &str) -> SdkResult<Vec<SchemaInfo>> {
        self.client
            .http
            .get_all_pages::<ListSchemasResponse>(
                "/api/2.1/unity-catalog/schemas",
                &[("catalog_name", catalog_name)],
            )
            .await
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub catalog_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListSchemasResponse {
    #[serde(default)]
    schemas: Vec<SchemaInfo>,
    #[serde(default)]
    next_page_token: Option<String>,
}

impl Paginated for ListSchemasResponse {
    type Item = SchemaInfo;

    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }

    fn into_items(self) -> Vec<SchemaInfo> {
        self.schemas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_schemas_scoped_to_catalog() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/2.1/unity-catalog/schemas"))
            .and(query_param("catalog_name", "main"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "schemas": [
                    { "name": "default", "catalog_name": "main", "full_name": "main.default" },
                    {
                        "name": "sales",
                        "catalog_name": "main",
                        "full_name": "main.sales",
                        "comment": "curated"
                    }
                ]
            })))
            .mount(&server)
            .await;

        let client = WorkspaceClient::builder()
            .host(server.uri())
            .token("t")
            .build()
            .unwrap();

        let schemas = client.schemas().list("main").await.unwrap();
        assert_eq!(schemas.len(), 2);
        assert_eq!(schemas[1].comment.as_deref(), Some("curated"));
    }
}
