//! Workspace objects API endpoints (notebooks, folders, files).

use crate::client::WorkspaceClient;
use crate::error::{SdkError, SdkResult};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

wire_enum!(
    /// Kind of object stored in the workspace tree.
    ObjectType {
        Notebook => "NOTEBOOK",
        Directory => "DIRECTORY",
        Library => "LIBRARY",
        File => "FILE",
        Repo => "REPO",
        Dashboard => "DASHBOARD",
    }
);

wire_enum!(
    /// Source language of a notebook.
    Language {
        Python => "PYTHON",
        Sql => "SQL",
        Scala => "SCALA",
        R => "R",
    }
);

wire_enum!(
    /// Serialization format for import and export.
    ImportFormat {
        Source => "SOURCE",
        Html => "HTML",
        Jupyter => "JUPYTER",
        Dbc => "DBC",
        RMarkdown => "R_MARKDOWN",
        Auto => "AUTO",
    }
);

/// Workspace API for listing, uploading and downloading objects.
pub struct WorkspaceApi<'a> {
    client: &'a WorkspaceClient,
}

impl<'a> WorkspaceApi<'a> {
    pub(crate) fn new(client: &'a WorkspaceClient) -> Self {
        Self { client }
    }

    /// List the direct children of a workspace path.
    pub async fn list(&self, path: &str) -> SdkResult<Vec<ObjectInfo>> {
        let response: ListObjectsResponse = self
            .client
            .http
            .get_with_query("/api/2.0/workspace/list", &[("path", path)])
            .await?;
        Ok(response.objects)
    }

    /// Upload content to a workspace path.
    pub async fn upload(&self, request: &UploadRequest<'_>) -> SdkResult<()> {
        let body = ImportRequest {
            path: request.path,
            format: request.format.clone(),
            language: request.language.clone(),
            content: STANDARD.encode(request.content),
            overwrite: request.overwrite,
        };

        self.client
            .http
            .post_no_response("/api/2.0/workspace/import", &body)
            .await
    }

    /// Download an object in `SOURCE` format, returning the raw bytes.
    pub async fn download(&self, path: &str) -> SdkResult<Vec<u8>> {
        let response: ExportResponse = self
            .client
            .http
            .get_with_query(
                "/api/2.0/workspace/export",
                &[("path", path), ("format", ImportFormat::Source.as_str())],
            )
            .await?;

        STANDARD
            .decode(response.content.as_bytes())
            .map_err(|e| SdkError::Decode(e.to_string()))
    }
}

/// Parameters for [`WorkspaceApi::upload`].
#[derive(Debug, Clone)]
pub struct UploadRequest<'a> {
    pub path: &'a str,
    pub format: ImportFormat,
    pub language: Option<Language>,
    pub content: &'a [u8],
    pub overwrite: bool,
}

/// An entry in the workspace tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectInfo {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub object_type: Option<ObjectType>,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub object_id: Option<i64>,
    #[serde(default)]
    pub size: Option<i64>,
}

#[derive(Debug, Serialize)]
struct ImportRequest<'a> {
    path: &'a str,
    format: ImportFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<Language>,
    content: String,
    overwrite: bool,
}

#[derive(Debug, Deserialize)]
struct ListObjectsResponse {
    #[serde(default)]
    objects: Vec<ObjectInfo>,
}

#[derive(Debug, Deserialize)]
struct ExportResponse {
    #[serde(default)]
    content: String,
}
