//! SQL Statement Execution API endpoints.

use crate::client::WorkspaceClient;
use crate::error::SdkResult;
use serde::{Deserialize, Serialize};

wire_enum!(
    /// Execution state of a submitted statement.
    StatementState {
        Pending => "PENDING",
        Running => "RUNNING",
        Succeeded => "SUCCEEDED",
        Failed => "FAILED",
        Canceled => "CANCELED",
        Closed => "CLOSED",
    }
);

/// Statement Execution API for running SQL on a warehouse.
pub struct StatementExecutionApi<'a> {
    client: &'a WorkspaceClient,
}

impl<'a> StatementExecutionApi<'a> {
    pub(crate) fn new(client: &'a WorkspaceClient) -> Self {
        Self { client }
    }

    /// Submit a statement. The platform waits briefly for completion and
    /// returns whatever state the statement reached.
    pub async fn execute_statement(
        &self,
        request: &ExecuteStatementRequest,
    ) -> SdkResult<StatementResponse> {
        self.client.http.post("/api/2.0/sql/statements", request).await
    }
}

/// Request body for [`StatementExecutionApi::execute_statement`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteStatementRequest {
    pub statement: String,
    pub warehouse_id: String,
}

impl ExecuteStatementRequest {
    pub fn new(statement: impl Into<String>, warehouse_id: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            warehouse_id: warehouse_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementResponse {
    #[serde(default)]
    pub statement_id: Option<String>,
    #[serde(default)]
    pub status: Option<StatementStatus>,
    #[serde(default)]
    pub manifest: Option<ResultManifest>,
    #[serde(default)]
    pub result: Option<ResultData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementStatus {
    #[serde(default)]
    pub state: Option<StatementState>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultManifest {
    #[serde(default)]
    pub schema: Option<ResultSchema>,
    #[serde(default)]
    pub total_row_count: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSchema {
    #[serde(default)]
    pub column_count: Option<i64>,
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
}

/// A column of a statement's result set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub type_text: Option<String>,
    #[serde(default)]
    pub position: Option<i64>,
}

/// Inline result chunk. Cells arrive as strings, `null` for SQL NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultData {
    #[serde(default)]
    pub data_array: Option<Vec<Vec<Option<String>>>>,
    #[serde(default)]
    pub row_count: Option<i64>,
}
