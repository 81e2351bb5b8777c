//! Flat records projected from backend responses.
//!
//! Each record carries only the fields its operation reports. Backend enum
//! values become their wire tag, and an absent value becomes `null`.

use brickgate_sdk::api::{
    CatalogInfo, ClusterDetails, ColumnInfo, EndpointInfo, ObjectInfo, SchemaInfo,
    StatementResponse, TableInfo,
};
use serde::{Deserialize, Serialize};

fn tag<T: ToString>(value: Option<&T>) -> Option<String> {
    value.map(ToString::to_string)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster_id: Option<String>,
    pub cluster_name: Option<String>,
    pub state: Option<String>,
    pub node_type_id: Option<String>,
    pub num_workers: Option<i64>,
}

impl From<ClusterDetails> for ClusterSummary {
    fn from(cluster: ClusterDetails) -> Self {
        Self {
            state: tag(cluster.state.as_ref()),
            cluster_id: cluster.cluster_id,
            cluster_name: cluster.cluster_name,
            node_type_id: cluster.node_type_id,
            num_workers: cluster.num_workers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceEntry {
    pub path: Option<String>,
    pub object_type: Option<String>,
    pub language: Option<String>,
    pub size: Option<i64>,
}

impl From<ObjectInfo> for WorkspaceEntry {
    fn from(object: ObjectInfo) -> Self {
        Self {
            object_type: tag(object.object_type.as_ref()),
            language: tag(object.language.as_ref()),
            path: object.path,
            size: object.size,
        }
    }
}

/// Outcome of submitting a SQL statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementSummary {
    pub statement_id: Option<String>,
    pub status: Option<String>,
    pub result: Option<Vec<Vec<Option<String>>>>,
    pub schema: Option<Vec<Option<String>>>,
}

impl From<StatementResponse> for StatementSummary {
    fn from(response: StatementResponse) -> Self {
        Self {
            statement_id: response.statement_id,
            status: response
                .status
                .and_then(|status| tag(status.state.as_ref())),
            result: response.result.and_then(|result| result.data_array),
            schema: response
                .manifest
                .and_then(|manifest| manifest.schema)
                .map(|schema| schema.columns.into_iter().map(|c| c.name).collect()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub full_name: Option<String>,
    pub catalog_type: Option<String>,
}

impl From<CatalogInfo> for CatalogSummary {
    fn from(catalog: CatalogInfo) -> Self {
        Self {
            catalog_type: tag(catalog.catalog_type.as_ref()),
            name: catalog.name,
            comment: catalog.comment,
            full_name: catalog.full_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaSummary {
    pub name: Option<String>,
    pub catalog_name: Option<String>,
    pub comment: Option<String>,
    pub full_name: Option<String>,
}

impl From<SchemaInfo> for SchemaSummary {
    fn from(schema: SchemaInfo) -> Self {
        Self {
            name: schema.name,
            catalog_name: schema.catalog_name,
            comment: schema.comment,
            full_name: schema.full_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSummary {
    pub name: Option<String>,
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_type: Option<String>,
    pub comment: Option<String>,
}

impl From<TableInfo> for TableSummary {
    fn from(table: TableInfo) -> Self {
        Self {
            table_type: tag(table.table_type.as_ref()),
            name: table.name,
            catalog_name: table.catalog_name,
            schema_name: table.schema_name,
            comment: table.comment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: Option<String>,
    pub type_name: Option<String>,
    pub type_text: Option<String>,
    pub comment: Option<String>,
    pub nullable: Option<bool>,
}

impl From<ColumnInfo> for ColumnDescriptor {
    fn from(column: ColumnInfo) -> Self {
        Self {
            name: column.name,
            type_name: column.type_name,
            type_text: column.type_text,
            comment: column.comment,
            nullable: column.nullable,
        }
    }
}

/// Extended table metadata, columns in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDetails {
    pub name: Option<String>,
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_type: Option<String>,
    pub comment: Option<String>,
    pub columns: Vec<ColumnDescriptor>,
    pub storage_location: Option<String>,
    pub data_source_format: Option<String>,
}

impl From<TableInfo> for TableDetails {
    fn from(table: TableInfo) -> Self {
        Self {
            table_type: tag(table.table_type.as_ref()),
            data_source_format: tag(table.data_source_format.as_ref()),
            name: table.name,
            catalog_name: table.catalog_name,
            schema_name: table.schema_name,
            comment: table.comment,
            columns: table
                .columns
                .unwrap_or_default()
                .into_iter()
                .map(ColumnDescriptor::from)
                .collect(),
            storage_location: table.storage_location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseSummary {
    pub id: Option<String>,
    pub name: Option<String>,
    pub state: Option<String>,
    pub cluster_size: Option<String>,
    pub num_clusters: Option<i64>,
}

impl From<EndpointInfo> for WarehouseSummary {
    fn from(warehouse: EndpointInfo) -> Self {
        Self {
            state: tag(warehouse.state.as_ref()),
            id: warehouse.id,
            name: warehouse.name,
            cluster_size: warehouse.cluster_size,
            num_clusters: warehouse.num_clusters,
        }
    }
}

/// Names of the registered connections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionList {
    pub connections: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use brickgate_sdk::api::{
        ClusterState, ResultData, ResultManifest, ResultSchema, StatementState, StatementStatus,
        TableType,
    };
    use serde_json::json;

    #[test]
    fn test_cluster_state_maps_to_tag() {
        let summary = ClusterSummary::from(ClusterDetails {
            cluster_id: Some("c-1".to_string()),
            state: Some(ClusterState::Terminated),
            spark_version: Some("15.4.x-scala2.12".to_string()),
            ..Default::default()
        });

        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({
                "cluster_id": "c-1",
                "cluster_name": null,
                "state": "TERMINATED",
                "node_type_id": null,
                "num_workers": null
            })
        );
    }

    #[test]
    fn test_statement_without_manifest_has_null_schema() {
        let summary = StatementSummary::from(StatementResponse {
            statement_id: Some("s-1".to_string()),
            status: Some(StatementStatus {
                state: Some(StatementState::Pending),
            }),
            manifest: None,
            result: None,
        });

        assert_eq!(summary.status.as_deref(), Some("PENDING"));
        assert!(summary.schema.is_none());
        assert!(summary.result.is_none());
    }

    #[test]
    fn test_statement_projects_columns_and_rows() {
        let summary = StatementSummary::from(StatementResponse {
            statement_id: Some("s-2".to_string()),
            status: Some(StatementStatus { state: None }),
            manifest: Some(ResultManifest {
                schema: Some(ResultSchema {
                    column_count: Some(2),
                    columns: vec![
                        brickgate_sdk::api::ResultColumn {
                            name: Some("id".to_string()),
                            ..Default::default()
                        },
                        brickgate_sdk::api::ResultColumn {
                            name: Some("label".to_string()),
                            ..Default::default()
                        },
                    ],
                }),
                total_row_count: Some(1),
            }),
            result: Some(ResultData {
                data_array: Some(vec![vec![Some("1".to_string()), None]]),
                row_count: Some(1),
            }),
        });

        assert!(summary.status.is_none());
        assert_eq!(
            summary.schema,
            Some(vec![Some("id".to_string()), Some("label".to_string())])
        );
        assert_eq!(summary.result, Some(vec![vec![Some("1".to_string()), None]]));
    }

    #[test]
    fn test_table_details_keep_column_order() {
        let details = TableDetails::from(TableInfo {
            name: Some("orders".to_string()),
            table_type: Some(TableType::Other("METRIC_VIEW".to_string())),
            columns: Some(vec![
                ColumnInfo {
                    name: Some("b".to_string()),
                    nullable: Some(true),
                    ..Default::default()
                },
                ColumnInfo {
                    name: Some("a".to_string()),
                    nullable: Some(false),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        });

        assert_eq!(details.table_type.as_deref(), Some("METRIC_VIEW"));
        let names: Vec<_> = details.columns.iter().filter_map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(details.data_source_format.is_none());
    }
}
