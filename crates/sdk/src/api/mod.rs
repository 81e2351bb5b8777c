//! Typed API groups of the Databricks REST surface.

/// Declares a string-tagged platform enum.
///
/// Known tags map to variants, anything else is kept in `Other` so new
/// platform values never fail deserialization. `as_str` is the inverse
/// mapping back to the wire tag.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            /// A tag this client does not know about.
            Other(String),
        }

        impl $name {
            /// The wire tag for this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $tag,)+
                    Self::Other(tag) => tag.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(tag: String) -> Self {
                match tag.as_str() {
                    $($tag => Self::$variant,)+
                    _ => Self::Other(tag),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                String::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

pub mod catalogs;
pub mod clusters;
pub mod schemas;
pub mod statement_execution;
pub mod tables;
pub mod warehouses;
pub mod workspace;

pub use catalogs::{CatalogInfo, CatalogType, CatalogsApi};
pub use clusters::{ClusterDetails, ClusterState, ClustersApi};
pub use schemas::{SchemaInfo, SchemasApi};
pub use statement_execution::{
    ColumnInfo as ResultColumn, ExecuteStatementRequest, ResultData, ResultManifest,
    ResultSchema, StatementExecutionApi, StatementResponse, StatementState, StatementStatus,
};
pub use tables::{ColumnInfo, DataSourceFormat, TableInfo, TableType, TablesApi};
pub use warehouses::{EndpointInfo, WarehouseState, WarehousesApi};
pub use workspace::{ImportFormat, Language, ObjectInfo, ObjectType, UploadRequest, WorkspaceApi};
