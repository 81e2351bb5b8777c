pub mod catalog;
pub mod clusters;
pub mod connections;
pub mod notebooks;
pub mod sql;
mod registry;

pub use catalog::{GetTableInfoTool, ListCatalogsTool, ListSchemasTool, ListTablesTool};
pub use clusters::ListClustersTool;
pub use connections::{AddConnectionTool, ListConnectionsTool};
pub use notebooks::{CreateNotebookTool, GetNotebookContentTool, ListNotebooksTool};
pub use registry::{
    json_schema_connection, json_schema_object, json_schema_string, json_schema_string_default,
    Tool, ToolRegistry,
};
pub use sql::{ExecuteSqlQueryTool, ListSqlWarehousesTool};

use brickgate_core::ToolGateway;
use std::sync::Arc;

/// Register every Databricks tool against `gateway`
pub fn register_all(registry: &mut ToolRegistry, gateway: &ToolGateway) {
    // Connection management
    registry.register(Arc::new(ListConnectionsTool::new(gateway.clone())));
    registry.register(Arc::new(AddConnectionTool::new(gateway.clone())));

    // Compute
    registry.register(Arc::new(ListClustersTool::new(gateway.clone())));

    // Workspace
    registry.register(Arc::new(CreateNotebookTool::new(gateway.clone())));
    registry.register(Arc::new(ListNotebooksTool::new(gateway.clone())));
    registry.register(Arc::new(GetNotebookContentTool::new(gateway.clone())));

    // SQL
    registry.register(Arc::new(ExecuteSqlQueryTool::new(gateway.clone())));
    registry.register(Arc::new(ListSqlWarehousesTool::new(gateway.clone())));

    // Unity Catalog
    registry.register(Arc::new(ListCatalogsTool::new(gateway.clone())));
    registry.register(Arc::new(ListSchemasTool::new(gateway.clone())));
    registry.register(Arc::new(ListTablesTool::new(gateway.clone())));
    registry.register(Arc::new(GetTableInfoTool::new(gateway.clone())));
}
