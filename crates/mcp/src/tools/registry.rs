// Tool registry and helpers shared by the tool implementations

use crate::protocol::{CallToolResult, ToolSchema};
use anyhow::{Context, Result};
use brickgate_core::{GatewayError, DEFAULT_CONNECTION};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments.
    ///
    /// `Err` is reserved for arguments that do not match the schema;
    /// everything else is reported inside the returned result.
    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult>;
}

/// Tool registry for managing available tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let schema = tool.schema();
        self.tools.insert(schema.name.clone(), tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// List all tool schemas, sorted by name
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self.tools.values().map(|t| t.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Argument and result helpers

pub(crate) fn default_connection() -> String {
    DEFAULT_CONNECTION.to_string()
}

pub(crate) fn parse_args<T: DeserializeOwned>(
    tool: &str,
    arguments: serde_json::Value,
) -> Result<T> {
    serde_json::from_value(arguments).with_context(|| format!("Invalid arguments for {}", tool))
}

/// Render a gateway value as text: strings verbatim, anything else as
/// pretty JSON
pub(crate) fn json_result(value: &impl Serialize) -> Result<CallToolResult> {
    let value = serde_json::to_value(value).context("Failed to serialize tool result")?;
    let text = match value {
        serde_json::Value::String(text) => text,
        other => serde_json::to_string_pretty(&other)?,
    };
    Ok(CallToolResult::text(text))
}

/// Render a gateway outcome, turning hard gateway errors into error results
pub(crate) fn gateway_result<T: Serialize>(
    tool: &str,
    outcome: Result<T, GatewayError>,
) -> Result<CallToolResult> {
    match outcome {
        Ok(value) => json_result(&value),
        Err(e) => {
            tracing::warn!("{} rejected: {}", tool, e);
            Ok(CallToolResult::error(e.to_string()))
        }
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: serde_json::Value, required: Vec<&str>) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_string_default(description: &str, default: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description,
        "default": default
    })
}

/// The `connection_name` selector every workspace tool accepts
pub fn json_schema_connection() -> serde_json::Value {
    json_schema_string_default(
        "Name of the Databricks connection to use",
        DEFAULT_CONNECTION,
    )
}
