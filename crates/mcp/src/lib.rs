// MCP (Model Context Protocol) server exposing Databricks workspace tools
// to agent hosts over stdio

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
