// Standalone MCP server binary

use anyhow::Result;
use brickgate_core::config::default_config_path;
use brickgate_core::{CredentialStore, ToolGateway};
use brickgate_mcp::server::McpServer;
use brickgate_mcp::tools::{register_all, ToolRegistry};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "brickgate-mcp")]
#[command(about = "MCP server for Databricks workspaces", long_about = None)]
#[command(version)]
struct Args {
    /// Connections file (defaults to databricks_connections.json in the install root)
    #[arg(short, long, env = "BRICKGATE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();

    tracing::info!("Brickgate MCP Server starting...");

    let config_path = args
        .config
        .unwrap_or_else(|| default_config_path(|key| std::env::var(key).ok()));
    tracing::info!("Using connections file {}", config_path.display());

    let store = Arc::new(CredentialStore::load(&config_path));
    tracing::info!("Loaded {} connection(s)", store.len());

    let gateway = ToolGateway::new(store);
    let mut registry = ToolRegistry::new();
    register_all(&mut registry, &gateway);

    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    server.start().await?;

    Ok(())
}
