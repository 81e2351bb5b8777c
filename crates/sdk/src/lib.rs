//! # brickgate SDK
//!
//! A small typed REST client for Databricks workspaces: clusters,
//! workspace objects, SQL statement execution, SQL warehouses and
//! Unity Catalog metadata.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use brickgate_sdk::{SdkResult, WorkspaceClient};
//!
//! #[tokio::main]
//! async fn main() -> SdkResult<()> {
//!     let client = WorkspaceClient::builder()
//!         .host("https://adb-1234567890.12.azuredatabricks.net")
//!         .token("dapi-your-token")
//!         .build()?;
//!
//!     for cluster in client.clusters().list().await? {
//!         println!("{:?} {:?}", cluster.cluster_name, cluster.state);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::{WorkspaceClient, WorkspaceClientBuilder};
pub use config::{ClientConfig, RetryConfig};
pub use error::{SdkError, SdkResult};
