//! Workspace client for the brickgate SDK.

use crate::api::*;
use crate::config::{parse_host, ClientConfig, RetryConfig};
use crate::error::{SdkError, SdkResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;

/// Client bound to one Databricks workspace and one access token.
#[derive(Clone)]
pub struct WorkspaceClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl WorkspaceClient {
    /// Create a new client builder.
    pub fn builder() -> WorkspaceClientBuilder {
        WorkspaceClientBuilder::new()
    }

    /// Create a client for a host and token with default settings.
    pub fn new(host: &str, token: impl Into<String>) -> SdkResult<Self> {
        Self::from_config(ClientConfig::new(host, token)?)
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> SdkResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// The workspace URL this client talks to.
    pub fn host(&self) -> &url::Url {
        &self.config.host
    }

    /// The access token this client authenticates with.
    pub fn token(&self) -> &str {
        &self.config.token
    }

    /// Get the clusters API.
    pub fn clusters(&self) -> ClustersApi<'_> {
        ClustersApi::new(self)
    }

    /// Get the workspace objects API.
    pub fn workspace(&self) -> WorkspaceApi<'_> {
        WorkspaceApi::new(self)
    }

    /// Get the SQL statement execution API.
    pub fn statement_execution(&self) -> StatementExecutionApi<'_> {
        StatementExecutionApi::new(self)
    }

    /// Get the SQL warehouses API.
    pub fn warehouses(&self) -> WarehousesApi<'_> {
        WarehousesApi::new(self)
    }

    /// Get the Unity Catalog catalogs API.
    pub fn catalogs(&self) -> CatalogsApi<'_> {
        CatalogsApi::new(self)
    }

    /// Get the Unity Catalog schemas API.
    pub fn schemas(&self) -> SchemasApi<'_> {
        SchemasApi::new(self)
    }

    /// Get the Unity Catalog tables API.
    pub fn tables(&self) -> TablesApi<'_> {
        TablesApi::new(self)
    }
}

impl std::fmt::Debug for WorkspaceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkspaceClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for creating a [`WorkspaceClient`].
pub struct WorkspaceClientBuilder {
    host: Option<String>,
    token: Option<String>,
    timeout: Duration,
    retry_config: RetryConfig,
}

impl WorkspaceClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            host: None,
            token: None,
            timeout: Duration::from_secs(30),
            retry_config: RetryConfig::default(),
        }
    }

    /// Set the workspace URL. A missing scheme defaults to `https://`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the personal access token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry configuration.
    pub fn retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Build the client.
    pub fn build(self) -> SdkResult<WorkspaceClient> {
        let host = self
            .host
            .ok_or_else(|| SdkError::Config("host is required".to_string()))?;
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| SdkError::Config("token is required".to_string()))?;

        let config = ClientConfig {
            host: parse_host(&host)?,
            token,
            timeout: self.timeout,
            retry_config: self.retry_config,
        };

        WorkspaceClient::from_config(config)
    }
}

impl Default for WorkspaceClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
