//! Process-wide registry of named workspace credentials.

use crate::config::{connection_from_env, read_connections_file};
use crate::connection::ConnectionRecord;
use crate::error::{CoreError, CoreResult};
use brickgate_sdk::WorkspaceClient;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

/// Named connection records, resolved into fresh clients on demand.
///
/// Created once at startup and shared by reference; registration takes the
/// write lock, every other operation the read lock.
pub struct CredentialStore {
    connections: RwLock<HashMap<String, ConnectionRecord>>,
}

impl CredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Load connections from the connections file, falling back to the
    /// process environment when the file yields nothing.
    pub fn load(config_path: &Path) -> Self {
        Self::load_with_env(config_path, |key| std::env::var(key).ok())
    }

    /// Like [`CredentialStore::load`] with an explicit environment lookup.
    pub fn load_with_env(config_path: &Path, env: impl Fn(&str) -> Option<String>) -> Self {
        let store = Self::new();

        {
            let mut connections = store.write();
            for (key, record) in read_connections_file(config_path) {
                connections.insert(key, record);
            }

            if connections.is_empty() {
                if let Some(record) = connection_from_env(env) {
                    tracing::info!("Using connection '{}' from environment", record.name);
                    connections.insert(record.name.clone(), record);
                }
            } else {
                tracing::info!(
                    "Loaded {} connection(s) from {}",
                    connections.len(),
                    config_path.display()
                );
            }

            if connections.is_empty() {
                tracing::warn!("No connections configured");
            }
        }

        store
    }

    /// Insert or replace the connection stored under `name`.
    pub fn register(&self, name: &str, host: &str, token: &str) -> CoreResult<()> {
        let record = ConnectionRecord::new(name, host, token)?;

        let previous = self.write().insert(name.to_string(), record);
        if previous.is_some() {
            tracing::info!("Replaced connection '{}'", name);
        } else {
            tracing::info!("Registered connection '{}'", name);
        }

        Ok(())
    }

    /// Build a new client for the named connection.
    pub fn resolve(&self, name: &str) -> CoreResult<WorkspaceClient> {
        let record = self
            .get(name)
            .ok_or_else(|| CoreError::NotFound(name.to_string()))?;

        WorkspaceClient::new(&record.host, record.token).map_err(|source| CoreError::Client {
            name: name.to_string(),
            source,
        })
    }

    /// Get a copy of the record stored under `name`.
    pub fn get(&self, name: &str) -> Option<ConnectionRecord> {
        self.read().get(name).cloned()
    }

    /// Names of all registered connections, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // The map is never left half-updated, so a poisoned lock is still usable.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, ConnectionRecord>> {
        self.connections.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, ConnectionRecord>> {
        self.connections.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
