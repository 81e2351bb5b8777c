//! Connection discovery: the connections file and the environment fallback.

use crate::connection::{ConnectionRecord, DEFAULT_CONNECTION};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name of the connections file inside the install root.
pub const CONNECTIONS_FILE: &str = "databricks_connections.json";

/// Environment variable overriding the install root.
pub const HOME_ENV: &str = "BRICKGATE_HOME";

/// Environment variables of the single-connection fallback.
pub const HOST_ENV: &str = "DATABRICKS_HOST";
pub const TOKEN_ENV: &str = "DATABRICKS_TOKEN";

/// On-disk shape of the connections file.
///
/// Entries are kept as raw values so that one malformed entry does not
/// reject its siblings.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConnectionsFile {
    #[serde(default)]
    pub connections: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ConnectionEntry {
    name: String,
    host: String,
    token: String,
}

/// Directory the connections file is looked up in: `$BRICKGATE_HOME` when
/// set, otherwise the directory holding the running executable.
pub fn install_root(env: impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(home) = env(HOME_ENV).filter(|h| !h.is_empty()) {
        return PathBuf::from(home);
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Well-known location of the connections file.
pub fn default_config_path(env: impl Fn(&str) -> Option<String>) -> PathBuf {
    install_root(env).join(CONNECTIONS_FILE)
}

/// Read the connections file, returning `(key, record)` pairs for every
/// valid entry.
///
/// A missing or unparsable file yields no entries. Invalid entries are
/// skipped with a warning.
pub fn read_connections_file(path: &Path) -> Vec<(String, ConnectionRecord)> {
    if !path.exists() {
        tracing::debug!("No connections file at {}", path.display());
        return Vec::new();
    }

    let file = match parse_connections_file(path) {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!(
                "Failed to load connections from config file {}: {}",
                path.display(),
                e
            );
            return Vec::new();
        }
    };

    let mut records = Vec::with_capacity(file.connections.len());
    for (key, value) in file.connections {
        let entry: ConnectionEntry = match serde_json::from_value(value) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping connection '{}': {}", key, e);
                continue;
            }
        };

        match ConnectionRecord::new(entry.name, entry.host, entry.token) {
            Ok(record) => records.push((key, record)),
            Err(e) => tracing::warn!("Skipping connection '{}': {}", key, e),
        }
    }

    records
}

fn parse_connections_file(path: &Path) -> Result<ConnectionsFile, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        let value: serde_json::Value = toml::from_str(&content).map_err(|e| e.to_string())?;
        serde_json::from_value(value).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    }
}

/// Build the `"default"` connection from `DATABRICKS_HOST` and
/// `DATABRICKS_TOKEN`, if both are set and non-empty.
pub fn connection_from_env(env: impl Fn(&str) -> Option<String>) -> Option<ConnectionRecord> {
    let host = env(HOST_ENV).filter(|h| !h.is_empty())?;
    let token = env(TOKEN_ENV).filter(|t| !t.is_empty())?;

    ConnectionRecord::new(DEFAULT_CONNECTION, host, token).ok()
}
