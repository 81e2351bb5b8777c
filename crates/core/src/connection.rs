use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Name used for the connection synthesized from environment variables,
/// and the default selector of every tool.
pub const DEFAULT_CONNECTION: &str = "default";

/// A named workspace credential.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub name: String,
    pub host: String,
    pub token: String,
}

impl ConnectionRecord {
    /// Create a record, rejecting empty fields.
    pub fn new(
        name: impl Into<String>,
        host: impl Into<String>,
        token: impl Into<String>,
    ) -> CoreResult<Self> {
        let record = Self {
            name: name.into(),
            host: host.into(),
            token: token.into(),
        };

        for (field, value) in [
            ("name", &record.name),
            ("host", &record.host),
            ("token", &record.token),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::InvalidConnection(format!(
                    "'{}' must not be empty",
                    field
                )));
            }
        }

        Ok(record)
    }
}

// Tokens never reach logs.
impl std::fmt::Debug for ConnectionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionRecord")
            .field("name", &self.name)
            .field("host", &self.host)
            .field("token", &"<redacted>")
            .finish()
    }
}
