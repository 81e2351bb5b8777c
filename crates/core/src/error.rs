use brickgate_sdk::SdkError;

pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the credential store.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No connection is registered under the requested name.
    #[error("Connection '{0}' not found")]
    NotFound(String),

    /// A connection record is missing a required field.
    #[error("Invalid connection: {0}")]
    InvalidConnection(String),

    /// A client could not be built from a registered connection.
    #[error("Failed to create client for connection '{name}': {source}")]
    Client {
        name: String,
        #[source]
        source: SdkError,
    },
}

impl CoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
