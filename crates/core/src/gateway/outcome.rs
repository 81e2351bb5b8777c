//! Result shapes returned by gateway operations.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Display;

/// Message of the failure returned when SQL execution has no warehouse to
/// fall back on.
pub const NO_WAREHOUSES_AVAILABLE: &str = "No SQL warehouses available";

/// Failure value, serialized as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolFailure {
    pub error: String,
}

impl ToolFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Failure for SQL execution when no warehouse id was supplied and the
    /// workspace has none.
    pub fn empty_warehouse_pool() -> Self {
        Self::new(NO_WAREHOUSES_AVAILABLE)
    }
}

/// Uniform outcome of a gateway operation: either the operation's payload
/// or a failure carrying the backend's message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolOutcome<T> {
    Success(T),
    Failure(ToolFailure),
}

impl<T> ToolOutcome<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(e) => Self::Failure(ToolFailure::new(e.to_string())),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn failure(&self) -> Option<&ToolFailure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }
}

/// Outcome of a listing operation.
///
/// Listings report failure inside the list itself, as a single
/// `{"error": ...}` element, instead of the object-shaped failure of
/// [`ToolOutcome`]. Hosts already parse this shape, keep it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListOutcome<T> {
    Items(Vec<T>),
    Failed([ToolFailure; 1]),
}

impl<T> ListOutcome<T> {
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed([ToolFailure::new(error)])
    }

    pub fn from_result<E: Display>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) => Self::Items(items),
            Err(e) => Self::failed(e.to_string()),
        }
    }

    pub fn failure(&self) -> Option<&ToolFailure> {
        match self {
            Self::Items(_) => None,
            Self::Failed([failure]) => Some(failure),
        }
    }
}

/// Outcome of downloading notebook content.
///
/// Both variants serialize as a bare string; failures are rendered inline
/// as `"Error reading notebook: <message>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotebookContent {
    Text(String),
    Error(String),
}

impl NotebookContent {
    /// The string handed to the host.
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Error(message) => format!("Error reading notebook: {}", message),
        }
    }
}

impl Serialize for NotebookContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}
