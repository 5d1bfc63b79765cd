//! Error types for graph construction and the JSON mapping layer.
//!
//! The propagation core itself cannot fail: invalid topologies and event
//! chains are rejected here, before any event reaches the graph.

use thiserror::Error;

/// Main error type for stackstate operations.
#[derive(Debug, Error)]
pub enum StackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(String),

    #[error("State '{0}' is not a valid state")]
    UnknownState(String),

    #[error("Timestamp needs to be a number, got '{0}'")]
    InvalidTimestamp(String),

    #[error("Timestamp must be unique across the event chain: {0} appears more than once")]
    DuplicateTimestamp(i64),

    #[error("It's not allowed to have more than one component with id '{0}'")]
    DuplicateComponent(String),

    #[error("Component '{component}' depends on unknown component '{dependency}'")]
    UnknownDependency { component: String, dependency: String },
}

impl From<serde_json::Error> for StackError {
    fn from(e: serde_json::Error) -> Self {
        StackError::Json(e.to_string())
    }
}

/// Result type for stackstate operations.
pub type Result<T> = std::result::Result<T, StackError>;
