//! Error types for tola-docdiff.
//!
//! The diff itself is total. Only snapshot ingestion (JSON parsing, history
//! lookup) can fail.

use thiserror::Error;

/// Errors that can occur while loading snapshots.
#[derive(Debug, Error)]
pub enum DocError {
    /// Input is not valid JSON, or does not have the node shape
    #[error("invalid document json: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level JSON value is not an object
    #[error("expected a document object, found {found}")]
    NotAnObject {
        /// JSON type that was found instead
        found: &'static str,
    },

    /// History has no entry with the requested timestamp
    #[error("no history snapshot at timestamp {ts}")]
    SnapshotNotFound {
        /// Requested timestamp
        ts: i64,
    },
}

/// Result type alias for document operations.
pub type DocResult<T> = Result<T, DocError>;

impl DocError {
    /// Create a not-an-object error from the offending value.
    pub fn not_an_object(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        };
        Self::NotAnObject { found }
    }
}
