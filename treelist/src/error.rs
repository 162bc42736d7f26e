//! Error types for the fallible edges of the engine.
//!
//! Flattening, transitions and rendering never fail. Only loading node
//! collections or configuration from disk, and the opt-in id validation,
//! return errors.

use thiserror::Error;

/// Errors produced while loading or validating tree data.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Reading a file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON document could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two nodes reachable from the root collection share an id.
    #[error("duplicate node id '{0}'")]
    DuplicateId(String),
}
