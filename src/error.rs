//! Error types

use std::io;

use thiserror::Error;

/// Errors produced while loading inputs or rendering scope rows.
#[derive(Debug, Error)]
pub enum ScopeError {
    /// The upstream computation sent a state outside the three known values.
    #[error("object {id} has unrecognized access scope state '{state}'")]
    MalformedState { id: String, state: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[source] io::Error),

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScopeError>;
