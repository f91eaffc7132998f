//! Loading JSON inputs from disk

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, ScopeError};
use crate::scope::{ParentNode, Selections};

/// Read and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| ScopeError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "loaded input");
    serde_json::from_str(&content).map_err(|source| ScopeError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Load a computed access scope array.
pub fn load_computed(path: &Path) -> Result<Vec<ParentNode>> {
    load_json(path)
}

/// Load selections; a missing path means nothing is selected.
pub fn load_selections(path: Option<&Path>) -> Result<Selections> {
    match path {
        Some(path) => load_json(path),
        None => Ok(Selections::default()),
    }
}
