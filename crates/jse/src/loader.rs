//! Document collection loading

use std::fs;
use std::path::Path;

use schema_estimate_core::estimation::extract_documents;
use serde_json::Value;

use crate::error::CliError;

/// Read a JSON file and extract the document collection from it.
///
/// The file may hold the collection directly as an array, or wrapped in
/// nested `data` envelopes (`{ "data": { "data": [...] } }`).
pub fn read_documents(path: &Path) -> Result<Vec<Value>, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let parsed: Value = serde_json::from_str(&content).map_err(|source| CliError::JsonParse {
        path: path.display().to_string(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "input parsed");

    Ok(extract_documents(parsed)?)
}
