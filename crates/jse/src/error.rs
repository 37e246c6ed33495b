//! Error types for the jse CLI

use schema_estimate_core::estimation::EstimateError;
use thiserror::Error;

/// Errors surfaced by CLI commands
#[derive(Error, Debug)]
pub enum CliError {
    /// File could not be read or written
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file was not valid JSON
    #[error("failed to parse JSON from {path}: {source}")]
    JsonParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Estimation failure from the core library
    #[error(transparent)]
    Estimate(#[from] EstimateError),

    /// Output could not be serialized
    #[error("failed to serialize output: {0}")]
    Serialize(String),
}
