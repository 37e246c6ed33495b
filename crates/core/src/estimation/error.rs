//! Error types for schema estimation

use thiserror::Error;

/// Errors that can occur during schema estimation
#[derive(Error, Debug, Clone)]
pub enum EstimateError {
    /// The input value is not usable as a document collection
    #[error("invalid document collection: expected an array, found {0}")]
    InputShape(String),
}
