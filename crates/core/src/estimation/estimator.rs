//! Schema estimation engine

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;
use serde_json::Value;

use super::config::EstimateConfig;
use super::error::EstimateError;
use super::paths::{enumerate_paths, resolve_path};
use super::types::{
    EnumEstimate, ObservedValue, PathEntry, PathStats, SchemaEstimate, ValueKind,
};

/// Cutoff for the number of distinct values that still reads as an
/// enumeration rather than an open-ended field.
pub const ENUM_VALUE_LIMIT: usize = 50;

/// Progress statistics from schema estimation
#[derive(Debug, Clone, Default, Serialize)]
pub struct EstimationStats {
    /// Total documents ingested
    pub documents_processed: usize,
    /// Documents skipped (invalid JSON)
    pub documents_skipped: usize,
    /// Distinct paths discovered so far
    pub paths_discovered: usize,
}

/// Schema estimation engine
///
/// Ingests a collection of JSON documents and aggregates per-path
/// statistics: presence counts, frequency, observed type tags, and a
/// distinct-value enumeration estimate.
pub struct SchemaEstimator {
    config: EstimateConfig,
    /// Retained documents, in ingest order
    documents: Vec<Value>,
    /// Paths in first-seen order across the collection
    path_order: Vec<String>,
    /// Presence counts: documents whose own path set contains the path
    path_presence: HashMap<String, usize>,
    /// Documents skipped by `add_json`
    skipped_count: usize,
}

impl SchemaEstimator {
    /// Create a new estimator with default configuration
    pub fn new() -> Self {
        Self::with_config(EstimateConfig::default())
    }

    /// Create a new estimator with custom configuration
    pub fn with_config(config: EstimateConfig) -> Self {
        Self {
            config,
            documents: Vec::new(),
            path_order: Vec::new(),
            path_presence: HashMap::new(),
            skipped_count: 0,
        }
    }

    /// Add a single JSON string; invalid JSON is counted as skipped.
    pub fn add_json(&mut self, json: &str) {
        match serde_json::from_str(json) {
            Ok(value) => self.add_value(value),
            Err(_) => self.skipped_count += 1,
        }
    }

    /// Add a parsed document for aggregation.
    ///
    /// The document's path set is enumerated immediately; the document is
    /// retained for the value-resolution pass in [`finalize`](Self::finalize).
    pub fn add_value(&mut self, document: Value) {
        // Sample size limit (0 = all)
        if self.config.sample_size > 0 && self.documents.len() >= self.config.sample_size {
            return;
        }

        for path in enumerate_paths(&document) {
            match self.path_presence.entry(path) {
                Entry::Occupied(mut occupied) => *occupied.get_mut() += 1,
                Entry::Vacant(vacant) => {
                    self.path_order.push(vacant.key().clone());
                    vacant.insert(1);
                }
            }
        }

        self.documents.push(document);
    }

    /// Current progress statistics
    pub fn stats(&self) -> EstimationStats {
        EstimationStats {
            documents_processed: self.documents.len(),
            documents_skipped: self.skipped_count,
            paths_discovered: self.path_order.len(),
        }
    }

    /// Number of documents ingested so far
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Aggregate the collection into per-path statistics.
    ///
    /// Entries come out in first-seen path order. An empty collection
    /// produces an empty estimate; the frequency division is guarded.
    pub fn finalize(self) -> SchemaEstimate {
        let document_count = self.documents.len();
        if document_count == 0 {
            return SchemaEstimate {
                entries: Vec::new(),
                document_count: 0,
            };
        }

        let mut entries = Vec::with_capacity(self.path_order.len());

        for path in &self.path_order {
            let sum = self.path_presence.get(path).copied().unwrap_or(0);

            // A document where the path is absent contributes nothing to
            // `sum` but still contributes the undefined marker here.
            let mut types: Vec<ValueKind> = Vec::new();
            let mut values: Vec<ObservedValue> = Vec::new();
            for document in &self.documents {
                let resolved = resolve_path(document, path);

                let kind = ValueKind::classify(resolved);
                if !types.contains(&kind) {
                    types.push(kind);
                }

                if !values.iter().any(|value| value.matches(resolved)) {
                    values.push(ObservedValue::from_resolved(resolved));
                }
            }

            let sum_uniq = values.len();
            let enums = EnumEstimate {
                values: if sum_uniq > ENUM_VALUE_LIMIT {
                    None
                } else {
                    Some(values)
                },
                sum_uniq,
            };

            entries.push(PathEntry {
                path: path.clone(),
                stats: PathStats {
                    sum,
                    freq: sum * 100 / document_count,
                    types,
                    enums,
                },
            });
        }

        tracing::debug!(
            documents = document_count,
            paths = entries.len(),
            "schema estimate finalized"
        );

        SchemaEstimate {
            entries,
            document_count,
        }
    }
}

impl Default for SchemaEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Estimate the schema of a document collection (convenience wrapper)
pub fn estimate_schema(documents: &[Value]) -> SchemaEstimate {
    let mut estimator = SchemaEstimator::new();
    for document in documents {
        estimator.add_value(document.clone());
    }
    estimator.finalize()
}

/// Extract the document collection from a parsed input value.
///
/// Accepts a bare JSON array, or unwraps nested `data` envelopes
/// (`{ "data": { "data": [...] } }`) until an array appears. Anything
/// else fails with [`EstimateError::InputShape`].
pub fn extract_documents(input: Value) -> Result<Vec<Value>, EstimateError> {
    let mut current = input;
    loop {
        match current {
            Value::Array(documents) => return Ok(documents),
            Value::Object(mut map) => match map.remove("data") {
                Some(inner) => current = inner,
                None => {
                    return Err(EstimateError::InputShape(
                        "an object without a data envelope".to_string(),
                    ));
                }
            },
            other => {
                return Err(EstimateError::InputShape(
                    ValueKind::classify(Some(&other)).type_name().to_string(),
                ));
            }
        }
    }
}
