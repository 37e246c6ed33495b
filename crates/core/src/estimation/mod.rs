//! Schema estimation for JSON document collections
//!
//! This module infers the aggregate "shape" of a collection of
//! heterogeneous JSON documents. For every distinct path into the
//! document tree it reports how often the path occurs and which value
//! types appear there; when the set of distinct observed values is small
//! it also lists those values as a candidate enumeration.
//!
//! ## Features
//!
//! - **Path enumeration** - Canonical dotted paths per document, with
//!   array indices collapsed onto a single `"0"` segment
//! - **Statistics aggregation** - Presence counts, frequency percentages,
//!   observed type tags, and distinct-value enumeration estimates
//! - **Ideal object reconstruction** - A single synthetic document
//!   mirroring the union of all observed shapes, annotated with the
//!   statistics of every node
//!
//! ## Example
//!
//! ```rust,ignore
//! use schema_estimate_core::estimation::SchemaEstimator;
//!
//! let mut estimator = SchemaEstimator::new();
//! estimator.add_json(r#"{"name": "Alice", "tags": ["admin"]}"#);
//! estimator.add_json(r#"{"name": "Bob"}"#);
//!
//! let estimate = estimator.finalize();
//! println!("{}", estimate.to_json_pretty());
//! println!("{}", estimate.to_ideal_object());
//! ```

mod config;
mod error;
mod estimator;
mod ideal;
mod paths;
mod types;

pub use config::{EstimateConfig, EstimateConfigBuilder};
pub use error::EstimateError;
pub use estimator::{
    ENUM_VALUE_LIMIT, EstimationStats, SchemaEstimator, estimate_schema, extract_documents,
};
pub use ideal::{STATS_KEY, build_ideal_object};
pub use paths::{ARRAY_SEGMENT, enumerate_paths, resolve_path};
pub use types::{EnumEstimate, ObservedValue, PathEntry, PathStats, SchemaEstimate, ValueKind};
