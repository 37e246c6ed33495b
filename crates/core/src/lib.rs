//! Schema Estimate Core - aggregate shape estimation for JSON document collections
//!
//! Provides:
//! - Path enumeration over arbitrarily nested documents
//! - Per-path statistics aggregation (presence, frequency, types, enum candidates)
//! - Ideal object reconstruction annotated with per-path statistics

pub mod estimation;

// Re-export commonly used types
pub use estimation::{
    ENUM_VALUE_LIMIT, EnumEstimate, EstimateConfig, EstimateError, EstimationStats, ObservedValue,
    PathEntry, PathStats, STATS_KEY, SchemaEstimate, SchemaEstimator, ValueKind, build_ideal_object,
    enumerate_paths, estimate_schema, extract_documents, resolve_path,
};
