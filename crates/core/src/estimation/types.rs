//! Statistics types produced by schema estimation

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::ideal::build_ideal_object;

/// Classified kind of a value observed at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Object,
    Array,
    EmptyArray,
    Null,
    /// The path did not address a defined value in the document.
    Undefined,
}

impl ValueKind {
    /// Classify a path-resolution result; `None` means the path was absent.
    pub fn classify(resolved: Option<&Value>) -> Self {
        match resolved {
            None => ValueKind::Undefined,
            Some(Value::Array(items)) => {
                if items.is_empty() {
                    ValueKind::EmptyArray
                } else {
                    ValueKind::Array
                }
            }
            Some(Value::Null) => ValueKind::Null,
            Some(Value::Bool(_)) => ValueKind::Boolean,
            Some(Value::Number(_)) => ValueKind::Number,
            Some(Value::String(_)) => ValueKind::String,
            Some(Value::Object(_)) => ValueKind::Object,
        }
    }

    /// The type-tag string reported in statistics.
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Object => "object",
            ValueKind::Array => "array",
            ValueKind::EmptyArray => "empty array",
            ValueKind::Null => "null",
            ValueKind::Undefined => "undefined",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

impl Serialize for ValueKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.type_name())
    }
}

/// A raw value observed at a path, including the absent marker that JSON
/// itself cannot represent.
///
/// `Undefined` stays distinct from `Defined(Value::Null)` for equality and
/// de-duplication; it only collapses to `null` on serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum ObservedValue {
    /// The path did not address a defined value.
    Undefined,
    /// A defined value, possibly `null`.
    Defined(Value),
}

impl ObservedValue {
    /// Wrap a path-resolution result, cloning the resolved value.
    pub fn from_resolved(resolved: Option<&Value>) -> Self {
        match resolved {
            Some(value) => ObservedValue::Defined(value.clone()),
            None => ObservedValue::Undefined,
        }
    }

    /// Equality against a path-resolution result, without cloning.
    pub fn matches(&self, resolved: Option<&Value>) -> bool {
        match (self, resolved) {
            (ObservedValue::Undefined, None) => true,
            (ObservedValue::Defined(own), Some(other)) => own == other,
            _ => false,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, ObservedValue::Undefined)
    }
}

impl Serialize for ObservedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // undefined has no JSON encoding; emit null
            ObservedValue::Undefined => serializer.serialize_unit(),
            ObservedValue::Defined(value) => value.serialize(serializer),
        }
    }
}

/// Enumeration estimate for a path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumEstimate {
    /// Distinct observed values in first-seen order, or `None` when the
    /// distinct count exceeds the enum limit and the field reads as
    /// open-ended.
    pub values: Option<Vec<ObservedValue>>,
    /// Count of distinct observed values, uncapped.
    pub sum_uniq: usize,
}

/// Per-path statistics aggregated over a document collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStats {
    /// Number of documents in which the path resolves to a defined value.
    pub sum: usize,
    /// Integer percentage: `sum * 100 / document_count`, floored.
    pub freq: usize,
    /// De-duplicated type tags in first-seen order across documents.
    pub types: Vec<ValueKind>,
    /// Distinct-value enumeration estimate.
    pub enums: EnumEstimate,
}

/// One aggregated path with its statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEntry {
    pub path: String,
    pub stats: PathStats,
}

/// The aggregate schema estimate for a whole document collection.
///
/// Entries keep the first-seen order of paths across the collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaEstimate {
    pub entries: Vec<PathEntry>,
    /// Total number of documents aggregated.
    pub document_count: usize,
}

impl SchemaEstimate {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up the statistics for a path.
    pub fn get(&self, path: &str) -> Option<&PathStats> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| &entry.stats)
    }

    /// Reconstruct the ideal object annotated with per-path statistics.
    pub fn to_ideal_object(&self) -> Value {
        build_ideal_object(&self.entries)
    }

    /// Serialize to a pretty JSON string.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
