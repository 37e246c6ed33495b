//! Path enumeration and resolution for JSON documents

use std::collections::HashSet;

use serde_json::Value;

/// Placeholder segment for array indices.
///
/// All elements of an array collapse onto this single segment, so sibling
/// elements sharing a shape contribute one path instead of one per index.
pub const ARRAY_SEGMENT: &str = "0";

/// Collapse a raw object key into a path segment.
///
/// Keys that parse as a non-negative integer (`"0"`, `"7"`, `"007"`) become
/// [`ARRAY_SEGMENT`]; everything else is kept verbatim.
fn segment_for(raw_key: &str) -> &str {
    if raw_key.parse::<u64>().is_ok() {
        ARRAY_SEGMENT
    } else {
        raw_key
    }
}

/// Enumerate the de-duplicated set of dotted paths reachable in a document.
///
/// Paths are returned in first-encounter order of a depth-first, key-order
/// walk. Scalars and null at the top level yield an empty list; null and
/// scalar values inside the document terminate recursion at that branch.
pub fn enumerate_paths(document: &Value) -> Vec<String> {
    let mut ordered = Vec::new();
    let mut seen = HashSet::new();

    match document {
        Value::Object(map) => {
            for (raw_key, child) in map {
                visit(segment_for(raw_key), child, &mut ordered, &mut seen);
            }
        }
        Value::Array(items) => {
            for child in items {
                visit(ARRAY_SEGMENT, child, &mut ordered, &mut seen);
            }
        }
        _ => {}
    }

    ordered
}

fn visit(segment: &str, child: &Value, ordered: &mut Vec<String>, seen: &mut HashSet<String>) {
    push_path(segment.to_string(), ordered, seen);

    if child.is_object() || child.is_array() {
        for nested in enumerate_paths(child) {
            push_path(format!("{segment}.{nested}"), ordered, seen);
        }
    }
}

fn push_path(path: String, ordered: &mut Vec<String>, seen: &mut HashSet<String>) {
    if seen.insert(path.clone()) {
        ordered.push(path);
    }
}

/// Resolve the value addressed by a dotted path within a document.
///
/// Object segments look up members, array segments look up indices (the
/// collapsed [`ARRAY_SEGMENT`] therefore reads element 0). Returns `None`
/// when the path does not address a defined value, such as a missing
/// member, an out-of-range index, or a scalar encountered mid-walk.
pub fn resolve_path<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = document;

    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}
