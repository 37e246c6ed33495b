//! Ideal object reconstruction
//!
//! Rebuilds a single synthetic document whose structure mirrors the union
//! of all observed paths, with every addressable node annotated by its
//! statistics record.

use serde_json::{Map, Value};

use super::types::PathEntry;

/// Reserved key carrying a node's statistics record.
pub const STATS_KEY: &str = "__stats";

/// Build the ideal object for an ordered list of path statistics.
///
/// For each entry, the path's dot segments are deep-created as object
/// nodes and the statistics are merged in under [`STATS_KEY`], so a parent
/// path's record and its children coexist at adjacent levels. A fresh
/// accumulator is built per call.
pub fn build_ideal_object(entries: &[PathEntry]) -> Value {
    let mut root = Map::new();

    for entry in entries {
        let mut node = &mut root;
        for segment in entry.path.split('.') {
            node = child_object(node, segment);
        }
        node.insert(
            STATS_KEY.to_string(),
            serde_json::to_value(&entry.stats).unwrap_or_default(),
        );
    }

    Value::Object(root)
}

/// Get or create the object node under `key`.
///
/// Intermediate addresses are treated as object containers unconditionally;
/// anything else already stored there is replaced.
fn child_object<'a>(node: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    let slot = node
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just coerced to an object"),
    }
}
