//! End-to-end tests for schema estimation

use schema_estimate_core::estimation::{
    STATS_KEY, SchemaEstimator, ValueKind, estimate_schema,
};
use serde_json::{Value, json};

#[test]
fn test_mixed_and_empty_arrays() {
    let estimate = estimate_schema(&[json!({"fooArray": [1, 2, 3]}), json!({"fooArray": []})]);

    let array_stats = estimate.get("fooArray").unwrap();
    assert_eq!(array_stats.sum, 2);
    assert_eq!(array_stats.freq, 100);
    assert_eq!(
        array_stats.types,
        vec![ValueKind::Array, ValueKind::EmptyArray]
    );

    let element_stats = estimate.get("fooArray.0").unwrap();
    assert_eq!(element_stats.sum, 1);
    assert_eq!(element_stats.freq, 50);
    assert_eq!(
        element_stats.types,
        vec![ValueKind::Number, ValueKind::Undefined]
    );
}

#[test]
fn test_rare_field_frequency() {
    let mut documents: Vec<Value> = (0..9).map(|i| json!({"id": i})).collect();
    documents.push(json!({"id": 9, "rare": "yes"}));

    let estimate = estimate_schema(&documents);
    let stats = estimate.get("rare").unwrap();

    assert_eq!(stats.sum, 1);
    assert_eq!(stats.freq, 10);
    assert!(stats.types.contains(&ValueKind::Undefined));
    assert!(stats.types.contains(&ValueKind::String));
}

#[test]
fn test_all_distinct_strings_read_as_open_ended() {
    let documents: Vec<Value> = (0..100).map(|i| json!({"name": format!("n-{i}")})).collect();

    let estimate = estimate_schema(&documents);
    let stats = estimate.get("name").unwrap();

    assert_eq!(stats.enums.values, None);
    assert_eq!(stats.enums.sum_uniq, 100);
}

#[test]
fn test_frequency_is_floored() {
    let documents = vec![json!({"a": 1, "b": 1}), json!({"a": 1}), json!({"c": 1})];

    let estimate = estimate_schema(&documents);
    assert_eq!(estimate.get("a").unwrap().freq, 66);
    assert_eq!(estimate.get("b").unwrap().freq, 33);
    assert_eq!(estimate.get("c").unwrap().freq, 33);

    for entry in &estimate.entries {
        assert!(entry.stats.sum <= estimate.document_count);
        assert_eq!(
            entry.stats.freq,
            entry.stats.sum * 100 / estimate.document_count
        );
    }
}

#[test]
fn test_enum_count_matches_values() {
    let documents = vec![
        json!({"status": "open"}),
        json!({"status": "closed"}),
        json!({"status": "open"}),
        json!({}),
    ];

    let estimate = estimate_schema(&documents);
    let stats = estimate.get("status").unwrap();
    let values = stats.enums.values.as_ref().unwrap();

    assert_eq!(stats.enums.sum_uniq, values.len());
    // "open", "closed", undefined
    assert_eq!(stats.enums.sum_uniq, 3);
}

#[test]
fn test_estimation_is_idempotent() {
    let documents = vec![
        json!({"user": {"name": "Alice", "tags": ["a", "b"]}}),
        json!({"user": {"name": "Bob"}, "extra": null}),
        json!({"user": "not an object"}),
    ];

    let first = estimate_schema(&documents);
    let second = estimate_schema(&documents);
    assert_eq!(first, second);
}

#[test]
fn test_ideal_object_round_trip() {
    let documents = vec![
        json!({"user": {"name": "Alice", "roles": ["admin", "ops"]}}),
        json!({"user": {"name": "Bob"}}),
        json!({"count": 3}),
    ];

    let estimate = estimate_schema(&documents);
    let ideal = estimate.to_ideal_object();

    for entry in &estimate.entries {
        let mut node = &ideal;
        for segment in entry.path.split('.') {
            node = node
                .get(segment)
                .unwrap_or_else(|| panic!("path {} unreachable in ideal object", entry.path));
        }
        assert_eq!(
            node.get(STATS_KEY).unwrap(),
            &serde_json::to_value(&entry.stats).unwrap(),
            "stats mismatch at {}",
            entry.path
        );
    }
}

#[test]
fn test_deeply_nested_mixed_containers() {
    let documents = vec![json!({
        "matrix": [[{"x": 1}], [{"x": 2}, {"y": 3}]],
        "meta": {"0": "numeric key"}
    })];

    let estimate = estimate_schema(&documents);
    let order: Vec<&str> = estimate.entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "matrix",
            "matrix.0",
            "matrix.0.0",
            "matrix.0.0.x",
            "matrix.0.0.y",
            "meta",
            "meta.0",
        ]
    );

    // resolution follows element 0 of each collapsed level, so "y" (only on
    // a later sibling) resolves as undefined
    let y_stats = estimate.get("matrix.0.0.y").unwrap();
    assert_eq!(y_stats.sum, 1);
    assert_eq!(y_stats.types, vec![ValueKind::Undefined]);
}

#[test]
fn test_incremental_ingest_matches_batch() {
    let documents = vec![json!({"a": [1, "two"]}), json!({"a": null})];

    let mut estimator = SchemaEstimator::new();
    for document in &documents {
        estimator.add_value(document.clone());
    }

    assert_eq!(estimator.finalize(), estimate_schema(&documents));
}
