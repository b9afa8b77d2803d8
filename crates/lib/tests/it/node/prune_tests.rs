//! Tests for recursive pruning

use autoviv::node::{Node, PruneOptions, Seq, Value};
use serde_json::json;

use crate::helpers::{assert_node_json, node_from};

#[test]
fn test_prune_removes_empty_descendant_chains() {
    let mut node = node_from(json!({"a": 2, "b": {"c": {"d": {}}}}));
    node.prune_default();

    assert_node_json(&node, json!({"a": 2}));
}

#[test]
fn test_prune_autovivified_reads() {
    let mut node = Node::new();
    node.get_path("b.c.d").unwrap();
    node.set("a", 2);
    node.prune(PruneOptions::default());

    assert_node_json(&node, json!({"a": 2}));
}

#[test]
fn test_prune_keeps_zero_by_default() {
    let mut node = node_from(json!({"a": 0, "b": 0.0, "c": false}));
    node.prune_default();
    assert_node_json(&node, json!({"a": 0, "b": 0.0, "c": false}));

    node.prune(PruneOptions::default().prune_zero(true));
    assert_node_json(&node, json!({}));
}

#[test]
fn test_prune_removes_falsy_scalars() {
    let mut node = node_from(json!({"a": null, "b": "", "c": "kept", "d": 1}));
    node.prune_default();

    assert_node_json(&node, json!({"c": "kept", "d": 1}));
}

#[test]
fn test_prune_empty_sequence_default_vs_retention() {
    let mut node = node_from(json!({"a": []}));
    node.prune_default();
    assert_node_json(&node, json!({}));

    let mut node = node_from(json!({"a": []}));
    node.prune(PruneOptions::default().prune_empty_seq(false));
    assert_node_json(&node, json!({"a": []}));
}

#[test]
fn test_prune_inside_sequences() {
    let mut node = node_from(json!({
        "items": [0, null, "", {}, {"x": {}}, {"y": 1}, [], [{}], [3]]
    }));
    node.prune_default();

    // Falsy scalars survive inside sequences; emptied containers do not
    assert_node_json(&node, json!({"items": [0, null, "", {"y": 1}, [3]]}));
}

#[test]
fn test_prune_zero_inside_sequences() {
    let mut node = node_from(json!({"items": [0, 1, 0.0, false, "x"], "zeros": [0, 0]}));
    node.prune(PruneOptions::default().prune_zero(true));

    assert_node_json(&node, json!({"items": [1, "x"]}));
}

#[test]
fn test_prune_keeps_emptied_nested_sequences_when_retaining() {
    let mut node = node_from(json!({"a": [[{}], []], "b": {"c": {}}}));
    node.prune(PruneOptions::default().prune_empty_seq(false));

    assert_node_json(&node, json!({"a": [[], []]}));
}

#[test]
fn test_prune_preserves_tuple_kind() {
    let mut node = Node::new().with(
        "t",
        Seq::tuple([Value::Node(Node::new()), Value::from(1), Value::from(2)]),
    );
    node.prune_default();

    let tuple = node["t"].as_seq().unwrap();
    assert!(tuple.is_tuple());
    assert_eq!(tuple, &Seq::tuple([1, 2]));

    let mut node = Node::new().with("t", Seq::tuple([Value::Node(Node::new())]));
    node.prune_default();
    assert!(node.is_empty());
}
