//! Tests for N-way extend, its list strategies and option handling

use autoviv::node::{ExtendOptions, ListAction, Node, NodeError, Seq, Value};
use serde_json::json;

use crate::helpers::{assert_node_json, extend_defaults, extend_params, keys_of, node_from};

fn ammend() -> ExtendOptions {
    ExtendOptions::default().list_action(ListAction::Ammend)
}

fn extend_json(sources: Vec<serde_json::Value>, options: &ExtendOptions) -> serde_json::Value {
    match Node::extend(sources, options) {
        Value::Node(node) => node.to_json(),
        other => other.to_plain().into(),
    }
}

#[test]
fn test_extend_without_sources_is_empty_node() {
    let result = Node::extend(Vec::<Value>::new(), &ExtendOptions::default());
    assert_eq!(result, Value::Node(Node::new()));
}

#[test]
fn test_extend_replace_default() {
    let merged = extend_json(
        vec![json!({"a": 1}), json!({"a": 2})],
        &ExtendOptions::default(),
    );
    assert_eq!(merged, json!({"a": 2}));
}

#[test]
fn test_extend_append() {
    let options = ExtendOptions::default().list_action(ListAction::Append);
    let merged = Node::extend([json!([1, 2]), json!([3, 4])], &options);

    assert_eq!(merged, Value::from(vec![1, 2, 3, 4]));
}

#[test]
fn test_extend_reset_on_kind_mismatch() {
    let merged = Node::extend([json!({"a": 1}), json!([1, 2])], &ExtendOptions::default());
    assert_eq!(merged, Value::from(vec![1, 2]));

    let merged = Node::extend([json!([1, 2]), json!({"a": 1})], &ExtendOptions::default());
    assert_node_json(merged.as_node().unwrap(), json!({"a": 1}));

    // Append onto a discarded map starts a fresh sequence
    let options = ExtendOptions::default().list_action(ListAction::Append);
    let merged = Node::extend([json!({"a": 1}), json!([1]), json!([2])], &options);
    assert_eq!(merged, Value::from(vec![1, 2]));
}

#[test]
fn test_extend_scalar_sources() {
    let merged = Node::extend([json!({"a": 1}), json!("last")], &ExtendOptions::default());
    assert_eq!(merged, "last");

    let merged = Node::extend([json!(1), json!(2)], &ExtendOptions::default());
    assert_eq!(merged, 2i64);
}

#[test]
fn test_extend_shallow_overwrites_nested_maps() {
    let merged = Node::extend([extend_defaults(), extend_params()], &ExtendOptions::default());
    let node = merged.as_node().unwrap();

    assert_node_json(
        node,
        json!({
            "tier_1_1": {
                "tier_2_0": true,
                "tier_2_1": 234234,
                "tier_2_4": {"tier_3_0": "really deep dict"}
            },
            "tier_1_2": ["d", "e"],
            "tier_1_0": "another string"
        }),
    );
    assert_eq!(keys_of(node), vec!["tier_1_1", "tier_1_2", "tier_1_0"]);
}

#[test]
fn test_extend_deep() {
    let options = ExtendOptions::default().deep(true);
    let merged = Node::extend([extend_defaults(), extend_params()], &options);

    assert_node_json(
        merged.as_node().unwrap(),
        json!({
            "tier_1_1": {
                "tier_2_0": true,
                "tier_2_1": 234234,
                "tier_2_2": "a string",
                "tier_2_3": ["this", "is", "DEEP"],
                "tier_2_4": {"tier_3_0": "really deep dict"}
            },
            "tier_1_2": ["d", "e"],
            "tier_1_0": "another string"
        }),
    );
}

#[test]
fn test_extend_deep_append() {
    let options = ExtendOptions::default()
        .deep(true)
        .list_action(ListAction::Append);
    let merged = Node::extend([extend_defaults(), extend_params()], &options);
    let node = merged.as_node().unwrap();

    assert_eq!(
        node.peek("tier_1_2").unwrap(),
        &Value::from(vec!["a", "b", "c", "d", "e"])
    );
    assert_eq!(
        node.peek_path("tier_1_1.tier_2_3").unwrap(),
        &Value::from(vec!["this", "is", "DEEP"])
    );
}

#[test]
fn test_extend_deep_ammend() {
    let merged = Node::extend([extend_defaults(), extend_params()], &ammend().deep(true));

    assert_eq!(
        merged.as_node().unwrap().peek("tier_1_2").unwrap(),
        &Value::from(vec!["d", "e", "c"])
    );
}

#[test]
fn test_extend_does_not_alias_sources() {
    let source = node_from(json!({"a": {"b": 1}}));
    let mut merged = Node::extend([source.clone()], &ExtendOptions::default().deep(true));
    merged.get("a").unwrap().set("b", 2).unwrap();

    assert_eq!(source.peek_path("a.b"), Some(&Value::Int(1)));
}

#[test]
fn test_extend_preserves_tuple_kind() {
    let merged = Node::extend(
        [Seq::tuple([1, 2]), Seq::tuple([3])],
        &ExtendOptions::default().list_action(ListAction::Append),
    );
    assert!(merged.as_seq().unwrap().is_tuple());
    assert_eq!(merged, Value::Seq(Seq::tuple([1, 2, 3])));
}

// ===== AMMEND: pinned outputs for mismatched lengths =====

#[test]
fn test_ammend_longer_accumulator_keeps_tail() {
    let merged = Node::extend([json!(["a", "b", "c"]), json!(["d", "e"])], &ammend());
    assert_eq!(merged, Value::from(vec!["d", "e", "c"]));
}

#[test]
fn test_ammend_longer_source_replaces() {
    let merged = Node::extend([json!(["a"]), json!(["x", "y", "z"])], &ammend());
    assert_eq!(merged, Value::from(vec!["x", "y", "z"]));
}

#[test]
fn test_ammend_empty_source_keeps_accumulator() {
    let merged = Node::extend([json!(["a", "b"]), json!([])], &ammend());
    assert_eq!(merged, Value::from(vec!["a", "b"]));
}

#[test]
fn test_ammend_single_element_source() {
    let merged = Node::extend([json!(["a", "b", "c", "d"]), json!(["x"])], &ammend());
    assert_eq!(merged, Value::from(vec!["x", "b", "c", "d"]));
}

#[test]
fn test_ammend_equal_lengths() {
    let merged = Node::extend([json!([1, 2]), json!([3, 4])], &ammend());
    assert_eq!(merged, Value::from(vec![3, 4]));

    let merged = Node::extend([json!([1, 2]), json!([3, 4])], &ammend().deep(true));
    assert_eq!(merged, Value::from(vec![3, 4]));
}

#[test]
fn test_ammend_deep_matches_shallow_for_longer_accumulator() {
    let sources = || [json!([{"a": 1}, 2, 3]), json!([{"b": 1}])];
    let shallow = Node::extend(sources(), &ammend());
    let deep = Node::extend(sources(), &ammend().deep(true));

    assert_eq!(shallow, deep);
    assert_eq!(
        extend_json(sources().to_vec(), &ammend()),
        json!([{"b": 1}, 2, 3])
    );
}

#[test]
fn test_ammend_three_sources() {
    let merged = Node::extend(
        [json!([1, 2, 3, 4]), json!([5, 6]), json!([7])],
        &ammend(),
    );
    assert_eq!(merged, Value::from(vec![7, 6, 3, 4]));
}

// ===== OPTIONS =====

#[test]
fn test_extend_with_option_node() {
    let options = Node::new().with("deep", true).with("list_action", "append");
    let merged = Node::extend_with([json!({"l": [1]}), json!({"l": [2]})], &options).unwrap();

    assert_node_json(merged.as_node().unwrap(), json!({"l": [1, 2]}));
}

#[test]
fn test_invalid_options_reject() {
    let bad_deep = Node::new().with("deep", "yes");
    let err = Node::extend_with([json!({"a": 1})], &bad_deep).unwrap_err();
    assert!(matches!(err, NodeError::InvalidOption { .. }));
    assert_eq!(err.option(), Some("deep"));

    let bad_action = Node::new().with("list_action", "merge");
    let err = Node::extend_with([json!({"a": 1})], &bad_action).unwrap_err();
    assert!(err.is_option_error());
    assert_eq!(err.option(), Some("list_action"));
    assert!(err.to_string().contains("merge"));

    let not_text = Node::new().with("list_action", 1);
    assert!(ExtendOptions::from_node(&not_text).unwrap_err().is_option_error());
}

#[test]
fn test_crate_error_classification() {
    let err: autoviv::Error = "merge".parse::<ListAction>().unwrap_err().into();
    assert!(err.is_option_error());
    assert!(err.is_node_error());
    assert_eq!(err.module(), "node");
}
