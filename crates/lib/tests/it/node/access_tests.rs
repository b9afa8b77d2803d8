//! Tests for autoviv access, attribute-style access and paths

use autoviv::{
    node::{Node, NodeError, Path, Value},
    path,
};
use serde_json::json;

use crate::helpers::{assert_node_json, keys_of, node_from};

#[test]
fn test_autoviv_linkage() {
    let mut node = Node::new();
    node.get("a")
        .get("b")
        .unwrap()
        .set("c", "v")
        .unwrap();

    assert_eq!(node.peek_path("a.b.c"), Some(&Value::from("v")));

    // Intermediate nodes are the live children, not copies
    let a = node.peek("a").unwrap().as_node().unwrap();
    assert!(!a.is_empty());
    let b = a.peek("b").unwrap().as_node().unwrap();
    assert_eq!(b["c"], "v");
}

#[test]
fn test_writes_through_child_are_visible_in_parent() {
    let mut node = Node::new();
    let child = node.get_node("child").unwrap();
    child.set("x", 1);
    child.set("y", 2);

    assert_node_json(&node, json!({"child": {"x": 1, "y": 2}}));
}

#[test]
fn test_read_of_missing_key_mutates() {
    let mut node = Node::new();
    assert!(!node.contains_key("probe"));

    let value = node.get("probe");
    assert_eq!(value, &Value::Node(Node::new()));
    assert!(node.contains_key("probe"));
}

#[test]
fn test_non_mutating_probes() {
    let node = node_from(json!({"a": {"b": 1}}));

    assert!(node.peek("missing").is_none());
    assert!(!node.contains_key("missing"));
    assert!(node.peek_path("a.missing.deeper").is_none());
    assert!(!node.contains_path("a.b.c"));
    assert!(node.contains_path("a.b"));

    assert_node_json(&node, json!({"a": {"b": 1}}));
}

#[test]
fn test_get_through_scalar_fails() {
    let mut node = node_from(json!({"a": 1}));

    let err = node.get("a").get("b").unwrap_err();
    assert!(matches!(err, NodeError::NotANode { .. }));
    assert_eq!(err.key(), Some("b"));

    let err = node.get_node("a").unwrap_err();
    assert!(err.is_type_error());
}

#[test]
fn test_delete() {
    let mut node = node_from(json!({"a": 1, "b": 2, "c": 3}));

    assert_eq!(node.delete("b").unwrap(), Value::Int(2));
    assert_eq!(keys_of(&node), vec!["a", "c"]);

    let err = node.delete("b").unwrap_err();
    assert!(err.is_not_found_error());
    assert_eq!(err.key(), Some("b"));
}

#[test]
fn test_set_returns_previous_value() {
    let mut node = Node::new();
    assert_eq!(node.set("a", 1), None);
    assert_eq!(node.set("a", 2), Some(Value::Int(1)));
}

#[test]
fn test_attribute_access_shares_autoviv_contract() {
    let mut node = Node::new();
    node.get_attr("config")
        .as_node_mut()
        .unwrap()
        .set_attr("level", 3)
        .unwrap();

    assert_eq!(node.peek_path("config.level"), Some(&Value::Int(3)));
    assert_eq!(node.del_attr("config").unwrap().as_node().unwrap().len(), 1);
    assert!(node.del_attr("config").unwrap_err().is_not_found_error());
}

#[test]
fn test_reserved_attribute_names_are_rejected() {
    let mut node = Node::new();
    for name in ["update", "prune", "copy", "extend", "to_plain", "get"] {
        let err = node.set_attr(name, 1).unwrap_err();
        assert!(err.is_reserved_name_error(), "{name} should be reserved");
        assert!(err.to_string().contains(name));
    }
    assert!(node.is_empty());

    // Subscript-style writes may still use those keys
    node.set("update", 1);
    assert_eq!(node["update"], 1);
}

#[test]
fn test_attribute_names() {
    let node = Node::new()
        .with("alpha", 1)
        .with("not valid", 2)
        .with(7i64, 3)
        .with("_private", 4)
        .with("9lives", 5);

    let names = node.attribute_names();
    // Only the first character has to look like an identifier
    assert_eq!(&names[..3], &["alpha", "not valid", "_private"]);
    assert!(!names.iter().any(|name| name == "9lives"));
    assert!(names.iter().any(|name| name == "prune"));
    assert_eq!(names.len(), 3 + Node::RESERVED_NAMES.len());

    let node = Node::new().with("with-dash", 1);
    assert_eq!(node.attribute_names()[0], "with-dash");
}

#[test]
fn test_set_path_creates_intermediate_nodes() {
    let mut node = Node::new();
    node.set_path("server.http.port", 8080).unwrap();
    node.set_path(path!("server", "http", "host"), "localhost").unwrap();

    assert_node_json(
        &node,
        json!({"server": {"http": {"port": 8080, "host": "localhost"}}}),
    );
}

#[test]
fn test_get_path_autovivifies_leaf() {
    let mut node = Node::new();
    node.get_path("a.b.c").unwrap();

    assert_node_json(&node, json!({"a": {"b": {"c": {}}}}));
}

#[test]
fn test_path_with_integer_component() {
    let mut node = Node::new();
    node.set_path(path!("rows", 3i64, "name"), "third").unwrap();

    assert_eq!(node.peek_path(path!("rows", 3i64, "name")), Some(&Value::from("third")));
    // The dotted form of the same path uses a text key instead
    assert!(node.peek_path("rows.3.name").is_none());
}

#[test]
fn test_path_errors() {
    let mut node = node_from(json!({"a": 5}));

    let err = node.set_path("a.b", 1).unwrap_err();
    assert!(matches!(err, NodeError::NotANode { .. }));

    let err = node.get_path(Path::new()).unwrap_err();
    assert!(matches!(err, NodeError::InvalidPath { .. }));

    let err = node.delete_path("x.y").unwrap_err();
    assert!(err.is_not_found_error());
    assert!(!node.contains_key("x"));
}

#[test]
fn test_delete_path() {
    let mut node = node_from(json!({"a": {"b": 1, "c": 2}}));

    assert_eq!(node.delete_path("a.b").unwrap(), Value::Int(1));
    assert_node_json(&node, json!({"a": {"c": 2}}));

    let err = node.delete_path("a.c.d").unwrap_err();
    assert!(err.is_type_error());
}

#[test]
fn test_index_mut_chains() {
    let mut node = Node::new();
    node["a"].get("b").unwrap().set("c", 1).unwrap();
    *node["z"].get("y").unwrap() = Value::from(true);

    assert_node_json(&node, json!({"a": {"b": {"c": 1}}, "z": {"y": true}}));
}

#[test]
fn test_iteration_in_insertion_order() {
    let node = node_from(json!({"z": 1, "a": 2, "m": 3}));

    let collected: Vec<_> = node.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
    assert_eq!(
        collected,
        vec![
            ("z".to_string(), Value::Int(1)),
            ("a".to_string(), Value::Int(2)),
            ("m".to_string(), Value::Int(3)),
        ]
    );
}
