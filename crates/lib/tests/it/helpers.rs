use autoviv::Node;
use serde_json::json;

// ==========================
// CORE TEST FACTORIES
// ==========================

/// Builds a node from a JSON literal, panicking on non-map input.
pub fn node_from(json: serde_json::Value) -> Node {
    Node::try_from(json).expect("Failed to build node from JSON")
}

/// The nested `defaults` document used by the extend examples.
pub fn extend_defaults() -> Node {
    node_from(json!({
        "tier_1_1": {
            "tier_2_0": false,
            "tier_2_1": 1,
            "tier_2_2": "a string",
            "tier_2_3": ["this", "is", "DEEP"]
        },
        "tier_1_2": ["a", "b", "c"]
    }))
}

/// The nested `params` document used by the extend examples.
pub fn extend_params() -> Node {
    node_from(json!({
        "tier_1_0": "another string",
        "tier_1_1": {
            "tier_2_0": true,
            "tier_2_1": 234234,
            "tier_2_4": {"tier_3_0": "really deep dict"}
        },
        "tier_1_2": ["d", "e"]
    }))
}

// ==========================
// ASSERTION HELPERS
// ==========================

/// Assert that a node converts to exactly the expected JSON
pub fn assert_node_json(node: &Node, expected: serde_json::Value) {
    assert_eq!(node.to_json(), expected, "Node mismatch: {node}");
}

/// Collect a node's keys as display strings, in order
pub fn keys_of(node: &Node) -> Vec<String> {
    node.keys().map(ToString::to_string).collect()
}
