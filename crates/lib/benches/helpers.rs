//! Shared helpers for benchmarks

use autoviv::node::{Node, Seq, Value};

/// Builds a node `depth` levels deep with `width` keys per level.
///
/// Leaves alternate between integers, text and short lists so that every
/// value kind is exercised.
pub fn nested_node(depth: usize, width: usize) -> Node {
    let mut node = Node::new();
    for i in 0..width {
        let key = format!("key_{i}");
        if depth > 1 {
            node.set(key, nested_node(depth - 1, width));
        } else {
            let leaf = match i % 3 {
                0 => Value::Int(i as i64),
                1 => Value::Text(format!("value_{i}")),
                _ => Value::Seq(Seq::list([i as i64, 0, i as i64 * 2])),
            };
            node.set(key, leaf);
        }
    }
    node
}

/// Like [`nested_node`], but with empty branches and falsy leaves mixed in
/// for prune to remove.
pub fn sparse_node(depth: usize, width: usize) -> Node {
    let mut node = nested_node(depth, width);
    for i in 0..width {
        node.get_path(format!("empty_{i}.a.b"))
            .expect("Failed to autovivify empty chain");
        node.set(format!("null_{i}"), Value::Null);
    }
    node
}
