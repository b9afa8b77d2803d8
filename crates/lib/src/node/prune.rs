//! Recursive removal of empty and falsy content.

use super::{Node, Seq, Value};

/// Options for [`Node::prune`].
///
/// By default numeric zeros are kept and empty sequences are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruneOptions {
    /// Also remove `0`, `0.0` and `false`
    pub prune_zero: bool,
    /// Remove sequences left empty after pruning
    pub prune_empty_seq: bool,
}

impl Default for PruneOptions {
    fn default() -> Self {
        Self {
            prune_zero: false,
            prune_empty_seq: true,
        }
    }
}

impl PruneOptions {
    pub fn prune_zero(mut self, prune_zero: bool) -> Self {
        self.prune_zero = prune_zero;
        self
    }

    pub fn prune_empty_seq(mut self, prune_empty_seq: bool) -> Self {
        self.prune_empty_seq = prune_empty_seq;
        self
    }
}

impl Node {
    /// Removes falsy and empty content in place, depth first.
    ///
    /// For each entry:
    /// - a falsy scalar is removed, except numeric zero when `prune_zero`
    ///   is off
    /// - a node is pruned recursively and removed if it ends up empty
    /// - a sequence is rebuilt element by element (see below) and removed
    ///   if it ends up empty and `prune_empty_seq` is on
    ///
    /// Inside sequences, zeros are dropped only with `prune_zero`, nested
    /// nodes and sequences are pruned and dropped when empty, and every
    /// other element (falsy scalars included) is kept. Rebuilt sequences
    /// keep their list/tuple kind.
    ///
    /// ```
    /// # use autoviv::node::{Node, PruneOptions};
    /// let mut node = Node::new();
    /// node.get_path("b.c.d")?;
    /// node.set("a", 2);
    /// assert_eq!(node.to_string(), r#"{"b": {"c": {"d": {}}}, "a": 2}"#);
    ///
    /// node.prune(PruneOptions::default());
    /// assert_eq!(node.to_string(), r#"{"a": 2}"#);
    /// # Ok::<(), autoviv::node::NodeError>(())
    /// ```
    pub fn prune(&mut self, options: PruneOptions) {
        self.children.retain(|key, value| {
            let keep = prune_entry(value, options);
            if !keep {
                tracing::trace!(%key, "pruned");
            }
            keep
        });
    }

    /// [`Node::prune`] with default options
    pub fn prune_default(&mut self) {
        self.prune(PruneOptions::default());
    }
}

/// Prunes one map entry in place, returning whether it survives.
fn prune_entry(value: &mut Value, options: PruneOptions) -> bool {
    match value {
        Value::Seq(seq) => {
            let pruned = prune_seq(std::mem::take(seq), options);
            if pruned.is_empty() && options.prune_empty_seq {
                false
            } else {
                *seq = pruned;
                true
            }
        }
        Value::Node(node) => {
            node.prune(options);
            !node.is_empty()
        }
        scalar if !scalar.is_truthy() => scalar.is_numeric_zero() && !options.prune_zero,
        _ => true,
    }
}

fn prune_seq(seq: Seq, options: PruneOptions) -> Seq {
    let kind = seq.kind();
    let items = seq
        .into_iter()
        .filter_map(|item| prune_item(item, options))
        .collect();
    Seq::from_items(kind, items)
}

/// Prunes one sequence element, returning it if it survives.
fn prune_item(item: Value, options: PruneOptions) -> Option<Value> {
    if options.prune_zero && item.is_numeric_zero() {
        return None;
    }
    match item {
        Value::Node(mut node) => {
            node.prune(options);
            (!node.is_empty()).then_some(Value::Node(node))
        }
        Value::Seq(inner) => {
            let pruned = prune_seq(inner, options);
            (!pruned.is_empty() || !options.prune_empty_seq).then_some(Value::Seq(pruned))
        }
        other => Some(other),
    }
}
