//! Coercion into nodes and conversion back to plain data.
//!
//! Coercion (`From<Plain> for Value`) turns every map into a [`Node`] and
//! every list or tuple into a [`Seq`] of the same kind, recursively. [`Node::to_plain`] is its inverse, and
//! [`Node::copy`] runs both to produce a disconnected deep copy.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de};

use super::{Key, Node, NodeError, Seq, SeqKind, Source, Value};
use crate::plain::Plain;

fn coerce_map(entries: IndexMap<Key, Plain>) -> Node {
    entries
        .into_iter()
        .map(|(key, value)| (key, Value::from(value)))
        .collect()
}

fn coerce_seq(kind: SeqKind, items: Vec<Plain>) -> Seq {
    Seq::from_items(kind, items.into_iter().map(Value::from).collect())
}

impl From<Plain> for Value {
    fn from(value: Plain) -> Self {
        match value {
            Plain::Null => Value::Null,
            Plain::Bool(b) => Value::Bool(b),
            Plain::Int(n) => Value::Int(n),
            Plain::Float(x) => Value::Float(x),
            Plain::Text(s) => Value::Text(s),
            Plain::List(items) => Value::Seq(coerce_seq(SeqKind::List, items)),
            Plain::Tuple(items) => Value::Seq(coerce_seq(SeqKind::Tuple, items)),
            Plain::Map(entries) => Value::Node(coerce_map(entries)),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Plain::from(value).into()
    }
}

impl TryFrom<Plain> for Node {
    type Error = NodeError;

    /// A map converts directly; anything else goes through the
    /// construction rules of [`Node::from_sources`].
    fn try_from(value: Plain) -> Result<Self, Self::Error> {
        match value {
            Plain::Map(entries) => Ok(coerce_map(entries)),
            other => Node::from_sources([Source::from(other)]),
        }
    }
}

impl TryFrom<serde_json::Value> for Node {
    type Error = NodeError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Node::try_from(Plain::from(value))
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let plain = Plain::deserialize(deserializer)?;
        Node::try_from(plain).map_err(de::Error::custom)
    }
}

impl Value {
    /// Recursively unwraps nodes into plain maps, keeping sequence kinds
    pub fn to_plain(&self) -> Plain {
        match self {
            Value::Null => Plain::Null,
            Value::Bool(b) => Plain::Bool(*b),
            Value::Int(n) => Plain::Int(*n),
            Value::Float(x) => Plain::Float(*x),
            Value::Text(s) => Plain::Text(s.clone()),
            Value::Seq(seq) => {
                let items = seq.iter().map(Value::to_plain).collect();
                match seq.kind() {
                    SeqKind::List => Plain::List(items),
                    SeqKind::Tuple => Plain::Tuple(items),
                }
            }
            Value::Node(node) => node.to_plain(),
        }
    }
}

impl Node {
    /// Recursively converts into plain data with no autoviv behavior.
    ///
    /// ```
    /// # use autoviv::{node::Node, plain::Plain};
    /// let mut node = Node::new();
    /// node.set_path("a.b", 1)?;
    /// assert_eq!(node.to_plain(), Plain::map([("a", Plain::map([("b", 1)]))]));
    /// # Ok::<(), autoviv::node::NodeError>(())
    /// ```
    pub fn to_plain(&self) -> Plain {
        Plain::Map(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_plain()))
                .collect(),
        )
    }

    /// Returns a disconnected deep copy: the plain form coerced back into a node
    pub fn copy(&self) -> Node {
        self.iter()
            .map(|(key, value)| (key.clone(), Value::from(value.to_plain())))
            .collect()
    }

    /// Converts into a JSON value (see [`Plain`] for the lossy cases)
    pub fn to_json(&self) -> serde_json::Value {
        self.to_plain().into()
    }
}
