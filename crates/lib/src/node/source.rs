//! Node construction from positional sources and named fields.
//!
//! A [`Source`] is one positional argument to construction: a map, a single
//! `(key, value)` tuple, a sequence of pairs, or a lazy pair iterator. Each
//! is inserted in order with overwrite semantics, so later sources win at
//! the same key. Named fields go in last.

use std::fmt;

use super::{Key, Node, NodeError, Seq, SeqKind, Value};
use crate::plain::Plain;

/// A positional construction source.
pub enum Source {
    /// An already-coerced value: a node, a sequence, or a scalar
    Value(Value),
    /// A single-pass iterator of `(key, value)` pairs
    Pairs(Box<dyn Iterator<Item = (Key, Value)>>),
}

impl Source {
    /// Wraps a lazy pair iterator. Pairs are pulled once, during construction.
    pub fn pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        I::IntoIter: 'static,
        K: Into<Key> + 'static,
        V: Into<Value> + 'static,
    {
        Source::Pairs(Box::new(pairs.into_iter().map(convert_pair)))
    }
}

fn convert_pair<K: Into<Key>, V: Into<Value>>((key, value): (K, V)) -> (Key, Value) {
    (key.into(), value.into())
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Source::Pairs(_) => f.write_str("Pairs(..)"),
        }
    }
}

impl From<Value> for Source {
    fn from(value: Value) -> Self {
        Source::Value(value)
    }
}

impl From<Node> for Source {
    fn from(value: Node) -> Self {
        Source::Value(Value::Node(value))
    }
}

impl From<Seq> for Source {
    fn from(value: Seq) -> Self {
        Source::Value(Value::Seq(value))
    }
}

impl From<Plain> for Source {
    fn from(value: Plain) -> Self {
        Source::Value(value.into())
    }
}

impl From<serde_json::Value> for Source {
    fn from(value: serde_json::Value) -> Self {
        Source::Value(value.into())
    }
}

impl Node {
    /// Builds a node from positional sources, in order.
    ///
    /// - falsy sources are skipped
    /// - a node contributes every entry
    /// - a two-element tuple whose first element is not a tuple is one pair
    /// - any other sequence, or a pair iterator, contributes each pair
    /// - anything else fails with [`NodeError::UnsupportedSourceType`]
    ///
    /// ```
    /// # use autoviv::node::{Node, Seq, Source};
    /// let node = Node::from_sources([
    ///     Source::from(Node::new().with("a", 1).with("b", 1)),
    ///     Source::from(Seq::tuple(["b", "two"])),
    ///     Source::pairs(vec![("c", 3)]),
    /// ])?;
    /// assert_eq!(node.to_string(), r#"{"a": 1, "b": "two", "c": 3}"#);
    /// # Ok::<(), autoviv::node::NodeError>(())
    /// ```
    pub fn from_sources<I, S>(sources: I) -> Result<Node, NodeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Source>,
    {
        let mut node = Node::new();
        for source in sources {
            node.insert_source(source.into())?;
        }
        Ok(node)
    }

    /// Starts a [`NodeBuilder`]
    pub fn builder() -> NodeBuilder {
        NodeBuilder::new()
    }

    fn insert_source(&mut self, source: Source) -> Result<(), NodeError> {
        match source {
            Source::Pairs(pairs) => {
                for (key, value) in pairs {
                    self.set(key, value);
                }
                Ok(())
            }
            Source::Value(value) if !value.is_truthy() => Ok(()),
            Source::Value(Value::Node(node)) => {
                for (key, value) in node {
                    self.set(key, value);
                }
                Ok(())
            }
            Source::Value(Value::Seq(seq)) if is_single_pair(&seq) => {
                let (key, value) = into_pair(0, Value::Seq(seq))?;
                self.set(key, value);
                Ok(())
            }
            Source::Value(Value::Seq(seq)) => {
                for (index, item) in seq.into_iter().enumerate() {
                    let (key, value) = into_pair(index, item)?;
                    self.set(key, value);
                }
                Ok(())
            }
            Source::Value(other) => Err(NodeError::UnsupportedSourceType {
                type_name: other.type_name().to_string(),
            }),
        }
    }
}

/// A tuple `(k, v)` whose first element is not itself a tuple.
fn is_single_pair(seq: &Seq) -> bool {
    seq.kind() == SeqKind::Tuple
        && seq.len() == 2
        && !matches!(seq.get(0), Some(Value::Seq(first)) if first.is_tuple())
}

fn into_pair(index: usize, item: Value) -> Result<(Key, Value), NodeError> {
    let type_name = item.type_name();
    if let Value::Seq(pair) = item {
        if let Ok([key, value]) = <[Value; 2]>::try_from(pair.into_items()) {
            return Ok((Key::try_from(key)?, value));
        }
    }
    Err(NodeError::InvalidPair {
        index,
        type_name: type_name.to_string(),
    })
}

/// A builder for nodes made of positional sources plus named fields.
///
/// Sources are applied in the order given, then fields, each overwriting
/// earlier entries at the same key.
///
/// ```
/// # use autoviv::node::{Node, Source};
/// use serde_json::json;
///
/// let node = Node::builder()
///     .source(json!({"a": 1, "b": {"c": 2}}))
///     .field("a", 10)
///     .build()?;
///
/// assert_eq!(node.peek("a").and_then(|v| v.as_int()), Some(10));
/// assert!(node.peek("b").unwrap().is_node());
/// # Ok::<(), autoviv::node::NodeError>(())
/// ```
#[derive(Debug, Default)]
pub struct NodeBuilder {
    sources: Vec<Source>,
    fields: Vec<(Key, Value)>,
}

impl NodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a positional source
    pub fn source(mut self, source: impl Into<Source>) -> Self {
        self.sources.push(source.into());
        self
    }

    /// Adds a named field, applied after every source
    pub fn field(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Adds a positional source in place
    pub fn source_mut(&mut self, source: impl Into<Source>) -> &mut Self {
        self.sources.push(source.into());
        self
    }

    /// Adds a named field in place
    pub fn field_mut(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> &mut Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Applies every source, then every field
    pub fn build(self) -> Result<Node, NodeError> {
        let mut node = Node::from_sources(self.sources)?;
        for (key, value) in self.fields {
            node.set(key, value);
        }
        Ok(node)
    }
}
