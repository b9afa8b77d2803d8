//! Value types for nodes.
//!
//! This module provides the [`Value`] enum stored under every key of a
//! [`Node`]. A value is a scalar leaf, an ordered [`Seq`], or a nested
//! [`Node`]. There is no variant for a raw map: anything
//! map-like is converted into a `Node` on the way in, so every map reachable
//! from a node is itself a node.

use std::fmt;

use serde::{Serialize, Serializer};

use super::{Key, Node, NodeError, Seq, SeqKind};

/// Structural kind of a value, as seen by merge operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Map,
    Sequence,
    Scalar,
}

/// Values that can be stored in a [`Node`].
///
/// # Value Types
///
/// ## Leaf Values
/// - [`Value::Null`] - null/empty value
/// - [`Value::Bool`] - boolean
/// - [`Value::Int`] - 64-bit signed integer
/// - [`Value::Float`] - 64-bit float
/// - [`Value::Text`] - UTF-8 string
///
/// ## Branch Values
/// - [`Value::Seq`] - ordered list or tuple
/// - [`Value::Node`] - nested node
///
/// # Truthiness
///
/// Null, `false`, `0`, `0.0`, `""`, an empty sequence and an empty node are
/// falsy. [`Node::prune`] and construction both rely on this.
///
/// ```
/// # use autoviv::node::{Node, Seq, Value};
/// assert!(!Value::Int(0).is_truthy());
/// assert!(!Value::Seq(Seq::new()).is_truthy());
/// assert!(!Value::Node(Node::new()).is_truthy());
/// assert!(Value::from("x").is_truthy());
///
/// // Direct comparison with primitives
/// assert!(Value::from(42) == 42);
/// assert!("hello" == Value::from("hello"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Seq(Seq),
    Node(Node),
}

impl Value {
    /// Returns true if this is a leaf value
    pub fn is_leaf(&self) -> bool {
        !self.is_branch()
    }

    /// Returns true if this is a branch value (can contain other values)
    pub fn is_branch(&self) -> bool {
        matches!(self, Value::Seq(_) | Value::Node(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Value::Node(_))
    }

    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    /// Returns the structural kind used by [`Node::extend`]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Node(_) => ValueKind::Map,
            Value::Seq(_) => ValueKind::Sequence,
            _ => ValueKind::Scalar,
        }
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Seq(seq) => seq.type_name(),
            Value::Node(_) => "node",
        }
    }

    /// Returns false for null, `false`, zero, empty text and empty containers
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::Text(s) => !s.is_empty(),
            Value::Seq(seq) => !seq.is_empty(),
            Value::Node(node) => !node.is_empty(),
        }
    }

    /// Returns true for values that compare equal to numeric zero.
    ///
    /// `false` counts: booleans compare equal to 0 and 1.
    pub fn is_numeric_zero(&self) -> bool {
        match self {
            Value::Bool(b) => !*b,
            Value::Int(n) => *n == 0,
            Value::Float(f) => *f == 0.0,
            _ => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&Seq> {
        match self {
            Value::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_seq_mut(&mut self) -> Option<&mut Seq> {
        match self {
            Value::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_node_mut(&mut self) -> Option<&mut Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Autovivifying access into a node value.
    ///
    /// Delegates to [`Node::get`], so a missing key is created as an empty
    /// node. Fails with [`NodeError::NotANode`] when `self` is not a node.
    pub fn get(&mut self, key: impl Into<Key>) -> Result<&mut Value, NodeError> {
        let key = key.into();
        match self {
            Value::Node(node) => Ok(node.get(key)),
            other => Err(NodeError::NotANode {
                key: key.to_string(),
                type_name: other.type_name().to_string(),
            }),
        }
    }

    /// Stores `value` under `key` in a node value, returning the old value.
    pub fn set(
        &mut self,
        key: impl Into<Key>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, NodeError> {
        let key = key.into();
        match self {
            Value::Node(node) => Ok(node.set(key, value)),
            other => Err(NodeError::NotANode {
                key: key.to_string(),
                type_name: other.type_name().to_string(),
            }),
        }
    }

    /// Non-mutating lookup into a node value
    pub fn peek(&self, key: impl Into<Key>) -> Option<&Value> {
        self.as_node()?.peek(key)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Seq(seq) => {
                let (open, close) = match seq.kind() {
                    SeqKind::List => ('[', ']'),
                    SeqKind::Tuple => ('(', ')'),
                };
                write!(f, "{open}")?;
                for (i, item) in seq.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "{close}")
            }
            Value::Node(node) => write!(f, "{node}"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Seq(seq) => seq.serialize(serializer),
            Value::Node(node) => node.serialize(serializer),
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Value::Node(value)
    }
}

impl From<Seq> for Value {
    fn from(value: Seq) -> Self {
        Value::Seq(value)
    }
}

impl From<Key> for Value {
    fn from(value: Key) -> Self {
        match value {
            Key::Null => Value::Null,
            Key::Bool(b) => Value::Bool(b),
            Key::Int(n) => Value::Int(n),
            Key::Float(x) => Value::Float(x.0),
            Key::Text(s) => Value::Text(s),
        }
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(value: Vec<V>) -> Self {
        Value::Seq(Seq::list(value))
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// TryFrom implementations for typed extraction
impl TryFrom<&Value> for String {
    type Error = NodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(NodeError::TypeMismatch {
                expected: "String".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = NodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(*n),
            _ => Err(NodeError::TypeMismatch {
                expected: "i64".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = NodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_float().ok_or_else(|| NodeError::TypeMismatch {
            expected: "f64".to_string(),
            actual: value.type_name().to_string(),
        })
    }
}

impl TryFrom<&Value> for bool {
    type Error = NodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(NodeError::TypeMismatch {
                expected: "bool".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<&Value> for Node {
    type Error = NodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Node(node) => Ok(node.clone()),
            _ => Err(NodeError::TypeMismatch {
                expected: "Node".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Int(n) if n == other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Value::Int(n) if *n == *other as i64)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Float(x) if x == other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
