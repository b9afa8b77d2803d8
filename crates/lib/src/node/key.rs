//! Map keys for nodes.
//!
//! A [`Key`] is any hashable scalar: null, a boolean, an integer, a float
//! or text. Values that cannot be hashed (sequences and nodes) are rejected
//! with [`NodeError::UnhashableKey`] when they are used in key position.
//!
//! Float keys hash and compare through [`OrderedFloat`], so `0.0` and `-0.0`
//! name the same key, as do all NaNs.

use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Serialize, Serializer};

use super::{NodeError, Value};
use crate::plain::Plain;

/// A hashable scalar key of a [`Node`](super::Node).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Null,
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    Text(String),
}

impl Key {
    /// Returns the key text if this is a text key
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Key::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Key::Null => "null",
            Key::Bool(_) => "bool",
            Key::Int(_) => "int",
            Key::Float(_) => "float",
            Key::Text(_) => "text",
        }
    }

    /// Returns true if this is a text key that starts like an identifier,
    /// i.e. with `[A-Za-z_]`. The rest of the key is not checked.
    pub fn is_identifier(&self) -> bool {
        self.as_text()
            .and_then(|text| text.chars().next())
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Null => write!(f, "null"),
            Key::Bool(b) => write!(f, "{b}"),
            Key::Int(n) => write!(f, "{n}"),
            Key::Float(x) => write!(f, "{:?}", x.0),
            Key::Text(s) => write!(f, "{s}"),
        }
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Key::Null => serializer.serialize_unit(),
            Key::Bool(b) => serializer.serialize_bool(*b),
            Key::Int(n) => serializer.serialize_i64(*n),
            Key::Float(x) => serializer.serialize_f64(x.0),
            Key::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Text(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Text(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::Text(value.clone())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Bool(value)
    }
}

impl From<f64> for Key {
    fn from(value: f64) -> Self {
        Key::Float(OrderedFloat(value))
    }
}

impl TryFrom<&Value> for Key {
    type Error = NodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Key::Null),
            Value::Bool(b) => Ok(Key::Bool(*b)),
            Value::Int(n) => Ok(Key::Int(*n)),
            Value::Float(x) => Ok(Key::from(*x)),
            Value::Text(s) => Ok(Key::Text(s.clone())),
            other => Err(NodeError::UnhashableKey {
                type_name: other.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<Value> for Key {
    type Error = NodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(Key::Text(s)),
            other => Key::try_from(&other),
        }
    }
}

impl TryFrom<&Plain> for Key {
    type Error = NodeError;

    fn try_from(value: &Plain) -> Result<Self, Self::Error> {
        match value {
            Plain::Null => Ok(Key::Null),
            Plain::Bool(b) => Ok(Key::Bool(*b)),
            Plain::Int(n) => Ok(Key::Int(*n)),
            Plain::Float(x) => Ok(Key::from(*x)),
            Plain::Text(s) => Ok(Key::Text(s.clone())),
            other => Err(NodeError::UnhashableKey {
                type_name: other.type_name().to_string(),
            }),
        }
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Key::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
