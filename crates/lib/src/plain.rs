//! Plain nested data.
//!
//! [`Plain`] is the generic form a [`Node`](crate::node::Node) converts to:
//! ordered maps, lists, tuples and scalars with no autoviv behavior. It is
//! what [`Node::to_plain`](crate::node::Node::to_plain) produces and what
//! coercion consumes, and it implements serde's traits so any serializer
//! can take it as is.
//!
//! JSON has no tuples and only text keys, so [`Plain`] → `serde_json::Value`
//! turns tuples into arrays, non-text keys into strings and non-finite
//! floats into null.

use std::fmt;

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, SeqAccess, Visitor},
    ser::{SerializeMap, SerializeSeq, SerializeTuple},
};

use crate::node::Key;

/// Generic nested data: maps, lists, tuples and scalars.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Plain {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Plain>),
    Tuple(Vec<Plain>),
    Map(IndexMap<Key, Plain>),
}

impl Plain {
    /// Builds a map from key/value pairs
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Plain>,
    {
        Plain::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Builds a tuple from its elements
    pub fn tuple<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Plain>,
    {
        Plain::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Plain::Null => "null",
            Plain::Bool(_) => "bool",
            Plain::Int(_) => "int",
            Plain::Float(_) => "float",
            Plain::Text(_) => "text",
            Plain::List(_) => "list",
            Plain::Tuple(_) => "tuple",
            Plain::Map(_) => "map",
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<Key, Plain>> {
        match self {
            Plain::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Parses JSON text into plain data
    pub fn from_json_str(input: &str) -> crate::Result<Plain> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(json.into())
    }
}

impl From<bool> for Plain {
    fn from(value: bool) -> Self {
        Plain::Bool(value)
    }
}

impl From<i64> for Plain {
    fn from(value: i64) -> Self {
        Plain::Int(value)
    }
}

impl From<i32> for Plain {
    fn from(value: i32) -> Self {
        Plain::Int(value as i64)
    }
}

impl From<f64> for Plain {
    fn from(value: f64) -> Self {
        Plain::Float(value)
    }
}

impl From<&str> for Plain {
    fn from(value: &str) -> Self {
        Plain::Text(value.to_string())
    }
}

impl From<String> for Plain {
    fn from(value: String) -> Self {
        Plain::Text(value)
    }
}

impl<V: Into<Plain>> From<Vec<V>> for Plain {
    fn from(value: Vec<V>) -> Self {
        Plain::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Plain {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match value {
            Json::Null => Plain::Null,
            Json::Bool(b) => Plain::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Plain::Int(i),
                None => n.as_f64().map_or(Plain::Null, Plain::Float),
            },
            Json::String(s) => Plain::Text(s),
            Json::Array(items) => Plain::List(items.into_iter().map(Plain::from).collect()),
            Json::Object(entries) => Plain::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (Key::Text(key), Plain::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Plain> for serde_json::Value {
    fn from(value: Plain) -> Self {
        use serde_json::Value as Json;
        match value {
            Plain::Null => Json::Null,
            Plain::Bool(b) => Json::Bool(b),
            Plain::Int(n) => Json::from(n),
            Plain::Float(x) => serde_json::Number::from_f64(x).map_or(Json::Null, Json::Number),
            Plain::Text(s) => Json::String(s),
            Plain::List(items) | Plain::Tuple(items) => {
                Json::Array(items.into_iter().map(Json::from).collect())
            }
            Plain::Map(entries) => Json::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.to_string(), Json::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Plain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Plain::Null => serializer.serialize_unit(),
            Plain::Bool(b) => serializer.serialize_bool(*b),
            Plain::Int(n) => serializer.serialize_i64(*n),
            Plain::Float(x) => serializer.serialize_f64(*x),
            Plain::Text(s) => serializer.serialize_str(s),
            Plain::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Plain::Tuple(items) => {
                let mut tuple = serializer.serialize_tuple(items.len())?;
                for item in items {
                    tuple.serialize_element(item)?;
                }
                tuple.end()
            }
            Plain::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

struct KeyVisitor;

impl<'de> Visitor<'de> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar key")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Key, E> {
        Ok(Key::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Key, E> {
        Ok(Key::Null)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Key, E> {
        Ok(Key::Bool(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Key, E> {
        Ok(Key::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Key, E> {
        Ok(Key::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Key, E> {
        i64::try_from(v)
            .map(Key::Int)
            .map_err(|_| E::custom(format!("integer key {v} out of range")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
        Ok(Key::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Key, E> {
        Ok(Key::Text(v))
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KeyVisitor)
    }
}

struct PlainVisitor;

impl<'de> Visitor<'de> for PlainVisitor {
    type Value = Plain;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any nested data")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Plain, E> {
        Ok(Plain::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Plain, E> {
        Ok(Plain::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Plain, D::Error> {
        Plain::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Plain, E> {
        Ok(Plain::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Plain, E> {
        Ok(Plain::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Plain, E> {
        Ok(i64::try_from(v).map_or(Plain::Float(v as f64), Plain::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Plain, E> {
        Ok(Plain::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Plain, E> {
        Ok(Plain::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Plain, E> {
        Ok(Plain::Text(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Plain, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Plain::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Plain, A::Error> {
        let mut entries = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<Key, Plain>()? {
            entries.insert(key, value);
        }
        Ok(Plain::Map(entries))
    }
}

impl<'de> Deserialize<'de> for Plain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PlainVisitor)
    }
}
