//! Autovivifying nested maps.
//!
//! This module provides [`Node`], an insertion-ordered map whose values are
//! scalars, sequences or further nodes. Reading a missing key through
//! [`Node::get`] creates an empty child node in place, so deep structures
//! can be written without building each level first.
//!
//! # Usage
//!
//! ```
//! use autoviv::node::{Node, PruneOptions, Value};
//!
//! // n.a.b.c = 3
//! let mut node = Node::new();
//! node.get("a").get("b")?.set("c", 3)?;
//! assert_eq!(node.peek_path("a.b.c"), Some(&Value::Int(3)));
//!
//! // Reading a missing key leaves an empty node behind
//! node.get("scratch");
//! assert!(node.contains_key("scratch"));
//!
//! // ...which prune removes again
//! node.prune(PruneOptions::default());
//! assert!(!node.contains_key("scratch"));
//! # Ok::<(), autoviv::node::NodeError>(())
//! ```
//!
//! # Concurrency
//!
//! Nodes are plain owned data. They provide no locking of their own; share
//! one across threads only behind external synchronization such as a
//! `Mutex`.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use indexmap::{IndexMap, map::Entry};
use serde::{Serialize, Serializer, ser::SerializeMap};

// Submodules
mod convert;
pub mod errors;
pub mod key;
pub mod merge;
pub mod path;
pub mod prune;
pub mod seq;
pub mod source;
pub mod value;

pub use errors::NodeError;
pub use key::Key;
pub use merge::{ExtendOptions, ListAction};
pub use path::Path;
pub use prune::PruneOptions;
pub use seq::{Seq, SeqKind};
pub use source::{NodeBuilder, Source};
pub use value::{Value, ValueKind};

// Re-export the macro from crate root
pub use crate::path;

/// An insertion-ordered, autovivifying map of [`Key`] to [`Value`].
///
/// # Core Operations
///
/// - **Construction**: [`Node::new`], [`Node::from_sources`], [`Node::builder`]
/// - **Mutating access**: [`Node::get`] (autoviv), [`Node::set`], [`Node::delete`]
/// - **Non-mutating access**: [`Node::peek`], [`Node::contains_key`]
/// - **Paths**: [`Node::get_path`], [`Node::set_path`], [`Node::peek_path`]
/// - **Cleanup**: [`Node::prune`]
/// - **Conversion**: [`Node::to_plain`], [`Node::copy`]
/// - **Merging**: [`Node::update`], [`Node::extend`]
///
/// # Autovivification
///
/// `get` is a read with a side effect: an absent key is first inserted as
/// an empty node, and a mutable reference to that linked child is returned.
/// Use [`Node::contains_key`] or [`Node::peek`] to test for presence;
/// probing with `get` creates the key being probed.
///
/// ```
/// # use autoviv::node::Node;
/// let mut node = Node::new();
/// assert!(!node.contains_key("a"));
///
/// node.get("a");
/// assert!(node.contains_key("a"));
/// assert!(node.peek("a").unwrap().is_node());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    children: IndexMap<Key, Value>,
}

impl Node {
    /// Member names that attribute-style assignment refuses to shadow:
    /// every public inherent method, plus the methods `Node` gains through
    /// its standard trait impls.
    pub const RESERVED_NAMES: &'static [&'static str] = &[
        "attribute_names",
        "builder",
        "clone",
        "clone_from",
        "contains_key",
        "contains_path",
        "copy",
        "default",
        "del_attr",
        "delete",
        "delete_path",
        "deserialize",
        "eq",
        "extend",
        "extend_with",
        "fmt",
        "from",
        "from_iter",
        "from_sources",
        "get",
        "get_attr",
        "get_node",
        "get_path",
        "index",
        "index_mut",
        "into",
        "into_iter",
        "is_empty",
        "is_reserved",
        "iter",
        "iter_mut",
        "keys",
        "len",
        "ne",
        "new",
        "peek",
        "peek_mut",
        "peek_path",
        "prune",
        "prune_default",
        "serialize",
        "set",
        "set_attr",
        "set_path",
        "to_json",
        "to_owned",
        "to_plain",
        "to_string",
        "try_from",
        "try_into",
        "update",
        "values",
        "with",
    ];

    /// Creates a new empty node
    pub fn new() -> Self {
        Self {
            children: IndexMap::new(),
        }
    }

    /// Returns the number of direct keys
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns true if `key` is present. Never mutates.
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.children.contains_key(&key.into())
    }

    /// Non-mutating lookup
    pub fn peek(&self, key: impl Into<Key>) -> Option<&Value> {
        self.children.get(&key.into())
    }

    /// Non-mutating lookup returning a mutable reference to an existing value
    pub fn peek_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        self.children.get_mut(&key.into())
    }

    /// Returns the value at `key`, inserting an empty node first if absent.
    ///
    /// **This mutates the node.** The returned child is linked into `self`:
    /// writes through it are visible from the parent.
    pub fn get(&mut self, key: impl Into<Key>) -> &mut Value {
        match self.children.entry(key.into()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                tracing::trace!(key = %entry.key(), "autovivified empty node");
                entry.insert(Value::Node(Node::new()))
            }
        }
    }

    /// Like [`Node::get`], but requires the (possibly new) value to be a node
    pub fn get_node(&mut self, key: impl Into<Key>) -> Result<&mut Node, NodeError> {
        let key = key.into();
        match self.get(key.clone()) {
            Value::Node(node) => Ok(node),
            other => Err(NodeError::NotANode {
                key: key.to_string(),
                type_name: other.type_name().to_string(),
            }),
        }
    }

    /// Stores `value` under `key`, returning the previous value if present.
    ///
    /// An existing key keeps its position.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value. Later keys keep their order.
    pub fn delete(&mut self, key: impl Into<Key>) -> Result<Value, NodeError> {
        let key = key.into();
        self.children
            .shift_remove(&key)
            .ok_or_else(|| NodeError::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.children.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, Key, Value> {
        self.children.iter_mut()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.children.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.children.values()
    }

    // ===== ATTRIBUTE-STYLE ACCESS =====

    /// Returns true if `name` is one of the node's own member names
    pub fn is_reserved(name: &str) -> bool {
        Self::RESERVED_NAMES.contains(&name)
    }

    /// Attribute-style read; same autoviv contract as [`Node::get`]
    pub fn get_attr(&mut self, name: &str) -> &mut Value {
        self.get(name)
    }

    /// Attribute-style write.
    ///
    /// Fails with [`NodeError::ReservedName`] if `name` would shadow one of
    /// the node's own members.
    pub fn set_attr(
        &mut self,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, NodeError> {
        if Self::is_reserved(name) {
            return Err(NodeError::ReservedName {
                name: name.to_string(),
            });
        }
        Ok(self.set(name, value))
    }

    /// Attribute-style delete
    pub fn del_attr(&mut self, name: &str) -> Result<Value, NodeError> {
        self.delete(name)
    }

    /// Names offered to completion tooling: identifier-like text keys in
    /// insertion order, followed by the node's own member names.
    pub fn attribute_names(&self) -> Vec<String> {
        self.children
            .keys()
            .filter(|key| key.is_identifier())
            .map(ToString::to_string)
            .chain(Self::RESERVED_NAMES.iter().map(|name| name.to_string()))
            .collect()
    }

    // ===== PATH ACCESS =====

    /// Autovivifying access along a path.
    ///
    /// Every missing component is created as an empty node, including the
    /// last. Fails with [`NodeError::NotANode`] when an intermediate value
    /// is not a node and [`NodeError::InvalidPath`] for an empty path.
    pub fn get_path(&mut self, path: impl Into<Path>) -> Result<&mut Value, NodeError> {
        let path = path.into();
        let (last, parents) = split_path(&path)?;

        let mut current = self;
        for key in parents {
            current = current.get_node(key)?;
        }
        Ok(current.get(last))
    }

    /// Sets a value at a path, creating intermediate nodes as needed
    pub fn set_path(
        &mut self,
        path: impl Into<Path>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, NodeError> {
        let path = path.into();
        let (last, parents) = split_path(&path)?;

        let mut current = self;
        for key in parents {
            current = current.get_node(key)?;
        }
        Ok(current.set(last, value))
    }

    /// Removes the value at a path without creating anything on the way
    pub fn delete_path(&mut self, path: impl Into<Path>) -> Result<Value, NodeError> {
        let path = path.into();
        let (last, parents) = split_path(&path)?;

        let mut current = self;
        for key in parents {
            current = match current.children.get_mut(key) {
                Some(Value::Node(node)) => node,
                Some(other) => {
                    return Err(NodeError::NotANode {
                        key: key.to_string(),
                        type_name: other.type_name().to_string(),
                    });
                }
                None => {
                    return Err(NodeError::KeyNotFound {
                        key: key.to_string(),
                    });
                }
            };
        }
        current.delete(last)
    }

    /// Non-mutating lookup along a path
    pub fn peek_path(&self, path: impl Into<Path>) -> Option<&Value> {
        let path = path.into();
        let (last, parents) = path.split_last()?;

        let mut current = self;
        for key in parents {
            current = current.children.get(key)?.as_node()?;
        }
        current.children.get(last)
    }

    /// Returns true if a value exists at the path. Never mutates.
    pub fn contains_path(&self, path: impl Into<Path>) -> bool {
        self.peek_path(path).is_some()
    }
}

fn split_path(path: &Path) -> Result<(&Key, &[Key]), NodeError> {
    path.split_last().ok_or_else(|| NodeError::InvalidPath {
        path: "(empty path)".to_string(),
    })
}

impl<K: Into<Key>> Index<K> for Node {
    type Output = Value;

    /// Non-mutating lookup. Panics if the key is absent.
    fn index(&self, key: K) -> &Value {
        let key = key.into();
        match self.children.get(&key) {
            Some(value) => value,
            None => panic!("key not found: {key}"),
        }
    }
}

impl<K: Into<Key>> IndexMut<K> for Node {
    /// Autovivifying lookup, see [`Node::get`]
    fn index_mut(&mut self, key: K) -> &mut Value {
        self.get(key)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match key {
                Key::Text(s) => write!(f, "{s:?}: {value}")?,
                other => write!(f, "{other}: {value}")?,
            }
        }
        write!(f, "}}")
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.children.len()))?;
        for (key, value) in &self.children {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Node {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut node = Node::new();
        for (key, value) in iter {
            node.set(key, value);
        }
        node
    }
}

impl IntoIterator for Node {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
