//! Ordered sequences stored inside nodes.
//!
//! A [`Seq`] is a plain vector of [`Value`]s tagged with a [`SeqKind`]. The
//! kind records whether the sequence came from a growable list or a fixed
//! tuple, and every operation that rebuilds a sequence carries it over.

use serde::{Serialize, Serializer, ser::SerializeSeq};

use super::Value;

/// Whether a sequence is list-like (growable) or tuple-like (fixed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeqKind {
    #[default]
    List,
    Tuple,
}

impl SeqKind {
    /// Returns the kind name as a string
    pub fn name(&self) -> &'static str {
        match self {
            SeqKind::List => "list",
            SeqKind::Tuple => "tuple",
        }
    }
}

/// An ordered sequence of values with list/tuple metadata.
///
/// # Examples
///
/// ```
/// use autoviv::node::{Seq, SeqKind, Value};
///
/// let mut list: Seq = [1, 2].into_iter().collect();
/// list.push(3);
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.kind(), SeqKind::List);
///
/// let pair = Seq::tuple(["key", "value"]);
/// assert!(pair.is_tuple());
/// assert_eq!(pair.get(1), Some(&Value::from("value")));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Seq {
    kind: SeqKind,
    items: Vec<Value>,
}

impl Seq {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sequence of the given kind
    pub fn with_kind(kind: SeqKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }

    /// Creates a sequence of the given kind from already-built values
    pub fn from_items(kind: SeqKind, items: Vec<Value>) -> Self {
        Self { kind, items }
    }

    /// Creates a list from anything convertible into values
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::from_items(SeqKind::List, items.into_iter().map(Into::into).collect())
    }

    /// Creates a tuple from anything convertible into values
    pub fn tuple<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::from_items(SeqKind::Tuple, items.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> SeqKind {
        self.kind
    }

    pub fn is_tuple(&self) -> bool {
        self.kind == SeqKind::Tuple
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets the element at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Gets a mutable reference to the element at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Appends a value, coercing it on the way in
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Consumes the sequence, returning its elements
    pub fn into_items(self) -> Vec<Value> {
        self.items
    }

    /// Returns the type name ("list" or "tuple")
    pub fn type_name(&self) -> &'static str {
        self.kind.name()
    }
}

impl<V: Into<Value>> FromIterator<V> for Seq {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Seq::list(iter)
    }
}

impl<V: Into<Value>> Extend<V> for Seq {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Seq {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Seq {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Serialize for Seq {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for item in &self.items {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}
