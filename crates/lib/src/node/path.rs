//! Key paths for nested node access.
//!
//! A [`Path`] is an ordered list of [`Key`]s naming a value several levels
//! down a [`Node`](super::Node) tree, the way `n.a.b.c` names one through
//! chained attribute access.
//!
//! # Usage
//!
//! ```rust
//! use autoviv::node::{Key, Node, Path};
//! use autoviv::path;
//!
//! // Dotted strings are split into text components (empty ones dropped)
//! let path = Path::parse("user.profile.name");
//! assert_eq!(path.len(), 3);
//!
//! // Build incrementally; components are never split
//! let path = Path::new().push("user").push("a.b").push(3);
//! assert_eq!(path.components().last(), Some(&Key::Int(3)));
//!
//! // Use in node operations
//! let mut node = Node::new();
//! node.set_path(path!("user.profile.name"), "Alice")?;
//! assert!(node.contains_path(path!("user", "profile")));
//! # Ok::<(), autoviv::node::NodeError>(())
//! ```

use std::{fmt, str::FromStr};

use super::Key;

/// Splits a dotted path string into its non-empty components.
///
/// - `""` → no components
/// - `".user"` / `"user."` → `["user"]`
/// - `"user..profile"` → `["user", "profile"]`
pub fn split_dotted(input: &str) -> impl Iterator<Item = &str> {
    input.split('.').filter(|component| !component.is_empty())
}

/// An owned sequence of keys addressing a nested value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    components: Vec<Key>,
}

impl Path {
    /// Creates an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a dotted string into text components
    pub fn parse(input: &str) -> Self {
        Self {
            components: split_dotted(input).map(Key::from).collect(),
        }
    }

    /// Appends one component, returning the extended path
    pub fn push(mut self, key: impl Into<Key>) -> Self {
        self.components.push(key.into());
        self
    }

    pub fn components(&self) -> std::slice::Iter<'_, Key> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Splits into the parent components and the final key
    pub fn split_last(&self) -> Option<(&Key, &[Key])> {
        self.components.split_last()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::parse(s))
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Self {
        Path::parse(value)
    }
}

impl From<String> for Path {
    fn from(value: String) -> Self {
        Path::parse(&value)
    }
}

impl From<Key> for Path {
    fn from(value: Key) -> Self {
        Path {
            components: vec![value],
        }
    }
}

impl From<i64> for Path {
    fn from(value: i64) -> Self {
        Path::from(Key::Int(value))
    }
}

impl From<&Path> for Path {
    fn from(value: &Path) -> Self {
        value.clone()
    }
}

impl<K: Into<Key>> FromIterator<K> for Path {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        Path {
            components: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

/// Builds a [`Path`].
///
/// - `path!()` - empty path
/// - `path!("user.profile.name")` - a single argument goes through
///   `Path::from`, so strings are split on dots
/// - `path!("user", "a.b", 3)` - several arguments become one component
///   each, unsplit
#[macro_export]
macro_rules! path {
    () => {
        $crate::node::Path::new()
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let path = $crate::node::Path::new().push($first);
        $(
            let path = path.push($rest);
        )+
        path
    }};

    ($single:expr $(,)?) => {
        $crate::node::Path::from($single)
    };
}
