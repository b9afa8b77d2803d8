//!
//! autoviv: nested maps that build themselves as you walk into them.
//!
//! ## Core Concepts
//!
//! * **Nodes (`node::Node`)**: Insertion-ordered maps from hashable scalar keys to values. Reading a missing key creates an empty child node in place (autovivification).
//! * **Values (`node::Value`)**: Scalars, ordered sequences (`node::Seq`, list- or tuple-kind) and nested nodes. There is no raw-map variant, so every map reachable from a node is a node.
//! * **Plain data (`plain::Plain`)**: The generic nested form nodes convert to and are coerced from. It carries no autoviv behavior and works with any serde serializer.
//! * **Maintenance operations**:
//!     * **Prune (`Node::prune`)**: Recursively strips empty and falsy content.
//!     * **Copy (`Node::copy`)**: Disconnected deep copies through the plain form.
//!     * **Update (`Node::update`)**: Two-way recursive merge, in place.
//!     * **Extend (`Node::extend`)**: N-way merge with deep and list-strategy options.
//!
//! Nodes are single-threaded data structures with no internal locking.

pub mod node;
pub mod plain;

/// Re-export the `Node` struct for easier access.
pub use node::Node;

/// Result type used throughout the autoviv library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the autoviv library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured node errors from the node module
    #[error(transparent)]
    Node(node::NodeError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Node(_) => "node",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a key was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Node(node_err) => node_err.is_not_found_error(),
            _ => false,
        }
    }

    /// Check if this error rejected an extend option.
    pub fn is_option_error(&self) -> bool {
        match self {
            Error::Node(node_err) => node_err.is_option_error(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Node(node_err) => node_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is node-related.
    pub fn is_node_error(&self) -> bool {
        matches!(self, Error::Node(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
