//! Error types for node operations.
//!
//! This module defines the structured errors raised by construction, path
//! access, option parsing and typed conversions on [`Node`](super::Node)
//! and [`Value`](super::Value). Every error is raised at the call that
//! detects it; nothing is retried and partially applied merges are not
//! rolled back.

use thiserror::Error;

/// Structured error types for node operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NodeError {
    /// A positional construction source is neither empty, a map, a pair,
    /// a sequence of pairs nor a pair iterator
    #[error("Node does not understand {type_name} sources")]
    UnsupportedSourceType { type_name: String },

    /// Attribute-style assignment targets one of the node's own member names
    #[error("'Node' object attribute '{name}' is read-only")]
    ReservedName { name: String },

    /// Deletion of a key that is not present
    #[error("Key not found: {key}")]
    KeyNotFound { key: String },

    /// An extend option holds a value outside its accepted set
    #[error("Invalid option '{option}': {reason}")]
    InvalidOption { option: String, reason: String },

    /// Traversal or node access through a value that is not a node
    #[error("Cannot access '{key}' on a {type_name} value")]
    NotANode { key: String, type_name: String },

    /// A value that cannot be used as a map key
    #[error("Unhashable key type: {type_name}")]
    UnhashableKey { type_name: String },

    /// An element of a pair sequence is not a two-element sequence
    #[error("Element {index} is a {type_name}, expected a (key, value) pair")]
    InvalidPair { index: usize, type_name: String },

    /// A path with no components
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// Typed conversion out of a value failed
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl NodeError {
    /// Check if this error indicates a missing key
    pub fn is_not_found_error(&self) -> bool {
        matches!(self, NodeError::KeyNotFound { .. })
    }

    /// Check if this error is an extend option error
    pub fn is_option_error(&self) -> bool {
        matches!(self, NodeError::InvalidOption { .. })
    }

    /// Check if this error is related to the shape or type of a value
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            NodeError::UnsupportedSourceType { .. }
                | NodeError::NotANode { .. }
                | NodeError::UnhashableKey { .. }
                | NodeError::InvalidPair { .. }
                | NodeError::TypeMismatch { .. }
        )
    }

    /// Check if this error rejected a reserved attribute name
    pub fn is_reserved_name_error(&self) -> bool {
        matches!(self, NodeError::ReservedName { .. })
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            NodeError::KeyNotFound { key } | NodeError::NotANode { key, .. } => Some(key),
            NodeError::ReservedName { name } => Some(name),
            _ => None,
        }
    }

    /// Get the option name if this is an option error
    pub fn option(&self) -> Option<&str> {
        match self {
            NodeError::InvalidOption { option, .. } => Some(option),
            _ => None,
        }
    }
}

// Conversion from NodeError to the main Error type
impl From<NodeError> for crate::Error {
    fn from(err: NodeError) -> Self {
        crate::Error::Node(err)
    }
}
