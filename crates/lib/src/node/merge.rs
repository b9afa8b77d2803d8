//! Recursive merging: two-way [`Node::update`] and N-way [`Node::extend`].

use std::{fmt, str::FromStr};

use super::{Node, NodeError, Seq, Value};

/// How [`Node::extend`] combines two sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListAction {
    /// The later sequence replaces the earlier one
    #[default]
    Replace,
    /// The later sequence's elements are appended to the earlier one
    Append,
    /// The later sequence overwrites the earlier one's prefix; a longer
    /// earlier sequence keeps its tail
    Ammend,
}

impl ListAction {
    pub const ALL: [ListAction; 3] = [ListAction::Replace, ListAction::Append, ListAction::Ammend];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListAction::Replace => "replace",
            ListAction::Append => "append",
            ListAction::Ammend => "ammend",
        }
    }
}

impl fmt::Display for ListAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListAction {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| NodeError::InvalidOption {
                option: "list_action".to_string(),
                reason: format!("'{s}' is not one of: replace, append, ammend"),
            })
    }
}

/// Options for [`Node::extend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtendOptions {
    /// Merge colliding maps (and, with `Ammend`, sequences) recursively
    /// instead of overwriting them
    pub deep: bool,
    pub list_action: ListAction,
}

impl ExtendOptions {
    pub fn deep(mut self, deep: bool) -> Self {
        self.deep = deep;
        self
    }

    pub fn list_action(mut self, list_action: ListAction) -> Self {
        self.list_action = list_action;
        self
    }

    /// Reads options from a dynamic node.
    ///
    /// `deep` must hold a boolean and `list_action` one of the
    /// [`ListAction`] names; anything else fails with
    /// [`NodeError::InvalidOption`]. Unknown keys are ignored.
    ///
    /// ```
    /// # use autoviv::node::{ExtendOptions, ListAction, Node};
    /// let options = Node::new().with("deep", true).with("list_action", "append");
    /// let options = ExtendOptions::from_node(&options)?;
    /// assert!(options.deep);
    /// assert_eq!(options.list_action, ListAction::Append);
    ///
    /// let bad = Node::new().with("deep", "yes");
    /// assert!(ExtendOptions::from_node(&bad).unwrap_err().is_option_error());
    /// # Ok::<(), autoviv::node::NodeError>(())
    /// ```
    pub fn from_node(node: &Node) -> Result<Self, NodeError> {
        let mut options = Self::default();
        for (key, value) in node {
            match key.as_text() {
                Some("deep") => {
                    options.deep = value.as_bool().ok_or_else(|| NodeError::InvalidOption {
                        option: "deep".to_string(),
                        reason: format!("expected a boolean, found {}", value.type_name()),
                    })?;
                }
                Some("list_action") => {
                    let name = value.as_text().ok_or_else(|| NodeError::InvalidOption {
                        option: "list_action".to_string(),
                        reason: format!("expected text, found {}", value.type_name()),
                    })?;
                    options.list_action = name.parse()?;
                }
                _ => tracing::warn!(option = %key, "ignoring unknown extend option"),
            }
        }
        Ok(options)
    }
}

impl Node {
    /// Recursively merges `other` into `self`.
    ///
    /// Only a node landing on a node recurses; every other combination,
    /// sequences included, overwrites the existing value.
    ///
    /// ```
    /// # use autoviv::node::Node;
    /// use serde_json::json;
    ///
    /// let mut node = Node::try_from(json!({"a": {"b": 1}, "x": [1]}))?;
    /// node.update(Node::try_from(json!({"a": {"c": 2}, "x": [2]}))?);
    /// assert_eq!(node.to_json(), json!({"a": {"b": 1, "c": 2}, "x": [2]}));
    /// # Ok::<(), autoviv::node::NodeError>(())
    /// ```
    pub fn update(&mut self, other: Node) {
        for (key, value) in other {
            match value {
                Value::Node(incoming) => match self.children.get_mut(&key) {
                    Some(Value::Node(existing)) => existing.update(incoming),
                    _ => {
                        self.set(key, incoming);
                    }
                },
                value => {
                    self.set(key, value);
                }
            }
        }
    }

    /// Merges any number of values left to right into a new value.
    ///
    /// - a source whose kind (map, sequence, scalar) differs from the
    ///   result so far discards that result
    /// - a map source overwrites keys, or with `deep` extends colliding
    ///   values recursively
    /// - a sequence source combines according to the [`ListAction`]
    /// - a scalar source replaces the result
    ///
    /// The result is a [`Value::Node`] for maps and the bare sequence or
    /// scalar otherwise. With no sources it is an empty node.
    ///
    /// ```
    /// # use autoviv::node::{ExtendOptions, ListAction, Node, Value};
    /// use serde_json::json;
    ///
    /// let merged = Node::extend([json!({"a": 1}), json!({"a": 2})], &ExtendOptions::default());
    /// assert_eq!(merged.as_node().unwrap().to_json(), json!({"a": 2}));
    ///
    /// let options = ExtendOptions::default().list_action(ListAction::Append);
    /// let merged = Node::extend([json!([1, 2]), json!([3, 4])], &options);
    /// assert_eq!(merged, Value::from(vec![1, 2, 3, 4]));
    /// ```
    pub fn extend<I, V>(sources: I, options: &ExtendOptions) -> Value
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        extend_values(sources.into_iter().map(Into::into), options)
            .unwrap_or_else(|| Value::Node(Node::new()))
    }

    /// [`Node::extend`] with options read by [`ExtendOptions::from_node`]
    pub fn extend_with<I, V>(sources: I, options: &Node) -> Result<Value, NodeError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let options = ExtendOptions::from_node(options)?;
        Ok(Self::extend(sources, &options))
    }
}

/// Folds `sources` into an accumulator; `None` when there were no sources.
fn extend_values(
    sources: impl Iterator<Item = Value>,
    options: &ExtendOptions,
) -> Option<Value> {
    let mut extended: Option<Value> = None;

    for source in sources {
        if let Some(previous) = &extended {
            if previous.kind() != source.kind() {
                tracing::debug!(
                    from = ?previous.kind(),
                    to = ?source.kind(),
                    "source kind changed, discarding accumulated value"
                );
            }
        }

        extended = Some(match (extended.take(), source) {
            (Some(Value::Node(acc)), Value::Node(src)) => {
                Value::Node(extend_map(acc, src, options))
            }
            (_, Value::Node(src)) => Value::Node(extend_map(Node::new(), src, options)),
            (Some(Value::Seq(acc)), Value::Seq(src)) => Value::Seq(extend_seq(acc, src, options)),
            (_, Value::Seq(src)) => {
                let acc = Seq::with_kind(src.kind());
                Value::Seq(extend_seq(acc, src, options))
            }
            (_, scalar) => scalar,
        });
    }

    extended
}

fn extend_map(mut acc: Node, src: Node, options: &ExtendOptions) -> Node {
    for (key, value) in src {
        if options.deep {
            if let Some(slot) = acc.children.get_mut(&key) {
                let previous = std::mem::take(slot);
                *slot = extend_values([previous, value].into_iter(), options).unwrap_or_default();
                continue;
            }
        }
        acc.set(key, value);
    }
    acc
}

fn extend_seq(mut acc: Seq, src: Seq, options: &ExtendOptions) -> Seq {
    match options.list_action {
        ListAction::Replace => src,
        ListAction::Append => {
            acc.extend(src);
            acc
        }
        // An empty source leaves the accumulator untouched.
        ListAction::Ammend if src.is_empty() => acc,
        ListAction::Ammend if acc.len() > src.len() => {
            let kind = src.kind();
            let tail = acc.into_items().split_off(src.len());
            let mut items = src.into_items();
            items.extend(tail);
            let combined = Seq::from_items(kind, items);
            if options.deep {
                // Single-source extend of the combined sequence
                extend_seq(Seq::with_kind(kind), combined, options)
            } else {
                combined
            }
        }
        ListAction::Ammend => src,
    }
}
