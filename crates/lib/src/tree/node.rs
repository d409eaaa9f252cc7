//! The backing store for trees.
//!
//! A [`Node`] is an insertion-ordered mapping from string keys to [`Value`]s.
//! Nodes form the single source of truth a [`Tree`](super::Tree) view reads
//! and writes; the tree layer never copies them when switching view modes.

use std::fmt;

use indexmap::IndexMap;

use super::value::Value;

/// An insertion-ordered mapping of string keys to values.
///
/// Iteration yields entries in the order they were inserted. Equality is
/// structural and order-insensitive, matching [`IndexMap`] semantics; the
/// canonical form used for content hashing sorts keys so that equal nodes
/// always hash equal.
///
/// # Examples
///
/// ```
/// use grove::Node;
///
/// let node = Node::new()
///     .with("name", "Alice")
///     .with("age", 30)
///     .with("profile", Node::new().with("bio", "developer"));
///
/// assert_eq!(node.len(), 3);
/// assert!(node.contains_key("profile"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Node {
    entries: IndexMap<String, Value>,
}

impl Node {
    /// Creates a new empty node
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Returns the number of direct entries in this node
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if this node has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the node contains the given direct key
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    /// Gets a value by direct key (no path resolution)
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.entries.get(key.as_ref())
    }

    /// Gets a mutable reference to a value by direct key
    pub fn get_mut(&mut self, key: impl AsRef<str>) -> Option<&mut Value> {
        self.entries.get_mut(key.as_ref())
    }

    /// Gets an entry by position in insertion order
    pub fn get_index(&self, index: usize) -> Option<(&String, &Value)> {
        self.entries.get_index(index)
    }

    /// Sets a value at the given key, returning the old value if present.
    ///
    /// A new key lands at the end of the iteration order; overwriting an
    /// existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes a key, returning its value if present.
    ///
    /// Uses shift semantics so the insertion order of the remaining entries
    /// is preserved.
    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<Value> {
        self.entries.shift_remove(key.as_ref())
    }

    /// Returns an iterator over the entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Returns an iterator over the keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Returns an iterator over the values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// The key an append-style insert would use: one past the largest
    /// integer-like key, or 0 for a node without integer keys.
    pub(crate) fn next_index(&self) -> u64 {
        self.entries
            .keys()
            .filter_map(|key| key.parse::<u64>().ok())
            .map(|index| index + 1)
            .max()
            .unwrap_or(0)
    }

    /// Walks `path` through nested nodes, returning the node it addresses.
    ///
    /// Returns `None` if any segment is missing or addresses a scalar.
    pub(crate) fn node_at(&self, path: &[String]) -> Option<&Node> {
        let mut current = self;
        for segment in path {
            current = match current.get(segment) {
                Some(Value::Node(node)) => node,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Mutable variant of [`Node::node_at`].
    pub(crate) fn node_at_mut(&mut self, path: &[String]) -> Option<&mut Node> {
        let mut current = self;
        for segment in path {
            current = match current.get_mut(segment) {
                Some(Value::Node(node)) => node,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Walks `path`, creating empty nodes for missing segments and replacing
    /// scalar entries that stand in the way. Never fails.
    pub(crate) fn ensure_node_at(&mut self, path: &[String]) -> &mut Node {
        let mut current = self;
        for segment in path {
            let entry = current
                .entries
                .entry(segment.clone())
                .or_insert_with(|| Value::Node(Node::new()));
            if !matches!(entry, Value::Node(_)) {
                *entry = Value::Node(Node::new());
            }
            current = match entry {
                Value::Node(node) => node,
                _ => unreachable!(),
            };
        }
        current
    }

    /// Removes the entry addressed by `path` from its immediate parent.
    ///
    /// Returns `None` when the parent cannot be reached or the final key is
    /// absent. Order of the remaining siblings is preserved.
    pub(crate) fn remove_at(&mut self, path: &[String]) -> Option<Value> {
        let (key, parent_path) = path.split_last()?;
        self.node_at_mut(parent_path)?.remove(key)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl FromIterator<(String, Value)> for Node {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut node = Node::new();
        for (key, value) in iter {
            node.insert(key, value);
        }
        node
    }
}
