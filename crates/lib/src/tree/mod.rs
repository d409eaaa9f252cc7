//! Path-addressable tree views.
//!
//! This module provides the main public interface of the library. The
//! [`Tree`] type is a lightweight view over a shared nested [`Node`]
//! structure: it resolves dot-delimited paths (`"user.profile.name"`),
//! iterates direct entries with reconstructed sub-path context, and switches
//! between immutable and mutable modes without copying the underlying data.
//!
//! # Design
//!
//! A view is three fields: a reference-counted handle to the root node, the
//! origin path recording how the view was reached from that root, and a mode
//! flag. Every view derived from one root aliases the same storage cell, so a
//! write through any mutable view is immediately visible through every other
//! view. "Immutable" is a capability checked at the API boundary, not a
//! separate data structure.
//!
//! # Usage
//!
//! ```
//! use grove::Tree;
//!
//! let tree = Tree::new();
//! tree.set("user.profile.name", "Alice")?;
//! tree.set("user.profile.age", 30)?;
//!
//! assert_eq!(tree.get("user.profile.name")?.as_text(), Some("Alice"));
//! assert_eq!(tree.get("user.profile")?.as_tree().map(Tree::len), Some(2));
//!
//! let frozen = tree.to_immutable();
//! assert!(frozen.set("user.profile.age", 31).is_err());
//! # Ok::<(), grove::Error>(())
//! ```

use std::{cell::RefCell, fmt, rc::Rc};

use crate::collection::Collection;

// Submodules
pub(crate) mod canon;
mod errors;
mod node;
pub mod path;
mod resolve;
mod value;

// Convenience re-exports for core tree types
pub use errors::TreeError;
pub use node::Node;
pub use value::Value;

use resolve::Resolution;

/// View capability: whether structural mutation is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Read-only view; `set`/`push`/`delete` fail with
    /// [`TreeError::Immutable`].
    Immutable,
    /// Read-write view.
    Mutable,
}

/// The result of a successful path lookup.
///
/// Scalar leaves come back as raw [`Value`]s; structural values come back as
/// child [`Tree`] views sharing the same storage. A view over a scalar is
/// never constructed.
#[derive(Debug, Clone)]
pub enum Item {
    /// A scalar leaf, cloned out of storage.
    Value(Value),
    /// A lazily constructed child view over a nested node.
    Tree(Tree),
}

impl Item {
    /// Returns true if this item is a scalar value
    pub fn is_value(&self) -> bool {
        matches!(self, Item::Value(_))
    }

    /// Returns true if this item is a child tree view
    pub fn is_tree(&self) -> bool {
        matches!(self, Item::Tree(_))
    }

    /// The scalar value, if this item is one
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Item::Value(value) => Some(value),
            Item::Tree(_) => None,
        }
    }

    /// The child view, if this item is one
    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Item::Tree(tree) => Some(tree),
            Item::Value(_) => None,
        }
    }

    /// Consumes the item, returning the scalar value if it is one
    pub fn into_value(self) -> Option<Value> {
        match self {
            Item::Value(value) => Some(value),
            Item::Tree(_) => None,
        }
    }

    /// Consumes the item, returning the child view if it is one
    pub fn into_tree(self) -> Option<Tree> {
        match self {
            Item::Tree(tree) => Some(tree),
            Item::Value(_) => None,
        }
    }

    /// Attempts to read the item as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        self.as_value().and_then(Value::as_bool)
    }

    /// Attempts to read the item as an integer
    pub fn as_int(&self) -> Option<i64> {
        self.as_value().and_then(Value::as_int)
    }

    /// Attempts to read the item as a float
    pub fn as_float(&self) -> Option<f64> {
        self.as_value().and_then(Value::as_float)
    }

    /// Attempts to read the item as a string slice
    pub fn as_text(&self) -> Option<&str> {
        self.as_value().and_then(Value::as_text)
    }

    /// Converts the item into an owned value, snapshotting a child view's
    /// subtree as a [`Value::Node`].
    pub fn to_value(&self) -> Value {
        match self {
            Item::Value(value) => value.clone(),
            Item::Tree(tree) => Value::Node(tree.to_node()),
        }
    }
}

impl PartialEq<Value> for Item {
    fn eq(&self, other: &Value) -> bool {
        match self {
            Item::Value(value) => value == other,
            Item::Tree(tree) => match other {
                Value::Node(node) => &tree.to_node() == node,
                _ => false,
            },
        }
    }
}

/// A view over shared nested storage with dotted-path access.
///
/// # Storage sharing
///
/// Cloning a `Tree` (and every mode conversion and child view) aliases the
/// same backing storage; none of them copy data. To take an isolated
/// snapshot, use [`Tree::to_node`] and build a new view from it.
///
/// # Paths
///
/// Operations take dot-delimited paths. `get("a.b")` descends into `a` and
/// looks up `b`; `get("a\\.b")` looks up the single literal key `"a.b"`. A
/// lookup that reaches a scalar before exhausting its segments returns the
/// scalar and discards the rest of the path.
///
/// # Examples
///
/// ```
/// use grove::{Node, Tree};
///
/// let tree = Tree::mutable(Node::new().with("greeting", "hello"));
/// let frozen = tree.to_immutable();
///
/// // Both views alias the same storage.
/// tree.set("greeting", "hi")?;
/// assert_eq!(frozen.get("greeting")?.as_text(), Some("hi"));
/// # Ok::<(), grove::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Tree {
    /// Shared handle to the ROOT node of the backing storage.
    storage: Rc<RefCell<Node>>,
    /// Segments locating this view's node inside the root; also the prefix
    /// of every not-found diagnostic this view produces.
    origin: Vec<String>,
    /// Capability flag checked on every structural mutation.
    mode: Mode,
}

impl Tree {
    /// Creates an empty mutable root view over private storage.
    pub fn new() -> Self {
        Self::mutable(Node::new())
    }

    /// Creates a mutable root view owning `node` as private storage.
    pub fn mutable(node: Node) -> Self {
        Self {
            storage: Rc::new(RefCell::new(node)),
            origin: Vec::new(),
            mode: Mode::Mutable,
        }
    }

    /// Creates an immutable root view owning `node` as private storage.
    pub fn immutable(node: Node) -> Self {
        Self {
            storage: Rc::new(RefCell::new(node)),
            origin: Vec::new(),
            mode: Mode::Immutable,
        }
    }

    /// Child view over the node addressed by `origin`, sharing storage and
    /// mode.
    fn subview(&self, origin: Vec<String>) -> Tree {
        Tree {
            storage: Rc::clone(&self.storage),
            origin,
            mode: self.mode,
        }
    }

    /// The view's capability mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns true if structural mutation is allowed through this view.
    pub fn is_mutable(&self) -> bool {
        self.mode == Mode::Mutable
    }

    /// A mutable view over the same storage and origin.
    ///
    /// Never copies data. Idempotent: converting an already-mutable view
    /// yields an equivalent view.
    pub fn to_mutable(&self) -> Tree {
        Tree {
            storage: Rc::clone(&self.storage),
            origin: self.origin.clone(),
            mode: Mode::Mutable,
        }
    }

    /// An immutable view over the same storage and origin.
    ///
    /// Never copies data; values written later through a mutable alias stay
    /// visible here. Idempotent.
    pub fn to_immutable(&self) -> Tree {
        Tree {
            storage: Rc::clone(&self.storage),
            origin: self.origin.clone(),
            mode: Mode::Immutable,
        }
    }

    /// Returns true if both views alias the same backing storage cell.
    pub fn shares_storage_with(&self, other: &Tree) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }

    /// Gets the entry at a dot-delimited path.
    ///
    /// Scalars come back as [`Item::Value`]; nested nodes come back as
    /// [`Item::Tree`] child views.
    ///
    /// # Errors
    /// [`TreeError::NotFound`] carrying the fully-qualified dot-joined path
    /// (this view's origin plus the consumed segments) when no entry
    /// matches.
    pub fn get(&self, path: impl AsRef<str>) -> crate::Result<Item> {
        let segments = path::split(path.as_ref());
        let storage = self.storage.borrow();
        let Some(start) = storage.node_at(&self.origin) else {
            return Err(self.stale_view_error().into());
        };

        match resolve::resolve(start, &segments) {
            Resolution::Scalar { value, .. } => Ok(Item::Value(value)),
            Resolution::Branch { path: consumed } => {
                let mut origin = self.origin.clone();
                origin.extend(consumed);
                Ok(Item::Tree(self.subview(origin)))
            }
            Resolution::Missing { path: consumed } => Err(TreeError::NotFound {
                path: self.full_path(&consumed),
            }
            .into()),
        }
    }

    /// Gets the entry at a path, or `default` when nothing matches.
    ///
    /// Never fails; the default is returned as a raw value.
    pub fn get_or(&self, path: impl AsRef<str>, default: impl Into<Value>) -> Item {
        let segments = path::split(path.as_ref());
        let storage = self.storage.borrow();
        let Some(start) = storage.node_at(&self.origin) else {
            return Item::Value(default.into());
        };

        match resolve::resolve(start, &segments) {
            Resolution::Scalar { value, .. } => Item::Value(value),
            Resolution::Branch { path: consumed } => {
                let mut origin = self.origin.clone();
                origin.extend(consumed);
                Item::Tree(self.subview(origin))
            }
            Resolution::Missing { .. } => Item::Value(default.into()),
        }
    }

    /// Returns true if the path resolves to an entry. Never fails.
    pub fn contains(&self, path: impl AsRef<str>) -> bool {
        let segments = path::split(path.as_ref());
        let storage = self.storage.borrow();
        storage.node_at(&self.origin).is_some_and(|start| {
            !matches!(
                resolve::resolve(start, &segments),
                Resolution::Missing { .. }
            )
        })
    }

    /// The number of direct entries under this view's node.
    ///
    /// First level only, not a recursive count.
    pub fn len(&self) -> usize {
        self.storage
            .borrow()
            .node_at(&self.origin)
            .map_or(0, Node::len)
    }

    /// Returns true if this view's node has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A snapshot of the subtree at this view's root.
    ///
    /// The snapshot is an independent copy; the live storage stays shared
    /// between views, so callers must not assume isolation from further
    /// mutation through other views.
    pub fn to_node(&self) -> Node {
        self.storage
            .borrow()
            .node_at(&self.origin)
            .cloned()
            .unwrap_or_default()
    }

    /// The direct values of this view's node as a flat collection.
    ///
    /// Structural values are snapshotted as [`Value::Node`]s.
    pub fn values(&self) -> Collection {
        let storage = self.storage.borrow();
        match storage.node_at(&self.origin) {
            Some(node) => node.values().cloned().collect(),
            None => Collection::new(),
        }
    }

    /// A deterministic content digest of the subtree under this view.
    ///
    /// Two views over structurally equal data hash equal regardless of
    /// insertion order; the digest is a SHA-256 of the canonical
    /// serialized form, as lowercase hex.
    pub fn hash(&self) -> String {
        let storage = self.storage.borrow();
        let mut canonical = String::new();
        match storage.node_at(&self.origin) {
            Some(node) => canon::write_node(node, &mut canonical),
            None => canonical.push_str("{}"),
        }
        canon::digest(&canonical)
    }

    /// Iterates the direct entries of this view's node in insertion order.
    ///
    /// Structural values are yielded as child views whose origin extends
    /// this view's origin with the entry key, so their diagnostics name the
    /// full path from the root. Scalars are yielded as raw values. Calling
    /// `iter()` again restarts from the first entry.
    pub fn iter(&self) -> Entries {
        Entries {
            tree: self.clone(),
            position: 0,
        }
    }

    /// Sets the value at a path, creating intermediate nodes as needed.
    ///
    /// Missing intermediate nodes are created empty; a scalar standing where
    /// a node is needed is replaced. The final segment is overwritten whether
    /// it held a scalar or a whole subtree; the overwritten value is
    /// returned.
    ///
    /// # Errors
    /// [`TreeError::Immutable`] on an immutable view. Missing structure is
    /// never an error here, unlike [`Tree::get`].
    pub fn set(&self, path: impl AsRef<str>, value: impl Into<Value>) -> crate::Result<Option<Value>> {
        self.ensure_mutable("set")?;
        let mut segments = path::split(path.as_ref());
        // split() always yields at least one segment
        let key = segments.pop().unwrap_or_default();

        let mut storage = self.storage.borrow_mut();
        let mut parent_path = self.origin.clone();
        parent_path.extend(segments);
        let parent = storage.ensure_node_at(&parent_path);
        let old = parent.insert(key, value.into());
        tracing::trace!(path = path.as_ref(), replaced = old.is_some(), "tree set");
        Ok(old)
    }

    /// Appends a value under the next sequential integer key.
    ///
    /// The key is one past the largest integer-like key in this view's node
    /// (`"0"` for a node without integer keys) and is returned as used. Only
    /// meaningful for sequentially keyed nodes.
    ///
    /// # Errors
    /// [`TreeError::Immutable`] on an immutable view.
    pub fn push(&self, value: impl Into<Value>) -> crate::Result<String> {
        self.ensure_mutable("push")?;
        let mut storage = self.storage.borrow_mut();
        let node = storage.ensure_node_at(&self.origin);
        let key = node.next_index().to_string();
        node.insert(key.clone(), value.into());
        tracing::trace!(key = %key, "tree push");
        Ok(key)
    }

    /// Deletes the entry at a path, returning the removed value.
    ///
    /// The entry is removed from its immediate parent node. Resolution
    /// follows the same rules as [`Tree::get`], including the scalar
    /// short-circuit.
    ///
    /// # Errors
    /// [`TreeError::NotFound`] naming the full path when nothing matches —
    /// deleting a missing path is an error, not a no-op.
    /// [`TreeError::Immutable`] on an immutable view.
    pub fn delete(&self, path: impl AsRef<str>) -> crate::Result<Value> {
        self.ensure_mutable("delete")?;
        let segments = path::split(path.as_ref());
        let mut storage = self.storage.borrow_mut();

        let resolution = match storage.node_at(&self.origin) {
            Some(start) => resolve::resolve(start, &segments),
            None => return Err(self.stale_view_error().into()),
        };
        let consumed = match resolution {
            Resolution::Missing { path: consumed } => {
                return Err(TreeError::NotFound {
                    path: self.full_path(&consumed),
                }
                .into());
            }
            found => found.path().to_vec(),
        };

        let mut address = self.origin.clone();
        address.extend(consumed.iter().cloned());
        let removed = storage.remove_at(&address).ok_or_else(|| TreeError::NotFound {
            path: self.full_path(&consumed),
        })?;
        tracing::trace!(path = path.as_ref(), "tree delete");
        Ok(removed)
    }

    /// Serializes the subtree at this view's root to JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.to_node())?)
    }

    /// Deserializes a JSON object into an immutable root view.
    ///
    /// Use [`Tree::to_mutable`] on the result for a writable view.
    pub fn from_json(json: &str) -> crate::Result<Tree> {
        let node: Node = serde_json::from_str(json)?;
        Ok(Tree::immutable(node))
    }

    /// Origin plus consumed segments, dot-joined for diagnostics.
    fn full_path(&self, consumed: &[String]) -> String {
        let mut all: Vec<&str> = self.origin.iter().map(String::as_str).collect();
        all.extend(consumed.iter().map(String::as_str));
        path::join(&all)
    }

    /// The node this view was created over no longer exists in storage.
    fn stale_view_error(&self) -> TreeError {
        TreeError::NotFound {
            path: path::join(&self.origin),
        }
    }

    fn ensure_mutable(&self, operation: &str) -> Result<(), TreeError> {
        match self.mode {
            Mode::Mutable => Ok(()),
            Mode::Immutable => Err(TreeError::Immutable {
                operation: operation.to_string(),
            }),
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality of the data under both views; mode and storage
/// identity are not compared.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.to_node() == other.to_node()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let storage = self.storage.borrow();
        match storage.node_at(&self.origin) {
            Some(node) => write!(f, "{node}"),
            None => write!(f, "{{}}"),
        }
    }
}

impl From<Node> for Tree {
    /// Equivalent to [`Tree::immutable`].
    fn from(node: Node) -> Self {
        Tree::immutable(node)
    }
}

/// Restartable cursor over the direct entries of a view's node.
///
/// Yields `(key, item)` pairs in insertion order. The cursor indexes by
/// position: mutating the node while iterating is not supported and may skip
/// or re-observe entries.
#[derive(Debug, Clone)]
pub struct Entries {
    tree: Tree,
    position: usize,
}

impl Iterator for Entries {
    type Item = (String, Item);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, scalar) = {
            let storage = self.tree.storage.borrow();
            let node = storage.node_at(&self.tree.origin)?;
            let (key, value) = node.get_index(self.position)?;
            match value {
                Value::Node(_) => (key.clone(), None),
                leaf => (key.clone(), Some(leaf.clone())),
            }
        };
        self.position += 1;

        let item = match scalar {
            Some(value) => Item::Value(value),
            None => {
                let mut origin = self.tree.origin.clone();
                origin.push(key.clone());
                Item::Tree(self.tree.subview(origin))
            }
        };
        Some((key, item))
    }
}

impl IntoIterator for &Tree {
    type Item = (String, Item);
    type IntoIter = Entries;

    fn into_iter(self) -> Entries {
        self.iter()
    }
}
