//!
//! Grove: path-addressable nested data structures.
//!
//! ## Core Concepts
//!
//! * **Trees (`tree::Tree`)**: The core of the library. A `Tree` is a lightweight
//!   view over a shared, insertion-ordered nested mapping. Entries are addressed
//!   with dot-delimited paths (`"user.profile.name"`), literal dots in a key are
//!   escaped as `\.`, and views come in immutable and mutable flavors that alias
//!   the same backing storage.
//! * **Nodes (`tree::Node`)**: The backing store itself, a string-keyed mapping
//!   whose values are scalars or further nodes.
//! * **Values (`tree::Value`)**: The scalar/structural value enum stored in nodes.
//! * **Collections (`collection::Collection`)**: A thin ordered list of values,
//!   used as the hand-off type for a tree's flattened value set.
//! * **Maps (`map::Map`)**: A thin insertion-ordered dictionary collaborator.
//!
//! ## Example
//!
//! ```
//! use grove::{Node, Tree};
//!
//! let data = Node::new().with(
//!     "a",
//!     Node::new().with("b", Node::new().with("c", 1).with("d", 2)),
//! );
//!
//! let tree = Tree::mutable(data);
//! assert_eq!(tree.get("a.b.c").unwrap().as_int(), Some(1));
//! assert!(!tree.contains("a.b.e"));
//! assert_eq!(tree.get_or("a.b.e", -1).as_int(), Some(-1));
//!
//! tree.set("a.b.e", "added")?;
//! assert_eq!(tree.get("a.b.e")?.as_text(), Some("added"));
//! # Ok::<(), grove::Error>(())
//! ```

pub mod collection;
pub mod map;
pub mod tree;

/// Re-export the core types for easier access.
pub use collection::Collection;
pub use map::Map;
pub use tree::{Item, Mode, Node, Tree, Value};

/// Result type used throughout the grove library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the grove library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured tree errors from the tree module
    #[error(transparent)]
    Tree(tree::TreeError),

    /// Structured collection errors from the collection module
    #[error(transparent)]
    Collection(collection::CollectionError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Tree(_) => "tree",
            Error::Collection(_) => "collection",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a path or element was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a rejected mutation of an immutable view.
    pub fn is_immutable_violation(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_immutable(),
            _ => false,
        }
    }

    /// Check if this error indicates an out-of-range collection index.
    pub fn is_invalid_index(&self) -> bool {
        match self {
            Error::Collection(collection_err) => collection_err.is_invalid_index(),
            _ => false,
        }
    }
}
