//! Insertion-ordered dictionaries.
//!
//! A [`Map`] is a thin string-keyed dictionary collaborator: direct key
//! access with defaults, membership checks over keys and values, filtering,
//! a [`Collection`] view of its values, and a content hash. Unlike a
//! [`Tree`](crate::Tree), a map performs no path resolution — keys are
//! opaque, dots included.

use std::fmt;

use indexmap::IndexMap;

use crate::collection::Collection;
use crate::tree::{Value, canon};

/// An insertion-ordered string-keyed dictionary of values.
///
/// # Examples
///
/// ```
/// use grove::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("name", "Alice");
/// map.insert("age", 30);
///
/// assert_eq!(map.get("name"), Some(&Value::Text("Alice".into())));
/// assert_eq!(map.get_or("city", "unknown"), Value::Text("unknown".into()));
/// assert!(map.contains_value(&Value::Int(30)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Map {
    entries: IndexMap<String, Value>,
}

impl Map {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Returns the number of key-value mappings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if this map contains no mappings
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets a value at the given key, returning the old value if present
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// The value mapped to the given key, if any
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.entries.get(key.as_ref())
    }

    /// The value mapped to the given key, or `default` when absent
    pub fn get_or(&self, key: impl AsRef<str>, default: impl Into<Value>) -> Value {
        match self.entries.get(key.as_ref()) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Removes a key, returning its value if present.
    ///
    /// Uses shift semantics so the insertion order of the remaining entries
    /// is preserved.
    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<Value> {
        self.entries.shift_remove(key.as_ref())
    }

    /// Returns true if this map contains a mapping for the given key
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    /// Returns true if this map maps one or more keys to the given value
    pub fn contains_value(&self, value: &Value) -> bool {
        self.entries.values().any(|candidate| candidate == value)
    }

    /// A new map keeping only the entries the predicate accepts
    pub fn filter(&self, mut predicate: impl FnMut(&str, &Value) -> bool) -> Map {
        Map {
            entries: self
                .entries
                .iter()
                .filter(|(key, value)| predicate(key, value))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }

    /// Returns an iterator over the entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Returns an iterator over the keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// A [`Collection`] view of the values in insertion order
    pub fn values(&self) -> Collection {
        self.entries.values().cloned().collect()
    }

    /// A deterministic content digest of the entries.
    ///
    /// SHA-256 of the canonical serialized form (keys sorted), as lowercase
    /// hex; equal maps hash equal regardless of insertion order.
    pub fn hash(&self) -> String {
        let mut canonical = String::new();
        canon::write_entries(self.entries.iter(), &mut canonical);
        canon::digest(&canonical)
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Map {
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
