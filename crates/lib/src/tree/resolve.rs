//! Path resolution against nested nodes.
//!
//! The resolver walks parsed segments through a node, tracking the segments
//! consumed so far so that misses can be reported with a fully-qualified
//! path. Callers prepend the view's origin path when building diagnostics.

use super::node::Node;
use super::value::Value;

/// Outcome of walking a segment list against a node.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Resolution {
    /// The walk ended on a scalar leaf. `path` holds the consumed segments;
    /// any unconsumed tail was discarded (see [`resolve`]).
    Scalar { path: Vec<String>, value: Value },
    /// The walk ended on a nested node addressed by `path`.
    Branch { path: Vec<String> },
    /// A segment was missing. `path` holds the consumed segments including
    /// the failing key, never the unconsumed tail.
    Missing { path: Vec<String> },
}

impl Resolution {
    /// The consumed path, whatever the outcome.
    pub(crate) fn path(&self) -> &[String] {
        match self {
            Resolution::Scalar { path, .. }
            | Resolution::Branch { path }
            | Resolution::Missing { path } => path,
        }
    }
}

/// Walks `segments` through `start`.
///
/// Rules:
/// - a missing key stops the walk with [`Resolution::Missing`];
/// - a nested node with segments remaining is descended into;
/// - a nested node with no segments remaining is the found value;
/// - a scalar is always a found value, even with segments remaining —
///   the unconsumed tail is silently discarded. Looking up `"a.b.c"` where
///   `a.b` is a scalar returns that scalar.
pub(crate) fn resolve(start: &Node, segments: &[String]) -> Resolution {
    let mut node = start;
    let mut consumed = Vec::with_capacity(segments.len());

    for (index, segment) in segments.iter().enumerate() {
        consumed.push(segment.clone());
        match node.get(segment) {
            None => return Resolution::Missing { path: consumed },
            Some(Value::Node(child)) => {
                if index + 1 == segments.len() {
                    return Resolution::Branch { path: consumed };
                }
                node = child;
            }
            Some(value) => {
                return Resolution::Scalar {
                    path: consumed,
                    value: value.clone(),
                };
            }
        }
    }

    // path::split never yields an empty segment list; an empty walk finds
    // nothing.
    Resolution::Missing { path: consumed }
}
