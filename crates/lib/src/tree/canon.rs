//! Canonical serialization for content hashing.
//!
//! Produces a deterministic JSON rendering of values: node keys are sorted
//! recursively, so two structurally equal nodes canonicalize identically
//! regardless of insertion order. The byte format is internal — it only has
//! to be stable within a process, not across versions.

use sha2::{Digest, Sha256};

use super::node::Node;
use super::value::Value;

/// Renders a value in canonical form.
pub(crate) fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Node(node) => write_node(node, out),
        // serde_json rendering gives correct string escaping and stable
        // number formatting for leaves.
        scalar => out.push_str(
            &serde_json::to_string(scalar).expect("Failed to serialize scalar for hashing"),
        ),
    }
}

/// Renders a node in canonical form with keys sorted.
pub(crate) fn write_node(node: &Node, out: &mut String) {
    write_entries(node.iter(), out);
}

/// Renders `(key, value)` entries as a canonical JSON object, sorting by key.
pub(crate) fn write_entries<'a>(
    entries: impl Iterator<Item = (&'a String, &'a Value)>,
    out: &mut String,
) {
    let mut sorted: Vec<_> = entries.collect();
    sorted.sort_by(|(a, _), (b, _)| a.cmp(b));

    out.push('{');
    let mut first = true;
    for (key, value) in sorted {
        if !first {
            out.push(',');
        }
        out.push_str(&serde_json::to_string(key).expect("Failed to serialize key for hashing"));
        out.push(':');
        write_value(value, out);
        first = false;
    }
    out.push('}');
}

/// Renders an ordered value sequence as a canonical JSON array.
///
/// Sequence order is significant, so no sorting is applied.
pub(crate) fn write_values<'a>(values: impl Iterator<Item = &'a Value>, out: &mut String) {
    out.push('[');
    let mut first = true;
    for value in values {
        if !first {
            out.push(',');
        }
        write_value(value, out);
        first = false;
    }
    out.push(']');
}

/// SHA-256 digest of a canonical rendering, as lowercase hex.
pub(crate) fn digest(canonical: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let hash = hasher.finalize();
    format!("{hash:x}")
}
