//! Write-path tests: set, push, delete, and immutability enforcement.

use grove::{Node, Tree, Value, tree::TreeError};

use super::helpers::{nested_sample, settings_sample};

// ===== SET =====

#[test]
fn test_set_overwrites_and_returns_old_value() {
    let tree = Tree::mutable(settings_sample());

    let old = tree.set("title", "renamed").unwrap();
    assert_eq!(old, Some(Value::Text("grove".into())));
    assert_eq!(tree.get("title").unwrap().as_text(), Some("renamed"));

    // Overwriting a whole subtree works the same way.
    let old = tree.set("limits", 0).unwrap();
    assert!(old.is_some_and(|value| value.is_node()));
    assert_eq!(tree.get("limits").unwrap().as_int(), Some(0));
}

#[test]
fn test_set_creates_missing_intermediate_nodes() {
    let tree = Tree::new();

    assert!(tree.set("user.profile.name", "Alice").unwrap().is_none());
    assert_eq!(
        tree.get("user.profile.name").unwrap().as_text(),
        Some("Alice")
    );
    assert_eq!(tree.get("user").unwrap().into_tree().unwrap().len(), 1);
}

#[test]
fn test_set_replaces_scalar_intermediates() {
    let tree = Tree::mutable(settings_sample());

    // "title" is a scalar; setting below it replaces it with a node.
    tree.set("title.sub", 1).unwrap();
    assert_eq!(tree.get("title.sub").unwrap().as_int(), Some(1));
    assert!(tree.get("title").unwrap().is_tree());
}

#[test]
fn test_set_with_escaped_key() {
    let tree = Tree::mutable(settings_sample());

    tree.set("server.host\\.name", "example.org").unwrap();
    assert_eq!(
        tree.get("server.host\\.name").unwrap().as_text(),
        Some("example.org")
    );
    // The literal key was overwritten in place, not split into nesting.
    assert_eq!(tree.get("server").unwrap().into_tree().unwrap().len(), 2);
}

#[test]
fn test_set_through_child_view() {
    let tree = Tree::mutable(nested_sample());
    let child = tree.get("a.b").unwrap().into_tree().unwrap();

    child.set("e", 3).unwrap();
    assert_eq!(tree.get("a.b.e").unwrap().as_int(), Some(3));
}

// ===== PUSH =====

#[test]
fn test_push_appends_sequential_keys() {
    let tree = Tree::new();

    assert_eq!(tree.push("first").unwrap(), "0");
    assert_eq!(tree.push("second").unwrap(), "1");
    assert_eq!(tree.get("1").unwrap().as_text(), Some("second"));
}

#[test]
fn test_push_continues_after_existing_indices() {
    let tree = Tree::mutable(settings_sample());

    let tags = tree.get("tags").unwrap().into_tree().unwrap();
    assert_eq!(tags.push("delta").unwrap(), "3");
    assert_eq!(tree.get("tags.3").unwrap().as_text(), Some("delta"));
    assert_eq!(tags.len(), 4);
}

// ===== DELETE =====

#[test]
fn test_delete_then_get_misses() {
    let tree = Tree::mutable(nested_sample());

    let removed = tree.delete("a.b.c").unwrap();
    assert_eq!(removed, Value::Int(1));

    assert!(!tree.contains("a.b.c"));
    let err = tree.get("a.b.c").unwrap_err();
    assert!(err.is_not_found());

    // Siblings survive.
    assert_eq!(tree.get("a.b.d").unwrap().as_int(), Some(2));
}

#[test]
fn test_delete_missing_path_is_an_error() {
    let tree = Tree::mutable(nested_sample());

    let err = tree.delete("a.b.e").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Element \"a.b.e\" not found");
}

#[test]
fn test_delete_whole_subtree() {
    let tree = Tree::mutable(nested_sample());

    let removed = tree.delete("a.b").unwrap();
    assert!(removed.is_node());
    assert!(!tree.contains("a.b"));
    assert!(tree.contains("a"));
    assert!(tree.get("a").unwrap().into_tree().unwrap().is_empty());
}

#[test]
fn test_delete_follows_the_scalar_short_circuit() {
    let tree = Tree::mutable(settings_sample());

    // "title" is a scalar, so "title.anything" addresses it (see DESIGN.md);
    // deleting removes the scalar entry itself.
    let removed = tree.delete("title.anything").unwrap();
    assert_eq!(removed, Value::Text("grove".into()));
    assert!(!tree.contains("title"));
}

#[test]
fn test_delete_through_child_view() {
    let tree = Tree::mutable(nested_sample());
    let child = tree.get("a").unwrap().into_tree().unwrap();

    child.delete("b.d").unwrap();
    assert!(!tree.contains("a.b.d"));

    let err = child.delete("b.d").unwrap_err();
    assert_eq!(err.to_string(), "Element \"a.b.d\" not found");
}

// ===== IMMUTABILITY ENFORCEMENT =====

#[test]
fn test_immutable_view_rejects_set() {
    let tree = Tree::immutable(settings_sample());

    let err = tree.set("title", "nope").unwrap_err();
    assert!(err.is_immutable_violation());
    match err {
        grove::Error::Tree(TreeError::Immutable { operation }) => assert_eq!(operation, "set"),
        other => panic!("expected Immutable, got {other:?}"),
    }

    // No side effect.
    assert_eq!(tree.get("title").unwrap().as_text(), Some("grove"));
}

#[test]
fn test_immutable_view_rejects_delete_and_push() {
    let tree = Tree::immutable(settings_sample());

    assert!(tree.delete("title").unwrap_err().is_immutable_violation());
    assert!(tree.push("x").unwrap_err().is_immutable_violation());

    assert!(tree.contains("title"));
    assert_eq!(tree.len(), 5);
}

#[test]
fn test_immutable_child_views_inherit_the_capability() {
    let tree = Tree::immutable(nested_sample());
    let child = tree.get("a.b").unwrap().into_tree().unwrap();

    assert!(!child.is_mutable());
    assert!(child.set("c", 9).unwrap_err().is_immutable_violation());
}

// ===== MUTATION VISIBILITY =====

#[test]
fn test_writes_are_visible_through_sibling_views() {
    let tree = Tree::mutable(Node::new().with("a", Node::new()));
    let frozen = tree.to_immutable();

    tree.set("a.b", 5).unwrap();
    assert_eq!(frozen.get("a.b").unwrap().as_int(), Some(5));

    tree.delete("a.b").unwrap();
    assert!(!frozen.contains("a.b"));
}

#[test]
fn test_clones_alias_the_same_storage() {
    let tree = Tree::new();
    let alias = tree.clone();

    alias.set("shared", 1).unwrap();
    assert_eq!(tree.get("shared").unwrap().as_int(), Some(1));
    assert!(tree.shares_storage_with(&alias));
}

#[test]
fn test_snapshots_are_isolated() {
    let tree = Tree::mutable(nested_sample());
    let snapshot = tree.to_node();

    tree.set("a.b.c", 100).unwrap();

    // The snapshot kept the old value; a fresh view over it is detached.
    let detached = Tree::immutable(snapshot);
    assert_eq!(detached.get("a.b.c").unwrap().as_int(), Some(1));
    assert!(!detached.shares_storage_with(&tree));
}
