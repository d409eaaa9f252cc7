//! View-mode tests: conversions, idempotence, storage sharing.

use grove::{Mode, Tree};

use super::helpers::{nested_sample, settings_sample};

#[test]
fn test_conversions_share_storage() {
    let tree = Tree::mutable(settings_sample());
    let frozen = tree.to_immutable();
    let thawed = frozen.to_mutable();

    assert!(tree.shares_storage_with(&frozen));
    assert!(tree.shares_storage_with(&thawed));

    assert_eq!(frozen.mode(), Mode::Immutable);
    assert_eq!(thawed.mode(), Mode::Mutable);
}

#[test]
fn test_conversions_are_idempotent() {
    let tree = Tree::mutable(settings_sample());

    let still_mutable = tree.to_mutable();
    assert!(still_mutable.is_mutable());
    assert!(still_mutable.shares_storage_with(&tree));
    assert_eq!(still_mutable, tree);

    let frozen = tree.to_immutable();
    let still_frozen = frozen.to_immutable();
    assert!(!still_frozen.is_mutable());
    assert!(still_frozen.shares_storage_with(&frozen));
    assert_eq!(still_frozen, frozen);
}

#[test]
fn test_round_trip_preserves_data() {
    let data = settings_sample();

    let tree = Tree::immutable(data.clone());
    assert_eq!(tree.to_immutable().to_mutable().to_node(), data);

    let tree = Tree::mutable(data.clone());
    assert_eq!(tree.to_mutable().to_immutable().to_node(), data);
}

#[test]
fn test_conversion_preserves_origin() {
    let tree = Tree::mutable(nested_sample());
    let child = tree.get("a.b").unwrap().into_tree().unwrap();

    // The converted child still diagnoses with the full path.
    let frozen_child = child.to_immutable();
    let err = frozen_child.get("zzz").unwrap_err();
    assert_eq!(err.to_string(), "Element \"a.b.zzz\" not found");
}

#[test]
fn test_equality_is_structural() {
    let left = Tree::immutable(settings_sample());
    let right = Tree::mutable(settings_sample());

    // Equal data, independent storage, different modes.
    assert_eq!(left, right);
    assert!(!left.shares_storage_with(&right));

    right.set("title", "changed").unwrap();
    assert_ne!(left, right);
}

#[test]
fn test_default_is_an_empty_mutable_root() {
    let tree = Tree::default();
    assert!(tree.is_mutable());
    assert!(tree.is_empty());
}
