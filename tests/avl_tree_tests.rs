//! Unit tests for AvlTree.
//!
//! Scenario tests for the rotation shapes and membership behavior, driven
//! only through the public API.

#![cfg(feature = "tree")]

use guesstree::tree::{AvlTree, NodeView, RotationKind, RotationStatistics};
use rstest::rstest;

fn children<K: Copy>(node: NodeView<'_, K>) -> (K, Option<K>, Option<K>) {
    (
        *node.key(),
        node.left().map(|child| *child.key()),
        node.right().map(|child| *child.key()),
    )
}

fn collect_in_order<K: Copy>(node: Option<NodeView<'_, K>>, keys: &mut Vec<K>) {
    if let Some(node) = node {
        collect_in_order(node.left(), keys);
        keys.push(*node.key());
        collect_in_order(node.right(), keys);
    }
}

// =============================================================================
// Basic Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_tree() {
    let tree: AvlTree<i32> = AvlTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert!(tree.root().is_none());
    assert_eq!(tree.validate(), Ok(()));
}

#[rstest]
fn test_default_creates_empty_tree() {
    let tree: AvlTree<String> = AvlTree::default();
    assert!(tree.is_empty());
}

#[rstest]
fn test_single_insert_creates_leaf_root() {
    let mut tree = AvlTree::new();
    tree.insert(42);

    let root = tree.root().unwrap();
    assert_eq!(*root.key(), 42);
    assert_eq!(root.height(), 1);
    assert!(root.is_leaf());
    assert_eq!(tree.len(), 1);
}

// =============================================================================
// Rotation Scenarios
// =============================================================================

#[rstest]
fn test_ascending_three_keys_rotate_left_once() {
    let mut tree = AvlTree::new();
    for key in [1, 2, 3] {
        tree.insert(key);
    }

    assert_eq!(children(tree.root().unwrap()), (2, Some(1), Some(3)));
    assert_eq!(
        tree.rotations(),
        RotationStatistics {
            left: 1,
            ..RotationStatistics::default()
        }
    );
}

#[rstest]
fn test_descending_three_keys_rotate_right_once() {
    let mut tree = AvlTree::new();
    for key in [3, 2, 1] {
        tree.insert(key);
    }

    assert_eq!(children(tree.root().unwrap()), (2, Some(1), Some(3)));
    assert_eq!(
        tree.rotations(),
        RotationStatistics {
            right: 1,
            ..RotationStatistics::default()
        }
    );
}

#[rstest]
fn test_zigzag_three_keys_rotate_left_right() {
    let mut tree = AvlTree::new();
    for key in [3, 1, 2] {
        tree.insert(key);
    }

    assert_eq!(children(tree.root().unwrap()), (2, Some(1), Some(3)));
    assert_eq!(tree.rotations().count(RotationKind::LeftRight), 1);
    assert_eq!(tree.rotations().total(), 1);
}

#[rstest]
fn test_zagzig_three_keys_rotate_right_left() {
    let mut tree = AvlTree::new();
    for key in [1, 3, 2] {
        tree.insert(key);
    }

    assert_eq!(children(tree.root().unwrap()), (2, Some(1), Some(3)));
    assert_eq!(tree.rotations().count(RotationKind::RightLeft), 1);
    assert_eq!(tree.rotations().total(), 1);
}

#[rstest]
fn test_right_left_case_moves_inner_subtrees() {
    let mut tree: AvlTree<i32> = [20, 10, 40, 30, 50].into_iter().collect();
    tree.insert(25);

    // 30 rises to the root: left 20 (10, 25), right 40 (right 50)
    let root = tree.root().unwrap();
    assert_eq!(children(root), (30, Some(20), Some(40)));
    assert_eq!(children(root.left().unwrap()), (20, Some(10), Some(25)));
    assert_eq!(children(root.right().unwrap()), (40, None, Some(50)));
    assert_eq!(tree.rotations().right_left, 1);
    assert_eq!(tree.validate(), Ok(()));
}

// =============================================================================
// Letters Scenario
// =============================================================================

#[rstest]
fn test_letters_scenario() {
    let mut tree = AvlTree::new();
    for letter in ['m', 'b', 't', 'a', 'c'] {
        tree.insert(letter);
    }

    for letter in ['a', 'b', 'c', 'm', 't'] {
        assert!(tree.contains(&letter), "missing {letter}");
    }
    assert!(!tree.contains(&'z'));

    // ceil(log2(6)) + 1
    assert!(tree.height() <= 4);
    assert_eq!(tree.rotations().total(), 0);
    assert_eq!(tree.validate(), Ok(()));
}

#[rstest]
fn test_letters_in_alphabet_order_stay_balanced() {
    let tree: AvlTree<char> = ('a'..='z').collect();

    assert_eq!(tree.len(), 26);
    assert_eq!(tree.height(), 5);
    assert!(('a'..='z').all(|letter| tree.contains(&letter)));
    assert!(!tree.contains(&'A'));
    assert_eq!(tree.validate(), Ok(()));
}

// =============================================================================
// Membership Tests
// =============================================================================

#[rstest]
#[case(&[], 1, false)]
#[case(&[1], 1, true)]
#[case(&[5, 3, 8], 3, true)]
#[case(&[5, 3, 8], 4, false)]
#[case(&[5, 3, 8], 9, false)]
#[case(&[5, 3, 8, 1, 4, 7, 9], 7, true)]
fn test_contains(#[case] keys: &[i32], #[case] query: i32, #[case] expected: bool) {
    let tree: AvlTree<i32> = keys.iter().copied().collect();
    assert_eq!(tree.contains(&query), expected);
}

#[rstest]
fn test_reinserting_key_keeps_membership() {
    let mut tree: AvlTree<i32> = [4, 2, 6].into_iter().collect();
    tree.insert(2);

    for key in 0..8 {
        assert_eq!(tree.contains(&key), [2, 4, 6].contains(&key));
    }
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.validate(), Ok(()));
}

// =============================================================================
// Ordering and Scale
// =============================================================================

#[rstest]
fn test_in_order_walk_is_sorted() {
    let keys = [41, 20, 65, 11, 29, 50, 91, 32, 72, 99, 26, 23];
    let tree: AvlTree<i32> = keys.into_iter().collect();

    let mut walked = Vec::new();
    collect_in_order(tree.root(), &mut walked);

    let mut expected = keys.to_vec();
    expected.sort_unstable();
    assert_eq!(walked, expected);
}

#[rstest]
#[case(10)]
#[case(100)]
#[case(1_000)]
#[case(10_000)]
fn test_ascending_insertion_height_is_logarithmic(#[case] size: u32) {
    let tree: AvlTree<u32> = (0..size).collect();
    let bound = 1.44 * f64::from(size + 2).log2();

    assert!(f64::from(u32::try_from(tree.height()).unwrap()) <= bound);
    assert_eq!(tree.validate(), Ok(()));
}

#[rstest]
fn test_descending_insertion_height_is_logarithmic() {
    let tree: AvlTree<i32> = (0..4096).rev().collect();
    assert_eq!(tree.height(), 13);
    assert_eq!(tree.validate(), Ok(()));
}

#[rstest]
fn test_extend_appends_keys() {
    let mut tree: AvlTree<i32> = [1, 2].into_iter().collect();
    tree.extend([3, 4, 5]);

    assert_eq!(tree.len(), 5);
    assert!(tree.contains(&5));
    assert_eq!(tree.validate(), Ok(()));
}
