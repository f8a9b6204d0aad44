//! Rotation primitives and rotation bookkeeping.
//!
//! A rotation restructures a node and one of its children while preserving
//! the in-order key sequence. The subtree that changes parents stays between
//! the same pair of key boundaries, so BST ordering holds afterwards.

use std::fmt;

use super::node::Node;

// =============================================================================
// Rotation Kinds
// =============================================================================

/// The four rebalancing shapes resolved after a single insertion.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum RotationKind {
    /// Single left rotation (right-right case).
    Left,
    /// Single right rotation (left-left case).
    Right,
    /// Left rotation at the left child, then right rotation (left-right case).
    LeftRight,
    /// Right rotation at the right child, then left rotation (right-left case).
    RightLeft,
}

impl fmt::Display for RotationKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::LeftRight => "left-right",
            Self::RightLeft => "right-left",
        };
        write!(formatter, "{name}")
    }
}

/// Counts of rebalancing rotations applied to a tree.
///
/// A double rotation is counted once under its double kind and not also as
/// two single rotations.
///
/// # Examples
///
/// ```rust
/// use guesstree::tree::AvlTree;
///
/// let tree: AvlTree<i32> = [3, 1, 2].into_iter().collect();
/// let rotations = tree.rotations();
///
/// assert_eq!(rotations.left_right, 1);
/// assert_eq!(rotations.total(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct RotationStatistics {
    /// Single left rotations.
    pub left: usize,
    /// Single right rotations.
    pub right: usize,
    /// Left-right double rotations.
    pub left_right: usize,
    /// Right-left double rotations.
    pub right_left: usize,
}

impl RotationStatistics {
    /// Returns the total number of rebalancing steps.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.left + self.right + self.left_right + self.right_left
    }

    /// Returns the count for a single kind.
    #[must_use]
    pub const fn count(&self, kind: RotationKind) -> usize {
        match kind {
            RotationKind::Left => self.left,
            RotationKind::Right => self.right,
            RotationKind::LeftRight => self.left_right,
            RotationKind::RightLeft => self.right_left,
        }
    }

    pub(super) const fn record(&mut self, kind: RotationKind) {
        match kind {
            RotationKind::Left => self.left += 1,
            RotationKind::Right => self.right += 1,
            RotationKind::LeftRight => self.left_right += 1,
            RotationKind::RightLeft => self.right_left += 1,
        }
    }
}

// =============================================================================
// Rotation Primitives
// =============================================================================

/// Rotates `node` to the left and returns the new subtree root.
///
/// The right child becomes the root, `node` becomes its left child, and the
/// right child's former left subtree becomes `node`'s right subtree.
/// Without a right child there is nothing to rotate and `node` is returned.
pub(super) fn rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut new_root) = node.right.take() else {
        return node;
    };
    node.right = new_root.left.take();
    node.update_height();
    new_root.left = Some(node);
    new_root.update_height();
    new_root
}

/// Rotates `node` to the right and returns the new subtree root.
///
/// Mirror image of [`rotate_left`].
pub(super) fn rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut new_root) = node.left.take() else {
        return node;
    };
    node.left = new_root.right.take();
    node.update_height();
    new_root.right = Some(node);
    new_root.update_height();
    new_root
}

/// Applies `kind` at `node` and returns the new subtree root.
pub(super) fn apply<K>(kind: RotationKind, mut node: Box<Node<K>>) -> Box<Node<K>> {
    match kind {
        RotationKind::Left => rotate_left(node),
        RotationKind::Right => rotate_right(node),
        RotationKind::LeftRight => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        RotationKind::RightLeft => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    }
}
