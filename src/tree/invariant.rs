//! Structural invariant checking.
//!
//! After every public operation a tree must satisfy:
//!
//! 1. BST ordering: an in-order walk yields non-decreasing keys. With
//!    distinct keys this means left subtree keys are strictly less than the
//!    node's key and right subtree keys are greater. Equal keys are inserted
//!    to the right, but a later rotation may lift a right-hand duplicate above
//!    its twin, so a key equal to the node's is accepted on either side.
//! 2. AVL balance: `|height(left) - height(right)| <= 1` at every node.
//! 3. Height correctness: every cached height equals
//!    `1 + max(height(left), height(right))`.
//!
//! The tree also caches its node count, which is checked alongside.

use std::cmp::max;
use std::fmt;

use super::node::{Node, Side};

/// A broken structural invariant, reported by
/// [`AvlTree::validate`](super::AvlTree::validate).
///
/// Depths are counted from the root, which has depth 0.
///
/// # Examples
///
/// ```rust
/// use guesstree::tree::{InvariantViolation, Side};
///
/// let violation = InvariantViolation::Ordering { depth: 2, side: Side::Left };
/// assert_eq!(
///     format!("{violation}"),
///     "ordering violated at depth 2: key out of range for the left subtree"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A key lies outside the range allowed by its ancestors.
    ///
    /// Never reported for the root, which has no parent and no bounds.
    Ordering {
        /// Depth of the offending node.
        depth: usize,
        /// The side of its parent the offending node hangs on.
        side: Side,
    },
    /// A node's subtrees differ in height by more than one.
    Balance {
        /// Depth of the offending node.
        depth: usize,
        /// Left height minus right height at that node.
        balance_factor: isize,
    },
    /// A node's cached height is stale.
    Height {
        /// Depth of the offending node.
        depth: usize,
        /// The cached height.
        cached: usize,
        /// The height computed from its children.
        expected: usize,
    },
    /// The cached node count does not match the number of nodes.
    Length {
        /// Nodes actually reachable from the root.
        counted: usize,
        /// The count the tree recorded.
        recorded: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordering { depth, side } => write!(
                formatter,
                "ordering violated at depth {depth}: key out of range for the {side} subtree"
            ),
            Self::Balance {
                depth,
                balance_factor,
            } => write!(
                formatter,
                "balance violated at depth {depth}: balance factor {balance_factor}"
            ),
            Self::Height {
                depth,
                cached,
                expected,
            } => write!(
                formatter,
                "stale height at depth {depth}: cached {cached}, expected {expected}"
            ),
            Self::Length { counted, recorded } => write!(
                formatter,
                "length mismatch: counted {counted} nodes, recorded {recorded}"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Key range a subtree must stay within: `lower <= key <= upper`.
struct Bounds<'a, K> {
    lower: Option<&'a K>,
    upper: Option<&'a K>,
}

impl<K: Ord> Bounds<'_, K> {
    fn admits(&self, key: &K) -> bool {
        self.lower.is_none_or(|lower| key >= lower) && self.upper.is_none_or(|upper| key <= upper)
    }
}

/// Walks the tree rooted at `node` and reports the first violation found,
/// checking `recorded` against the number of nodes reached.
pub(super) fn check_subtree<K: Ord>(
    node: Option<&Node<K>>,
    recorded: usize,
) -> Result<(), InvariantViolation> {
    let counted = match node {
        Some(node) => {
            let bounds = Bounds {
                lower: None,
                upper: None,
            };
            check_node(node, &bounds, 0)?.1
        }
        None => 0,
    };
    if counted == recorded {
        Ok(())
    } else {
        Err(InvariantViolation::Length { counted, recorded })
    }
}

/// Returns `(height, count)` of the subtree rooted at `node`, whose key the
/// caller has already checked against `bounds`.
fn check_node<K: Ord>(
    node: &Node<K>,
    bounds: &Bounds<'_, K>,
    depth: usize,
) -> Result<(usize, usize), InvariantViolation> {
    let (left_height, left_count) = match node.left.as_deref() {
        Some(left) => {
            let left_bounds = Bounds {
                lower: bounds.lower,
                upper: Some(&node.key),
            };
            if !left_bounds.admits(&left.key) {
                return Err(InvariantViolation::Ordering {
                    depth: depth + 1,
                    side: Side::Left,
                });
            }
            check_node(left, &left_bounds, depth + 1)?
        }
        None => (0, 0),
    };
    let (right_height, right_count) = match node.right.as_deref() {
        Some(right) => {
            let right_bounds = Bounds {
                lower: Some(&node.key),
                upper: bounds.upper,
            };
            if !right_bounds.admits(&right.key) {
                return Err(InvariantViolation::Ordering {
                    depth: depth + 1,
                    side: Side::Right,
                });
            }
            check_node(right, &right_bounds, depth + 1)?
        }
        None => (0, 0),
    };

    let expected = 1 + max(left_height, right_height);
    if node.height != expected {
        return Err(InvariantViolation::Height {
            depth,
            cached: node.height,
            expected,
        });
    }

    let balance_factor = node.balance_factor();
    if balance_factor.abs() > 1 {
        return Err(InvariantViolation::Balance {
            depth,
            balance_factor,
        });
    }

    Ok((expected, 1 + left_count + right_count))
}
