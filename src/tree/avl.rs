//! The [`AvlTree`] container.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use log::trace;

use super::invariant::{InvariantViolation, check_subtree};
use super::node::{Link, Node, NodeView, Side, height};
use super::rotation::{RotationKind, RotationStatistics, apply};

// =============================================================================
// AvlTree Definition
// =============================================================================

/// A self-balancing binary search tree holding keys of type `K`.
///
/// Keys must implement `Ord`. The tree rebalances on the way back up from
/// every insertion, so its height stays within about `1.44 * log2(N + 2)`.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `new`        | O(1)       |
/// | `insert`     | O(log N)   |
/// | `contains`   | O(log N)   |
/// | `len`        | O(1)       |
/// | `height`     | O(1)       |
/// | `validate`   | O(N)       |
///
/// # Examples
///
/// ```rust
/// use guesstree::tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert("kiwi");
/// tree.insert("apple");
///
/// assert!(tree.contains("apple"));
/// assert!(!tree.contains("cherry"));
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Clone)]
pub struct AvlTree<K> {
    /// Root node of the tree
    root: Link<K>,
    /// Number of nodes, duplicates included
    length: usize,
    /// Rotations applied since construction or the last `clear`
    rotations: RotationStatistics,
}

impl<K> AvlTree<K> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guesstree::tree::AvlTree;
    ///
    /// let tree: AvlTree<char> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
            rotations: RotationStatistics {
                left: 0,
                right: 0,
                left_right: 0,
                right_left: 0,
            },
        }
    }

    /// Returns the number of nodes in the tree.
    ///
    /// Inserting a key that is already present adds a node, so this counts
    /// insertions rather than distinct keys.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree holds no keys.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guesstree::tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = (0..7).collect();
    /// assert_eq!(tree.height(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        height(self.root.as_deref())
    }

    /// Returns a read-only view of the root node, or `None` when empty.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<NodeView<'_, K>> {
        self.root.as_deref().map(NodeView::new)
    }

    /// Returns how many rotations of each kind rebalancing has applied.
    #[inline]
    #[must_use]
    pub const fn rotations(&self) -> RotationStatistics {
        self.rotations
    }

    /// Removes every key and resets the rotation counters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guesstree::tree::AvlTree;
    ///
    /// let mut tree: AvlTree<i32> = [1, 2, 3].into_iter().collect();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert!(!tree.contains(&1));
    /// ```
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<K: Ord> AvlTree<K> {
    /// Inserts `key`, then rebalances every ancestor of the new leaf from
    /// the bottom up.
    ///
    /// A key equal to one already present is placed in that node's right
    /// subtree. Membership results are unaffected, but a redundant node is
    /// added.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guesstree::tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// for key in 1..=3 {
    ///     tree.insert(key);
    /// }
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(*root.key(), 2);
    /// assert_eq!(tree.rotations().left, 1);
    /// ```
    pub fn insert(&mut self, key: K) {
        let (root, _) = Self::insert_into(self.root.take(), key, &mut self.rotations);
        self.root = Some(root);
        self.length += 1;
    }

    /// Inserts `key` below `link` and returns the new subtree root together
    /// with the side the key took at that root.
    ///
    /// The returned side is `None` when the root is the freshly created leaf.
    /// Otherwise it records whether the key compared strictly less than the
    /// root's key, which is what the parent needs to tell single from double
    /// rotations.
    fn insert_into(
        link: Link<K>,
        key: K,
        rotations: &mut RotationStatistics,
    ) -> (Box<Node<K>>, Option<Side>) {
        let Some(mut node) = link else {
            return (Box::new(Node::leaf(key)), None);
        };

        let side = Side::of(&key, &node.key);
        let side_in_child = match side {
            Side::Left => {
                let (child, child_side) = Self::insert_into(node.left.take(), key, rotations);
                node.left = Some(child);
                child_side
            }
            Side::Right => {
                let (child, child_side) = Self::insert_into(node.right.take(), key, rotations);
                node.right = Some(child);
                child_side
            }
        };

        node.update_height();
        (Self::rebalance(node, side_in_child, rotations), Some(side))
    }

    /// Restores the balance of `node` after an insertion below it.
    ///
    /// `side_in_child` is the side the inserted key took at the child on the
    /// heavy side. An imbalance can only appear on the side the key went
    /// down, and that child has not been rotated, so this is the same as
    /// comparing the inserted key against that child's key.
    fn rebalance(
        node: Box<Node<K>>,
        side_in_child: Option<Side>,
        rotations: &mut RotationStatistics,
    ) -> Box<Node<K>> {
        let balance_factor = node.balance_factor();
        let kind = if balance_factor > 1 {
            if side_in_child == Some(Side::Left) {
                RotationKind::Right
            } else {
                RotationKind::LeftRight
            }
        } else if balance_factor < -1 {
            if side_in_child == Some(Side::Left) {
                RotationKind::RightLeft
            } else {
                RotationKind::Left
            }
        } else {
            return node;
        };

        rotations.record(kind);
        let node = apply(kind, node);
        trace!(
            "applied {kind} rotation (balance factor {balance_factor}), subtree height now {}",
            node.height
        );
        node
    }

    /// Returns `true` if some node holds a key equal to `key`.
    ///
    /// The key may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guesstree::tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert("hello".to_string());
    ///
    /// // Can use &str to look up String keys
    /// assert!(tree.contains("hello"));
    /// assert!(!tree.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Checks the ordering, balance and height invariants of every node,
    /// and the cached length.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found in pre-order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guesstree::tree::AvlTree;
    ///
    /// let tree: AvlTree<i32> = (0..1000).collect();
    /// assert!(tree.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        check_subtree(self.root.as_deref(), self.length)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K> Default for AvlTree<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for AvlTree<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AvlTree")
            .field("len", &self.length)
            .field("root", &self.root())
            .finish()
    }
}

/// Writes the keys in ascending order, e.g. `{1, 2, 3}`.
impl<K: fmt::Display> fmt::Display for AvlTree<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_in_order<K: fmt::Display>(
            node: Option<&Node<K>>,
            first: &mut bool,
            formatter: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            let Some(node) = node else {
                return Ok(());
            };
            write_in_order(node.left.as_deref(), first, formatter)?;
            if *first {
                *first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{}", node.key)?;
            write_in_order(node.right.as_deref(), first, formatter)
        }

        write!(formatter, "{{")?;
        write_in_order(self.root.as_deref(), &mut true, formatter)?;
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================
