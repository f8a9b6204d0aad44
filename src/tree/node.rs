//! Tree nodes and the read-only [`NodeView`] over them.

use std::cmp::max;
use std::fmt;

/// Exclusive ownership of an optional subtree.
pub(super) type Link<K> = Option<Box<Node<K>>>;

// =============================================================================
// Node Definition
// =============================================================================

/// One stored key and the subtree rooted at it.
///
/// The key never changes after creation. Rotations only move ownership of
/// the children around and refresh `height`.
#[derive(Clone)]
pub(super) struct Node<K> {
    pub(super) key: K,
    pub(super) left: Link<K>,
    pub(super) right: Link<K>,
    /// Height of the subtree rooted here; a leaf has height 1.
    pub(super) height: usize,
}

impl<K> Node<K> {
    /// Creates a leaf holding `key`.
    pub(super) const fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    pub(super) fn left_height(&self) -> usize {
        height(self.left.as_deref())
    }

    pub(super) fn right_height(&self) -> usize {
        height(self.right.as_deref())
    }

    /// Recomputes the cached height from the children's cached heights.
    pub(super) fn update_height(&mut self) {
        self.height = 1 + max(self.left_height(), self.right_height());
    }

    /// Height of the left subtree minus height of the right subtree.
    #[allow(clippy::cast_possible_wrap)]
    pub(super) fn balance_factor(&self) -> isize {
        self.left_height() as isize - self.right_height() as isize
    }

    pub(super) fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }
}

/// Height of an optional subtree; an empty subtree has height 0.
pub(super) fn height<K>(node: Option<&Node<K>>) -> usize {
    node.map_or(0, |node| node.height)
}

// =============================================================================
// Side
// =============================================================================

/// Which child of a node a key was routed to.
///
/// Keys strictly less than a node's key go [`Side::Left`]; keys greater than
/// or equal to it go [`Side::Right`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    /// The left subtree (strictly smaller keys).
    Left,
    /// The right subtree (greater or equal keys).
    Right,
}

impl Side {
    /// Returns the side `key` is routed to at a node holding `pivot`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guesstree::tree::Side;
    ///
    /// assert_eq!(Side::of(&1, &2), Side::Left);
    /// assert_eq!(Side::of(&2, &2), Side::Right);
    /// assert_eq!(Side::of(&3, &2), Side::Right);
    /// ```
    #[inline]
    pub fn of<K: Ord + ?Sized>(key: &K, pivot: &K) -> Self {
        if key < pivot { Self::Left } else { Self::Right }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(formatter, "left"),
            Self::Right => write!(formatter, "right"),
        }
    }
}

// =============================================================================
// NodeView
// =============================================================================

/// A borrowed, read-only view of one node of an [`AvlTree`](super::AvlTree).
///
/// Views let callers check the shape of a tree without exposing its
/// ownership links.
///
/// # Examples
///
/// ```rust
/// use guesstree::tree::AvlTree;
///
/// let tree: AvlTree<i32> = [1, 2, 3].into_iter().collect();
/// let root = tree.root().unwrap();
///
/// assert_eq!(*root.key(), 2);
/// assert_eq!(root.height(), 2);
/// assert_eq!(root.balance_factor(), 0);
/// assert!(root.left().unwrap().is_leaf());
/// ```
pub struct NodeView<'a, K> {
    node: &'a Node<K>,
}

impl<'a, K> NodeView<'a, K> {
    pub(super) const fn new(node: &'a Node<K>) -> Self {
        Self { node }
    }

    /// Returns the key stored at this node.
    #[inline]
    pub const fn key(&self) -> &'a K {
        &self.node.key
    }

    /// Returns the cached height of the subtree rooted at this node.
    #[inline]
    pub const fn height(&self) -> usize {
        self.node.height
    }

    /// Returns the height of the left subtree minus that of the right.
    #[inline]
    pub fn balance_factor(&self) -> isize {
        self.node.balance_factor()
    }

    /// Returns the left child, if any.
    #[inline]
    pub fn left(&self) -> Option<Self> {
        self.child(Side::Left)
    }

    /// Returns the right child, if any.
    #[inline]
    pub fn right(&self) -> Option<Self> {
        self.child(Side::Right)
    }

    /// Returns the child on `side`, if any.
    #[inline]
    pub fn child(&self, side: Side) -> Option<Self> {
        self.node.child(side).map(NodeView::new)
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        self.node.left.is_none() && self.node.right.is_none()
    }
}

impl<K> Clone for NodeView<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeView<'_, K> {}

impl<K: fmt::Debug> fmt::Debug for NodeView<'_, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Node")
            .field("key", self.key())
            .field("height", &self.height())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}
