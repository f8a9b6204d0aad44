//! Self-balancing binary search tree.
//!
//! This module provides [`AvlTree`], an ordered membership structure that
//! keeps itself height-balanced after every insertion:
//!
//! - O(log N) worst-case `insert`
//! - O(log N) worst-case `contains`
//! - O(1) `len`, `is_empty` and `height`
//!
//! Keys only need a total order (`Ord`). Duplicate keys are tolerated: an
//! equal key is routed into the right subtree of the node it ties with, so
//! it adds a redundant node without changing membership.
//!
//! # Examples
//!
//! ```rust
//! use guesstree::tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in ['m', 'b', 't', 'a', 'c'] {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.contains(&'a'));
//! assert!(!tree.contains(&'z'));
//! assert!(tree.validate().is_ok());
//! ```
//!
//! # Inspection
//!
//! There is no iteration API. Structure can still be examined read-only
//! through [`NodeView`], and [`AvlTree::rotations`] reports how many
//! rebalancing rotations of each kind have been applied.
//!
//! ```rust
//! use guesstree::tree::AvlTree;
//!
//! let tree: AvlTree<i32> = [3, 2, 1].into_iter().collect();
//! let root = tree.root().unwrap();
//!
//! assert_eq!(*root.key(), 2);
//! assert_eq!(root.left().map(|node| *node.key()), Some(1));
//! assert_eq!(root.right().map(|node| *node.key()), Some(3));
//! assert_eq!(tree.rotations().right, 1);
//! ```

mod avl;
mod invariant;
mod node;
mod rotation;

pub use avl::AvlTree;
pub use invariant::InvariantViolation;
pub use node::NodeView;
pub use node::Side;
pub use rotation::RotationKind;
pub use rotation::RotationStatistics;

static_assertions::assert_impl_all!(AvlTree<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(NodeView<'static, String>: Send, Sync, Copy);
static_assertions::assert_impl_all!(InvariantViolation: std::error::Error, Send, Sync);
