//! # guesstree
//!
//! A self-balancing binary search tree (AVL tree) for membership tracking,
//! plus a small guess ledger that uses it to remember which letters a player
//! has already tried.
//!
//! ## Overview
//!
//! - **Balanced Search Tree**: [`AvlTree`](tree::AvlTree) with O(log N)
//!   worst-case `insert` and `contains`, rebalanced after every insertion
//! - **Guess Ledger**: [`GuessLedger`](ledger::GuessLedger), case-normalized
//!   letter tracking that checks membership before inserting
//!
//! ## Feature Flags
//!
//! - `tree`: The AVL tree
//! - `ledger`: The guess ledger (implies `tree`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use guesstree::prelude::*;
//!
//! let mut tree = AvlTree::new();
//! for key in [1, 2, 3] {
//!     tree.insert(key);
//! }
//! assert!(tree.contains(&2));
//! assert_eq!(tree.root().map(|root| *root.key()), Some(2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use guesstree::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "tree")]
    pub use crate::tree::*;

    #[cfg(feature = "ledger")]
    pub use crate::ledger::*;
}

#[cfg(feature = "tree")]
pub mod tree;

#[cfg(feature = "ledger")]
pub mod ledger;
