//! Arena-backed AVL tree.
//!
//! Nodes live in a per-tree [`NodeArena`] and refer to each other by `u32`
//! index, so the parent back-link is an index like any other.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`KvNode`] traits, [`Side`] |
//! [`arena`] | [`NodeArena`] slot storage with free-list reuse |
//! [`util`] | traversal, height, rotations, position swap, equal-paths check |
//! [`bst`] | [`BinarySearchTree`], the unbalanced base tree |
//! [`avl`] | [`AvlTree`], its node type and the insert/remove fixups |
//! [`error`] | [`TreeError`] |
//!
//! ```
//! use avl_bst::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for k in 1..=10 {
//!     tree.insert(k, k * 100);
//! }
//! assert_eq!(tree.height(), 4);
//! assert_eq!(tree.get(&7), Some(&700));
//! assert_eq!(tree.remove(&7), Some(700));
//! assert!(tree.at(&7).is_err());
//! tree.assert_valid().unwrap();
//! ```

pub mod arena;
pub mod avl;
pub mod bst;
pub mod error;
pub mod types;
pub mod util;

pub use arena::NodeArena;
pub use avl::{AvlNode, AvlNodeLike, AvlTree};
pub use bst::{BinarySearchTree, BstNode};
pub use error::TreeError;
pub use types::{Comparator, KvNode, Node, Side};
pub use util::equal_paths;
