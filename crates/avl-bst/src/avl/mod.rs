//! AVL tree: balance-factor nodes, rebalancing fixups and the tree itself.

mod tree;
pub mod types;
pub mod util;

pub use tree::AvlTree;
pub use types::{AvlNode, AvlNodeLike};
pub use util::{assert_avl_tree, insert_fix, insert_rebalance, remove_fix};
