//! Plain binary search tree: the base the balanced tree is built on.

mod node;
mod tree;

pub use node::BstNode;
pub use tree::{BinarySearchTree, Iter};

pub(crate) use tree::Slot;
