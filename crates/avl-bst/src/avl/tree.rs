use std::fmt::Debug;

use log::debug;

use crate::arena::NodeArena;
use crate::bst::{BinarySearchTree, Iter, Slot};
use crate::error::TreeError;
use crate::types::{Comparator, KvNode};
use crate::util;

use super::types::{AvlNode, AvlNodeLike};
use super::util::{assert_avl_tree, insert_rebalance, remove_fix, swap};

/// Self-balancing binary search tree.
///
/// Lookup and traversal come from the underlying [`BinarySearchTree`];
/// `insert` and `remove` keep every node's balance factor in {-1, 0, 1},
/// so the height stays within about 1.44·log2(n + 2).
pub struct AvlTree<K, V, C = Comparator<K>>
where
    C: Fn(&K, &K) -> i32,
{
    inner: BinarySearchTree<K, V, AvlNode<K, V>, C>,
}

impl<K, V> AvlTree<K, V, Comparator<K>>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self {
            inner: BinarySearchTree::new(),
        }
    }
}

impl<K, V> Default for AvlTree<K, V, Comparator<K>>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: BinarySearchTree::with_comparator(comparator),
        }
    }

    /// Inserts an entry and returns its node index.
    ///
    /// An existing key only has its value replaced; the shape and balance
    /// factors are left exactly as they were.
    pub fn insert(&mut self, key: K, value: V) -> u32 {
        match self.inner.locate(&key) {
            Slot::Occupied(idx) => {
                self.inner.arena[idx].set_value(value);
                idx
            }
            Slot::Vacant(at) => {
                let idx = self.inner.attach(key, value, at);
                self.inner.root = insert_rebalance(&mut self.inner.arena, self.inner.root, idx);
                idx
            }
        }
    }

    /// Removes `key`, returning its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let node = self.inner.find(key)?;
        if let Some(pred) = self.inner.removal_stand_in(node) {
            debug!("swapping node {node} with predecessor {pred}");
            self.swap_positions(node, pred);
        }
        if let Some((parent, side)) = self.inner.splice(node) {
            // The side that lost a node got shorter, so the parent leans the other way.
            let diff = -side.delta();
            self.inner.root = remove_fix(&mut self.inner.arena, self.inner.root, Some(parent), diff);
        }
        self.inner.release(node)
    }

    /// Exchanges the tree positions of two nodes, leaving their entries in place.
    ///
    /// Balance factors belong to positions, so they are traded along with the
    /// links. Key order is broken until the caller restores it.
    pub fn swap_positions(&mut self, x: u32, y: u32) {
        if let Some(root) = self.inner.root {
            self.inner.root = Some(swap(&mut self.inner.arena, root, x, y));
        }
    }

    /// Read-only view of the underlying search tree.
    pub fn as_bst(&self) -> &BinarySearchTree<K, V, AvlNode<K, V>, C> {
        &self.inner
    }

    pub fn root_index(&self) -> Option<u32> {
        self.inner.root_index()
    }

    pub fn arena(&self) -> &NodeArena<AvlNode<K, V>> {
        self.inner.arena()
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        self.inner.find(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.inner.get_mut(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    pub fn at(&self, key: &K) -> Result<&V, TreeError> {
        self.inner.at(key)
    }

    pub fn at_mut(&mut self, key: &K) -> Result<&mut V, TreeError> {
        self.inner.at_mut(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn first(&self) -> Option<u32> {
        self.inner.first()
    }

    pub fn last(&self) -> Option<u32> {
        self.inner.last()
    }

    pub fn next(&self, curr: u32) -> Option<u32> {
        self.inner.next(curr)
    }

    pub fn prev(&self, curr: u32) -> Option<u32> {
        self.inner.prev(curr)
    }

    pub fn predecessor(&self, idx: u32) -> Option<u32> {
        self.inner.predecessor(idx)
    }

    pub fn successor(&self, idx: u32) -> Option<u32> {
        self.inner.successor(idx)
    }

    pub fn key(&self, idx: u32) -> &K {
        self.inner.key(idx)
    }

    pub fn value(&self, idx: u32) -> &V {
        self.inner.value(idx)
    }

    pub fn value_mut_by_index(&mut self, idx: u32) -> &mut V {
        self.inner.value_mut_by_index(idx)
    }

    pub fn balance(&self, idx: u32) -> i8 {
        self.inner.node(idx).balance()
    }

    pub fn iter(&self) -> Iter<'_, K, V, AvlNode<K, V>> {
        self.inner.iter()
    }

    pub fn for_each<G: FnMut(u32, &AvlNode<K, V>)>(&self, f: G) {
        self.inner.for_each(f)
    }

    pub fn height(&self) -> usize {
        self.inner.height()
    }

    pub fn is_balanced(&self) -> bool {
        self.inner.is_balanced()
    }

    pub fn has_equal_paths(&self) -> bool {
        self.inner.has_equal_paths()
    }

    /// Checks links, key order, length and every balance factor.
    pub fn assert_valid(&self) -> Result<(), String> {
        self.inner.assert_valid()?;
        assert_avl_tree(self.inner.arena(), self.inner.root_index())
    }

    pub fn print(&self) -> String
    where
        K: Debug,
        V: Debug,
    {
        util::print::print(self.inner.arena(), self.inner.root_index(), "", &|i, n: &AvlNode<K, V>| {
            format!("Node[{i}] [bf={}] {{ {:?} = {:?} }}", n.bf, n.k, n.v)
        })
    }
}

impl<K, V> FromIterator<(K, V)> for AvlTree<K, V, Comparator<K>>
where
    K: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V, C> Extend<(K, V)> for AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
