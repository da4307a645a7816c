use std::fmt::Debug;
use std::marker::PhantomData;

use log::debug;

use crate::arena::NodeArena;
use crate::error::TreeError;
use crate::types::{default_comparator, Comparator, KvNode, Side};
use crate::util;

use super::node::BstNode;

/// Outcome of a key descent: the node holding the key, or where it would go.
pub(crate) enum Slot {
    Occupied(u32),
    /// Parent and side for a new leaf; `None` for an empty tree.
    Vacant(Option<(u32, Side)>),
}

/// Arena-backed binary search tree without any rebalancing.
///
/// Generic over the node type so balanced trees can reuse the lookup,
/// traversal, splice and position-swap machinery with their own nodes.
/// Node indices stay attached to their entry until it is removed.
pub struct BinarySearchTree<K, V, N = BstNode<K, V>, C = Comparator<K>>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    pub(crate) arena: NodeArena<N>,
    pub(crate) root: Option<u32>,
    len: usize,
    comparator: C,
    _kv: PhantomData<(K, V)>,
}

impl<K, V, N> BinarySearchTree<K, V, N, Comparator<K>>
where
    K: PartialOrd,
    N: KvNode<K, V>,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V, N> Default for BinarySearchTree<K, V, N, Comparator<K>>
where
    K: PartialOrd,
    N: KvNode<K, V>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, N, C> BinarySearchTree<K, V, N, C>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: NodeArena::new(),
            root: None,
            len: 0,
            comparator,
            _kv: PhantomData,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &NodeArena<N> {
        &self.arena
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn node(&self, idx: u32) -> &N {
        &self.arena[idx]
    }

    pub fn key(&self, idx: u32) -> &K {
        self.arena[idx].key()
    }

    pub fn value(&self, idx: u32) -> &V {
        self.arena[idx].value()
    }

    pub fn value_mut_by_index(&mut self, idx: u32) -> &mut V {
        self.arena[idx].value_mut()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    pub(crate) fn locate(&self, key: &K) -> Slot {
        let Some(mut curr) = self.root else {
            return Slot::Vacant(None);
        };
        loop {
            let cmp = (self.comparator)(key, self.arena[curr].key());
            if cmp == 0 {
                return Slot::Occupied(curr);
            }
            let side = if cmp < 0 { Side::Left } else { Side::Right };
            match self.arena[curr].child(side) {
                Some(next) => curr = next,
                None => return Slot::Vacant(Some((curr, side))),
            }
        }
    }

    /// Links a fresh leaf at a vacant slot found by [`locate`](Self::locate).
    pub(crate) fn attach(&mut self, key: K, value: V, at: Option<(u32, Side)>) -> u32 {
        let idx = self.arena.alloc(N::new_leaf(key, value));
        match at {
            None => self.root = Some(idx),
            Some((parent, side)) => {
                self.arena[parent].set_child(side, Some(idx));
                self.arena[idx].set_p(Some(parent));
            }
        }
        self.len += 1;
        idx
    }

    /// Inserts without rebalancing; an existing key has its value replaced.
    pub fn insert(&mut self, key: K, value: V) -> u32 {
        match self.locate(&key) {
            Slot::Occupied(idx) => {
                self.arena[idx].set_value(value);
                idx
            }
            Slot::Vacant(at) => self.attach(key, value, at),
        }
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        match self.locate(key) {
            Slot::Occupied(idx) => Some(idx),
            Slot::Vacant(_) => None,
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| self.arena[i].value())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        Some(self.arena[idx].value_mut())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Value for a key that must be present.
    pub fn at(&self, key: &K) -> Result<&V, TreeError> {
        self.get(key).ok_or(TreeError::KeyNotFound)
    }

    pub fn at_mut(&mut self, key: &K) -> Result<&mut V, TreeError> {
        self.get_mut(key).ok_or(TreeError::KeyNotFound)
    }

    pub fn first(&self) -> Option<u32> {
        util::first(&self.arena, self.root)
    }

    pub fn last(&self) -> Option<u32> {
        util::last(&self.arena, self.root)
    }

    pub fn next(&self, curr: u32) -> Option<u32> {
        util::next(&self.arena, curr)
    }

    pub fn prev(&self, curr: u32) -> Option<u32> {
        util::prev(&self.arena, curr)
    }

    /// In-order predecessor of the node at `idx`.
    pub fn predecessor(&self, idx: u32) -> Option<u32> {
        util::prev(&self.arena, idx)
    }

    /// In-order successor of the node at `idx`.
    pub fn successor(&self, idx: u32) -> Option<u32> {
        util::next(&self.arena, idx)
    }

    /// Exchanges the tree positions of two nodes, leaving their entries in place.
    ///
    /// This breaks key order unless the caller restores it (removal swaps a
    /// node with its predecessor right before splicing it out).
    pub fn swap_positions(&mut self, x: u32, y: u32) {
        if let Some(root) = self.root {
            self.root = Some(util::swap(&mut self.arena, root, x, y));
        }
    }

    /// Predecessor to trade places with when `node` has two children.
    pub(crate) fn removal_stand_in(&self, node: u32) -> Option<u32> {
        let n = &self.arena[node];
        if n.l().is_some() && n.r().is_some() {
            self.predecessor(node)
        } else {
            None
        }
    }

    /// Unlinks a node with at most one child, promoting that child.
    ///
    /// Returns the former parent and the side the node hung from, `None`
    /// when the node was the root. The node stays allocated.
    pub(crate) fn splice(&mut self, node: u32) -> Option<(u32, Side)> {
        let n = &self.arena[node];
        debug_assert!(n.l().is_none() || n.r().is_none(), "splice of two-child node {node}");
        let child = n.l().or(n.r());
        let parent = n.p();

        if let Some(c) = child {
            self.arena[c].set_p(parent);
        }
        let at = parent.map(|p| (p, util::side_of(&self.arena, p, node)));
        match at {
            None => {
                debug!("node {node} was the root, promoting {child:?}");
                self.root = child;
            }
            Some((p, side)) => self.arena[p].set_child(side, child),
        }

        let n = &mut self.arena[node];
        n.set_p(None);
        n.set_l(None);
        n.set_r(None);
        at
    }

    /// Frees a spliced-out node, handing back its value.
    pub(crate) fn release(&mut self, node: u32) -> Option<V> {
        let n = self.arena.release(node)?;
        self.len -= 1;
        Some(n.into_entry().1)
    }

    /// Removes without rebalancing. Absent keys are a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let node = self.find(key)?;
        if let Some(pred) = self.removal_stand_in(node) {
            debug!("swapping node {node} with predecessor {pred}");
            self.swap_positions(node, pred);
        }
        self.splice(node);
        self.release(node)
    }

    pub fn iter(&self) -> Iter<'_, K, V, N> {
        Iter {
            arena: &self.arena,
            curr: self.first(),
            _kv: PhantomData,
        }
    }

    pub fn for_each<G: FnMut(u32, &N)>(&self, mut f: G) {
        let mut curr = self.first();
        while let Some(i) = curr {
            f(i, &self.arena[i]);
            curr = self.next(i);
        }
    }

    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    pub fn is_balanced(&self) -> bool {
        util::is_balanced(&self.arena, self.root)
    }

    pub fn has_equal_paths(&self) -> bool {
        util::equal_paths(&self.arena, self.root)
    }

    pub(crate) fn validate_order(&self) -> Result<(), String> {
        let mut curr = self.first();
        let mut prev_node: Option<u32> = None;
        while let Some(i) = curr {
            if let Some(prev) = prev_node {
                let cmp = (self.comparator)(self.arena[prev].key(), self.arena[i].key());
                if cmp >= 0 {
                    return Err(format!("Node order violated between nodes {prev} and {i}"));
                }
            }
            prev_node = Some(i);
            curr = self.next(i);
        }
        Ok(())
    }

    /// Checks parent links, strict key order and the tracked length.
    pub fn assert_valid(&self) -> Result<(), String> {
        util::validate_links(&self.arena, self.root)?;
        self.validate_order()?;
        let counted = util::size(&self.arena, self.root);
        if counted != self.len {
            return Err(format!("Length mismatch: tracked {}, counted {counted}", self.len));
        }
        Ok(())
    }

    pub fn print(&self) -> String
    where
        K: Debug,
        V: Debug,
    {
        util::print::print(&self.arena, self.root, "", &|i, n: &N| {
            format!("Node[{i}] {{ {:?} = {:?} }}", n.key(), n.value())
        })
    }
}

/// In-order iterator over `(key, value)` pairs.
pub struct Iter<'a, K, V, N> {
    arena: &'a NodeArena<N>,
    curr: Option<u32>,
    _kv: PhantomData<(&'a K, &'a V)>,
}

impl<'a, K, V, N> Iterator for Iter<'a, K, V, N>
where
    K: 'a,
    V: 'a,
    N: KvNode<K, V>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let i = self.curr?;
        self.curr = util::next(arena, i);
        let n = &arena[i];
        Some((n.key(), n.value()))
    }
}
