//! Slot arena owning every node of a tree.

use std::ops::{Index, IndexMut};

/// Index-addressed node storage with slot reuse.
///
/// A released slot goes on a free list and is handed out again by the next
/// [`alloc`](Self::alloc). Indexing a released slot is a logic error and
/// panics.
#[derive(Clone, Debug)]
pub struct NodeArena<N> {
    slots: Vec<Option<N>>,
    free: Vec<u32>,
}

impl<N> Default for NodeArena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> NodeArena<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn alloc(&mut self, node: N) -> u32 {
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize] = Some(node);
            return idx;
        }
        self.slots.push(Some(node));
        (self.slots.len() - 1) as u32
    }

    /// Takes the node out of its slot and marks the slot reusable.
    pub fn release(&mut self, idx: u32) -> Option<N> {
        let node = self.slots.get_mut(idx as usize)?.take()?;
        self.free.push(idx);
        Some(node)
    }

    pub fn get(&self, idx: u32) -> Option<&N> {
        self.slots.get(idx as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, idx: u32) -> Option<&mut N> {
        self.slots.get_mut(idx as usize)?.as_mut()
    }

    /// Number of live nodes.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of slots ever allocated, live or free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<N> Index<u32> for NodeArena<N> {
    type Output = N;

    fn index(&self, idx: u32) -> &N {
        match self.slots.get(idx as usize) {
            Some(Some(node)) => node,
            _ => panic!("node {idx} is not live"),
        }
    }
}

impl<N> IndexMut<u32> for NodeArena<N> {
    fn index_mut(&mut self, idx: u32) -> &mut N {
        match self.slots.get_mut(idx as usize) {
            Some(Some(node)) => node,
            _ => panic!("node {idx} is not live"),
        }
    }
}
