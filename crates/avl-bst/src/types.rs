//! Node trait definitions.
//!
//! Nodes never own each other. Every "pointer" is an `Option<u32>` index
//! into the [`NodeArena`](crate::arena::NodeArena) of the tree the node
//! lives in, so the parent back-reference is just another index.

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Balance-factor delta caused by the subtree on this side growing by one.
    pub fn delta(self) -> i8 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }
}

/// Binary-tree links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);

    fn child(&self, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.l(),
            Side::Right => self.r(),
        }
    }

    fn set_child(&mut self, side: Side, v: Option<u32>) {
        match side {
            Side::Left => self.set_l(v),
            Side::Right => self.set_r(v),
        }
    }

    fn is_leaf(&self) -> bool {
        self.l().is_none() && self.r().is_none()
    }
}

/// Comparator used by the trees: negative, zero or positive like `Ordering`.
pub type Comparator<K> = fn(&K, &K) -> i32;

/// Key/value node interface used by the map-like trees.
pub trait KvNode<K, V>: Node {
    /// Builds a detached node holding `key` and `value`.
    fn new_leaf(key: K, value: V) -> Self
    where
        Self: Sized;

    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;
    fn set_value(&mut self, value: V);

    /// Consumes the node, handing back its entry.
    fn into_entry(self) -> (K, V)
    where
        Self: Sized;
}

pub(crate) fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}
