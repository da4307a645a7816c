use crate::types::{KvNode, Node};

/// AVL tree node: a binary-search-tree entry plus its balance factor.
#[derive(Clone, Debug)]
pub struct AvlNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    /// Balance factor, `height(right) - height(left)`.
    pub bf: i8,
}

impl<K, V> AvlNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            bf: 0,
        }
    }
}

impl<K, V> Node for AvlNode<K, V> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K, V> KvNode<K, V> for AvlNode<K, V> {
    fn new_leaf(key: K, value: V) -> Self {
        Self::new(key, value)
    }

    fn key(&self) -> &K {
        &self.k
    }

    fn value(&self) -> &V {
        &self.v
    }

    fn value_mut(&mut self) -> &mut V {
        &mut self.v
    }

    fn set_value(&mut self, value: V) {
        self.v = value;
    }

    fn into_entry(self) -> (K, V) {
        (self.k, self.v)
    }
}

/// Balance-factor bookkeeping on top of the tree links.
///
/// In a consistent tree the balance is -1, 0 or 1. Fixups may push it to
/// ±2 for the duration of one step.
pub trait AvlNodeLike: Node {
    fn balance(&self) -> i8;
    fn set_balance(&mut self, balance: i8);

    fn update_balance(&mut self, diff: i8) {
        let balance = self.balance() + diff;
        self.set_balance(balance);
    }
}

impl<K, V> AvlNodeLike for AvlNode<K, V> {
    fn balance(&self) -> i8 {
        self.bf
    }

    fn set_balance(&mut self, balance: i8) {
        self.bf = balance;
    }
}
