//! Link-level tree utilities shared by every tree in the crate.
//!
//! All functions work on a [`NodeArena`] plus node indices and never look at
//! keys, so they apply equally to plain and balanced nodes.

pub mod equal_paths;
pub mod print;
pub mod rotate;
pub mod swap;

use crate::arena::NodeArena;
use crate::types::{Node, Side};

pub use equal_paths::equal_paths;
pub use rotate::{rotate, rotate_left, rotate_right};
pub use swap::swap;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &NodeArena<N>, idx: u32) -> Option<u32> {
    arena[idx].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &NodeArena<N>, idx: u32) -> Option<u32> {
    arena[idx].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &NodeArena<N>, idx: u32) -> Option<u32> {
    arena[idx].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut NodeArena<N>, idx: u32, v: Option<u32>) {
    arena[idx].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut NodeArena<N>, idx: u32, v: Option<u32>) {
    arena[idx].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut NodeArena<N>, idx: u32, v: Option<u32>) {
    arena[idx].set_r(v);
}

/// Side of `parent` that `child` hangs from.
#[inline]
pub(crate) fn side_of<N: Node>(arena: &NodeArena<N>, parent: u32, child: u32) -> Side {
    if get_l(arena, parent) == Some(child) {
        Side::Left
    } else {
        Side::Right
    }
}

/// Points whatever referenced `old` as a child (or the root) at `new`.
pub(crate) fn replace_child<N: Node>(
    arena: &mut NodeArena<N>,
    root: Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) -> Option<u32> {
    match parent {
        None => new,
        Some(p) => {
            let side = side_of(arena, p, old);
            arena[p].set_child(side, new);
            root
        }
    }
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &NodeArena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &NodeArena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &NodeArena<N>, mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &NodeArena<N>, mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn size_inner<N: Node>(arena: &NodeArena<N>, root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &NodeArena<N>, root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
pub fn height<N: Node>(arena: &NodeArena<N>, root: Option<u32>) -> usize {
    match root {
        None => 0,
        Some(i) => 1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i))),
    }
}

/// Height of `root` if every subtree under it is height-balanced.
fn balanced_height<N: Node>(arena: &NodeArena<N>, root: Option<u32>) -> Option<usize> {
    let Some(i) = root else {
        return Some(0);
    };
    let lh = balanced_height(arena, get_l(arena, i))?;
    let rh = balanced_height(arena, get_r(arena, i))?;
    if lh.abs_diff(rh) > 1 {
        return None;
    }
    Some(1 + lh.max(rh))
}

/// True when the heights of the two subtrees of every node differ by at most one.
pub fn is_balanced<N: Node>(arena: &NodeArena<N>, root: Option<u32>) -> bool {
    balanced_height(arena, root).is_some()
}

/// Checks that every child points back at its parent and the root has none.
pub(crate) fn validate_links<N: Node>(arena: &NodeArena<N>, root: Option<u32>) -> Result<(), String> {
    let Some(root) = root else {
        return Ok(());
    };
    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        for (side, child) in [(Side::Left, get_l(arena, node)), (Side::Right, get_r(arena, node))] {
            let Some(child) = child else {
                continue;
            };
            if get_p(arena, child) != Some(node) {
                return Err(format!("Broken parent link on {side:?} child of node {node}"));
            }
            stack.push(child);
        }
    }
    Ok(())
}
