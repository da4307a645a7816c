//! AVL rebalancing on arena indices.
//!
//! Every function takes the arena plus the current root and returns the
//! (possibly new) root, like the rotation primitives they build on.

use log::{error, trace};

use crate::arena::NodeArena;
use crate::types::Side;
use crate::util::{rotate, side_of, validate_links};

use super::types::AvlNodeLike;

/// Rebalances after leaf `n` has been linked under its parent.
///
/// A parent that already leaned one way just had its short side filled:
/// its height is unchanged, so it goes to 0 and nothing propagates.
pub fn insert_rebalance<N: AvlNodeLike>(arena: &mut NodeArena<N>, root: Option<u32>, n: u32) -> Option<u32> {
    let Some(p) = arena[n].p() else {
        return root;
    };
    if arena[p].balance() != 0 {
        arena[p].set_balance(0);
        return root;
    }
    let side = side_of(arena, p, n);
    arena[p].update_balance(side.delta());
    insert_fix(arena, root, p, n)
}

/// Propagates a height increase of `p` (reached through its child `n`) upward.
pub fn insert_fix<N: AvlNodeLike>(arena: &mut NodeArena<N>, root: Option<u32>, p: u32, n: u32) -> Option<u32> {
    let Some(g) = arena[p].p() else {
        return root;
    };

    let side = side_of(arena, g, p);
    let delta = side.delta();
    arena[g].update_balance(delta);
    let gb = arena[g].balance();
    if gb == 0 {
        return root;
    }
    if gb == delta {
        return insert_fix(arena, root, g, p);
    }

    trace!("insert: node {g} at balance {gb}, child {p} at {}", arena[p].balance());
    if arena[p].balance() == delta {
        let root = rotate(arena, root, g, side.opposite());
        arena[p].set_balance(0);
        arena[g].set_balance(0);
        return root;
    }

    debug_assert_eq!(arena[p].child(side.opposite()), Some(n), "zig-zag through outer child");
    let nb = arena[n].balance();
    let root = rotate(arena, root, p, side);
    let root = rotate(arena, root, g, side.opposite());

    let (pb, gb) = match nb {
        b if b == delta => (0, -delta),
        0 => (0, 0),
        _ => (delta, 0),
    };
    arena[p].set_balance(pb);
    arena[g].set_balance(gb);
    arena[n].set_balance(0);
    root
}

/// Propagates a height decrease into `n`.
///
/// `diff` is +1 when `n`'s left subtree shrank and -1 when its right one
/// did. Stops as soon as `n`'s own height is unchanged.
pub fn remove_fix<N: AvlNodeLike>(arena: &mut NodeArena<N>, root: Option<u32>, n: Option<u32>, diff: i8) -> Option<u32> {
    let Some(n) = n else {
        return root;
    };
    let p = arena[n].p();
    let ndiff = p.map_or(0, |p| -side_of(arena, p, n).delta());

    let tentative = arena[n].balance() + diff;
    match tentative {
        -1 | 1 => {
            arena[n].set_balance(tentative);
            root
        }
        0 => {
            arena[n].set_balance(0);
            remove_fix(arena, root, p, ndiff)
        }
        _ => {
            let heavy = if tentative < 0 { Side::Left } else { Side::Right };
            let light = heavy.opposite();
            let hd = heavy.delta();

            let c = arena[n].child(heavy);
            debug_assert!(c.is_some(), "node {n} is {heavy:?}-heavy without that child");
            let Some(c) = c else {
                error!("remove: node {n} is {heavy:?}-heavy without that child");
                return root;
            };

            let cb = arena[c].balance();
            trace!("remove: node {n} at balance {tentative}, child {c} at {cb}");
            if cb == hd {
                let root = rotate(arena, root, n, light);
                arena[n].set_balance(0);
                arena[c].set_balance(0);
                remove_fix(arena, root, p, ndiff)
            } else if cb == 0 {
                let root = rotate(arena, root, n, light);
                arena[n].set_balance(hd);
                arena[c].set_balance(-hd);
                root
            } else {
                let g = arena[c].child(light);
                debug_assert!(g.is_some(), "node {c} leans {light:?} without that child");
                let Some(g) = g else {
                    error!("remove: node {c} leans {light:?} without that child");
                    return root;
                };

                let gb = arena[g].balance();
                let root = rotate(arena, root, c, heavy);
                let root = rotate(arena, root, n, light);

                let (nb, cb) = match gb {
                    b if b == -hd => (0, hd),
                    0 => (0, 0),
                    _ => (-hd, 0),
                };
                arena[n].set_balance(nb);
                arena[c].set_balance(cb);
                arena[g].set_balance(0);
                remove_fix(arena, root, p, ndiff)
            }
        }
    }
}

/// Position swap that also trades the two balance factors, so each
/// position keeps the balance describing its subtree.
pub fn swap<N: AvlNodeLike>(arena: &mut NodeArena<N>, root: u32, x: u32, y: u32) -> u32 {
    let root = crate::util::swap(arena, root, x, y);
    let xb = arena[x].balance();
    let yb = arena[y].balance();
    arena[x].set_balance(yb);
    arena[y].set_balance(xb);
    root
}

fn checked_height<N: AvlNodeLike>(arena: &NodeArena<N>, node: Option<u32>) -> Result<i32, String> {
    let Some(i) = node else {
        return Ok(0);
    };
    let lh = checked_height(arena, arena[i].l())?;
    let rh = checked_height(arena, arena[i].r())?;

    let expected = rh - lh;
    let actual = arena[i].balance();
    if i32::from(actual) != expected {
        return Err(format!(
            "Balance factor mismatch at node {i}: expected {expected}, got {actual}"
        ));
    }
    if !(-1..=1).contains(&actual) {
        return Err(format!("AVL balance violated at node {i}: {actual}"));
    }
    Ok(1 + lh.max(rh))
}

/// Checks links and that every stored balance is the real height difference
/// within {-1, 0, 1}. Key order is checked by the owning tree.
pub fn assert_avl_tree<N: AvlNodeLike>(arena: &NodeArena<N>, root: Option<u32>) -> Result<(), String> {
    validate_links(arena, root)?;
    checked_height(arena, root).map(|_| ())
}
