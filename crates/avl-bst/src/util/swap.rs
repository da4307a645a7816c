use crate::arena::NodeArena;
use crate::types::Node;

use super::{get_l, get_p, get_r, set_l, set_p, set_r, side_of};

/// Swaps the positions of two nodes in a binary tree.
///
/// Only links move: each node keeps its own key, value and any extra
/// per-node data. Handles `y` being a direct child of `x` and vice versa.
/// Returns the new root.
pub fn swap<N: Node>(arena: &mut NodeArena<N>, mut root: u32, x: u32, y: u32) -> u32 {
    if x == y {
        return root;
    }

    let xp = get_p(arena, x);
    let xl = get_l(arena, x);
    let xr = get_r(arena, x);

    let yp = get_p(arena, y);
    let yl = get_l(arena, y);
    let yr = get_r(arena, y);

    // Sides are read up front: siblings share a parent whose links change below.
    let x_side = xp.map(|p| side_of(arena, p, x));
    let y_side = yp.map(|p| side_of(arena, p, y));

    if yl == Some(x) {
        set_l(arena, x, Some(y));
        set_p(arena, y, Some(x));
    } else {
        set_l(arena, x, yl);
        if let Some(yl) = yl {
            set_p(arena, yl, Some(x));
        }
    }

    if yr == Some(x) {
        set_r(arena, x, Some(y));
        set_p(arena, y, Some(x));
    } else {
        set_r(arena, x, yr);
        if let Some(yr) = yr {
            set_p(arena, yr, Some(x));
        }
    }

    if xl == Some(y) {
        set_l(arena, y, Some(x));
        set_p(arena, x, Some(y));
    } else {
        set_l(arena, y, xl);
        if let Some(xl) = xl {
            set_p(arena, xl, Some(y));
        }
    }

    if xr == Some(y) {
        set_r(arena, y, Some(x));
        set_p(arena, x, Some(y));
    } else {
        set_r(arena, y, xr);
        if let Some(xr) = xr {
            set_p(arena, xr, Some(y));
        }
    }

    match xp {
        None => {
            root = y;
            set_p(arena, y, None);
        }
        Some(xp) if xp != y => {
            set_p(arena, y, Some(xp));
            if let Some(side) = x_side {
                arena[xp].set_child(side, Some(y));
            }
        }
        Some(_) => {}
    }

    match yp {
        None => {
            root = x;
            set_p(arena, x, None);
        }
        Some(yp) if yp != x => {
            set_p(arena, x, Some(yp));
            if let Some(side) = y_side {
                arena[yp].set_child(side, Some(x));
            }
        }
        Some(_) => {}
    }

    root
}
