use log::trace;

use crate::arena::NodeArena;
use crate::types::{Node, Side};

use super::{get_p, replace_child, set_p};

/// Rotates `target` toward `dir`, promoting its child on the opposite side.
///
/// `Side::Right` is a right rotation: the left child `c` takes `target`'s
/// place, `target` becomes `c`'s right child and `c`'s former right child
/// becomes `target`'s left child. No-op when that child is missing.
/// Balance data is left untouched. Returns the new root.
pub fn rotate<N: Node>(arena: &mut NodeArena<N>, root: Option<u32>, target: u32, dir: Side) -> Option<u32> {
    let up = dir.opposite();
    let Some(child) = arena[target].child(up) else {
        return root;
    };
    trace!("rotate {dir:?} at node {target}, promoting node {child}");

    let parent = get_p(arena, target);
    let inner = arena[child].child(dir);

    let root = replace_child(arena, root, parent, target, Some(child));
    set_p(arena, child, parent);

    arena[child].set_child(dir, Some(target));
    set_p(arena, target, Some(child));

    arena[target].set_child(up, inner);
    if let Some(inner) = inner {
        set_p(arena, inner, Some(target));
    }

    root
}

/// Promotes `target`'s left child into its place.
pub fn rotate_right<N: Node>(arena: &mut NodeArena<N>, root: Option<u32>, target: u32) -> Option<u32> {
    rotate(arena, root, target, Side::Right)
}

/// Promotes `target`'s right child into its place.
pub fn rotate_left<N: Node>(arena: &mut NodeArena<N>, root: Option<u32>, target: u32) -> Option<u32> {
    rotate(arena, root, target, Side::Left)
}
