use crate::arena::NodeArena;
use crate::types::Node;

use super::{get_l, get_r, height};

/// Checks that every leaf under `root` sits at the same depth.
///
/// A node with a single child is judged by that child alone, so a chain
/// of one-child nodes ending in a leaf counts as one path.
pub fn equal_paths<N: Node>(arena: &NodeArena<N>, root: Option<u32>) -> bool {
    let Some(i) = root else {
        return true;
    };

    match (get_l(arena, i), get_r(arena, i)) {
        (None, None) => true,
        (None, Some(r)) => equal_paths(arena, Some(r)),
        (Some(l), None) => equal_paths(arena, Some(l)),
        (Some(l), Some(r)) => {
            height(arena, Some(l)) == height(arena, Some(r))
                && equal_paths(arena, Some(l))
                && equal_paths(arena, Some(r))
        }
    }
}
