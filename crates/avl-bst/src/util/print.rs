use crate::arena::NodeArena;
use crate::types::Node;

/// Debug printer for any binary tree in an arena.
///
/// `describe` renders a single node; the printer lays out the children
/// below it, one indentation step per level.
pub fn print<N, F>(arena: &NodeArena<N>, node: Option<u32>, tab: &str, describe: &F) -> String
where
    N: Node,
    F: Fn(u32, &N) -> String,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i];
            if n.is_leaf() {
                return describe(i, n);
            }
            let child_tab = format!("{tab}  ");
            let left = print(arena, n.l(), &child_tab, describe);
            let right = print(arena, n.r(), &child_tab, describe);
            format!("{}\n{tab}L={left}\n{tab}R={right}", describe(i, n))
        }
    }
}
