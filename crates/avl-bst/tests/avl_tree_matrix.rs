mod common;

use avl_bst::{AvlTree, Node, TreeError};

fn tree_of(keys: &[i32]) -> AvlTree<i32, i32> {
    common::init_logging();
    let mut tree = AvlTree::new();
    for &k in keys {
        tree.insert(k, k * 10);
        tree.assert_valid().unwrap();
    }
    tree
}

fn root_key(tree: &AvlTree<i32, i32>) -> Option<i32> {
    tree.root_index().map(|i| *tree.key(i))
}

fn children(tree: &AvlTree<i32, i32>, key: i32) -> (Option<i32>, Option<i32>) {
    let idx = tree.find(&key).unwrap();
    let node = &tree.arena()[idx];
    (node.l().map(|i| *tree.key(i)), node.r().map(|i| *tree.key(i)))
}

fn balance_of(tree: &AvlTree<i32, i32>, key: i32) -> i8 {
    tree.balance(tree.find(&key).unwrap())
}

fn in_order(tree: &AvlTree<i32, i32>) -> Vec<i32> {
    tree.iter().map(|(k, _)| *k).collect()
}

#[test]
fn avl_ascending_triple_rotates_left_matrix() {
    let tree = tree_of(&[1, 2, 3]);
    assert_eq!(root_key(&tree), Some(2));
    assert_eq!(children(&tree, 2), (Some(1), Some(3)));
    for k in 1..=3 {
        assert_eq!(balance_of(&tree, k), 0);
    }
}

#[test]
fn avl_descending_triple_rotates_right_matrix() {
    let tree = tree_of(&[3, 2, 1]);
    assert_eq!(root_key(&tree), Some(2));
    assert_eq!(children(&tree, 2), (Some(1), Some(3)));
}

#[test]
fn avl_zig_zag_insert_double_rotates_matrix() {
    for keys in [[3, 1, 2], [1, 3, 2]] {
        let tree = tree_of(&keys);
        assert_eq!(root_key(&tree), Some(2), "{keys:?}");
        assert_eq!(children(&tree, 2), (Some(1), Some(3)), "{keys:?}");
        for k in 1..=3 {
            assert_eq!(balance_of(&tree, k), 0, "{keys:?}");
        }
    }
}

#[test]
fn avl_zig_zag_insert_balance_table_matrix() {
    // Inner grandchild 7 leans left before the double rotation at 10.
    let tree = tree_of(&[10, 5, 15, 3, 7, 6]);
    assert_eq!(root_key(&tree), Some(7));
    assert_eq!(children(&tree, 7), (Some(5), Some(10)));
    assert_eq!(children(&tree, 5), (Some(3), Some(6)));
    assert_eq!(children(&tree, 10), (None, Some(15)));
    assert_eq!(balance_of(&tree, 5), 0);
    assert_eq!(balance_of(&tree, 10), 1);
    assert_eq!(balance_of(&tree, 7), 0);

    // Mirrored: inner grandchild leans right.
    let tree = tree_of(&[10, 5, 15, 3, 7, 8]);
    assert_eq!(root_key(&tree), Some(7));
    assert_eq!(children(&tree, 5), (Some(3), None));
    assert_eq!(children(&tree, 10), (Some(8), Some(15)));
    assert_eq!(balance_of(&tree, 5), -1);
    assert_eq!(balance_of(&tree, 10), 0);
}

#[test]
fn avl_filling_short_side_stops_propagation_matrix() {
    let mut tree = tree_of(&[2, 1]);
    assert_eq!(balance_of(&tree, 2), -1);
    tree.insert(3, 30);
    assert_eq!(balance_of(&tree, 2), 0);
    assert_eq!(root_key(&tree), Some(2));
}

#[test]
fn avl_ascending_ten_has_height_four_matrix() {
    let tree = tree_of(&(1..=10).collect::<Vec<_>>());
    assert_eq!(tree.height(), 4);
    assert_eq!(root_key(&tree), Some(4));
    tree.for_each(|_, n| assert!((-1..=1).contains(&n.bf)));
    assert_eq!(in_order(&tree), (1..=10).collect::<Vec<_>>());
}

#[test]
fn avl_remove_root_of_complete_tree_matrix() {
    let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
    assert_eq!(tree.height(), 3);

    assert_eq!(tree.remove(&4), Some(40));
    tree.assert_valid().unwrap();
    assert_eq!(root_key(&tree), Some(3));
    assert_eq!(children(&tree, 3), (Some(2), Some(6)));
    assert_eq!(children(&tree, 2), (Some(1), None));
    assert_eq!(balance_of(&tree, 2), -1);
    assert_eq!(balance_of(&tree, 3), 0);
    assert!(tree.is_balanced());
    assert_eq!(in_order(&tree), vec![1, 2, 3, 5, 6, 7]);
}

#[test]
fn avl_remove_keeps_node_indices_matrix() {
    let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
    let three = tree.find(&3).unwrap();
    tree.remove(&4);
    assert_eq!(tree.find(&3), Some(three));
    assert_eq!(tree.root_index(), Some(three));
}

#[test]
fn avl_remove_single_rotation_zig_zig_matrix() {
    let mut tree = tree_of(&[2, 1, 3, 4]);
    tree.remove(&1);
    tree.assert_valid().unwrap();
    assert_eq!(root_key(&tree), Some(3));
    assert_eq!(children(&tree, 3), (Some(2), Some(4)));
    for k in [2, 3, 4] {
        assert_eq!(balance_of(&tree, k), 0);
    }
}

#[test]
fn avl_remove_single_rotation_balanced_child_matrix() {
    let mut tree = tree_of(&[2, 1, 4, 3, 5]);
    tree.remove(&1);
    tree.assert_valid().unwrap();
    assert_eq!(root_key(&tree), Some(4));
    assert_eq!(children(&tree, 4), (Some(2), Some(5)));
    assert_eq!(children(&tree, 2), (None, Some(3)));
    assert_eq!(balance_of(&tree, 2), 1);
    assert_eq!(balance_of(&tree, 4), -1);
}

#[test]
fn avl_remove_double_rotation_matrix() {
    let mut tree = tree_of(&[3, 1, 4, 2]);
    tree.remove(&4);
    tree.assert_valid().unwrap();
    assert_eq!(root_key(&tree), Some(2));
    assert_eq!(children(&tree, 2), (Some(1), Some(3)));

    let mut tree = tree_of(&[2, 1, 4, 3]);
    tree.remove(&1);
    tree.assert_valid().unwrap();
    assert_eq!(root_key(&tree), Some(3));
    assert_eq!(children(&tree, 3), (Some(2), Some(4)));
}

#[test]
fn avl_remove_double_rotation_leaning_grandchild_matrix() {
    //          8
    //        /   \
    //       4     10
    //      / \      \
    //     2   6      11
    //        /
    //       5
    let mut tree = tree_of(&[8, 4, 10, 2, 6, 11, 5]);
    assert_eq!(balance_of(&tree, 8), -1);
    assert_eq!(balance_of(&tree, 4), 1);
    assert_eq!(balance_of(&tree, 6), -1);

    // Grandchild 6 leans toward the heavy side: 8 ends up right-leaning.
    tree.remove(&11);
    tree.assert_valid().unwrap();
    assert_eq!(root_key(&tree), Some(6));
    assert_eq!(children(&tree, 6), (Some(4), Some(8)));
    assert_eq!(children(&tree, 4), (Some(2), Some(5)));
    assert_eq!(children(&tree, 8), (None, Some(10)));
    assert_eq!(balance_of(&tree, 8), 1);
    assert_eq!(balance_of(&tree, 4), 0);
    assert_eq!(balance_of(&tree, 6), 0);

    // Same shape with 7 under 6: the grandchild leans away from the heavy side.
    let mut tree = tree_of(&[8, 4, 10, 2, 6, 11, 7]);
    assert_eq!(balance_of(&tree, 6), 1);
    tree.remove(&11);
    tree.assert_valid().unwrap();
    assert_eq!(root_key(&tree), Some(6));
    assert_eq!(children(&tree, 4), (Some(2), None));
    assert_eq!(children(&tree, 8), (Some(7), Some(10)));
    assert_eq!(balance_of(&tree, 8), 0);
    assert_eq!(balance_of(&tree, 4), -1);
    assert_eq!(balance_of(&tree, 6), 0);
    assert_eq!(in_order(&tree), vec![2, 4, 6, 7, 8, 10]);
}

#[test]
fn avl_swap_positions_trades_balances_matrix() {
    let mut tree = tree_of(&[4, 2, 6, 1, 3, 5]);
    let root = tree.root_index().unwrap();
    let two = tree.find(&2).unwrap();
    let six = tree.find(&6).unwrap();
    assert_eq!(tree.balance(two), 0);
    assert_eq!(tree.balance(six), -1);

    // Siblings trade places and the balance stays with the position.
    tree.swap_positions(two, six);
    assert_eq!(tree.arena()[root].l(), Some(six));
    assert_eq!(tree.arena()[root].r(), Some(two));
    assert_eq!(tree.balance(two), -1);
    assert_eq!(tree.balance(six), 0);
    assert!(tree.assert_valid().is_err());

    tree.swap_positions(two, six);
    tree.assert_valid().unwrap();
    assert_eq!(in_order(&tree), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn avl_remove_propagates_to_root_matrix() {
    let mut tree = tree_of(&(1..=12).collect::<Vec<_>>());
    for k in [1, 3, 2] {
        tree.remove(&k);
        tree.assert_valid().unwrap();
    }
    assert!(tree.height() <= 4);
    assert_eq!(in_order(&tree), (4..=12).collect::<Vec<_>>());
}

#[test]
fn avl_remove_down_to_empty_matrix() {
    let mut tree = tree_of(&[5, 3, 8, 1, 4, 7, 9, 2, 6]);
    for k in [5, 1, 9, 3, 8, 2, 7, 6, 4] {
        assert_eq!(tree.remove(&k), Some(k * 10));
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.root_index(), None);
}

#[test]
fn avl_absent_remove_is_noop_matrix() {
    let mut tree = tree_of(&[1, 2, 3]);
    let before = tree.print();
    assert_eq!(tree.remove(&42), None);
    assert_eq!(tree.print(), before);
    assert_eq!(tree.len(), 3);

    let mut empty = AvlTree::<i32, i32>::new();
    assert_eq!(empty.remove(&1), None);
}

#[test]
fn avl_duplicate_insert_overwrites_matrix() {
    let mut tree = tree_of(&[1, 2, 3]);
    let before = tree.print();
    tree.insert(2, 20);
    assert_eq!(tree.print(), before);

    tree.insert(2, 99);
    assert_eq!(tree.get(&2), Some(&99));
    assert_eq!(tree.len(), 3);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_round_trip_matrix() {
    let mut tree = tree_of(&[]);
    tree.insert(7, 70);
    assert_eq!(tree.get(&7), Some(&70));
    assert_eq!(tree.remove(&7), Some(70));
    assert_eq!(tree.get(&7), None);
    assert_eq!(tree.find(&7), None);
}

#[test]
fn avl_at_reports_missing_key_matrix() {
    let mut tree = tree_of(&[1, 2]);
    assert_eq!(tree.at(&1), Ok(&10));
    assert_eq!(tree.at(&3), Err(TreeError::KeyNotFound));
    *tree.at_mut(&2).unwrap() = 21;
    assert_eq!(tree.get(&2), Some(&21));
    assert_eq!(tree.at_mut(&5).unwrap_err().to_string(), "KEY_NOT_FOUND");
}

#[test]
fn avl_navigation_matrix() {
    let tree = tree_of(&[5, 3, 8, 1, 4]);
    assert_eq!(tree.first().map(|i| *tree.key(i)), Some(1));
    assert_eq!(tree.last().map(|i| *tree.key(i)), Some(8));

    let five = tree.find(&5).unwrap();
    assert_eq!(tree.predecessor(five).map(|i| *tree.key(i)), Some(4));
    assert_eq!(tree.successor(five).map(|i| *tree.key(i)), Some(8));
    assert_eq!(tree.prev(tree.find(&1).unwrap()), None);
    assert_eq!(tree.next(tree.find(&8).unwrap()), None);

    let mut keys = Vec::new();
    let mut curr = tree.first();
    while let Some(i) = curr {
        keys.push(*tree.key(i));
        curr = tree.next(i);
    }
    assert_eq!(keys, vec![1, 3, 4, 5, 8]);
}

#[test]
fn avl_custom_comparator_matrix() {
    let mut tree = AvlTree::<i32, &str, _>::with_comparator(|a: &i32, b: &i32| (*b).cmp(a) as i32);
    for (k, v) in [(1, "a"), (2, "b"), (3, "c"), (4, "d")] {
        tree.insert(k, v);
    }
    tree.assert_valid().unwrap();
    let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![4, 3, 2, 1]);
}

#[test]
fn avl_string_keys_matrix() {
    let mut tree: AvlTree<String, usize> = ["pear", "apple", "fig", "kiwi", "banana"]
        .iter()
        .enumerate()
        .map(|(i, s)| (s.to_string(), i))
        .collect();
    tree.assert_valid().unwrap();
    assert_eq!(tree.get(&"fig".to_string()), Some(&2));
    tree.remove(&"pear".to_string());
    let keys: Vec<&str> = tree.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["apple", "banana", "fig", "kiwi"]);
}

#[test]
fn avl_clear_and_reuse_matrix() {
    let mut tree = tree_of(&[1, 2, 3, 4, 5]);
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.iter().count(), 0);
    tree.insert(9, 90);
    assert_eq!(tree.len(), 1);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_arena_slots_are_recycled_matrix() {
    let mut tree = tree_of(&[1, 2, 3, 4]);
    let two = tree.find(&2).unwrap();
    tree.remove(&2);
    assert_eq!(tree.arena().live(), 3);
    assert_eq!(tree.insert(10, 100), two);
    assert_eq!(tree.arena().capacity(), 4);
    tree.assert_valid().unwrap();
}
