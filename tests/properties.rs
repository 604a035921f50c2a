use std::collections::HashMap;
use kary_tree::{InsertError, KaryTree};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

type Tree = KaryTree<u32, 4>;

/// Grows a tree with unique values `1..`, attaching each new value under a previously inserted one picked by the selector. Insertions under full nodes are rejected and skipped.
fn grow(selectors: &[usize]) -> Tree {
    let mut tree = Tree::new();
    tree.add_root(1).unwrap();
    let mut inserted = vec![1_u32];
    for (i, selector) in selectors.iter().enumerate() {
        let value = i as u32 + 2;
        let parent = inserted[selector % inserted.len()];
        match tree.add_sub_node(&parent, value) {
            Ok(_) => inserted.push(value),
            Err(error) => assert_eq!(error, InsertError::ArityExceeded { arity: 4 }),
        }
    }
    tree
}

fn positions<'a>(order: impl Iterator<Item = &'a u32>) -> HashMap<u32, usize> {
    order.enumerate().map(|(i, &value)| (value, i)).collect()
}

fn selectors() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 0..96)
}

proptest! {
    #[test]
    fn bfs_visits_shallower_levels_first(selectors in selectors()) {
        let tree = grow(&selectors);
        let depths: Vec<usize> = tree
            .begin_bfs_scan()
            .map(|value| tree.find_node(value).unwrap().depth())
            .collect();
        prop_assert_eq!(depths.len(), tree.len());
        prop_assert!(depths.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn pre_order_puts_parents_first(selectors in selectors()) {
        let tree = grow(&selectors);
        let order = positions(tree.begin_pre_order());
        prop_assert_eq!(order.len(), tree.len());
        for &value in tree.iter() {
            let node = tree.find_node(&value).unwrap();
            if let Some(parent) = node.parent() {
                prop_assert!(order[parent.value()] < order[&value]);
            }
            let children: Vec<usize> = node.children().map(|child| order[child.value()]).collect();
            prop_assert!(children.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn post_order_puts_children_first(selectors in selectors()) {
        let tree = grow(&selectors);
        let order = positions(tree.begin_post_order());
        prop_assert_eq!(order.len(), tree.len());
        for &value in tree.iter() {
            if let Some(parent) = tree.find_node(&value).unwrap().parent() {
                prop_assert!(order[parent.value()] > order[&value]);
            }
        }
    }

    #[test]
    fn in_order_visits_everything_once(selectors in selectors()) {
        let tree = grow(&selectors);
        let mut visited: Vec<u32> = tree.begin_in_order().copied().collect();
        visited.sort_unstable();
        let expected: Vec<u32> = {
            let mut all: Vec<u32> = tree.iter().copied().collect();
            all.sort_unstable();
            all
        };
        prop_assert_eq!(visited, expected);
    }

    #[test]
    fn dfs_matches_pre_order(selectors in selectors()) {
        let tree = grow(&selectors);
        let dfs: Vec<u32> = tree.begin_dfs_scan().copied().collect();
        let pre: Vec<u32> = tree.begin_pre_order().copied().collect();
        prop_assert_eq!(dfs, pre);
    }

    #[test]
    fn heap_starts_with_the_maximum(selectors in selectors()) {
        let tree = grow(&selectors);
        let heap: Vec<u32> = tree.begin_heap().copied().collect();
        prop_assert_eq!(heap.len(), tree.len());
        prop_assert_eq!(Some(&heap[0]), tree.iter().max());
        for child in 1..heap.len() {
            prop_assert!(heap[(child - 1) / 2] >= heap[child]);
        }
    }

    #[test]
    fn missing_parent_is_rejected(selectors in selectors(), child in any::<u32>()) {
        let mut tree = grow(&selectors);
        let len = tree.len();
        prop_assert_eq!(tree.add_sub_node(&0, child), Err(InsertError::ParentNotFound));
        prop_assert_eq!(tree.len(), len);
    }

    #[test]
    fn find_node_by_value(selectors in selectors(), probe in any::<u32>()) {
        let tree = grow(&selectors);
        let present = tree.iter().any(|&value| value == probe);
        match tree.find_node(&probe) {
            Some(node) => {
                prop_assert!(present);
                prop_assert_eq!(*node.value(), probe);
            }
            None => prop_assert!(!present),
        }
        prop_assert!(tree.find_node(&0).is_none());
    }
}
