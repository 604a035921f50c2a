use super::*;
use crate::BinaryTree;
use alloc::{collections::VecDeque, string::ToString, vec, vec::Vec};
use pretty_assertions::assert_eq;

fn sample() -> KaryTree<f64> {
    let mut tree = KaryTree::new();
    tree.add_root(1.1).unwrap();
    tree.add_sub_node(&1.1, 1.2).unwrap();
    tree.add_sub_node(&1.1, 1.3).unwrap();
    tree.add_sub_node(&1.2, 1.4).unwrap();
    tree.add_sub_node(&1.2, 1.5).unwrap();
    tree.add_sub_node(&1.3, 1.6).unwrap();
    tree
}

#[test]
fn basic() {
    let tree = sample();
    assert_eq!(tree.len(), 6);
    assert!(!tree.is_empty());
    assert_eq!(tree.arity(), 2);

    let root = tree.root().unwrap();
    assert_eq!(*root.value(), 1.1);
    assert!(root.is_root());
    let children: Vec<f64> = root.children().map(|child| *child.value()).collect();
    assert_eq!(children, vec![1.2, 1.3]);
}

#[test]
fn empty_tree() {
    let mut tree: BinaryTree<u8> = BinaryTree::default();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(tree.root().is_none());
    assert!(tree.find_node(&0).is_none());
    assert_eq!(tree.add_sub_node(&0, 1), Err(InsertError::ParentNotFound));
    assert_eq!(tree.len(), 0);
}

#[test]
fn missing_parent_leaves_tree_unchanged() {
    let mut tree = sample();
    let before = tree.clone();
    assert_eq!(tree.add_sub_node(&9.9, 2.0), Err(InsertError::ParentNotFound));
    assert_eq!(tree.len(), 6);
    assert_eq!(tree, before);
}

#[test]
fn arity_is_enforced() {
    let mut tree = sample();
    assert_eq!(
        tree.add_sub_node(&1.1, 1.7),
        Err(InsertError::ArityExceeded { arity: 2 }),
    );
    assert_eq!(tree.len(), 6);
    // 1.3 still has room for one more
    assert!(tree.add_sub_node(&1.3, 1.7).is_ok());
    assert_eq!(tree.len(), 7);

    let mut ternary: KaryTree<u32, 3> = KaryTree::new();
    ternary.add_root(0).unwrap();
    for value in 1..=3 {
        ternary.add_sub_node(&0, value).unwrap();
    }
    assert_eq!(
        ternary.add_sub_node(&0, 4),
        Err(InsertError::ArityExceeded { arity: 3 }),
    );
}

#[test]
fn add_root_replaces_the_tree() {
    let mut tree = sample();
    let key = tree.add_root(5.0).unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root_key(), Some(key));
    assert!(tree.find_node(&1.2).is_none());
    assert!(tree.root().unwrap().is_leaf());
}

#[test]
fn find_node_returns_first_match_in_pre_order() {
    let mut tree: KaryTree<&str, 3> = KaryTree::new();
    tree.add_root("root").unwrap();
    let left = tree.add_sub_node(&"root", "branch").unwrap();
    let right = tree.add_sub_node(&"root", "other").unwrap();
    let deep = tree.add_child_to(left, "dup").unwrap();
    let shallow = tree.add_child_to(right, "dup").unwrap();

    // The deeper one comes first in pre-order
    let found = tree.find_node(&"dup").unwrap();
    assert_eq!(found.raw_key(), deep);
    assert_eq!(found.depth(), 2);
    // Inserting by value always targets that node
    let child = tree.add_sub_node(&"dup", "child").unwrap();
    assert_eq!(tree.node(child).unwrap().parent().unwrap().raw_key(), deep);
    // Searching a subtree finds the other one
    let found = tree.find_node_from(right, &"dup").unwrap();
    assert_eq!(found.raw_key(), shallow);
    assert!(tree.find_node_from(usize::MAX, &"dup").is_none());
}

#[test]
fn find_node_single_match() {
    let tree = sample();
    let found = tree.find_node(&1.5).unwrap();
    assert_eq!(*found.value(), 1.5);
    assert_eq!(*found.parent().unwrap().value(), 1.2);
    assert!(found.is_leaf());
    assert!(tree.find_node(&7.0).is_none());
}

#[test]
fn add_child_to_checks_the_key() {
    let mut tree = sample();
    assert_eq!(tree.add_child_to(100, 0.0), Err(InsertError::InvalidKey));
    assert_eq!(tree.len(), 6);
}

#[test]
fn node_refs() {
    let tree = sample();
    let leaf = tree.find_node(&1.6).unwrap();
    assert_eq!(leaf.depth(), 2);
    assert_eq!(leaf.num_children(), 0);
    let parent = leaf.parent().unwrap();
    assert_eq!(parent.num_children(), 1);
    assert_eq!(parent.depth(), 1);
    assert!(tree.root().unwrap().parent().is_none());

    let reversed: Vec<f64> = tree
        .root()
        .unwrap()
        .children()
        .rev()
        .map(|child| *child.value())
        .collect();
    assert_eq!(reversed, vec![1.3, 1.2]);
    assert_eq!(tree.root().unwrap().children().len(), 2);
    assert!(tree.node(tree.len()).is_none());
}

#[test]
fn fixed_capacity_storage() {
    let mut tree: ArrayVecKaryTree<u8, 2, 3> = KaryTree::new();
    tree.add_root(0).unwrap();
    tree.add_sub_node(&0, 1).unwrap();
    tree.add_sub_node(&0, 2).unwrap();
    assert_eq!(tree.add_sub_node(&1, 3), Err(InsertError::StorageFull));
    assert_eq!(tree.len(), 3);
    assert!(tree.find_node(&1).unwrap().is_leaf());

    let mut no_room: ArrayVecKaryTree<u8, 2, 0> = KaryTree::new();
    assert_eq!(no_room.add_root(0), Err(InsertError::StorageFull));
    assert!(no_room.is_empty());
}

#[test]
fn vec_deque_storage() {
    let mut tree: KaryTree<u8, 2, VecDeque<Node<u8, 2>>> = KaryTree::with_capacity(4);
    tree.add_root(1).unwrap();
    tree.add_sub_node(&1, 2).unwrap();
    tree.add_sub_node(&2, 3).unwrap();
    let values: Vec<u8> = tree.iter().copied().collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn display_outline() {
    let tree = sample();
    assert_eq!(
        tree.to_string(),
        "1.1\n  1.2\n    1.4\n    1.5\n  1.3\n    1.6\n",
    );
    assert_eq!(BinaryTree::<u8>::new().to_string(), "");
}

#[test]
fn into_iterator_matches_bfs() {
    let tree = sample();
    let mut visited = Vec::new();
    for value in &tree {
        visited.push(*value);
    }
    assert_eq!(visited, vec![1.1, 1.2, 1.3, 1.4, 1.5, 1.6]);
}

#[test]
#[should_panic(expected = "room for exactly 3 nodes")]
fn fixed_capacity_mismatch() {
    let _tree: ArrayVecKaryTree<u8, 2, 3> = KaryTree::with_capacity(8);
}

/// Counts the lines of an outline and the indentation of the last one, without keeping the text.
#[derive(Default)]
struct OutlineShape {
    lines: usize,
    indent: usize,
    last_indent: usize,
}
impl core::fmt::Write for OutlineShape {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        if s.starts_with(' ') {
            self.indent += s.len();
        } else if s.ends_with('\n') {
            self.lines += 1;
            self.last_indent = self.indent;
            self.indent = 0;
        }
        Ok(())
    }
}

#[test]
fn display_very_deep_chain() {
    const DEPTH: usize = 33_000;
    let mut tree: KaryTree<u32, 1> = KaryTree::new();
    let mut key = tree.add_root(0).unwrap();
    for value in 1..DEPTH as u32 {
        key = tree.add_child_to(key, value).unwrap();
    }
    let mut shape = OutlineShape::default();
    core::fmt::write(&mut shape, format_args!("{}", tree)).unwrap();
    assert_eq!(shape.lines, DEPTH);
    // Deeper than any format width can express
    assert_eq!(shape.last_indent, 2 * (DEPTH - 1));
}

#[test]
fn add_child_to_links_parent_and_child() {
    let mut tree: KaryTree<u8, 3, VecDeque<Node<u8, 3>>> = KaryTree::new();
    let root = tree.add_root(1).unwrap();
    let first = tree.add_child_to(root, 2).unwrap();
    let second = tree.add_child_to(root, 3).unwrap();
    let children: Vec<usize> = tree
        .root()
        .unwrap()
        .children()
        .map(|child| child.raw_key())
        .collect();
    assert_eq!(children, vec![first, second]);
    assert_eq!(tree.node(second).unwrap().parent().unwrap().raw_key(), root);
}
