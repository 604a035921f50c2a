use alloc::vec::Vec;
use crate::{
    storage::{Storage, DefaultStorage},
    kary_tree::{KaryTree, Node},
    CursorError,
};
use super::Cursor;

/// A cursor which visits the first child subtree, then the node, then the remaining child subtrees from left to right.
///
/// Created by [`KaryTree::begin_in_order`]. For binary trees this is the classic left-node-right order. For wider trees it is *not* a canonical generalization of in-order traversal: a node is always visited right after its first subtree, and all of its other subtrees follow it. Every node is still visited exactly once.
///
/// The cursor keeps a stack of `(key, child index)` frames. A frame with index 0 is a node which hasn't been visited yet and whose first subtree, if any, sits above it on the stack. A frame with a nonzero index belongs to a node which has already been visited and records the last child descended into, so that traversal can resume with the next one.
///
/// [`KaryTree::begin_in_order`]: ../kary_tree/struct.KaryTree.html#method.begin_in_order " "
#[derive(Debug)]
pub struct InOrder<'a, T, const K: usize = 2, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>>,
{
    tree: &'a KaryTree<T, K, S>,
    stack: Vec<(usize, usize)>,
}
impl<'a, T, const K: usize, S> InOrder<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    /// Creates a cursor over the subtree rooted at the specified key. If the key is `None` or not present in the tree, the cursor is created exhausted.
    pub fn new(tree: &'a KaryTree<T, K, S>, root: Option<usize>) -> Self {
        let mut cursor = Self {
            tree,
            stack: Vec::new(),
        };
        if let Some(root) = root.filter(|&key| tree.node(key).is_some()) {
            cursor.descend_leftmost(root);
        }
        cursor
    }

    /// Pushes the path from the specified node down through first children, ending at a node without children.
    fn descend_leftmost(&mut self, mut key: usize) {
        loop {
            self.stack.push((key, 0));
            match self.tree.raw_node(key).children.first() {
                Some(&first) => key = first,
                None => break,
            }
        }
    }
    /// Continues with the child after `last_descended`, leaving a resume frame behind if there is one.
    fn resume(&mut self, key: usize, last_descended: usize) {
        let next = last_descended + 1;
        if let Some(&child) = self.tree.raw_node(key).children.get(next) {
            self.stack.push((key, next));
            self.descend_leftmost(child);
        }
    }
}
impl<'a, T, const K: usize, S> Cursor<'a> for InOrder<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    type Value = T;

    #[inline(always)]
    fn is_exhausted(&self) -> bool {
        self.stack.is_empty()
    }
    #[inline]
    fn current(&self) -> Result<&'a T, CursorError> {
        let &(key, _) = self.stack.last().ok_or(CursorError::Exhausted)?;
        Ok(self.tree.raw_node(key).value())
    }
    fn advance(&mut self) -> Result<(), CursorError> {
        let (key, last_descended) = self.stack.pop().ok_or(CursorError::Exhausted)?;
        self.resume(key, last_descended);
        // Unwind resume frames until an unvisited node is on top
        while let Some(&(key, last_descended)) = self.stack.last() {
            if last_descended == 0 {
                break;
            }
            self.stack.pop();
            self.resume(key, last_descended);
        }
        Ok(())
    }
}
impl<T, const K: usize, S> Clone for InOrder<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
        }
    }
}
impl_cursor_glue!(InOrder);
