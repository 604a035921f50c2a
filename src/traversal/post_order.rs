use alloc::vec::Vec;
use log::trace;
use crate::{
    storage::{Storage, DefaultStorage},
    kary_tree::{KaryTree, Node},
    CursorError,
};
use super::Cursor;

/// A cursor which visits each child subtree from left to right, then the node itself.
///
/// Created by [`KaryTree::begin_post_order`]. The whole sequence is computed when the cursor is created: the tree is expanded once through a working stack, recording nodes in the reverse of their final order, and the cursor then replays the record by popping it.
///
/// [`KaryTree::begin_post_order`]: ../kary_tree/struct.KaryTree.html#method.begin_post_order " "
#[derive(Debug)]
pub struct PostOrder<'a, T, const K: usize = 2, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>>,
{
    tree: &'a KaryTree<T, K, S>,
    stack: Vec<usize>,
}
impl<'a, T, const K: usize, S> PostOrder<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    /// Creates a cursor over the subtree rooted at the specified key. If the key is `None` or not present in the tree, the cursor is created exhausted.
    pub fn new(tree: &'a KaryTree<T, K, S>, root: Option<usize>) -> Self {
        let mut stack = Vec::new();
        let mut pending = Vec::new();
        pending.extend(root.filter(|&key| tree.node(key).is_some()));
        while let Some(key) = pending.pop() {
            stack.push(key);
            pending.extend(tree.raw_node(key).children.iter().copied());
        }
        trace!("post-order cursor recorded {} nodes", stack.len());
        Self { tree, stack }
    }
}
impl<'a, T, const K: usize, S> Cursor<'a> for PostOrder<'a, T, K, S>
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
        let &key = self.stack.last().ok_or(CursorError::Exhausted)?;
        Ok(self.tree.raw_node(key).value())
    }
    #[inline]
    fn advance(&mut self) -> Result<(), CursorError> {
        self.stack.pop().map(drop).ok_or(CursorError::Exhausted)
    }
    #[inline]
    fn remaining_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.stack.len()))
    }
}
impl<T, const K: usize, S> Clone for PostOrder<'_, T, K, S>
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
impl_cursor_glue!(PostOrder);
impl<T, const K: usize, S> ExactSizeIterator for PostOrder<'_, T, K, S> where
    S: Storage<Element = Node<T, K>>
{
}
