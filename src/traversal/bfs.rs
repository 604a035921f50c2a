use alloc::collections::VecDeque;
use crate::{
    storage::{Storage, DefaultStorage},
    kary_tree::{KaryTree, Node},
    CursorError,
};
use super::Cursor;

/// A breadth-first cursor, visiting all nodes at one depth before any node at the next one.
///
/// Created by [`KaryTree::begin_bfs_scan`] or [`KaryTree::iter`]. Within a level, nodes appear in the order their parents were visited, and siblings in insertion order.
///
/// [`KaryTree::begin_bfs_scan`]: ../kary_tree/struct.KaryTree.html#method.begin_bfs_scan " "
/// [`KaryTree::iter`]: ../kary_tree/struct.KaryTree.html#method.iter " "
#[derive(Debug)]
pub struct BfsScan<'a, T, const K: usize = 2, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>>,
{
    tree: &'a KaryTree<T, K, S>,
    queue: VecDeque<usize>,
}
impl<'a, T, const K: usize, S> BfsScan<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    /// Creates a cursor over the subtree rooted at the specified key. If the key is `None` or not present in the tree, the cursor is created exhausted.
    pub fn new(tree: &'a KaryTree<T, K, S>, root: Option<usize>) -> Self {
        let mut queue = VecDeque::new();
        queue.extend(root.filter(|&key| tree.node(key).is_some()));
        Self { tree, queue }
    }
}
impl<'a, T, const K: usize, S> Cursor<'a> for BfsScan<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    type Value = T;

    #[inline(always)]
    fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }
    #[inline]
    fn current(&self) -> Result<&'a T, CursorError> {
        let &key = self.queue.front().ok_or(CursorError::Exhausted)?;
        Ok(self.tree.raw_node(key).value())
    }
    #[inline]
    fn advance(&mut self) -> Result<(), CursorError> {
        let key = self.queue.pop_front().ok_or(CursorError::Exhausted)?;
        self.queue
            .extend(self.tree.raw_node(key).children.iter().copied());
        Ok(())
    }
}
impl<T, const K: usize, S> Clone for BfsScan<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            queue: self.queue.clone(),
        }
    }
}
impl_cursor_glue!(BfsScan);
