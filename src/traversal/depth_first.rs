use alloc::vec::Vec;
use crate::{
    storage::{Storage, DefaultStorage},
    kary_tree::{KaryTree, Node},
    CursorError,
};
use super::Cursor;

/// A cursor which visits a node, then each of its child subtrees from left to right.
///
/// Created by [`KaryTree::begin_pre_order`]. Keeps an explicit stack of pending nodes, so traversing deep trees does not recurse.
///
/// [`KaryTree::begin_pre_order`]: ../kary_tree/struct.KaryTree.html#method.begin_pre_order " "
#[derive(Debug)]
pub struct PreOrder<'a, T, const K: usize = 2, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>>,
{
    tree: &'a KaryTree<T, K, S>,
    stack: Vec<usize>,
}
impl<'a, T, const K: usize, S> PreOrder<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    /// Creates a cursor over the subtree rooted at the specified key. If the key is `None` or not present in the tree, the cursor is created exhausted.
    pub fn new(tree: &'a KaryTree<T, K, S>, root: Option<usize>) -> Self {
        Self {
            tree,
            stack: seed(tree, root),
        }
    }
}
impl<'a, T, const K: usize, S> Cursor<'a> for PreOrder<'a, T, K, S>
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
        current(self.tree, &self.stack)
    }
    #[inline]
    fn advance(&mut self) -> Result<(), CursorError> {
        pop_and_expand(self.tree, &mut self.stack)
    }
}
impl<T, const K: usize, S> Clone for PreOrder<'_, T, K, S>
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
impl_cursor_glue!(PreOrder);

/// A depth-first cursor, visiting children from left to right.
///
/// Created by [`KaryTree::begin_dfs_scan`]. Behaves exactly like [`PreOrder`]; it exists as a separate type so that code can name the strategy it relies on.
///
/// [`KaryTree::begin_dfs_scan`]: ../kary_tree/struct.KaryTree.html#method.begin_dfs_scan " "
/// [`PreOrder`]: struct.PreOrder.html " "
#[derive(Debug)]
pub struct DfsScan<'a, T, const K: usize = 2, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>>,
{
    tree: &'a KaryTree<T, K, S>,
    stack: Vec<usize>,
}
impl<'a, T, const K: usize, S> DfsScan<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    /// Creates a cursor over the subtree rooted at the specified key. If the key is `None` or not present in the tree, the cursor is created exhausted.
    pub fn new(tree: &'a KaryTree<T, K, S>, root: Option<usize>) -> Self {
        Self {
            tree,
            stack: seed(tree, root),
        }
    }
}
impl<'a, T, const K: usize, S> Cursor<'a> for DfsScan<'a, T, K, S>
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
        current(self.tree, &self.stack)
    }
    #[inline]
    fn advance(&mut self) -> Result<(), CursorError> {
        pop_and_expand(self.tree, &mut self.stack)
    }
}
impl<T, const K: usize, S> Clone for DfsScan<'_, T, K, S>
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
impl_cursor_glue!(DfsScan);

fn seed<T, const K: usize, S>(tree: &KaryTree<T, K, S>, root: Option<usize>) -> Vec<usize>
where
    S: Storage<Element = Node<T, K>>,
{
    let mut stack = Vec::new();
    stack.extend(root.filter(|&key| tree.node(key).is_some()));
    stack
}
fn current<'a, T, const K: usize, S>(
    tree: &'a KaryTree<T, K, S>,
    stack: &[usize],
) -> Result<&'a T, CursorError>
where
    S: Storage<Element = Node<T, K>>,
{
    let &key = stack.last().ok_or(CursorError::Exhausted)?;
    Ok(tree.raw_node(key).value())
}
/// Pops the top of the stack and pushes its children in reverse, so that the leftmost child ends up on top.
fn pop_and_expand<T, const K: usize, S>(
    tree: &KaryTree<T, K, S>,
    stack: &mut Vec<usize>,
) -> Result<(), CursorError>
where
    S: Storage<Element = Node<T, K>>,
{
    let key = stack.pop().ok_or(CursorError::Exhausted)?;
    stack.extend(tree.raw_node(key).children.iter().rev().copied());
    Ok(())
}
