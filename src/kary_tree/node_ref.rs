use core::{iter::FusedIterator, slice};
use crate::storage::{Storage, DefaultStorage};
use super::{KaryTree, Node};

/// A reference to a node in a K-ary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to walk the tree in any direction.
#[derive(Debug)]
pub struct NodeRef<'a, T, const K: usize = 2, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>>,
{
    pub(super) tree: &'a KaryTree<T, K, S>,
    pub(super) key: usize,
}
impl<'a, T, const K: usize, S> NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if it's out of bounds.
    pub fn new_raw(tree: &'a KaryTree<T, K, S>, key: usize) -> Option<Self> {
        if tree.storage.contains_key(key) {
            Some(Self { tree, key })
        } else {
            None
        }
    }
    /// Returns the raw storage key for the node.
    pub fn raw_key(&self) -> usize {
        self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    pub fn into_raw_key(self) -> usize {
        self.key
    }
    /// Returns a reference to the value stored in the node.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.map(|key| Self {
            tree: self.tree,
            key,
        })
    }
    /// Returns an iterator over references to the children of the node, in insertion order. Leaf nodes produce an empty iterator.
    pub fn children(&self) -> NodeChildrenIter<'a, T, K, S> {
        NodeChildrenIter {
            tree: self.tree,
            keys: self.node().children.iter(),
        }
    }
    /// Returns the number of children of the node, which never exceeds `K`.
    pub fn num_children(&self) -> usize {
        self.node().children.len()
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    pub fn is_leaf(&self) -> bool {
        self.node().children.is_empty()
    }
    /// Returns the number of edges between the node and the root of the tree. The root itself is at depth 0.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.node();
        while let Some(parent) = current.parent {
            depth += 1;
            current = self.tree.raw_node(parent);
        }
        depth
    }

    pub(super) fn node(&self) -> &'a Node<T, K> {
        self.tree.raw_node(self.key)
    }
}
impl<T, const K: usize, S> Copy for NodeRef<'_, T, K, S> where S: Storage<Element = Node<T, K>> {}
impl<T, const K: usize, S> Clone for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    fn clone(&self) -> Self {
        *self
    }
}

/// An iterator over references to the children of a K-ary tree node.
#[derive(Debug)]
pub struct NodeChildrenIter<'a, T, const K: usize = 2, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>>,
{
    tree: &'a KaryTree<T, K, S>,
    keys: slice::Iter<'a, usize>,
}
impl<T, const K: usize, S> Clone for NodeChildrenIter<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            keys: self.keys.clone(),
        }
    }
}
impl<'a, T, const K: usize, S> Iterator for NodeChildrenIter<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    type Item = NodeRef<'a, T, K, S>;
    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.keys.next().map(|&key| NodeRef { tree, key })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}
impl<T, const K: usize, S> DoubleEndedIterator for NodeChildrenIter<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.keys.next_back().map(|&key| NodeRef { tree, key })
    }
}
impl<T, const K: usize, S> ExactSizeIterator for NodeChildrenIter<'_, T, K, S> where
    S: Storage<Element = Node<T, K>>
{
}
impl<T, const K: usize, S> FusedIterator for NodeChildrenIter<'_, T, K, S> where
    S: Storage<Element = Node<T, K>>
{
}
