//! K-ary trees, ones where every node has at most `K` ordered children.
//!
//! Nodes are found by *value*: [`add_sub_node`] attaches the new child below the first node, in pre-order, whose value equals the specified parent value. If a tree holds several equal values, only the first of them can be targeted that way; use [`add_child_to`] with a key to address a specific node instead.
//!
//! # Example
//! ```rust
//! use kary_tree::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//! tree.add_root(1.1).unwrap();
//! tree.add_sub_node(&1.1, 1.2).unwrap();
//! tree.add_sub_node(&1.1, 1.3).unwrap();
//! tree.add_sub_node(&1.2, 1.4).unwrap();
//! tree.add_sub_node(&1.2, 1.5).unwrap();
//! tree.add_sub_node(&1.3, 1.6).unwrap();
//!
//! // A binary tree has no room for a third child:
//! assert!(tree.add_sub_node(&1.1, 1.7).is_err());
//!
//! let pre_order: Vec<f64> = tree.begin_pre_order().copied().collect();
//! assert_eq!(pre_order, [1.1, 1.2, 1.4, 1.5, 1.3, 1.6]);
//! let in_order: Vec<f64> = tree.begin_in_order().copied().collect();
//! assert_eq!(in_order, [1.4, 1.2, 1.5, 1.1, 1.6, 1.3]);
//! // The natural iteration order of the tree is breadth-first:
//! let level_order: Vec<f64> = tree.iter().copied().collect();
//! assert_eq!(level_order, [1.1, 1.2, 1.3, 1.4, 1.5, 1.6]);
//! ```
//!
//! [`add_sub_node`]: struct.KaryTree.html#method.add_sub_node " "
//! [`add_child_to`]: struct.KaryTree.html#method.add_child_to " "

use core::fmt::{self, Formatter, Display};
use alloc::vec::Vec;
use log::{debug, trace};
use crate::{
    storage::{Storage, DefaultStorage},
    traversal::{PreOrder, PostOrder, InOrder, BfsScan, DfsScan, HeapOrder},
    InsertError,
};

mod node;
mod node_ref;
#[cfg(test)]
mod tests;

pub use node::Node;
pub use node_ref::{NodeRef, NodeChildrenIter};

/// A K-ary tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KaryTree<T, const K: usize = 2, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>>,
{
    storage: S,
    root: Option<usize>,
}
impl<T, const K: usize, S> KaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    /// Creates an empty tree.
    ///
    /// # Example
    /// ```rust
    /// # use kary_tree::KaryTree;
    /// // A ternary tree. The turbofish is needed to state the arity; the storage stays default.
    /// let tree = KaryTree::<u32, 3>::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.arity(), 3);
    /// ```
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
        }
    }
    /// Creates an empty tree with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
        }
    }

    /// Makes the specified value the root of the tree, discarding all nodes the tree had before. Returns the key of the new root node.
    ///
    /// # Errors
    /// Fails with [`StorageFull`] only if the storage has a fixed capacity of zero. The tree is left empty in that case.
    ///
    /// [`StorageFull`]: ../enum.InsertError.html#variant.StorageFull " "
    pub fn add_root(&mut self, value: T) -> Result<usize, InsertError> {
        if self.root.take().is_some() {
            debug!("replacing the root, dropping {} existing nodes", self.storage.len());
        }
        self.storage.clear();
        let key = self
            .storage
            .try_add(Node::leaf(value, None))
            .map_err(|_| {
                debug!("rejected root insertion: the storage has no capacity");
                InsertError::StorageFull
            })?;
        self.root = Some(key);
        trace!("added root node at key {}", key);
        Ok(key)
    }
    /// Appends a child holding `child` to the first node, in pre-order, whose value equals `parent`. Returns the key of the new node.
    ///
    /// # Errors
    /// - [`ParentNotFound`] if no node holds a value equal to `parent`
    /// - [`ArityExceeded`] if that node already has `K` children
    /// - [`StorageFull`] if the storage has a fixed capacity and no room left
    ///
    /// The tree is left unchanged on failure.
    ///
    /// # Example
    /// ```rust
    /// # use kary_tree::{BinaryTree, InsertError};
    /// let mut tree = BinaryTree::new();
    /// tree.add_root("root").unwrap();
    /// tree.add_sub_node(&"root", "left").unwrap();
    /// assert_eq!(
    ///     tree.add_sub_node(&"nowhere", "orphan"),
    ///     Err(InsertError::ParentNotFound),
    /// );
    /// assert_eq!(tree.len(), 2);
    /// ```
    ///
    /// [`ParentNotFound`]: ../enum.InsertError.html#variant.ParentNotFound " "
    /// [`ArityExceeded`]: ../enum.InsertError.html#variant.ArityExceeded " "
    /// [`StorageFull`]: ../enum.InsertError.html#variant.StorageFull " "
    pub fn add_sub_node(&mut self, parent: &T, child: T) -> Result<usize, InsertError>
    where
        T: PartialEq,
    {
        let parent_key = match self.find_node(parent) {
            Some(node) => node.into_raw_key(),
            None => {
                debug!("rejected insertion: no node holds the requested parent value");
                return Err(InsertError::ParentNotFound);
            }
        };
        self.add_child_to(parent_key, child)
    }
    /// Appends a child holding `child` to the node with the specified key. Returns the key of the new node.
    ///
    /// # Errors
    /// - [`InvalidKey`] if the key is not present in the tree
    /// - [`ArityExceeded`] if the node already has `K` children
    /// - [`StorageFull`] if the storage has a fixed capacity and no room left
    ///
    /// [`InvalidKey`]: ../enum.InsertError.html#variant.InvalidKey " "
    /// [`ArityExceeded`]: ../enum.InsertError.html#variant.ArityExceeded " "
    /// [`StorageFull`]: ../enum.InsertError.html#variant.StorageFull " "
    pub fn add_child_to(&mut self, parent_key: usize, child: T) -> Result<usize, InsertError> {
        let parent = self.storage.get(parent_key).ok_or_else(|| {
            debug!("rejected insertion: key {} is not present in the tree", parent_key);
            InsertError::InvalidKey
        })?;
        if parent.children.is_full() {
            debug!(
                "rejected insertion: node {} already has {} children",
                parent_key, K,
            );
            return Err(InsertError::ArityExceeded { arity: K });
        }
        let key = self
            .storage
            .try_add(Node::leaf(child, Some(parent_key)))
            .map_err(|_| {
                debug!("rejected insertion: the storage has no room left");
                InsertError::StorageFull
            })?;
        // Adding a node never invalidates existing keys, so the parent is still there
        let parent = self
            .storage
            .get_mut(parent_key)
            .ok_or(InsertError::InvalidKey)?;
        parent.children.push(key);
        trace!("added node {} as a child of node {}", key, parent_key);
        Ok(key)
    }

    /// Returns the first node, in pre-order, whose value equals the specified one, or `None` if there is no such node.
    ///
    /// # Example
    /// ```rust
    /// # use kary_tree::BinaryTree;
    /// let mut tree = BinaryTree::new();
    /// tree.add_root(10).unwrap();
    /// tree.add_sub_node(&10, 20).unwrap();
    ///
    /// let found = tree.find_node(&20).unwrap();
    /// assert_eq!(found.parent().map(|p| *p.value()), Some(10));
    /// assert!(tree.find_node(&30).is_none());
    /// ```
    pub fn find_node(&self, value: &T) -> Option<NodeRef<'_, T, K, S>>
    where
        T: PartialEq,
    {
        self.root.and_then(|root| self.find_node_from(root, value))
    }
    /// Searches the subtree rooted at `start` in pre-order, returning the first node whose value equals the specified one. Returns `None` if there's no such node or if `start` is not present in the tree.
    pub fn find_node_from(&self, start: usize, value: &T) -> Option<NodeRef<'_, T, K, S>>
    where
        T: PartialEq,
    {
        if !self.storage.contains_key(start) {
            return None;
        }
        let mut stack = Vec::new();
        stack.push(start);
        while let Some(key) = stack.pop() {
            let node = self.raw_node(key);
            if node.value() == value {
                return Some(NodeRef { tree: self, key });
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    /// Returns a reference to the root node of the tree, or `None` if the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, T, K, S>> {
        self.root.map(|key| NodeRef { tree: self, key })
    }
    /// Returns a reference to the node at the specified key, or `None` if there's no such node.
    #[inline]
    pub fn node(&self, key: usize) -> Option<NodeRef<'_, T, K, S>> {
        NodeRef::new_raw(self, key)
    }
    /// Returns the number of nodes in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the tree has no root, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns the maximum number of children a node of this tree can have.
    #[inline(always)]
    pub const fn arity(&self) -> usize {
        K
    }
    /// Returns the key of the root node, or `None` if the tree is empty.
    #[inline(always)]
    pub fn root_key(&self) -> Option<usize> {
        self.root
    }

    /// Returns an iterator over the values of the tree in breadth-first order, the natural iteration order of the tree.
    #[inline(always)]
    pub fn iter(&self) -> BfsScan<'_, T, K, S> {
        self.begin_bfs_scan()
    }

    /// Returns a pre-order cursor positioned at the root.
    #[inline(always)]
    pub fn begin_pre_order(&self) -> PreOrder<'_, T, K, S> {
        PreOrder::new(self, self.root)
    }
    /// Returns an exhausted pre-order cursor, the end of the `begin_pre_order` range.
    #[inline(always)]
    pub fn end_pre_order(&self) -> PreOrder<'_, T, K, S> {
        PreOrder::new(self, None)
    }
    /// Returns a post-order cursor positioned at the first node of the sequence.
    #[inline(always)]
    pub fn begin_post_order(&self) -> PostOrder<'_, T, K, S> {
        PostOrder::new(self, self.root)
    }
    /// Returns an exhausted post-order cursor, the end of the `begin_post_order` range.
    #[inline(always)]
    pub fn end_post_order(&self) -> PostOrder<'_, T, K, S> {
        PostOrder::new(self, None)
    }
    /// Returns an in-order cursor positioned at the leftmost node.
    #[inline(always)]
    pub fn begin_in_order(&self) -> InOrder<'_, T, K, S> {
        InOrder::new(self, self.root)
    }
    /// Returns an exhausted in-order cursor, the end of the `begin_in_order` range.
    #[inline(always)]
    pub fn end_in_order(&self) -> InOrder<'_, T, K, S> {
        InOrder::new(self, None)
    }
    /// Returns a breadth-first cursor positioned at the root.
    #[inline(always)]
    pub fn begin_bfs_scan(&self) -> BfsScan<'_, T, K, S> {
        BfsScan::new(self, self.root)
    }
    /// Returns an exhausted breadth-first cursor, the end of the `begin_bfs_scan` range.
    #[inline(always)]
    pub fn end_bfs_scan(&self) -> BfsScan<'_, T, K, S> {
        BfsScan::new(self, None)
    }
    /// Returns a depth-first cursor positioned at the root.
    #[inline(always)]
    pub fn begin_dfs_scan(&self) -> DfsScan<'_, T, K, S> {
        DfsScan::new(self, self.root)
    }
    /// Returns an exhausted depth-first cursor, the end of the `begin_dfs_scan` range.
    #[inline(always)]
    pub fn end_dfs_scan(&self) -> DfsScan<'_, T, K, S> {
        DfsScan::new(self, None)
    }
    /// Returns a heap-order cursor over all values of the tree. The first value is the maximum.
    #[inline(always)]
    pub fn begin_heap(&self) -> HeapOrder<'_, T, K, S>
    where
        T: PartialOrd,
    {
        HeapOrder::new(self, self.root)
    }
    /// Returns an exhausted heap-order cursor, the end of the `begin_heap` range.
    #[inline(always)]
    pub fn end_heap(&self) -> HeapOrder<'_, T, K, S>
    where
        T: PartialOrd,
    {
        HeapOrder::new(self, None)
    }

    pub(crate) fn raw_node(&self, key: usize) -> &Node<T, K> {
        debug_assert!(
            self.storage.contains_key(key),
            "\
debug key check failed: tried to reference key {} which is not present in the storage",
            key,
        );
        unsafe {
            // SAFETY: keys are only handed out by the tree itself and the storage never shrinks
            // while the tree is borrowed
            self.storage.get_unchecked(key)
        }
    }
}
impl<T, const K: usize, S> Default for KaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<'a, T, const K: usize, S> IntoIterator for &'a KaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    type Item = &'a T;
    type IntoIter = BfsScan<'a, T, K, S>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
/// Renders the tree as an indented outline, one node per line in pre-order, indenting each level by two spaces. An empty tree renders as nothing.
impl<T, const K: usize, S> Display for KaryTree<T, K, S>
where
    T: Display,
    S: Storage<Element = Node<T, K>>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        const PADDING: &str = "                                                                ";
        let mut stack = Vec::new();
        stack.extend(self.root.map(|key| (key, 0_usize)));
        while let Some((key, depth)) = stack.pop() {
            let node = self.raw_node(key);
            // Written in chunks, format widths are capped at u16::MAX
            let mut indent = depth * 2;
            while indent > 0 {
                let chunk = indent.min(PADDING.len());
                f.write_str(&PADDING[..chunk])?;
                indent -= chunk;
            }
            writeln!(f, "{}", node.value())?;
            stack.extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
        }
        Ok(())
    }
}

/// A K-ary tree which uses a `Vec` as backing storage.
///
/// The default `KaryTree` type already uses this, so this is only provided for explicitness and consistency.
pub type VecKaryTree<T, const K: usize = 2> = KaryTree<T, K, Vec<Node<T, K>>>;
/// A K-ary tree which uses an [`ArrayVec`] with room for `CAP` nodes as backing storage, never allocating memory for nodes.
///
/// [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
pub type ArrayVecKaryTree<T, const K: usize, const CAP: usize> =
    KaryTree<T, K, arrayvec::ArrayVec<Node<T, K>, CAP>>;
