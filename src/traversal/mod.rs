//! Everything related to traversing trees.
//!
//! The module is home to the following items:
//! - [`Cursor`], the trait shared by all traversal strategies
//! - Six cursors: [`PreOrder`], [`PostOrder`], [`InOrder`], [`BfsScan`], [`DfsScan`] and [`HeapOrder`]
//!
//! Every cursor is also an [`Iterator`] over references to the values of the tree, which is the most convenient way of using them. The `begin_*`/`end_*` accessors on [`KaryTree`] additionally support the range idiom, where a cursor is advanced until it compares equal to an exhausted one:
//! ```rust
//! use kary_tree::{BinaryTree, traversal::Cursor};
//!
//! let mut tree = BinaryTree::new();
//! tree.add_root(1).unwrap();
//! tree.add_sub_node(&1, 2).unwrap();
//! tree.add_sub_node(&1, 3).unwrap();
//!
//! let mut visited = Vec::new();
//! let mut cursor = tree.begin_bfs_scan();
//! while cursor != tree.end_bfs_scan() {
//!     visited.push(*cursor.current().unwrap());
//!     cursor.advance().unwrap();
//! }
//! assert_eq!(visited, [1, 2, 3]);
//! ```
//!
//! # Equality of cursors
//! Two cursors of the same kind compare equal *only when both are exhausted*. A cursor which still has nodes to visit is unequal to every cursor, itself included, much like NaN is for floats. This makes comparing against an exhausted cursor a test for the end of the sequence, and nothing else.
//!
//! [`Cursor`]: trait.Cursor.html " "
//! [`PreOrder`]: struct.PreOrder.html " "
//! [`PostOrder`]: struct.PostOrder.html " "
//! [`InOrder`]: struct.InOrder.html " "
//! [`BfsScan`]: struct.BfsScan.html " "
//! [`DfsScan`]: struct.DfsScan.html " "
//! [`HeapOrder`]: struct.HeapOrder.html " "
//! [`KaryTree`]: ../kary_tree/struct.KaryTree.html " "
//! [`Iterator`]: https://doc.rust-lang.org/std/iter/trait.Iterator.html " "

use crate::CursorError;

/// Generates the `Iterator`, `FusedIterator` and `PartialEq` implementations shared by the tree-borrowing cursors.
macro_rules! impl_cursor_glue {
    ($name:ident) => {
        impl<'a, T, const K: usize, S> Iterator for $name<'a, T, K, S>
        where
            S: $crate::storage::Storage<Element = $crate::kary_tree::Node<T, K>>,
        {
            type Item = &'a T;
            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                let value = $crate::traversal::Cursor::current(self).ok()?;
                $crate::traversal::Cursor::advance(self).ok()?;
                Some(value)
            }
            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                $crate::traversal::Cursor::remaining_hint(self)
            }
        }
        impl<T, const K: usize, S> core::iter::FusedIterator for $name<'_, T, K, S> where
            S: $crate::storage::Storage<Element = $crate::kary_tree::Node<T, K>>
        {
        }
        impl<'b, T, const K: usize, S> PartialEq<$name<'b, T, K, S>> for $name<'_, T, K, S>
        where
            S: $crate::storage::Storage<Element = $crate::kary_tree::Node<T, K>>,
        {
            #[inline]
            fn eq(&self, other: &$name<'b, T, K, S>) -> bool {
                $crate::traversal::Cursor::is_exhausted(self)
                    && $crate::traversal::Cursor::is_exhausted(other)
            }
        }
    };
}

mod depth_first;
mod post_order;
mod in_order;
mod bfs;
mod heap;

pub use depth_first::{PreOrder, DfsScan};
pub use post_order::PostOrder;
pub use in_order::InOrder;
pub use bfs::BfsScan;
pub use heap::HeapOrder;

/// A stateful, single-direction traversal over the values of a tree.
///
/// A cursor always points at the value it's going to produce next, until it runs out of pending nodes and becomes *exhausted*. Cursors are not restartable in place: to traverse a tree again, create a new one.
pub trait Cursor<'a> {
    /// The type of the values the cursor produces references to.
    type Value: 'a;

    /// Returns `true` if the cursor has no more pending nodes, `false` otherwise.
    fn is_exhausted(&self) -> bool;
    /// Returns the value the cursor currently points at.
    ///
    /// # Errors
    /// Fails with [`CursorError::Exhausted`] if the cursor has no more pending nodes.
    ///
    /// [`CursorError::Exhausted`]: ../enum.CursorError.html#variant.Exhausted " "
    fn current(&self) -> Result<&'a Self::Value, CursorError>;
    /// Moves the cursor to the next value of the sequence.
    ///
    /// # Errors
    /// Fails with [`CursorError::Exhausted`] if the cursor has no more pending nodes, leaving it unchanged.
    ///
    /// [`CursorError::Exhausted`]: ../enum.CursorError.html#variant.Exhausted " "
    fn advance(&mut self) -> Result<(), CursorError>;

    /// Returns the bounds on the number of values left to produce, in the format of [`Iterator::size_hint`].
    ///
    /// The default implementation only knows whether the cursor is exhausted; cursors which compute their sequence in advance override it with the exact count.
    ///
    /// [`Iterator::size_hint`]: https://doc.rust-lang.org/std/iter/trait.Iterator.html#method.size_hint " "
    #[inline]
    fn remaining_hint(&self) -> (usize, Option<usize>) {
        if self.is_exhausted() {
            (0, Some(0))
        } else {
            (1, None)
        }
    }
}
