//! Implements an arena-allocated K-ary tree and a family of cursors to traverse it.
//!
//! # Overview
//! [`KaryTree`] is a tree where every node owns a value and at most `K` ordered children (`K` defaults to 2, making it a binary tree). Like every other tree built with the ["arena-allocated trees"][arena tree blog post] technique, it keeps all nodes in a backing storage and links them by index instead of by pointer, so every node has exactly one owner: the storage of the tree it belongs to.
//!
//! Trees are built by value: a root is set with [`add_root`], and children are attached with [`add_sub_node`] below the first node, in pre-order, whose value equals the specified parent value. Attaching under a value which is not in the tree, or below a node which already has `K` children, is reported as an [`InsertError`] and leaves the tree unchanged.
//!
//! # Traversal
//! Six traversal strategies are available, each as a cursor type in the [`traversal`] module:
//! - [`PreOrder`]: a node, then its child subtrees from left to right
//! - [`PostOrder`]: the child subtrees from left to right, then the node
//! - [`InOrder`]: the first child subtree, the node, then the remaining subtrees; left-node-right for binary trees
//! - [`BfsScan`]: level by level, which is also the natural iteration order of a tree
//! - [`DfsScan`]: depth-first, same order as pre-order
//! - [`HeapOrder`]: all values arranged into a binary max-heap layout
//!
//! Every cursor is an [`Iterator`] over references to the values and implements the [`Cursor`] trait for manual stepping, in which case running past the end is reported as a [`CursorError`].
//!
//! ```rust
//! use kary_tree::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//! tree.add_root('a').unwrap();
//! tree.add_sub_node(&'a', 'b').unwrap();
//! tree.add_sub_node(&'a', 'c').unwrap();
//! tree.add_sub_node(&'b', 'd').unwrap();
//!
//! let post_order: String = tree.begin_post_order().collect();
//! assert_eq!(post_order, "dbca");
//! let heap: Vec<char> = tree.begin_heap().copied().collect();
//! assert_eq!(heap[0], 'd');
//! ```
//!
//! # Storage
//! The arena type is chosen with the `S` type parameter of [`KaryTree`], which has to implement [`Storage`]. [`Vec`] is the default, [`VecDeque`] is supported for convenience and [`ArrayVec`] provides an arena which never allocates and reports running out of room as [`InsertError::StorageFull`].
//!
//! # Logging
//! Rejected insertions and root replacement are reported through the [`log`] facade at the `debug` level, successful insertions at the `trace` level. The crate never installs a logger by itself.
//!
//! # Feature flags
//! - `std` (**enabled by default**): enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for the error types. The crate always requires `alloc`.
//!
//! [`KaryTree`]: kary_tree/struct.KaryTree.html " "
//! [`add_root`]: kary_tree/struct.KaryTree.html#method.add_root " "
//! [`add_sub_node`]: kary_tree/struct.KaryTree.html#method.add_sub_node " "
//! [`InsertError`]: enum.InsertError.html " "
//! [`InsertError::StorageFull`]: enum.InsertError.html#variant.StorageFull " "
//! [`CursorError`]: enum.CursorError.html " "
//! [`traversal`]: traversal/index.html " "
//! [`Cursor`]: traversal/trait.Cursor.html " "
//! [`PreOrder`]: traversal/struct.PreOrder.html " "
//! [`PostOrder`]: traversal/struct.PostOrder.html " "
//! [`InOrder`]: traversal/struct.InOrder.html " "
//! [`BfsScan`]: traversal/struct.BfsScan.html " "
//! [`DfsScan`]: traversal/struct.DfsScan.html " "
//! [`HeapOrder`]: traversal/struct.HeapOrder.html " "
//! [`Storage`]: storage/trait.Storage.html " "
//! [`log`]: https://docs.rs/log " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Iterator`]: https://doc.rust-lang.org/std/iter/trait.Iterator.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`VecDeque`]: https://doc.rust-lang.org/std/collections/struct.VecDeque.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    clippy::cast_lossless,
    clippy::explicit_iter_loop,
    clippy::map_unwrap_or,
    clippy::items_after_statements,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::redundant_closure_for_method_calls,
    clippy::type_repetition_in_bounds,
    clippy::unused_self,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, DefaultStorage};

pub mod kary_tree;
pub use kary_tree::{KaryTree, NodeRef};

pub mod traversal;
pub use traversal::Cursor;

/// A binary tree, the default flavor of [`KaryTree`].
///
/// [`KaryTree`]: kary_tree/struct.KaryTree.html " "
pub type BinaryTree<T> = KaryTree<T, 2>;

/// A prelude for using the crate, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::kary_tree::{
        KaryTree,
        NodeRef as KaryTreeNodeRef,
    };
    #[doc(no_inline)]
    pub use crate::traversal::Cursor as TreeCursor;
    #[doc(no_inline)]
    pub use crate::{BinaryTree, InsertError as TreeInsertError, CursorError as TreeCursorError};
}

use thiserror::Error;

/// The error type returned by methods on trees which insert nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum InsertError {
    /// No node of the tree holds a value equal to the requested parent value. This includes the case of an empty tree.
    #[error("no node holds a value equal to the requested parent")]
    ParentNotFound,
    /// The parent node already has as many children as the arity of the tree allows.
    #[error("the parent node already has {arity} children, which is the maximum for the tree")]
    ArityExceeded {
        /// The arity of the tree, i.e. the maximum number of children of a node.
        arity: usize,
    },
    /// The storage of the tree has a fixed capacity and no room for another node.
    #[error("the storage of the tree has no room for another node")]
    StorageFull,
    /// The key of the parent node is not present in the tree.
    #[error("the specified key does not belong to a node of the tree")]
    InvalidKey,
}

/// The error type returned by cursors which were driven past the end of their sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum CursorError {
    /// The cursor has no pending nodes left, so there is neither a current value nor a next one.
    #[error("the cursor has no pending nodes left")]
    Exhausted,
}
