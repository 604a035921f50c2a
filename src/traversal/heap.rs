use core::marker::PhantomData;
use alloc::vec::Vec;
use log::trace;
use crate::{
    storage::{Storage, DefaultStorage},
    kary_tree::{KaryTree, Node},
    CursorError,
};
use super::{Cursor, PreOrder};

/// A cursor over all values of a tree arranged as a binary max-heap.
///
/// Created by [`KaryTree::begin_heap`]. The values are collected in pre-order when the cursor is created and rearranged into the array layout of a binary max-heap: the value at position `i` is never less than the values at positions `2i + 1` and `2i + 2`. Only the first value is guaranteed to be the maximum; the sequence as a whole is **not** sorted.
///
/// Values which cannot be compared (such as NaN) are treated as not greater than anything.
///
/// [`KaryTree::begin_heap`]: ../kary_tree/struct.KaryTree.html#method.begin_heap " "
#[derive(Debug)]
pub struct HeapOrder<'a, T, const K: usize = 2, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>>,
{
    heap: Vec<&'a T>,
    index: usize,
    _tree: PhantomData<&'a KaryTree<T, K, S>>,
}
impl<'a, T, const K: usize, S> HeapOrder<'a, T, K, S>
where
    T: PartialOrd,
    S: Storage<Element = Node<T, K>>,
{
    /// Creates a cursor over the values of the subtree rooted at the specified key. If the key is `None` or not present in the tree, the cursor is created exhausted.
    pub fn new(tree: &'a KaryTree<T, K, S>, root: Option<usize>) -> Self {
        let mut heap: Vec<&'a T> = PreOrder::new(tree, root).collect();
        build_max_heap(&mut heap);
        trace!("heap-order cursor collected {} values", heap.len());
        Self {
            heap,
            index: 0,
            _tree: PhantomData,
        }
    }
}
impl<'a, T, const K: usize, S> Cursor<'a> for HeapOrder<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    type Value = T;

    #[inline(always)]
    fn is_exhausted(&self) -> bool {
        self.index >= self.heap.len()
    }
    #[inline]
    fn current(&self) -> Result<&'a T, CursorError> {
        self.heap.get(self.index).copied().ok_or(CursorError::Exhausted)
    }
    #[inline]
    fn advance(&mut self) -> Result<(), CursorError> {
        if self.is_exhausted() {
            return Err(CursorError::Exhausted);
        }
        self.index += 1;
        Ok(())
    }
    #[inline]
    fn remaining_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.heap.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}
impl<T, const K: usize, S> Clone for HeapOrder<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>>,
{
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
            index: self.index,
            _tree: PhantomData,
        }
    }
}
impl_cursor_glue!(HeapOrder);
impl<T, const K: usize, S> ExactSizeIterator for HeapOrder<'_, T, K, S> where
    S: Storage<Element = Node<T, K>>
{
}

/// Rearranges the slice into a binary max-heap, sifting down every parent from the last one to the root.
fn build_max_heap<T: PartialOrd>(heap: &mut [&T]) {
    for parent in (0..heap.len() / 2).rev() {
        sift_down(heap, parent);
    }
}
fn sift_down<T: PartialOrd>(heap: &mut [&T], mut parent: usize) {
    loop {
        let left = 2 * parent + 1;
        let right = left + 1;
        let mut largest = parent;
        if left < heap.len() && heap[left] > heap[largest] {
            largest = left;
        }
        if right < heap.len() && heap[right] > heap[largest] {
            largest = right;
        }
        if largest == parent {
            break;
        }
        heap.swap(parent, largest);
        parent = largest;
    }
}

#[cfg(test)]
mod tests {
    use alloc::{vec, vec::Vec};
    use super::build_max_heap;

    fn is_max_heap(heap: &[&i32]) -> bool {
        (1..heap.len()).all(|child| heap[(child - 1) / 2] >= heap[child])
    }

    #[test]
    fn heapifies_ascending_input() {
        let values: Vec<i32> = (0..20).collect();
        let mut heap: Vec<&i32> = values.iter().collect();
        build_max_heap(&mut heap);
        assert_eq!(*heap[0], 19);
        assert!(is_max_heap(&heap));
    }

    #[test]
    fn heapifies_with_duplicates() {
        let values = [3, 7, 7, 1, 3, 9, 9, 0];
        let mut heap: Vec<&i32> = values.iter().collect();
        build_max_heap(&mut heap);
        assert_eq!(*heap[0], 9);
        assert!(is_max_heap(&heap));
    }

    #[test]
    fn empty_and_single() {
        let mut empty: Vec<&i32> = Vec::new();
        build_max_heap(&mut empty);
        assert!(empty.is_empty());

        let one = 5;
        let mut single = vec![&one];
        build_max_heap(&mut single);
        assert_eq!(single, [&5]);
    }
}
