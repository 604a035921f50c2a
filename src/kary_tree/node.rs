use arrayvec::ArrayVec;

/// A node of a K-ary tree.
///
/// Created by the tree internally and only publicly exposed so that tree storages' generic arguments could be specified.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T, const K: usize> {
    pub(super) value: T,
    pub(super) parent: Option<usize>,
    pub(crate) children: ArrayVec<usize, K>,
}
impl<T, const K: usize> Node<T, K> {
    #[inline(always)]
    pub(super) fn leaf(value: T, parent: Option<usize>) -> Self {
        Self {
            value,
            parent,
            children: ArrayVec::new(),
        }
    }
    #[inline(always)]
    pub(crate) fn value(&self) -> &T {
        &self.value
    }
}
