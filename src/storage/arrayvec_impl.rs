use arrayvec::{ArrayVec, CapacityError};
use super::Storage;

unsafe impl<T, const CAP: usize> Storage for ArrayVec<T, CAP> {
    type Element = T;

    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        assert_eq!(
            capacity,
            CAP,
            "an ArrayVec arena always has room for exactly {} nodes",
            CAP,
        );
        Self::new()
    }
    #[inline(always)]
    fn try_push(&mut self, element: T) -> Result<(), T> {
        self.try_push(element).map_err(CapacityError::element)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn clear(&mut self) {
        self.clear()
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.as_slice().get_unchecked(index)
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        self.as_mut_slice().get_unchecked_mut(index)
    }

    #[inline(always)]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }
    #[inline(always)]
    fn new() -> Self {
        Self::new()
    }
}
