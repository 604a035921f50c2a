use core::hint;
use alloc::{vec::Vec, collections::VecDeque};
use super::Storage;

unsafe impl<T> Storage for Vec<T> {
    type Element = T;

    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
    #[inline(always)]
    fn try_push(&mut self, element: T) -> Result<(), T> {
        self.push(element);
        Ok(())
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

unsafe impl<T> Storage for VecDeque<T> {
    type Element = T;

    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
    #[inline(always)]
    fn try_push(&mut self, element: T) -> Result<(), T> {
        self.push_back(element);
        Ok(())
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn clear(&mut self) {
        self.clear()
    }
    // The ring buffer has no unchecked accessor, so the checked one is told its
    // failure branch is unreachable.
    #[inline(always)]
    unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.get(index)
            .unwrap_or_else(|| hint::unreachable_unchecked())
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index)
            .unwrap_or_else(|| hint::unreachable_unchecked())
    }

    #[inline(always)]
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }
    #[inline(always)]
    fn new() -> Self {
        Self::new()
    }
}
