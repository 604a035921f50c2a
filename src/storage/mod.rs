//! Arena storage for tree nodes.
//!
//! Trees never delete individual nodes, so the arena they need is append-only: a node is pushed once and then addressed by the index it landed at until the whole tree is reset. [`Storage`] captures exactly that, and [`DefaultStorage`] names the arena used when none is specified.
//!
//! `Storage` is implemented for [`Vec`], [`VecDeque`] and [`ArrayVec`]. The first two grow as needed; an `ArrayVec` never allocates and hands the rejected node back through [`try_push`] once its array is full.
//!
//! [`Storage`]: trait.Storage.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "
//! [`try_push`]: trait.Storage.html#tymethod.try_push " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`VecDeque`]: https://doc.rust-lang.org/std/collections/struct.VecDeque.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "

use alloc::vec::Vec;

mod alloc_impl;
mod arrayvec_impl;

/// An append-only arena which owns the nodes of a tree.
///
/// The position of an element is its key. Keys handed out by [`try_add`] stay valid until the arena is [`clear`]ed.
///
/// # Safety
/// Trees dereference keys without bounds checks, trusting the following from implementors:
/// - `new` and `with_capacity` return arenas with `len() == 0`;
/// - a successful `try_push` grows the length by exactly one and places the element at index `len() - 1`, while a failed one leaves the arena untouched;
/// - the length only changes through `try_push` and `clear`;
/// - [`get_unchecked`] and [`get_unchecked_mut`] are sound for every index below `len()`, and return the element stored there, unchanged except through `get_unchecked_mut`.
///
/// [`try_add`]: #method.try_add " "
/// [`clear`]: #tymethod.clear " "
/// [`get_unchecked`]: #tymethod.get_unchecked " "
/// [`get_unchecked_mut`]: #tymethod.get_unchecked_mut " "
pub unsafe trait Storage: Sized {
    /// The type of the stored elements, the nodes of a tree.
    type Element;

    /// Creates an empty arena with room for `capacity` elements.
    ///
    /// # Panics
    /// Arenas with a fixed capacity panic if `capacity` differs from it.
    fn with_capacity(capacity: usize) -> Self;
    /// Appends an element to the end of the arena.
    ///
    /// # Errors
    /// The element is handed back if the arena has a fixed capacity and is full. Growable arenas never fail.
    fn try_push(&mut self, element: Self::Element) -> Result<(), Self::Element>;
    /// Returns the number of elements in the arena.
    fn len(&self) -> usize;
    /// Drops every element, invalidating all keys.
    fn clear(&mut self);
    /// Returns the element at `index` without a bounds check.
    ///
    /// # Safety
    /// `index` must be below `len()`.
    unsafe fn get_unchecked(&self, index: usize) -> &Self::Element;
    /// Returns the element at `index` mutably, without a bounds check.
    ///
    /// # Safety
    /// `index` must be below `len()`.
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut Self::Element;

    /// Appends an element and returns its key.
    ///
    /// # Errors
    /// Same as [`try_push`].
    ///
    /// [`try_push`]: #tymethod.try_push " "
    #[inline]
    fn try_add(&mut self, element: Self::Element) -> Result<usize, Self::Element> {
        let key = self.len();
        self.try_push(element)?;
        Ok(key)
    }
    /// Returns `true` if an element is stored at `index`. A `true` result makes `get_unchecked` and `get_unchecked_mut` sound for that index.
    #[inline(always)]
    fn contains_key(&self, index: usize) -> bool {
        index < self.len()
    }
    /// Returns the element at `index`, or `None` if there is none.
    #[inline]
    fn get(&self, index: usize) -> Option<&Self::Element> {
        if self.contains_key(index) {
            Some(unsafe {
                // SAFETY: bounds checked right above
                self.get_unchecked(index)
            })
        } else {
            None
        }
    }
    /// Returns the element at `index` mutably, or `None` if there is none.
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Element> {
        if self.contains_key(index) {
            Some(unsafe {
                // SAFETY: bounds checked right above
                self.get_unchecked_mut(index)
            })
        } else {
            None
        }
    }
    /// Returns `true` if the arena holds no elements.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Creates an empty arena. The default implementation calls `with_capacity(0)`, which fixed-capacity arenas have to override.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
}

/// The arena used by trees unless another one is specified.
///
/// Since nodes are never removed, there are no holes to track and a plain [`Vec`] is all that's needed.
///
/// [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
pub type DefaultStorage<T> = Vec<T>;
