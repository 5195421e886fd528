//! Utilities for treating the backing storage for trees generically.
//!
//! This module is home for the following items:
//! - [`Storage`], the trait for the backing storages of trees
//! - [`DefaultStorage`], a type definition for the default backing storage used by trees unless a different one is specified; takes different values depending on feature flags
//!
//! Trees never remove nodes, so a key handed out by a storage identifies the same node for as long as the storage lives. Keys are indices rather than addresses, which means that a storage reallocating its buffer on growth does not invalidate them.
//!
//! [`Storage`]: trait.Storage.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "

#[cfg(feature = "alloc")]
mod alloc_impl;
mod arrayvec_impl;

#[cfg(test)]
mod tests;

use core::fmt::Debug;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;
#[cfg(not(feature = "alloc"))]
use arrayvec::ArrayVec;

/// Trait for various kinds of containers which can be the backing storage for trees.
///
/// # Safety
/// There's a number of invariants which have to be followed by the container:
/// - `new` and `with_capacity` ***must*** return empty storages, i.e. those which have `len() == 0` and `is_empty() == true`;
/// - it should be impossible for the length of the storage to overflow `usize`;
/// - Calling [`get_unchecked`] or [`get_unchecked_mut`] if `contains_key` on the same key returns `true` should *not* cause undefined behavior;
/// - A key returned by `add` must stay valid for the entire lifetime of the storage and must keep identifying the element it was returned for, no matter how many elements are added afterwards;
/// - If an element is added at a key, it must be retrieveable in the exact same state as it was inserted until it is modified using a method which explicitly does so.
///
/// Tree structures rely on those invariants for safety.
///
/// [`get_unchecked`]: #tymethod.get_unchecked " "
/// [`get_unchecked_mut`]: #tymethod.get_unchecked_mut " "
pub unsafe trait Storage: Sized {
    /// The type used for element naming.
    type Key: Clone + Debug + Eq;
    /// The type of the elements stored.
    type Element;

    /// Adds an element to the collection with an unspecified key, returning that key.
    ///
    /// # Panics
    /// Storages with a fixed capacity panic if they are full.
    fn add(&mut self, element: Self::Element) -> Self::Key;
    /// Returns the number of elements in the storage, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Creates an empty storage with the specified capacity.
    ///
    /// # Panics
    /// Storages with a fixed capacity should panic if the specified capacity does not match their actual one, and are recommended to override the `new` method to use the correct capacity.
    fn with_capacity(capacity: usize) -> Self;
    /// Returns a reference to the specified element in the storage, without checking for presence of the key inside the collection.
    ///
    /// # Safety
    /// If the element at the specified key is not present in the storage, a dangling reference will be created, causing *immediate undefined behavior*.
    unsafe fn get_unchecked(&self, key: &Self::Key) -> &Self::Element;
    /// Returns a *mutable* reference to the specified element in the storage, without checking for presence of the key inside the collection.
    ///
    /// # Safety
    /// If the element at the specified key is not present in the storage, a dangling reference will be created, causing *immediate undefined behavior*.
    unsafe fn get_unchecked_mut(&mut self, key: &Self::Key) -> &mut Self::Element;
    /// Returns `true` if the specified key is present in the storage, `false` otherwise.
    ///
    /// If this method returned `true`, calling `get_unchecked`/`get_unchecked_mut` on the same key is guaranteed to be safe.
    fn contains_key(&self, key: &Self::Key) -> bool;
    /// Reserves capacity for at least `additional` more elements to be inserted in the given storage. Does nothing if capacity is already sufficient.
    ///
    /// # Panics
    /// Storages with a fixed capacity panic if the request cannot be satisfied.
    fn reserve(&mut self, additional: usize);

    /// Returns a reference to the specified element in the collection, or `None` if the key is not present in the storage.
    #[inline]
    fn get(&self, key: &Self::Key) -> Option<&Self::Element> {
        if self.contains_key(key) {
            Some(unsafe {
                // SAFETY: we just checked for key presence
                self.get_unchecked(key)
            })
        } else {
            None
        }
    }
    /// Returns a *mutable* reference to the specified element in the collection, or `None` if the key is not present in the storage.
    #[inline]
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element> {
        if self.contains_key(key) {
            Some(unsafe {
                // SAFETY: we just checked for key presence
                self.get_unchecked_mut(key)
            })
        } else {
            None
        }
    }
    /// Creates a new empty storage. Dynamically-allocated storages created this way do not allocate memory.
    ///
    /// Storages with fixed capacity should override this method to use the correct capacity, as the default implementation calls `Self::with_capacity(0)`.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Returns `true` if the storage contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the amount of elements the storage can hold without requiring a memory allocation.
    ///
    /// For storages which have a fixed capacity, this should be equal to the length; the default implementation uses exactly that.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Shrinks the capacity of the storage as much as possible.
    ///
    /// The default implementation does nothing.
    #[inline(always)]
    fn shrink_to_fit(&mut self) {}
}

/// The default storage type used by the tree types when a storage type is not provided.
///
/// This is chosen according to the following strategy:
/// - If the `alloc` feature flag is enabled, [`Vec`] is used
/// - Otherwise, an [`ArrayVec`] with room for 32 elements is used
///
/// [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
/// [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
pub type DefaultStorage<T> = _DefaultStorage<T>;

#[cfg(feature = "alloc")]
type _DefaultStorage<T> = Vec<T>;

#[cfg(not(feature = "alloc"))]
type _DefaultStorage<T> = ArrayVec<[T; 32]>;
