// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::{Index, IndexMut};
use core::slice::SliceIndex;

use shiftbuf_alloc::{Allocator, Global};

use crate::buffer::Buffer;
use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::policy::GrowthPolicy;
use crate::zeroable::Zeroable;

/// Resizable array with hysteresis growth and transactional structural
/// operations.
///
/// Structural operations (`left_shift`, `right_shift`, `multi_insert`,
/// `multi_erase`, `multi_push`, `multi_pop` and their single-element forms)
/// either succeed or leave the array exactly as it was.
///
/// # Example
///
/// ```rust
/// use shiftbuf_array::{ArrayError, DynArray};
///
/// fn example() -> Result<(), ArrayError> {
///     let mut array = DynArray::<u32>::new();
///     array.multi_push([4, 3, 1])?;
///     array.insert(0, 9)?;
///
///     assert_eq!(array.as_slice(), [9, 4, 3, 1]);
///     assert_eq!(array.pop()?, 1);
///     assert_eq!(array.find(&4)?, 1);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct DynArray<T, A = Global>
where
    T: Zeroable,
    A: Allocator,
{
    pub(crate) buf: Buffer<T, A>,
}

impl<T: Zeroable> DynArray<T, Global> {
    /// Creates an empty array.
    pub fn new() -> Self {
        Self::with_config(ArrayConfig::default())
    }

    /// Creates an empty array with `config`.
    pub fn with_config(config: ArrayConfig) -> Self {
        Self::new_in(Global, config)
    }

    /// Creates an array of `length` zeroed elements.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailed`] or [`ArrayError::CapacityOverflow`].
    pub fn create(length: usize) -> Result<Self, ArrayError> {
        Self::create_in(length, Global, ArrayConfig::default())
    }

    /// Creates an array holding clones of `items`.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailed`] or [`ArrayError::CapacityOverflow`].
    pub fn from_slice(items: &[T]) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let mut array = Self::new();
        array.multi_push_from_slice(items)?;
        Ok(array)
    }
}

impl<T: Zeroable> Default for DynArray<T, Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A> DynArray<T, A>
where
    T: Zeroable,
    A: Allocator,
{
    /// Creates an empty array backed by `alloc`.
    pub const fn new_in(alloc: A, config: ArrayConfig) -> Self {
        Self {
            buf: Buffer::new_in(alloc, config.policy),
        }
    }

    /// Creates an array of `length` zeroed elements backed by `alloc`.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailed`] or [`ArrayError::CapacityOverflow`].
    pub fn create_in(length: usize, alloc: A, config: ArrayConfig) -> Result<Self, ArrayError> {
        Ok(Self {
            buf: Buffer::create_in(length, alloc, config.policy)?,
        })
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the growth policy.
    #[inline]
    pub fn policy(&self) -> GrowthPolicy {
        self.buf.policy()
    }

    /// Returns the allocator.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Returns the underlying buffer.
    pub fn buffer(&self) -> &Buffer<T, A> {
        &self.buf
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Returns the element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the element at `index` mutably, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates mutably over the elements.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Sets the length, zero-filling new elements or dropping trailing ones.
    ///
    /// `resize(0)` keeps the allocation; use [`clear`](DynArray::clear) to
    /// release it.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailed`] or [`ArrayError::CapacityOverflow`].
    /// The array is unchanged on failure.
    pub fn resize(&mut self, new_length: usize) -> Result<(), ArrayError> {
        self.buf.resize(new_length)
    }

    /// Drops every element and releases the allocation.
    pub fn clear(&mut self) {
        self.buf.destroy();
    }

    /// Returns a copy backed by a clone of the allocator.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailed`] or [`ArrayError::CapacityOverflow`].
    pub fn try_clone(&self) -> Result<Self, ArrayError>
    where
        T: Clone,
        A: Clone,
    {
        let config = ArrayConfig::new().with_policy(self.policy());
        let mut copy = Self::new_in(self.allocator().clone(), config);
        copy.multi_push_from_slice(self.as_slice())?;
        Ok(copy)
    }
}

impl<T, A, I> Index<I> for DynArray<T, A>
where
    T: Zeroable,
    A: Allocator,
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, A, I> IndexMut<I> for DynArray<T, A>
where
    T: Zeroable,
    A: Allocator,
    I: SliceIndex<[T]>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, A> AsRef<[T]> for DynArray<T, A>
where
    T: Zeroable,
    A: Allocator,
{
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T, A> IntoIterator for &'a DynArray<T, A>
where
    T: Zeroable,
    A: Allocator,
{
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, A> PartialEq<[T]> for DynArray<T, A>
where
    T: Zeroable + PartialEq,
    A: Allocator,
{
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T, A, B> PartialEq<DynArray<T, B>> for DynArray<T, A>
where
    T: Zeroable + PartialEq,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &DynArray<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, A> core::fmt::Debug for DynArray<T, A>
where
    T: Zeroable + core::fmt::Debug,
    A: Allocator,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
