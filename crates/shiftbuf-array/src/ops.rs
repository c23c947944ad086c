// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::Range;

use shiftbuf_alloc::Allocator;

use crate::dyn_array::DynArray;
use crate::error::ArrayError;
use crate::splice::Splice;
use crate::zeroable::Zeroable;

impl<T, A> DynArray<T, A>
where
    T: Zeroable,
    A: Allocator,
{
    /// Inserts `items` so that the first one lands at `index`.
    ///
    /// `index == len` appends. The count is taken from the iterator length;
    /// slots the iterator fails to fill stay zeroed.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidIndex`] if `index > len`
    /// - [`ArrayError::AllocationFailed`] if growing the block fails
    pub fn multi_insert<I>(&mut self, index: usize, items: I) -> Result<(), ArrayError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let Some(plan) = Splice::insert(self.len(), index, items.len())? else {
            return Ok(());
        };

        self.buf.splice(plan, &mut |_| {})?;
        self.fill(plan.inserted(), items);

        Ok(())
    }

    /// Inserts clones of `items` at `index`.
    ///
    /// # Errors
    ///
    /// See [`multi_insert`](DynArray::multi_insert).
    pub fn multi_insert_from_slice(&mut self, index: usize, items: &[T]) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        self.multi_insert(index, items.iter().cloned())
    }

    /// Inserts `value` at `index`.
    ///
    /// # Errors
    ///
    /// See [`multi_insert`](DynArray::multi_insert).
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        self.multi_insert(index, core::iter::once(value))
    }

    /// Removes `[index, index + count)`.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidIndex`] if `index >= len`
    /// - [`ArrayError::InvalidCount`] if `index + count > len`
    /// - [`ArrayError::AllocationFailed`] if shrinking the block fails
    pub fn multi_erase(&mut self, index: usize, count: usize) -> Result<(), ArrayError> {
        match Splice::erase(self.len(), index, count)? {
            Some(plan) => self.buf.splice(plan, &mut |_| {}),
            None => Ok(()),
        }
    }

    /// Removes the element at `index`.
    ///
    /// # Errors
    ///
    /// See [`multi_erase`](DynArray::multi_erase).
    pub fn erase(&mut self, index: usize) -> Result<(), ArrayError> {
        self.multi_erase(index, 1)
    }

    /// Appends `items`.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailed`] or [`ArrayError::CapacityOverflow`].
    pub fn multi_push<I>(&mut self, items: I) -> Result<(), ArrayError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let Some(plan) = Splice::push(self.len(), items.len()) else {
            return Ok(());
        };

        self.buf.splice(plan, &mut |_| {})?;
        self.fill(plan.inserted(), items);

        Ok(())
    }

    /// Appends clones of `items`.
    ///
    /// # Errors
    ///
    /// See [`multi_push`](DynArray::multi_push).
    pub fn multi_push_from_slice(&mut self, items: &[T]) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        self.multi_push(items.iter().cloned())
    }

    /// Appends `value`.
    ///
    /// # Errors
    ///
    /// See [`multi_push`](DynArray::multi_push).
    pub fn push(&mut self, value: T) -> Result<(), ArrayError> {
        self.multi_push(core::iter::once(value))
    }

    /// Drops the last `count` elements.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidCount`] if `count > len`
    /// - [`ArrayError::AllocationFailed`] if shrinking the block fails
    pub fn multi_pop(&mut self, count: usize) -> Result<(), ArrayError> {
        match Splice::pop(self.len(), count)? {
            Some(plan) => self.buf.splice(plan, &mut |_| {}),
            None => Ok(()),
        }
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidCount`] if the array is empty
    /// - [`ArrayError::AllocationFailed`] if shrinking the block fails, in
    ///   which case the element stays in place
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        let plan = Splice::pop(self.len(), 1)?.ok_or(ArrayError::InvalidCount {
            count: 1,
            length: 0,
        })?;

        let mut popped = None;
        self.buf.splice(plan, &mut |removed: &mut [T]| {
            popped = Some(core::mem::replace(&mut removed[0], T::zeroed()));
        })?;

        Ok(popped.expect("infallible: retire runs once on success"))
    }

    fn fill(&mut self, range: Range<usize>, items: impl Iterator<Item = T>) {
        for (slot, item) in self.buf.as_mut_slice()[range].iter_mut().zip(items) {
            *slot = item;
        }
    }
}
