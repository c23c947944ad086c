// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Structural operations.
//!
//! Every operation reduces to one [`Splice`] committed under the protocol
//! described at the crate root. Values written by insert and push are staged
//! before any lock is taken.

use alloc::vec::Vec;
use core::mem;

use shiftbuf_alloc::Allocator;
use shiftbuf_array::{ArrayError, DynArray, Splice, Zeroable};

use crate::error::HoldError;
use crate::guard::{HoldSet, MutatorGuard};
use crate::hold_array::HoldArray;
use crate::lifecycle::Lifecycle;
use crate::lock::RawLock;

type Plan = Result<Option<Splice>, ArrayError>;

impl<T, H, L, A> HoldArray<T, H, L, A>
where
    T: Zeroable,
    H: Lifecycle<T>,
    L: RawLock,
    A: Allocator,
{
    /// Resizes to `new_length`.
    ///
    /// Growth fires `on_create` on the new zeroed elements; shrinking fires
    /// `on_destroy` on the dropped tail.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailed`], [`ArrayError::CapacityOverflow`] or a
    /// [`LockError`](crate::LockError). The array is unchanged on failure.
    pub fn resize(&self, new_length: usize) -> Result<(), HoldError> {
        self.structural(|length| Ok(Splice::resize(length, new_length)), &mut [])
    }

    /// Moves `[index, len)` left by `amount`, destroying the `amount`
    /// elements before `index`.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidIndex`] if `index >= len`
    /// - [`ArrayError::InvalidShiftAmount`] if `amount > index`
    /// - allocation or lock failures as for [`resize`](HoldArray::resize)
    pub fn left_shift(&self, index: usize, amount: usize) -> Result<(), HoldError> {
        self.structural(|length| Splice::left_shift(length, index, amount), &mut [])
    }

    /// Moves `[index, len)` right by `amount`, opening `amount` new zeroed
    /// elements at `index`.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidIndex`] if `index >= len`
    /// - allocation or lock failures as for [`resize`](HoldArray::resize)
    pub fn right_shift(&self, index: usize, amount: usize) -> Result<(), HoldError> {
        self.structural(|length| Splice::right_shift(length, index, amount), &mut [])
    }

    /// Inserts `items` so that the first one lands at `index`.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidIndex`] if `index > len`
    /// - allocation or lock failures as for [`resize`](HoldArray::resize)
    pub fn multi_insert<I>(&self, index: usize, items: I) -> Result<(), HoldError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut staged = stage(items)?;
        let count = staged.len();
        self.structural(
            |length| Splice::insert(length, index, count),
            staged.as_mut_slice(),
        )
    }

    /// Inserts `value` at `index`.
    ///
    /// # Errors
    ///
    /// See [`multi_insert`](HoldArray::multi_insert).
    pub fn insert(&self, index: usize, value: T) -> Result<(), HoldError> {
        self.multi_insert(index, core::iter::once(value))
    }

    /// Removes `[index, index + count)`.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidIndex`] if `index >= len`
    /// - [`ArrayError::InvalidCount`] if `index + count > len`
    /// - allocation or lock failures as for [`resize`](HoldArray::resize)
    pub fn multi_erase(&self, index: usize, count: usize) -> Result<(), HoldError> {
        self.structural(|length| Splice::erase(length, index, count), &mut [])
    }

    /// Removes the element at `index`.
    ///
    /// # Errors
    ///
    /// See [`multi_erase`](HoldArray::multi_erase).
    pub fn erase(&self, index: usize) -> Result<(), HoldError> {
        self.multi_erase(index, 1)
    }

    /// Appends `items`.
    ///
    /// # Errors
    ///
    /// Allocation or lock failures as for [`resize`](HoldArray::resize).
    pub fn multi_push<I>(&self, items: I) -> Result<(), HoldError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut staged = stage(items)?;
        let count = staged.len();
        self.structural(|length| Ok(Splice::push(length, count)), staged.as_mut_slice())
    }

    /// Appends `value`.
    ///
    /// # Errors
    ///
    /// See [`multi_push`](HoldArray::multi_push).
    pub fn push(&self, value: T) -> Result<(), HoldError> {
        self.multi_push(core::iter::once(value))
    }

    /// Removes the last `count` elements.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidCount`] if `count > len`
    /// - allocation or lock failures as for [`resize`](HoldArray::resize)
    pub fn multi_pop(&self, count: usize) -> Result<(), HoldError> {
        self.structural(|length| Splice::pop(length, count), &mut [])
    }

    /// Removes the last element.
    ///
    /// `on_destroy` sees the value before it is dropped; use
    /// [`get`](HoldArray::get) first to keep a copy.
    ///
    /// # Errors
    ///
    /// See [`multi_pop`](HoldArray::multi_pop).
    pub fn pop(&self) -> Result<(), HoldError> {
        self.multi_pop(1)
    }

    /// Destroys every element and frees the storage.
    ///
    /// # Errors
    ///
    /// A [`LockError`](crate::LockError) if the elements cannot be held.
    pub fn clear(&self) -> Result<(), HoldError> {
        let _mutator = MutatorGuard::acquire(&self.mutator, self.acquire)?;
        let mut holds = HoldSet::acquire(self)?;
        holds.close_gate()?;

        let hooks = &self.hooks;
        // SAFETY (PRECONDITIONS ARE MET): mutator held, gate closed and
        // drained, every element held by `holds`.
        let storage = unsafe { self.storage_mut() };
        storage.destroy_with(&mut |slots| {
            for slot in slots {
                hooks.on_destroy(slot.value.get_mut());
            }
        });
        self.publish(0, 0);

        Ok(())
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// Each element is held while it is compared.
    ///
    /// # Errors
    ///
    /// [`ArrayError::NotFound`] or a [`LockError`](crate::LockError).
    pub fn find(&self, value: &T) -> Result<usize, HoldError>
    where
        T: PartialEq,
    {
        self.find_by(|candidate| candidate == value)
    }

    /// Returns the index of the first element matching `predicate`.
    ///
    /// # Errors
    ///
    /// See [`find`](HoldArray::find).
    pub fn find_by<F>(&self, mut predicate: F) -> Result<usize, HoldError>
    where
        F: FnMut(&T) -> bool,
    {
        let mut index = 0;
        loop {
            match self.with(index, &mut predicate) {
                Ok(true) => return Ok(index),
                Ok(false) => index += 1,
                Err(HoldError::Array(ArrayError::InvalidIndex { .. })) => {
                    return Err(ArrayError::NotFound.into());
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Returns `true` if some element equals `value`.
    ///
    /// # Errors
    ///
    /// A [`LockError`](crate::LockError).
    pub fn contains(&self, value: &T) -> Result<bool, HoldError>
    where
        T: PartialEq,
    {
        match self.find(value) {
            Ok(_) => Ok(true),
            Err(HoldError::Array(ArrayError::NotFound)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Returns the index of `value`, appending it first if absent.
    ///
    /// The search and the push run under the mutator lock, so two threads
    /// pushing the same value end up with one copy.
    ///
    /// # Errors
    ///
    /// Allocation or lock failures. A failed push leaves the array unchanged.
    pub fn find_or_push(&self, value: T) -> Result<usize, HoldError>
    where
        T: PartialEq,
    {
        let mutator = MutatorGuard::acquire(&self.mutator, self.acquire)?;

        match self.find(&value) {
            Ok(index) => return Ok(index),
            Err(HoldError::Array(ArrayError::NotFound)) => {}
            Err(err) => return Err(err),
        }

        let mut staged = stage(core::iter::once(value))?;
        let index = self.len();
        self.commit(&mutator, |length| Ok(Splice::push(length, 1)), staged.as_mut_slice())?;

        Ok(index)
    }

    /// Returns clones of every element, holding each while it is copied.
    ///
    /// Runs under the mutator lock, so the result is a consistent view.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailed`] or a [`LockError`](crate::LockError).
    pub fn snapshot(&self) -> Result<Vec<T>, HoldError>
    where
        T: Clone,
    {
        let _mutator = MutatorGuard::acquire(&self.mutator, self.acquire)?;

        let length = self.len();
        let mut values = Vec::new();
        values
            .try_reserve_exact(length)
            .map_err(|_| ArrayError::AllocationFailed {
                bytes: length.saturating_mul(mem::size_of::<T>()),
            })?;

        for index in 0..length {
            values.push(self.get(index)?);
        }

        Ok(values)
    }

    fn structural(
        &self,
        plan: impl FnOnce(usize) -> Plan,
        staged: &mut [T],
    ) -> Result<(), HoldError> {
        let mutator = MutatorGuard::acquire(&self.mutator, self.acquire)?;
        self.commit(&mutator, plan, staged)
    }

    /// Runs one splice with every element held and the gate closed.
    ///
    /// `staged` values are moved into the inserted range, in order, before
    /// `on_create` fires on it.
    fn commit(
        &self,
        _mutator: &MutatorGuard<'_, L>,
        plan: impl FnOnce(usize) -> Plan,
        staged: &mut [T],
    ) -> Result<(), HoldError> {
        // SAFETY (PRECONDITIONS ARE MET): mutator held.
        let length = unsafe { self.storage() }.len();
        let Some(plan) = plan(length)? else {
            return Ok(());
        };

        let mut holds = HoldSet::acquire(self)?;
        holds.close_gate()?;

        let hooks = &self.hooks;
        // SAFETY (PRECONDITIONS ARE MET): mutator held, gate closed and
        // drained, every element held by `holds`.
        let storage = unsafe { self.storage_mut() };

        storage.splice(plan, &mut |removed| {
            for slot in removed {
                hooks.on_destroy(slot.value.get_mut());
            }
        })?;

        let inserted = &mut storage.as_mut_slice()[plan.inserted()];
        for (slot, value) in inserted.iter_mut().zip(staged.iter_mut()) {
            *slot.value.get_mut() = mem::replace(value, T::zeroed());
        }
        for slot in inserted {
            hooks.on_create(slot.value.get_mut());
        }

        self.publish(storage.len(), storage.capacity());

        // Survivors are released here, then the gate opens.
        drop(holds);
        Ok(())
    }
}

fn stage<T, I>(items: I) -> Result<DynArray<T>, ArrayError>
where
    T: Zeroable,
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
{
    let mut staged = DynArray::new();
    staged.multi_push(items)?;
    Ok(staged)
}
