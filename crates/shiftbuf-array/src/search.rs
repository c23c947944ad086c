// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use shiftbuf_alloc::Allocator;

use crate::dyn_array::DynArray;
use crate::error::ArrayError;
use crate::zeroable::Zeroable;

impl<T, A> DynArray<T, A>
where
    T: Zeroable,
    A: Allocator,
{
    /// Returns the index of the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// [`ArrayError::NotFound`] if no element matches.
    pub fn find(&self, value: &T) -> Result<usize, ArrayError>
    where
        T: PartialEq,
    {
        self.find_by(|element| element == value)
    }

    /// Returns the index of the first element matching `predicate`.
    ///
    /// # Errors
    ///
    /// [`ArrayError::NotFound`] if no element matches.
    pub fn find_by<F>(&self, mut predicate: F) -> Result<usize, ArrayError>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .position(|element| predicate(element))
            .ok_or(ArrayError::NotFound)
    }

    /// Returns `true` if an element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value).is_ok()
    }

    /// Returns the index of `value`, pushing it first if it is absent.
    ///
    /// The array is not touched when `value` is already present.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailed`] or [`ArrayError::CapacityOverflow`]
    /// from the push.
    pub fn find_or_push(&mut self, value: T) -> Result<usize, ArrayError>
    where
        T: PartialEq,
    {
        match self.find(&value) {
            Ok(index) => Ok(index),
            Err(_) => {
                self.push(value)?;
                Ok(self.len() - 1)
            }
        }
    }
}
