// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

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
    /// Moves `[index, len)` left by `amount`, dropping the `amount` elements
    /// that were in front of `index`.
    ///
    /// ```rust
    /// use shiftbuf_array::DynArray;
    ///
    /// let mut array = DynArray::<u8>::from_slice(&[1, 2, 3, 4, 5]).unwrap();
    /// array.left_shift(3, 2).unwrap();
    ///
    /// assert_eq!(array.as_slice(), [1, 4, 5]);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidIndex`] if `index >= len`
    /// - [`ArrayError::InvalidShiftAmount`] if `amount > index`
    /// - [`ArrayError::AllocationFailed`] if shrinking the block fails
    ///
    /// `amount == 0` is a no-op once `index` is valid.
    pub fn left_shift(&mut self, index: usize, amount: usize) -> Result<(), ArrayError> {
        match Splice::left_shift(self.len(), index, amount)? {
            Some(plan) => self.buf.splice(plan, &mut |_| {}),
            None => Ok(()),
        }
    }

    /// Moves `[index, len)` right by `amount` and zero-fills
    /// `[index, index + amount)`.
    ///
    /// ```rust
    /// use shiftbuf_array::DynArray;
    ///
    /// let mut array = DynArray::<u8>::from_slice(&[1, 2, 3]).unwrap();
    /// array.right_shift(1, 2).unwrap();
    ///
    /// assert_eq!(array.as_slice(), [1, 0, 0, 2, 3]);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidIndex`] if `index >= len`
    /// - [`ArrayError::AllocationFailed`] if growing the block fails
    pub fn right_shift(&mut self, index: usize, amount: usize) -> Result<(), ArrayError> {
        match Splice::right_shift(self.len(), index, amount)? {
            Some(plan) => self.buf.splice(plan, &mut |_| {}),
            None => Ok(()),
        }
    }
}
