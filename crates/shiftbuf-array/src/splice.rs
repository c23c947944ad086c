// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Splice plans.
//!
//! Every structural operation reduces to one splice: starting at `at`,
//! `remove` elements leave the live range and `insert` zeroed slots take
//! their place, with the tail moving to follow. The constructors below
//! validate caller arguments against the current length and return `None`
//! when the operation is a no-op.

use core::ops::Range;

use crate::error::ArrayError;

/// A validated structural change.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Splice {
    /// First affected index.
    pub at: usize,
    /// Number of elements leaving the live range at `at`.
    pub remove: usize,
    /// Number of zeroed slots opened at `at`.
    pub insert: usize,
}

impl Splice {
    /// Builds an unchecked plan.
    pub const fn new(at: usize, remove: usize, insert: usize) -> Self {
        Self { at, remove, insert }
    }

    /// Returns the opened range in post-splice indices.
    pub fn inserted(&self) -> Range<usize> {
        self.at..self.at + self.insert
    }

    /// Checks the plan against `length` and returns the resulting length.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidIndex`] if `at > length`
    /// - [`ArrayError::InvalidCount`] if the removed range runs past `length`
    /// - [`ArrayError::CapacityOverflow`] if the new length overflows
    pub fn new_length(&self, length: usize) -> Result<usize, ArrayError> {
        if self.at > length {
            return Err(ArrayError::InvalidIndex {
                index: self.at,
                length,
            });
        }

        if self.remove > length - self.at {
            return Err(ArrayError::InvalidCount {
                count: self.remove,
                length,
            });
        }

        (length - self.remove)
            .checked_add(self.insert)
            .ok_or(ArrayError::CapacityOverflow)
    }

    /// Plan that brings the length to `new_length`, adding or dropping at the
    /// tail.
    pub fn resize(length: usize, new_length: usize) -> Option<Self> {
        if new_length > length {
            Some(Self::new(length, 0, new_length - length))
        } else if new_length < length {
            Some(Self::new(new_length, length - new_length, 0))
        } else {
            None
        }
    }

    /// Plan moving `[index, length)` left by `amount`, destroying the
    /// `amount` elements before `index`.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidIndex`] if `index >= length`
    /// - [`ArrayError::InvalidShiftAmount`] if `amount > index`
    ///
    /// `amount == 0` is checked after the index.
    pub fn left_shift(
        length: usize,
        index: usize,
        amount: usize,
    ) -> Result<Option<Self>, ArrayError> {
        if index >= length {
            return Err(ArrayError::InvalidIndex { index, length });
        }

        if amount == 0 {
            return Ok(None);
        }

        if amount > index {
            return Err(ArrayError::InvalidShiftAmount { index, amount });
        }

        Ok(Some(Self::new(index - amount, amount, 0)))
    }

    /// Plan moving `[index, length)` right by `amount`, opening zeroed slots
    /// at `[index, index + amount)`.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidIndex`] if `index >= length`
    pub fn right_shift(
        length: usize,
        index: usize,
        amount: usize,
    ) -> Result<Option<Self>, ArrayError> {
        if index >= length {
            return Err(ArrayError::InvalidIndex { index, length });
        }

        if amount == 0 {
            return Ok(None);
        }

        Ok(Some(Self::new(index, 0, amount)))
    }

    /// Plan opening `count` slots at `index`. `index == length` appends.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidIndex`] if `index > length`
    pub fn insert(length: usize, index: usize, count: usize) -> Result<Option<Self>, ArrayError> {
        if index > length {
            return Err(ArrayError::InvalidIndex { index, length });
        }

        if count == 0 {
            return Ok(None);
        }

        Ok(Some(Self::new(index, 0, count)))
    }

    /// Plan removing `[index, index + count)`.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidIndex`] if `index >= length`
    /// - [`ArrayError::InvalidCount`] if `index + count > length`
    ///
    /// `count == 0` at a valid index is a no-op.
    pub fn erase(length: usize, index: usize, count: usize) -> Result<Option<Self>, ArrayError> {
        if index >= length {
            return Err(ArrayError::InvalidIndex { index, length });
        }

        if count == 0 {
            return Ok(None);
        }

        if count > length - index {
            return Err(ArrayError::InvalidCount { count, length });
        }

        Ok(Some(Self::new(index, count, 0)))
    }

    /// Plan appending `count` slots.
    pub fn push(length: usize, count: usize) -> Option<Self> {
        (count != 0).then(|| Self::new(length, 0, count))
    }

    /// Plan removing `count` elements from the tail.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidCount`] if `count > length`
    pub fn pop(length: usize, count: usize) -> Result<Option<Self>, ArrayError> {
        if count > length {
            return Err(ArrayError::InvalidCount { count, length });
        }

        if count == 0 {
            return Ok(None);
        }

        Ok(Some(Self::new(length - count, count, 0)))
    }
}
