// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for shiftbuf-array.

use shiftbuf_alloc::AllocError;
use thiserror::Error;

/// Errors returned by [`Buffer`](crate::Buffer) and
/// [`DynArray`](crate::DynArray) operations.
///
/// Every operation that returns one of these left the container unchanged.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ArrayError {
    /// The allocator could not provide the requested block.
    #[error("failed to allocate {bytes} bytes")]
    AllocationFailed {
        /// Size of the block that was requested.
        bytes: usize,
    },

    /// The requested length or capacity does not fit in `usize` bytes.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// Index outside of the valid range for the operation.
    #[error("index {index} out of bounds for length {length}")]
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// Length at the time of the call.
        length: usize,
    },

    /// Left shift by more positions than precede the index.
    #[error("cannot shift index {index} left by {amount}")]
    InvalidShiftAmount {
        /// Start of the shifted range.
        index: usize,
        /// Requested shift amount.
        amount: usize,
    },

    /// Element count exceeds what the container holds.
    #[error("count {count} exceeds length {length}")]
    InvalidCount {
        /// Requested count.
        count: usize,
        /// Length at the time of the call.
        length: usize,
    },

    /// No element matched.
    #[error("element not found")]
    NotFound,
}

impl ArrayError {
    /// Returns the fieldless kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AllocationFailed { .. } => ErrorKind::AllocationFailed,
            Self::CapacityOverflow => ErrorKind::CapacityOverflow,
            Self::InvalidIndex { .. } => ErrorKind::InvalidIndex,
            Self::InvalidShiftAmount { .. } => ErrorKind::InvalidShiftAmount,
            Self::InvalidCount { .. } => ErrorKind::InvalidCount,
            Self::NotFound => ErrorKind::NotFound,
        }
    }
}

impl From<AllocError> for ArrayError {
    fn from(err: AllocError) -> Self {
        Self::AllocationFailed { bytes: err.bytes }
    }
}

/// Fieldless classification of shiftbuf errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// See [`ArrayError::AllocationFailed`].
    AllocationFailed,
    /// See [`ArrayError::CapacityOverflow`].
    CapacityOverflow,
    /// See [`ArrayError::InvalidIndex`].
    InvalidIndex,
    /// See [`ArrayError::InvalidShiftAmount`].
    InvalidShiftAmount,
    /// See [`ArrayError::InvalidCount`].
    InvalidCount,
    /// See [`ArrayError::NotFound`].
    NotFound,
    /// An element or commit-window lock could not be acquired.
    LockFailure,
}

impl ErrorKind {
    /// All kinds, in declaration order.
    pub const ALL: [ErrorKind; 7] = [
        ErrorKind::AllocationFailed,
        ErrorKind::CapacityOverflow,
        ErrorKind::InvalidIndex,
        ErrorKind::InvalidShiftAmount,
        ErrorKind::InvalidCount,
        ErrorKind::NotFound,
        ErrorKind::LockFailure,
    ];

    /// Returns a stable, human-readable name for the kind.
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::AllocationFailed => "FAILED_TO_ALLOCATE",
            ErrorKind::CapacityOverflow => "CAPACITY_OVERFLOW",
            ErrorKind::InvalidIndex => "INVALID_INDEX",
            ErrorKind::InvalidShiftAmount => "INVALID_SHIFT_AMOUNT",
            ErrorKind::InvalidCount => "INVALID_COUNT",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::LockFailure => "LOCK_FAILURE",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
