// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for shiftbuf-hold.

use shiftbuf_array::{ArrayError, ErrorKind};
use thiserror::Error;

/// A lock could not be acquired under the configured
/// [`AcquirePolicy`](crate::AcquirePolicy).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum LockError {
    /// Gave up after a bounded number of attempts.
    #[error("lock still contended after {attempts} attempts")]
    Contended {
        /// Failed attempts made.
        attempts: u32,
    },

    /// Gave up after the deadline passed.
    #[error("lock acquisition timed out")]
    TimedOut,
}

/// Errors returned by [`HoldArray`](crate::HoldArray) operations.
///
/// The array is unchanged whenever one of these is returned.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum HoldError {
    /// Argument or allocation failure.
    #[error(transparent)]
    Array(#[from] ArrayError),

    /// Lock acquisition failure.
    #[error(transparent)]
    Lock(#[from] LockError),
}

impl HoldError {
    /// Returns the fieldless kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Array(err) => err.kind(),
            Self::Lock(_) => ErrorKind::LockFailure,
        }
    }
}
