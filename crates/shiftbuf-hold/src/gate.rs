// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Reader/writer gate around the storage pointer.
//!
//! Element accessors enter shared while they touch slot memory. A structural
//! operation closes the gate for its commit window and waits for accessors to
//! leave. There is only ever one closer at a time (the mutator lock holder).

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::acquire::{AcquirePolicy, Backoff};
use crate::error::LockError;

const WRITER: usize = 1 << (usize::BITS - 1);

pub(crate) struct AccessGate {
    state: AtomicUsize,
}

impl AccessGate {
    pub(crate) const fn new() -> Self {
        Self {
            state: AtomicUsize::new(0),
        }
    }

    /// Enters shared. Fails while the gate is closed.
    #[inline]
    pub(crate) fn try_enter(&self) -> bool {
        let mut state = self.state.load(Ordering::Relaxed);
        loop {
            if state & WRITER != 0 {
                return false;
            }

            match self.state.compare_exchange_weak(
                state,
                state + 1,
                Ordering::Acquire,
                Ordering::Relaxed,
            ) {
                Ok(_) => return true,
                Err(actual) => state = actual,
            }
        }
    }

    #[inline]
    pub(crate) fn leave(&self) {
        self.state.fetch_sub(1, Ordering::Release);
    }

    /// Closes the gate to new accessors.
    #[inline]
    pub(crate) fn close(&self) {
        let previous = self.state.fetch_or(WRITER, Ordering::Acquire);
        debug_assert_eq!(previous & WRITER, 0, "gate closed twice");
    }

    /// Returns `true` once no accessor is inside.
    #[inline]
    pub(crate) fn drained(&self) -> bool {
        self.state.load(Ordering::Acquire) & !WRITER == 0
    }

    #[inline]
    pub(crate) fn open(&self) {
        self.state.fetch_and(!WRITER, Ordering::Release);
    }
}

/// Keeps the gate closed for the duration of a commit.
///
/// Opens the gate again on drop, including when waiting for accessors fails.
pub(crate) struct CommitWindow<'a> {
    gate: &'a AccessGate,
}

impl<'a> CommitWindow<'a> {
    /// Closes `gate` and waits until every accessor has left.
    pub(crate) fn enter(gate: &'a AccessGate, policy: AcquirePolicy) -> Result<Self, LockError> {
        gate.close();
        let window = Self { gate };

        let mut backoff = Backoff::new(policy);
        while !gate.drained() {
            backoff.spin()?;
        }

        Ok(window)
    }
}

impl Drop for CommitWindow<'_> {
    fn drop(&mut self) {
        self.gate.open();
    }
}
