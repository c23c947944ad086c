// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Values that count their own construction and destruction.
//!
//! Counters are process-wide: tests that assert on them must run serially
//! (`#[serial]`) and call [`Tracked::reset`] first.

use std::sync::atomic::{AtomicUsize, Ordering};

static CREATED: AtomicUsize = AtomicUsize::new(0);
static DROPPED: AtomicUsize = AtomicUsize::new(0);

/// Snapshot of the [`Tracked`] counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedStats {
    /// Non-empty values constructed (including clones).
    pub created: usize,
    /// Non-empty values dropped.
    pub dropped: usize,
}

impl TrackedStats {
    /// Values constructed and not yet dropped.
    pub fn live(&self) -> isize {
        self.created as isize - self.dropped as isize
    }
}

/// An identifier whose non-zero instances are counted.
///
/// The all-zero value (`id == 0`) is the "empty" state that fills unused
/// slots; it is neither counted on creation nor on drop.
#[derive(Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct Tracked(u32);

impl Tracked {
    /// Creates a counted value.
    ///
    /// # Panics
    ///
    /// Panics if `id == 0`.
    pub fn new(id: u32) -> Self {
        assert_ne!(id, 0, "Tracked id 0 is reserved for empty slots");
        CREATED.fetch_add(1, Ordering::SeqCst);
        Self(id)
    }

    /// Returns the id (0 for the empty value).
    pub fn id(&self) -> u32 {
        self.0
    }

    /// Returns `true` for the all-zero value.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Resets the counters.
    pub fn reset() {
        CREATED.store(0, Ordering::SeqCst);
        DROPPED.store(0, Ordering::SeqCst);
    }

    /// Returns the current counters.
    pub fn stats() -> TrackedStats {
        TrackedStats {
            created: CREATED.load(Ordering::SeqCst),
            dropped: DROPPED.load(Ordering::SeqCst),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if self.is_empty() {
            Self(0)
        } else {
            Self::new(self.0)
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if !self.is_empty() {
            DROPPED.fetch_add(1, Ordering::SeqCst);
        }
    }
}

impl PartialEq<u32> for Tracked {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}
