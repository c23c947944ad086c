// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Per-element lock records.

use core::sync::atomic::{AtomicBool, Ordering};

use shiftbuf_array::Zeroable;

/// Lock primitive stored next to every element.
///
/// The zeroed value must be the unlocked state: slots are created by
/// zero-filling.
///
/// # Safety
///
/// A successful [`try_lock`](RawLock::try_lock) must give the caller
/// exclusive ownership until the matching [`unlock`](RawLock::unlock), with
/// acquire/release ordering, so the element guarded by the lock can be
/// mutated through a shared reference. A locked record must stay locked when
/// its bytes are moved to another address.
pub unsafe trait RawLock: Zeroable + Default + Send + Sync {
    /// Attempts to take the lock without waiting.
    fn try_lock(&self) -> bool;

    /// Takes the lock, spinning until it is free.
    #[inline]
    fn lock(&self) {
        while !self.try_lock() {
            core::hint::spin_loop();
        }
    }

    /// Releases the lock. Only the current owner may call this.
    fn unlock(&self);

    /// Returns `true` if the lock is currently taken.
    fn is_locked(&self) -> bool;
}

/// Test-and-set spin lock over an [`AtomicBool`].
#[derive(Debug, Default)]
pub struct SpinLock {
    locked: AtomicBool,
}

impl SpinLock {
    /// Creates an unlocked lock.
    pub const fn new() -> Self {
        Self {
            locked: AtomicBool::new(false),
        }
    }
}

// SAFETY: `AtomicBool` is zero-valid and zero means unlocked.
unsafe impl Zeroable for SpinLock {}

unsafe impl RawLock for SpinLock {
    #[inline]
    fn try_lock(&self) -> bool {
        // Cheap read first so contended spinning stays in cache.
        !self.locked.load(Ordering::Relaxed) && !self.locked.swap(true, Ordering::Acquire)
    }

    #[inline]
    fn unlock(&self) {
        self.locked.store(false, Ordering::Release);
    }

    #[inline]
    fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}
