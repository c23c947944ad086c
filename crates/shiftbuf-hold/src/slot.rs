// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::UnsafeCell;

use shiftbuf_array::Zeroable;

use crate::lock::RawLock;

/// An element and its lock record, relocated together.
pub(crate) struct Slot<T, L> {
    pub(crate) lock: L,
    pub(crate) value: UnsafeCell<T>,
}

// SAFETY: both fields are zero-valid; `UnsafeCell` is transparent.
unsafe impl<T: Zeroable, L: RawLock> Zeroable for Slot<T, L> {}

// SAFETY: `value` is only reached through `&mut` while `lock` is held.
unsafe impl<T: Send, L: RawLock> Sync for Slot<T, L> {}

impl<T, L: RawLock> Slot<T, L> {
    /// # Safety
    ///
    /// The caller must hold `self.lock` and must not create another
    /// reference to the value for the returned lifetime.
    #[inline(always)]
    #[allow(clippy::mut_from_ref)]
    pub(crate) unsafe fn value_mut(&self) -> &mut T {
        // SAFETY: exclusive by the lock, per the caller contract.
        unsafe { &mut *self.value.get() }
    }
}
