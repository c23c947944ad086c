// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Scoped holds.

use core::ops::{Deref, DerefMut};
use core::ptr::NonNull;

use shiftbuf_alloc::Allocator;
use shiftbuf_array::Zeroable;

use crate::acquire::{AcquirePolicy, Backoff};
use crate::error::LockError;
use crate::gate::CommitWindow;
use crate::hold_array::HoldArray;
use crate::lifecycle::Lifecycle;
use crate::lock::RawLock;
use crate::slot::Slot;

/// A held element.
///
/// Dereferences to the element. On drop `on_release` fires and the element
/// is unlocked. Structural operations on the same array wait until every
/// guard is gone.
pub struct ElementGuard<'a, T, H, L, A>
where
    T: Zeroable,
    H: Lifecycle<T>,
    L: RawLock,
    A: Allocator,
{
    array: &'a HoldArray<T, H, L, A>,
    index: usize,
    slot: NonNull<Slot<T, L>>,
}

impl<'a, T, H, L, A> ElementGuard<'a, T, H, L, A>
where
    T: Zeroable,
    H: Lifecycle<T>,
    L: RawLock,
    A: Allocator,
{
    /// Takes over a slot lock and a gate entry already acquired by the caller.
    pub(crate) fn new(
        array: &'a HoldArray<T, H, L, A>,
        index: usize,
        slot: NonNull<Slot<T, L>>,
    ) -> Self {
        Self { array, index, slot }
    }

    /// Returns the index of the held element.
    ///
    /// Stable while the guard lives.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T, H, L, A> Deref for ElementGuard<'_, T, H, L, A>
where
    T: Zeroable,
    H: Lifecycle<T>,
    L: RawLock,
    A: Allocator,
{
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY (PRECONDITIONS ARE MET): the slot is locked by this guard and
        // cannot be relocated while the gate entry is held.
        unsafe { &*self.slot.as_ref().value.get() }
    }
}

impl<T, H, L, A> DerefMut for ElementGuard<'_, T, H, L, A>
where
    T: Zeroable,
    H: Lifecycle<T>,
    L: RawLock,
    A: Allocator,
{
    fn deref_mut(&mut self) -> &mut T {
        // SAFETY (PRECONDITIONS ARE MET): see `deref`; `&mut self` is unique.
        unsafe { self.slot.as_ref().value_mut() }
    }
}

impl<T, H, L, A> Drop for ElementGuard<'_, T, H, L, A>
where
    T: Zeroable,
    H: Lifecycle<T>,
    L: RawLock,
    A: Allocator,
{
    fn drop(&mut self) {
        let array = self.array;
        array.hooks.on_release(&mut **self);

        // SAFETY (PRECONDITIONS ARE MET): see `deref`.
        unsafe { self.slot.as_ref() }.lock.unlock();
        array.gate.leave();
    }
}

impl<T, H, L, A> core::fmt::Debug for ElementGuard<'_, T, H, L, A>
where
    T: Zeroable + core::fmt::Debug,
    H: Lifecycle<T>,
    L: RawLock,
    A: Allocator,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ElementGuard")
            .field("index", &self.index)
            .field("value", &**self)
            .finish()
    }
}

/// Serializes structural operations. Unlocks on drop.
pub(crate) struct MutatorGuard<'a, L: RawLock> {
    lock: &'a L,
}

impl<'a, L: RawLock> MutatorGuard<'a, L> {
    pub(crate) fn acquire(lock: &'a L, policy: AcquirePolicy) -> Result<Self, LockError> {
        let mut backoff = Backoff::new(policy);
        while !lock.try_lock() {
            backoff.spin()?;
        }

        Ok(Self { lock })
    }
}

impl<L: RawLock> Drop for MutatorGuard<'_, L> {
    fn drop(&mut self) {
        self.lock.unlock();
    }
}

/// Every live element of an array, held by a structural operation.
///
/// While acquiring, only `[0, held)` belongs to the set. Once complete, every
/// locked slot in the storage belongs to it: survivors keep their lock record
/// through relocation and new slots start unlocked. Drop releases exactly
/// those, so it is correct before and after a commit.
///
/// The set owns the commit window: holds are released before the gate opens.
pub(crate) struct HoldSet<'a, T, H, L, A>
where
    T: Zeroable,
    H: Lifecycle<T>,
    L: RawLock,
    A: Allocator,
{
    array: &'a HoldArray<T, H, L, A>,
    held: usize,
    complete: bool,
    window: Option<CommitWindow<'a>>,
}

impl<'a, T, H, L, A> HoldSet<'a, T, H, L, A>
where
    T: Zeroable,
    H: Lifecycle<T>,
    L: RawLock,
    A: Allocator,
{
    /// Holds every live element in index order.
    ///
    /// Must be called with the mutator lock held.
    pub(crate) fn acquire(array: &'a HoldArray<T, H, L, A>) -> Result<Self, LockError> {
        let mut set = Self {
            array,
            held: 0,
            complete: false,
            window: None,
        };

        // SAFETY (PRECONDITIONS ARE MET): mutator lock held, no commit runs.
        let length = unsafe { array.storage() }.len();

        for index in 0..length {
            // SAFETY (PRECONDITIONS ARE MET): as above.
            let slot = &unsafe { array.storage() }.as_slice()[index];

            let mut backoff = Backoff::new(array.acquire);
            while !slot.lock.try_lock() {
                backoff.spin()?;
            }
            set.held += 1;

            // SAFETY (PRECONDITIONS ARE MET): locked just above.
            array.hooks.on_hold(unsafe { slot.value_mut() });
        }

        set.complete = true;
        Ok(set)
    }

    /// Closes the access gate and waits for in-flight accessors to leave.
    ///
    /// The gate stays closed until the set is dropped.
    pub(crate) fn close_gate(&mut self) -> Result<(), LockError> {
        debug_assert!(self.complete && self.window.is_none());
        self.window = Some(CommitWindow::enter(&self.array.gate, self.array.acquire)?);
        Ok(())
    }
}

impl<T, H, L, A> Drop for HoldSet<'_, T, H, L, A>
where
    T: Zeroable,
    H: Lifecycle<T>,
    L: RawLock,
    A: Allocator,
{
    fn drop(&mut self) {
        let array = self.array;
        // SAFETY (PRECONDITIONS ARE MET): the commit, if any, has ended.
        let slots = unsafe { array.storage() }.as_slice();
        let limit = if self.complete {
            slots.len()
        } else {
            self.held
        };

        for slot in &slots[..limit] {
            if slot.lock.is_locked() {
                // SAFETY (PRECONDITIONS ARE MET): this set owns the lock.
                array.hooks.on_release(unsafe { slot.value_mut() });
                slot.lock.unlock();
            }
        }
    }
}
