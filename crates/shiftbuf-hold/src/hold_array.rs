// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::UnsafeCell;
use core::ptr::NonNull;
use core::sync::atomic::{AtomicUsize, Ordering};

use shiftbuf_alloc::{Allocator, Global};
use shiftbuf_array::{ArrayError, Buffer, Zeroable};

use crate::acquire::{AcquirePolicy, Backoff};
use crate::config::HoldConfig;
use crate::error::HoldError;
use crate::gate::AccessGate;
use crate::guard::ElementGuard;
use crate::lifecycle::Lifecycle;
use crate::lock::{RawLock, SpinLock};
use crate::slot::Slot;

/// Resizable array shared by reference across threads.
///
/// Elements are only reachable through a hold ([`hold`](HoldArray::hold),
/// [`with`](HoldArray::with), [`with_mut`](HoldArray::with_mut),
/// [`get`](HoldArray::get)). Structural operations take `&self` and follow
/// the protocol described at the crate root.
///
/// Dropping the array fires `on_destroy` on every live element.
pub struct HoldArray<T, H = (), L = SpinLock, A = Global>
where
    T: Zeroable,
    H: Lifecycle<T>,
    L: RawLock,
    A: Allocator,
{
    pub(crate) storage: UnsafeCell<Buffer<Slot<T, L>, A>>,
    pub(crate) gate: AccessGate,
    pub(crate) mutator: L,
    pub(crate) hooks: H,
    pub(crate) acquire: AcquirePolicy,
    len: AtomicUsize,
    cap: AtomicUsize,
}

// SAFETY: element values are only touched under their slot lock and the
// storage is only mutated under the mutator lock with the gate drained.
unsafe impl<T, H, L, A> Sync for HoldArray<T, H, L, A>
where
    T: Zeroable + Send,
    H: Lifecycle<T>,
    L: RawLock,
    A: Allocator + Send + Sync,
{
}

impl<T, H> HoldArray<T, H, SpinLock, Global>
where
    T: Zeroable,
    H: Lifecycle<T>,
{
    /// Creates an empty array with default configuration.
    pub fn new(hooks: H) -> Self {
        Self::new_in(hooks, HoldConfig::default(), Global)
    }

    /// Creates an empty array with `config`.
    pub fn with_config(hooks: H, config: HoldConfig) -> Self {
        Self::new_in(hooks, config, Global)
    }

    /// Creates an array of `length` zeroed elements and fires `on_create`
    /// on each.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailed`] or [`ArrayError::CapacityOverflow`]
    /// wrapped in [`HoldError::Array`]. No hook fires on failure.
    pub fn create(length: usize, hooks: H) -> Result<Self, HoldError> {
        Self::create_in(length, hooks, HoldConfig::default(), Global)
    }
}

impl<T, H, L, A> HoldArray<T, H, L, A>
where
    T: Zeroable,
    H: Lifecycle<T>,
    L: RawLock,
    A: Allocator,
{
    /// Creates an empty array using `alloc`.
    pub fn new_in(hooks: H, config: HoldConfig, alloc: A) -> Self {
        Self {
            storage: UnsafeCell::new(Buffer::new_in(alloc, config.array.policy)),
            gate: AccessGate::new(),
            mutator: L::default(),
            hooks,
            acquire: config.acquire,
            len: AtomicUsize::new(0),
            cap: AtomicUsize::new(0),
        }
    }

    /// Creates an array of `length` zeroed elements using `alloc`.
    ///
    /// # Errors
    ///
    /// See [`create`](HoldArray::create).
    pub fn create_in(
        length: usize,
        hooks: H,
        config: HoldConfig,
        alloc: A,
    ) -> Result<Self, HoldError> {
        let mut array = Self::new_in(hooks, config, alloc);

        let storage = array.storage.get_mut();
        storage.resize(length)?;
        for slot in storage.as_mut_slice() {
            array.hooks.on_create(slot.value.get_mut());
        }

        let (len, cap) = (storage.len(), storage.capacity());
        array.publish(len, cap);

        Ok(array)
    }

    /// Returns the number of live elements.
    ///
    /// May be stale by the time it is used if other threads run structural
    /// operations.
    #[inline]
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    /// Returns `true` if there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap.load(Ordering::Acquire)
    }

    /// Returns the hooks.
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Returns the acquisition policy.
    pub fn acquire_policy(&self) -> AcquirePolicy {
        self.acquire
    }

    /// Holds the element at `index`.
    ///
    /// Waits, per the [`AcquirePolicy`], while another holder has the element
    /// or a commit window is open. `on_hold` fires once the element is held
    /// and `on_release` fires when the guard is dropped.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidIndex`] if `index >= len`
    /// - [`LockError`](crate::LockError) if the policy gives up
    pub fn hold(&self, index: usize) -> Result<ElementGuard<'_, T, H, L, A>, HoldError> {
        let mut backoff = Backoff::new(self.acquire);
        let mut reported = false;

        loop {
            if self.gate.try_enter() {
                // SAFETY (PRECONDITIONS ARE MET): inside the gate.
                let storage = unsafe { self.storage() };
                let length = storage.len();

                if index >= length {
                    self.gate.leave();
                    return Err(ArrayError::InvalidIndex { index, length }.into());
                }

                let slot = &storage.as_slice()[index];
                if slot.lock.try_lock() {
                    // The guard owns the lock and the gate entry from here on.
                    let mut guard = ElementGuard::new(self, index, NonNull::from(slot));
                    self.hooks.on_hold(&mut *guard);
                    return Ok(guard);
                }

                self.gate.leave();
            } else if !reported {
                reported = true;
                tracing::debug!(
                    index,
                    attempts = backoff.attempts(),
                    "commit window pending, retrying hold"
                );
            }

            backoff.spin()?;
        }
    }

    /// Runs `f` on the element at `index` while holding it.
    ///
    /// # Errors
    ///
    /// See [`hold`](HoldArray::hold).
    pub fn with<R>(&self, index: usize, f: impl FnOnce(&T) -> R) -> Result<R, HoldError> {
        let guard = self.hold(index)?;
        Ok(f(&*guard))
    }

    /// Runs `f` on the element at `index` mutably while holding it.
    ///
    /// # Errors
    ///
    /// See [`hold`](HoldArray::hold).
    pub fn with_mut<R>(
        &self,
        index: usize,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, HoldError> {
        let mut guard = self.hold(index)?;
        Ok(f(&mut *guard))
    }

    /// Returns a clone of the element at `index`.
    ///
    /// # Errors
    ///
    /// See [`hold`](HoldArray::hold).
    pub fn get(&self, index: usize) -> Result<T, HoldError>
    where
        T: Clone,
    {
        self.with(index, T::clone)
    }

    /// # Safety
    ///
    /// The caller must be inside the gate or hold the mutator lock, and must
    /// not keep the reference across a commit.
    #[inline(always)]
    pub(crate) unsafe fn storage(&self) -> &Buffer<Slot<T, L>, A> {
        // SAFETY: no `&mut` exists outside a drained commit window.
        unsafe { &*self.storage.get() }
    }

    /// # Safety
    ///
    /// The caller must hold the mutator lock with the gate closed and
    /// drained, and must not hold any other reference into the storage.
    #[inline(always)]
    #[allow(clippy::mut_from_ref)]
    pub(crate) unsafe fn storage_mut(&self) -> &mut Buffer<Slot<T, L>, A> {
        // SAFETY: exclusive per the caller contract.
        unsafe { &mut *self.storage.get() }
    }

    pub(crate) fn publish(&self, len: usize, cap: usize) {
        self.len.store(len, Ordering::Release);
        self.cap.store(cap, Ordering::Release);
    }
}

impl<T, H, L, A> Drop for HoldArray<T, H, L, A>
where
    T: Zeroable,
    H: Lifecycle<T>,
    L: RawLock,
    A: Allocator,
{
    fn drop(&mut self) {
        let hooks = &self.hooks;
        self.storage.get_mut().destroy_with(&mut |slots| {
            for slot in slots {
                hooks.on_destroy(slot.value.get_mut());
            }
        });
    }
}

impl<T, H, L, A> core::fmt::Debug for HoldArray<T, H, L, A>
where
    T: Zeroable,
    H: Lifecycle<T>,
    L: RawLock,
    A: Allocator,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HoldArray")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("acquire", &self.acquire)
            .finish_non_exhaustive()
    }
}
