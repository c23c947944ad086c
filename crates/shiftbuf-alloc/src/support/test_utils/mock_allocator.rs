// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;
use core::sync::atomic::{AtomicIsize, AtomicUsize, Ordering};

use crate::error::AllocError;
use crate::global::Global;
use crate::traits::Allocator;

/// Configurable behavior for [`MockAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockAllocatorBehaviour {
    /// Normal operation (delegates to [`Global`]).
    None,
    /// Fail every allocate and reallocate call.
    FailAlways,
    /// Fail allocate on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthAllocation(usize),
    /// Fail reallocate on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthReallocation(usize),
}

/// Mock allocator for testing.
///
/// Wraps [`Global`] but allows simulating failures via
/// [`MockAllocatorBehaviour`], and counts calls so tests can assert which
/// path an operation took. Counters are atomic so the mock can back a
/// container shared between threads.
#[derive(Debug)]
pub struct MockAllocator {
    inner: Global,
    behaviour: AtomicUsize,
    nth: AtomicUsize,
    allocate_count: AtomicUsize,
    reallocate_count: AtomicUsize,
    deallocate_count: AtomicUsize,
    outstanding: AtomicIsize,
}

const BEHAVIOUR_NONE: usize = 0;
const BEHAVIOUR_FAIL_ALWAYS: usize = 1;
const BEHAVIOUR_FAIL_AT_NTH_ALLOCATION: usize = 2;
const BEHAVIOUR_FAIL_AT_NTH_REALLOCATION: usize = 3;

impl MockAllocator {
    /// Creates a new mock allocator with the specified behavior.
    pub fn new(behaviour: MockAllocatorBehaviour) -> Self {
        let mock = Self {
            inner: Global,
            behaviour: AtomicUsize::new(BEHAVIOUR_NONE),
            nth: AtomicUsize::new(0),
            allocate_count: AtomicUsize::new(0),
            reallocate_count: AtomicUsize::new(0),
            deallocate_count: AtomicUsize::new(0),
            outstanding: AtomicIsize::new(0),
        };
        mock.change_behaviour(behaviour);
        mock
    }

    /// Changes the mock behavior at runtime and resets the call counters.
    ///
    /// The number of outstanding blocks is kept.
    pub fn change_behaviour(&self, behaviour: MockAllocatorBehaviour) {
        let (tag, nth) = match behaviour {
            MockAllocatorBehaviour::None => (BEHAVIOUR_NONE, 0),
            MockAllocatorBehaviour::FailAlways => (BEHAVIOUR_FAIL_ALWAYS, 0),
            MockAllocatorBehaviour::FailAtNthAllocation(n) => (BEHAVIOUR_FAIL_AT_NTH_ALLOCATION, n),
            MockAllocatorBehaviour::FailAtNthReallocation(n) => {
                (BEHAVIOUR_FAIL_AT_NTH_REALLOCATION, n)
            }
        };

        self.nth.store(nth, Ordering::SeqCst);
        self.behaviour.store(tag, Ordering::SeqCst);
        self.reset_count();
    }

    /// Returns the current behavior.
    pub fn behaviour(&self) -> MockAllocatorBehaviour {
        let nth = self.nth.load(Ordering::SeqCst);

        match self.behaviour.load(Ordering::SeqCst) {
            BEHAVIOUR_FAIL_ALWAYS => MockAllocatorBehaviour::FailAlways,
            BEHAVIOUR_FAIL_AT_NTH_ALLOCATION => MockAllocatorBehaviour::FailAtNthAllocation(nth),
            BEHAVIOUR_FAIL_AT_NTH_REALLOCATION => {
                MockAllocatorBehaviour::FailAtNthReallocation(nth)
            }
            _ => MockAllocatorBehaviour::None,
        }
    }

    /// Resets the call counters.
    pub fn reset_count(&self) {
        self.allocate_count.store(0, Ordering::SeqCst);
        self.reallocate_count.store(0, Ordering::SeqCst);
        self.deallocate_count.store(0, Ordering::SeqCst);
    }

    /// Returns the number of `allocate` calls since the last reset.
    pub fn allocate_count(&self) -> usize {
        self.allocate_count.load(Ordering::SeqCst)
    }

    /// Returns the number of `reallocate` calls since the last reset.
    pub fn reallocate_count(&self) -> usize {
        self.reallocate_count.load(Ordering::SeqCst)
    }

    /// Returns the number of `deallocate` calls since the last reset.
    pub fn deallocate_count(&self) -> usize {
        self.deallocate_count.load(Ordering::SeqCst)
    }

    /// Returns the total number of calls since the last reset.
    pub fn call_count(&self) -> usize {
        self.allocate_count() + self.reallocate_count() + self.deallocate_count()
    }

    /// Returns the number of blocks handed out and not yet released.
    pub fn outstanding(&self) -> isize {
        self.outstanding.load(Ordering::SeqCst)
    }

    fn should_fail_allocation(&self, call: usize) -> bool {
        match self.behaviour() {
            MockAllocatorBehaviour::FailAlways => true,
            MockAllocatorBehaviour::FailAtNthAllocation(n) => call == n,
            _ => false,
        }
    }

    fn should_fail_reallocation(&self, call: usize) -> bool {
        match self.behaviour() {
            MockAllocatorBehaviour::FailAlways => true,
            MockAllocatorBehaviour::FailAtNthReallocation(n) => call == n,
            _ => false,
        }
    }
}

impl Default for MockAllocator {
    fn default() -> Self {
        Self::new(MockAllocatorBehaviour::None)
    }
}

unsafe impl Allocator for MockAllocator {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        let call = self.allocate_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.should_fail_allocation(call) {
            return Err(AllocError {
                bytes: layout.size(),
            });
        }

        let ptr = self.inner.allocate(layout)?;
        self.outstanding.fetch_add(1, Ordering::SeqCst);

        Ok(ptr)
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_size: usize,
    ) -> Result<NonNull<u8>, AllocError> {
        let call = self.reallocate_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.should_fail_reallocation(call) {
            return Err(AllocError { bytes: new_size });
        }

        // SAFETY: the caller upholds the `Allocator::reallocate` contract.
        unsafe { self.inner.reallocate(ptr, old_layout, new_size) }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.deallocate_count.fetch_add(1, Ordering::SeqCst);
        self.outstanding.fetch_sub(1, Ordering::SeqCst);

        // SAFETY: the caller upholds the `Allocator::deallocate` contract.
        unsafe { self.inner.deallocate(ptr, layout) }
    }
}
