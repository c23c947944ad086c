// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw storage with policy-driven capacity and a transactional splice.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};
use core::slice;

use shiftbuf_alloc::{Allocator, Global};

use crate::error::ArrayError;
use crate::policy::GrowthPolicy;
use crate::splice::Splice;
use crate::zeroable::Zeroable;

/// Contiguous storage for `T` with a length, a capacity and a growth policy.
///
/// # Invariants
///
/// - `len <= capacity`
/// - no allocation is held while `capacity == 0` (zero-sized `T` never
///   allocate)
/// - every slot in `[len, capacity)` is all-zero bytes
///
/// # Splicing
///
/// [`splice`](Buffer::splice) is the only primitive that changes the length.
/// Depending on the capacity the policy picks, it runs one of three paths:
///
/// 1. **In place**: capacity unchanged. Removed elements are retired and
///    dropped, the tail is moved with an overlap-safe copy, vacated slots are
///    zeroed.
/// 2. **Grow**: capacity grows and nothing is removed. The block is
///    reallocated first; on failure nothing changed.
/// 3. **Staged**: capacity changes and elements are removed. A fresh block is
///    allocated, survivors are copied into it, and only then are the removed
///    elements retired and dropped in the old block before it is freed.
///
/// No element is retired or dropped before the allocation that the change
/// depends on has succeeded.
pub struct Buffer<T, A = Global>
where
    T: Zeroable,
    A: Allocator,
{
    ptr: NonNull<T>,
    len: usize,
    cap: usize,
    policy: GrowthPolicy,
    alloc: A,
    _marker: PhantomData<T>,
}

unsafe impl<T, A> Send for Buffer<T, A>
where
    T: Zeroable + Send,
    A: Allocator + Send,
{
}

unsafe impl<T, A> Sync for Buffer<T, A>
where
    T: Zeroable + Sync,
    A: Allocator + Sync,
{
}

/// Frees a block when dropped, including on unwind out of a retire callback.
struct BlockGuard<'a, T, A: Allocator> {
    ptr: NonNull<T>,
    layout: Layout,
    alloc: &'a A,
}

impl<T, A: Allocator> Drop for BlockGuard<'_, T, A> {
    fn drop(&mut self) {
        if self.layout.size() != 0 {
            // SAFETY (PRECONDITIONS ARE MET): the block was produced by
            // `alloc` for `layout` and ownership was handed to this guard.
            unsafe { self.alloc.deallocate(self.ptr.cast(), self.layout) }
        }
    }
}

impl<T: Zeroable> Buffer<T, Global> {
    /// Creates an empty buffer backed by [`Global`].
    pub fn new() -> Self {
        Self::new_in(Global, GrowthPolicy::default())
    }

    /// Creates an empty buffer with the given policy.
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self::new_in(Global, policy)
    }

    /// Creates a buffer of `length` zeroed elements with exactly `length`
    /// slots of capacity.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailed`] or [`ArrayError::CapacityOverflow`].
    pub fn create(length: usize) -> Result<Self, ArrayError> {
        Self::create_in(length, Global, GrowthPolicy::default())
    }
}

impl<T: Zeroable> Default for Buffer<T, Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A> Buffer<T, A>
where
    T: Zeroable,
    A: Allocator,
{
    /// Creates an empty buffer using `alloc`.
    pub const fn new_in(alloc: A, policy: GrowthPolicy) -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
            policy,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Creates a buffer of `length` zeroed elements using `alloc`.
    ///
    /// Capacity is exactly `length`. `length == 0` allocates nothing.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailed`] or [`ArrayError::CapacityOverflow`].
    /// No allocation is retained on failure.
    pub fn create_in(length: usize, alloc: A, policy: GrowthPolicy) -> Result<Self, ArrayError> {
        let mut buffer = Self::new_in(alloc, policy);
        buffer.resize(length)?;
        Ok(buffer)
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the growth policy.
    #[inline]
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Returns the allocator.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns `true` if the buffer currently owns an allocation.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.cap != 0 && size_of::<T>() != 0
    }

    /// Returns a raw pointer to the first slot.
    ///
    /// Dangling while nothing is allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns a mutable raw pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY (PRECONDITIONS ARE MET): `[0, len)` are initialized and the
        // pointer is aligned (dangling is valid for empty slices).
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Returns the live elements mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY (PRECONDITIONS ARE MET): as in `as_slice`, plus `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Sets the length to `new_length`.
    ///
    /// - Growing exposes zeroed elements.
    /// - Shrinking drops the elements past `new_length`.
    /// - `new_length == 0` drops everything but keeps the allocation.
    /// - An unallocated buffer grows to exactly `new_length` slots.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailed`] or [`ArrayError::CapacityOverflow`].
    /// The buffer is unchanged on failure.
    pub fn resize(&mut self, new_length: usize) -> Result<(), ArrayError> {
        match Splice::resize(self.len, new_length) {
            Some(plan) => self.splice(plan, &mut |_| {}),
            None => Ok(()),
        }
    }

    /// Applies `plan`.
    ///
    /// After success, `[0, at)` is untouched, `[at, at + insert)` holds zeroed
    /// elements and the old `[at + remove, len)` follows them. `retire` sees
    /// the removed elements exactly once, after any allocation has succeeded
    /// and right before they are dropped.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidIndex`] / [`ArrayError::InvalidCount`] if the
    ///   plan does not fit the current length
    /// - [`ArrayError::CapacityOverflow`] if the new capacity overflows
    /// - [`ArrayError::AllocationFailed`] if the allocator fails
    ///
    /// `retire` is never called when an error is returned and the buffer is
    /// unchanged.
    pub fn splice(
        &mut self,
        plan: Splice,
        retire: &mut dyn FnMut(&mut [T]),
    ) -> Result<(), ArrayError> {
        let new_len = plan.new_length(self.len)?;
        let new_cap = self.plan_capacity(new_len)?;

        tracing::trace!(
            at = plan.at,
            remove = plan.remove,
            insert = plan.insert,
            len = self.len,
            new_len,
            capacity = self.cap,
            new_capacity = new_cap,
            "splice"
        );

        if new_cap == self.cap {
            // SAFETY (PRECONDITIONS ARE MET): plan validated, capacity holds new_len.
            unsafe { self.splice_in_place(plan, retire) };
        } else if plan.remove == 0 && new_cap > self.cap {
            self.grow(new_cap)?;
            // SAFETY (PRECONDITIONS ARE MET): plan validated, grown to hold new_len.
            unsafe { self.splice_in_place(plan, retire) };
        } else {
            self.splice_staged(plan, new_len, new_cap, retire)?;
        }

        debug_assert!(self.len <= self.cap);
        Ok(())
    }

    /// Drops every element and frees the allocation.
    ///
    /// Idempotent. Called on drop.
    pub fn destroy(&mut self) {
        self.destroy_with(&mut |_| {});
    }

    /// Like [`destroy`](Buffer::destroy), but hands the live elements to
    /// `retire` first.
    pub fn destroy_with(&mut self, retire: &mut dyn FnMut(&mut [T])) {
        let len = self.len;
        let layout =
            Self::layout(self.cap).expect("infallible: layout was valid when allocated");

        // Take ownership of the block before running user code.
        let block = BlockGuard {
            ptr: self.ptr,
            layout,
            alloc: &self.alloc,
        };
        self.ptr = NonNull::dangling();
        self.len = 0;
        self.cap = 0;

        let live = ptr::slice_from_raw_parts_mut(block.ptr.as_ptr(), len);

        // SAFETY (PRECONDITIONS ARE MET): `[0, len)` were the live elements and
        // the buffer no longer refers to them.
        unsafe {
            retire(&mut *live);
            ptr::drop_in_place(live);
        }

        drop(block);
    }

    #[inline(always)]
    fn layout(capacity: usize) -> Result<Layout, ArrayError> {
        Layout::array::<T>(capacity).map_err(|_| ArrayError::CapacityOverflow)
    }

    fn plan_capacity(&self, new_len: usize) -> Result<usize, ArrayError> {
        let capacity = if new_len == self.len || new_len == 0 {
            self.cap
        } else if self.cap == 0 {
            new_len
        } else {
            self.policy
                .next_capacity(new_len, self.cap)
                .ok_or(ArrayError::CapacityOverflow)?
        };

        Self::layout(capacity)?;
        Ok(capacity)
    }

    fn allocate_block(&self, layout: Layout) -> Result<NonNull<T>, ArrayError> {
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        match self.alloc.allocate(layout) {
            Ok(ptr) => Ok(ptr.cast()),
            Err(err) => {
                tracing::warn!(bytes = err.bytes, "allocation failed");
                Err(err.into())
            }
        }
    }

    /// Grows the block to `new_cap` slots and zero-fills the new ones.
    fn grow(&mut self, new_cap: usize) -> Result<(), ArrayError> {
        let new_layout = Self::layout(new_cap)?;

        let ptr = if self.is_allocated() {
            let old_layout = Self::layout(self.cap)?;

            // SAFETY (PRECONDITIONS ARE MET): the block was allocated by
            // `self.alloc` with `old_layout`, and the new size is non-zero.
            let result = unsafe {
                self.alloc
                    .reallocate(self.ptr.cast(), old_layout, new_layout.size())
            };

            match result {
                Ok(ptr) => ptr.cast(),
                Err(err) => {
                    tracing::warn!(bytes = err.bytes, "reallocation failed");
                    return Err(err.into());
                }
            }
        } else {
            self.allocate_block(new_layout)?
        };

        tracing::debug!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            bytes = new_layout.size(),
            "grew buffer"
        );

        self.ptr = ptr;

        // SAFETY (PRECONDITIONS ARE MET): `[cap, new_cap)` lies in the new block.
        unsafe { ptr::write_bytes(self.ptr.as_ptr().add(self.cap), 0, new_cap - self.cap) };
        self.cap = new_cap;

        Ok(())
    }

    /// # Safety
    ///
    /// The plan must be valid for `self.len` and the resulting length must
    /// fit in `self.cap`.
    unsafe fn splice_in_place(&mut self, plan: Splice, retire: &mut dyn FnMut(&mut [T])) {
        let Splice { at, remove, insert } = plan;
        let len = self.len;
        let new_len = len - remove + insert;
        let tail = len - at - remove;
        let base = self.ptr.as_ptr();

        // SAFETY (PRECONDITIONS ARE MET): every range below lies within the
        // `cap` slots of the block and the plan was validated against `len`.
        unsafe {
            if remove > 0 {
                let removed = ptr::slice_from_raw_parts_mut(base.add(at), remove);
                retire(&mut *removed);

                // A panicking drop leaks the tail instead of dropping it twice.
                self.len = at;
                ptr::drop_in_place(removed);
            }

            ptr::copy(base.add(at + remove), base.add(at + insert), tail);
            ptr::write_bytes(base.add(at), 0, insert);

            if new_len < len {
                ptr::write_bytes(base.add(new_len), 0, len - new_len);
            }
        }

        self.len = new_len;
    }

    fn splice_staged(
        &mut self,
        plan: Splice,
        new_len: usize,
        new_cap: usize,
        retire: &mut dyn FnMut(&mut [T]),
    ) -> Result<(), ArrayError> {
        let Splice { at, remove, insert } = plan;
        let new_layout = Self::layout(new_cap)?;
        let old_layout = Self::layout(self.cap)?;
        let new_ptr = self.allocate_block(new_layout)?;

        tracing::debug!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            bytes = new_layout.size(),
            "relocating buffer"
        );

        let old_ptr = self.ptr;
        let len = self.len;

        // SAFETY (PRECONDITIONS ARE MET): the blocks are distinct, the plan was
        // validated against `len` and `new_cap >= new_len`.
        unsafe {
            let src = old_ptr.as_ptr();
            let dst = new_ptr.as_ptr();

            ptr::copy_nonoverlapping(src, dst, at);
            ptr::write_bytes(dst.add(at), 0, insert);
            ptr::copy_nonoverlapping(src.add(at + remove), dst.add(at + insert), len - at - remove);
            ptr::write_bytes(dst.add(new_len), 0, new_cap - new_len);
        }

        self.ptr = new_ptr;
        self.len = new_len;
        self.cap = new_cap;

        // The old block now owns only the removed elements.
        let old = BlockGuard {
            ptr: old_ptr,
            layout: old_layout,
            alloc: &self.alloc,
        };
        let removed = ptr::slice_from_raw_parts_mut(
            // SAFETY (PRECONDITIONS ARE MET): `at + remove <= len <= old cap`.
            unsafe { old.ptr.as_ptr().add(at) },
            remove,
        );

        // SAFETY (PRECONDITIONS ARE MET): the removed elements are live and
        // no longer reachable through the buffer.
        unsafe {
            retire(&mut *removed);
            ptr::drop_in_place(removed);
        }

        drop(old);
        Ok(())
    }
}

impl<T, A> Drop for Buffer<T, A>
where
    T: Zeroable,
    A: Allocator,
{
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<T, A> core::fmt::Debug for Buffer<T, A>
where
    T: Zeroable,
    A: Allocator,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.len)
            .field("capacity", &self.cap)
            .field("policy", &self.policy)
            .finish()
    }
}
