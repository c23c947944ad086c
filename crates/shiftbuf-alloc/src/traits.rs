// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::AllocError;

/// Fallible raw memory source used by the shiftbuf containers.
///
/// Mirrors the classic `malloc` / `realloc` / `free` triple, except that
/// failure is reported as [`AllocError`] instead of a null pointer.
///
/// # Safety
///
/// Implementations must return blocks that are valid for reads and writes of
/// `layout.size()` bytes, aligned to `layout.align()`, and not aliased by any
/// other live block. A failed [`reallocate`](Allocator::reallocate) must
/// leave the original block untouched and still owned by the caller.
pub unsafe trait Allocator {
    /// Allocates a block for `layout`.
    ///
    /// Callers never pass a zero-sized layout.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the memory cannot be provided.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Resizes the block at `ptr` to `new_size` bytes, keeping the alignment
    /// of `old_layout`.
    ///
    /// The first `min(old_layout.size(), new_size)` bytes are preserved.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by this allocator for `old_layout`, and
    /// `new_size` must be non-zero and must not overflow `isize` once
    /// rounded up to the alignment.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the block cannot be resized. The original
    /// block is still valid in that case.
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_size: usize,
    ) -> Result<NonNull<u8>, AllocError>;

    /// Releases the block at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by this allocator for `layout` and must
    /// not be used afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

unsafe impl<A> Allocator for &A
where
    A: Allocator + ?Sized,
{
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        (**self).allocate(layout)
    }

    #[inline]
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_size: usize,
    ) -> Result<NonNull<u8>, AllocError> {
        // SAFETY: forwarded verbatim, the caller upholds the contract.
        unsafe { (**self).reallocate(ptr, old_layout, new_size) }
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded verbatim, the caller upholds the contract.
        unsafe { (**self).deallocate(ptr, layout) }
    }
}
