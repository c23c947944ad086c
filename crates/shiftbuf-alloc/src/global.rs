// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::AllocError;
use crate::traits::Allocator;

/// The registered global allocator, made fallible.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct Global;

unsafe impl Allocator for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        debug_assert!(layout.size() != 0, "zero-sized allocation requested");

        // SAFETY (PRECONDITIONS ARE MET): layout has non-zero size.
        let ptr = unsafe { alloc::alloc::alloc(layout) };

        NonNull::new(ptr).ok_or(AllocError {
            bytes: layout.size(),
        })
    }

    #[inline]
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_size: usize,
    ) -> Result<NonNull<u8>, AllocError> {
        // SAFETY: the caller guarantees ptr/old_layout came from `allocate`
        // and that new_size is non-zero and fits isize.
        let new_ptr = unsafe { alloc::alloc::realloc(ptr.as_ptr(), old_layout, new_size) };

        NonNull::new(new_ptr).ok_or(AllocError { bytes: new_size })
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: the caller guarantees ptr/layout came from `allocate`.
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}
