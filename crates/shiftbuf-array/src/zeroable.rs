// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use core::ptr::NonNull;

/// Types for which the all-zero bit pattern is a valid value.
///
/// Buffers zero-fill every slot outside `[0, len)` and every slot opened by a
/// shift. Those slots are real values of `T` as far as the buffer is
/// concerned, so the zeroed state must be one `T` can legally hold.
///
/// # Safety
///
/// Implementors guarantee that `core::mem::zeroed::<Self>()` produces a
/// valid, droppable value.
pub unsafe trait Zeroable: Sized {
    /// Returns the all-zero value.
    #[inline(always)]
    fn zeroed() -> Self {
        // SAFETY: the trait contract guarantees all-zero is a valid Self.
        unsafe { core::mem::zeroed() }
    }
}

macro_rules! impl_zeroable_for_primitives {
    ($($ty:ty),* $(,)?) => {
        $(
            unsafe impl Zeroable for $ty {}
        )*
    };
}

impl_zeroable_for_primitives!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, ()
);

unsafe impl<T: Zeroable, const N: usize> Zeroable for [T; N] {}

unsafe impl<T: ?Sized> Zeroable for Option<Box<T>> {}

unsafe impl<T: ?Sized> Zeroable for Option<NonNull<T>> {}

unsafe impl<T: ?Sized> Zeroable for Option<&T> {}

unsafe impl<T> Zeroable for core::mem::ManuallyDrop<T> where T: Zeroable {}

unsafe impl<T> Zeroable for core::num::Wrapping<T> where T: Zeroable {}
