// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;

use crate::{AllocError, Allocator, Global};

// =============================================================================
// allocate() / deallocate()
// =============================================================================

#[test]
fn test_global_allocate_is_aligned_and_writable() {
    let layout = Layout::array::<u64>(16).expect("Failed to build layout");
    let ptr = Global.allocate(layout).expect("Failed to allocate");

    assert_eq!(ptr.as_ptr() as usize % layout.align(), 0);

    unsafe {
        core::ptr::write_bytes(ptr.as_ptr(), 0xAB, layout.size());
        assert_eq!(*ptr.as_ptr().add(layout.size() - 1), 0xAB);
        Global.deallocate(ptr, layout);
    }
}

// =============================================================================
// reallocate()
// =============================================================================

#[test]
fn test_global_reallocate_preserves_prefix() {
    let layout = Layout::array::<u32>(4).expect("Failed to build layout");
    let ptr = Global.allocate(layout).expect("Failed to allocate");

    unsafe {
        let data = ptr.as_ptr().cast::<u32>();
        for i in 0..4 {
            data.add(i).write(i as u32 + 10);
        }

        let grown = Global
            .reallocate(ptr, layout, 8 * size_of::<u32>())
            .expect("Failed to reallocate");
        let data = grown.as_ptr().cast::<u32>();

        for i in 0..4 {
            assert_eq!(data.add(i).read(), i as u32 + 10);
        }

        let grown_layout = Layout::array::<u32>(8).expect("Failed to build layout");
        Global.deallocate(grown, grown_layout);
    }
}

#[test]
fn test_global_reallocate_shrink() {
    let layout = Layout::array::<u16>(8).expect("Failed to build layout");
    let ptr = Global.allocate(layout).expect("Failed to allocate");

    unsafe {
        let data = ptr.as_ptr().cast::<u16>();
        data.write(7);
        data.add(1).write(9);

        let shrunk = Global
            .reallocate(ptr, layout, 2 * size_of::<u16>())
            .expect("Failed to reallocate");
        let data = shrunk.as_ptr().cast::<u16>();

        assert_eq!(data.read(), 7);
        assert_eq!(data.add(1).read(), 9);

        let shrunk_layout = Layout::array::<u16>(2).expect("Failed to build layout");
        Global.deallocate(shrunk, shrunk_layout);
    }
}

// =============================================================================
// &A
// =============================================================================

#[test]
fn test_reference_forwards_to_allocator() {
    fn roundtrip<A: Allocator>(alloc: A) {
        let layout = Layout::new::<u128>();
        let ptr = alloc.allocate(layout).expect("Failed to allocate");
        unsafe { alloc.deallocate(ptr, layout) };
    }

    let global = Global;
    roundtrip(&global);
    roundtrip(&&global);
}

// =============================================================================
// AllocError
// =============================================================================

#[test]
fn test_alloc_error_display() {
    let err = AllocError { bytes: 64 };

    assert_eq!(format!("{err}"), "failed to allocate 64 bytes");
}
