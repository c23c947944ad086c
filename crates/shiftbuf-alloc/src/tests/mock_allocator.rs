// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;

use crate::support::test_utils::{MockAllocator, MockAllocatorBehaviour};
use crate::{AllocError, Allocator};

fn layout() -> Layout {
    Layout::array::<u32>(4).expect("Failed to build layout")
}

#[test]
fn test_mock_allocator_behaviour_none() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);

    let ptr = mock.allocate(layout()).expect("Failed to allocate");
    assert_eq!(mock.outstanding(), 1);

    unsafe { mock.deallocate(ptr, layout()) };
    assert_eq!(mock.outstanding(), 0);
}

#[test]
fn test_mock_allocator_behaviour_fail_always() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::FailAlways);

    let result = mock.allocate(layout());

    assert_eq!(result, Err(AllocError { bytes: 16 }));
    assert_eq!(mock.outstanding(), 0);
}

#[test]
fn test_mock_allocator_behaviour_fail_always_reallocate() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    let ptr = mock.allocate(layout()).expect("Failed to allocate");

    mock.change_behaviour(MockAllocatorBehaviour::FailAlways);
    let result = unsafe { mock.reallocate(ptr, layout(), 64) };
    assert_eq!(result, Err(AllocError { bytes: 64 }));

    // Original block is still owned by the caller.
    unsafe { mock.deallocate(ptr, layout()) };
    assert_eq!(mock.outstanding(), 0);
}

#[test]
fn test_mock_allocator_behaviour_fail_at_nth_allocation() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::FailAtNthAllocation(3));

    // First two calls succeed
    let a = mock.allocate(layout()).expect("Failed to allocate");
    let b = mock.allocate(layout()).expect("Failed to allocate");

    // Third call fails
    assert!(mock.allocate(layout()).is_err());

    // Fourth call succeeds
    let c = mock.allocate(layout()).expect("Failed to allocate");

    assert_eq!(mock.allocate_count(), 4);
    assert_eq!(mock.outstanding(), 3);

    unsafe {
        mock.deallocate(a, layout());
        mock.deallocate(b, layout());
        mock.deallocate(c, layout());
    }
}

#[test]
fn test_mock_allocator_behaviour_fail_at_nth_reallocation() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::FailAtNthReallocation(1));
    let ptr = mock.allocate(layout()).expect("Failed to allocate");

    // First reallocation fails, allocation itself is unaffected
    assert!(unsafe { mock.reallocate(ptr, layout(), 32) }.is_err());

    // Second succeeds
    let grown = unsafe { mock.reallocate(ptr, layout(), 32) }.expect("Failed to reallocate");
    let grown_layout = Layout::array::<u32>(8).expect("Failed to build layout");

    assert_eq!(mock.reallocate_count(), 2);
    assert_eq!(mock.outstanding(), 1);

    unsafe { mock.deallocate(grown, grown_layout) };
}

#[test]
fn test_mock_allocator_change_behaviour_resets_counts() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    let ptr = mock.allocate(layout()).expect("Failed to allocate");

    assert_eq!(mock.call_count(), 1);

    mock.change_behaviour(MockAllocatorBehaviour::FailAtNthAllocation(1));
    assert_eq!(mock.call_count(), 0);
    assert_eq!(
        mock.behaviour(),
        MockAllocatorBehaviour::FailAtNthAllocation(1)
    );
    assert_eq!(mock.outstanding(), 1);

    unsafe { mock.deallocate(ptr, layout()) };
    assert_eq!(mock.deallocate_count(), 1);
}

#[test]
fn test_mock_allocator_reset_count() {
    let mock = MockAllocator::default();
    let ptr = mock.allocate(layout()).expect("Failed to allocate");
    unsafe { mock.deallocate(ptr, layout()) };

    assert_eq!(mock.call_count(), 2);

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);
    assert_eq!(mock.behaviour(), MockAllocatorBehaviour::None);
}
