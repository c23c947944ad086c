// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{ArrayError, DynArray};

fn array(values: &[i32]) -> DynArray<i32> {
    DynArray::from_slice(values).expect("Failed to build array")
}

// =============================================================================
// left_shift()
// =============================================================================

#[test]
fn test_left_shift_moves_tail_over_destroyed_range() {
    let mut a = array(&[10, 11, 12, 13, 14, 15]);

    a.left_shift(4, 3).expect("Failed to left_shift");

    assert_eq!(a.as_slice(), [10, 14, 15]);
}

#[test]
fn test_left_shift_full_prefix() {
    let mut a = array(&[1, 2, 3, 4]);

    a.left_shift(2, 2).expect("Failed to left_shift");

    assert_eq!(a.as_slice(), [3, 4]);
}

#[test]
fn test_left_shift_last_element() {
    let mut a = array(&[1, 2, 3, 4]);

    a.left_shift(3, 1).expect("Failed to left_shift");

    assert_eq!(a.as_slice(), [1, 2, 4]);
}

#[test]
fn test_left_shift_zero_amount_is_noop() {
    let mut a = array(&[1, 2, 3]);

    a.left_shift(1, 0).expect("Failed to left_shift");

    assert_eq!(a.as_slice(), [1, 2, 3]);
}

#[test]
fn test_left_shift_rejects_amount_past_start() {
    let mut a = array(&[1, 2, 3, 4]);

    let result = a.left_shift(1, 2);

    assert_eq!(
        result,
        Err(ArrayError::InvalidShiftAmount {
            index: 1,
            amount: 2
        })
    );
    assert_eq!(a.as_slice(), [1, 2, 3, 4]);
}

#[test]
fn test_left_shift_rejects_index_at_length() {
    let mut a = array(&[1, 2, 3]);

    assert_eq!(
        a.left_shift(3, 0),
        Err(ArrayError::InvalidIndex {
            index: 3,
            length: 3
        })
    );
    assert_eq!(a.as_slice(), [1, 2, 3]);
}

// =============================================================================
// right_shift()
// =============================================================================

#[test]
fn test_right_shift_opens_zeroed_gap() {
    let mut a = array(&[1, 2, 3]);

    a.right_shift(0, 2).expect("Failed to right_shift");

    assert_eq!(a.as_slice(), [0, 0, 1, 2, 3]);
}

#[test]
fn test_right_shift_last_index() {
    let mut a = array(&[1, 2, 3]);

    a.right_shift(2, 1).expect("Failed to right_shift");

    assert_eq!(a.as_slice(), [1, 2, 0, 3]);
}

#[test]
fn test_right_shift_moves_exactly_tail() {
    // Growth past capacity must not read beyond the old length.
    let mut a = array(&[5, 6, 7, 8]);

    a.right_shift(1, 7).expect("Failed to right_shift");

    assert_eq!(a.as_slice(), [5, 0, 0, 0, 0, 0, 0, 0, 6, 7, 8]);
    assert_eq!(a.capacity(), 16);
}

#[test]
fn test_right_shift_rejects_empty() {
    let mut a = DynArray::<i32>::new();

    assert_eq!(
        a.right_shift(0, 1),
        Err(ArrayError::InvalidIndex {
            index: 0,
            length: 0
        })
    );
}

#[test]
fn test_shift_pair_restores_sequence() {
    let mut a = array(&[1, 2, 3, 4, 5]);

    a.right_shift(2, 3).expect("Failed to right_shift");
    a.left_shift(5, 3).expect("Failed to left_shift");

    assert_eq!(a.as_slice(), [1, 2, 3, 4, 5]);
}
