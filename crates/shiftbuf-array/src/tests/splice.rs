// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{ArrayError, Splice};

// =============================================================================
// left_shift()
// =============================================================================

#[test]
fn test_left_shift_plan() {
    assert_eq!(Splice::left_shift(8, 5, 4), Ok(Some(Splice::new(1, 4, 0))));
    assert_eq!(Splice::left_shift(8, 5, 5), Ok(Some(Splice::new(0, 5, 0))));
}

#[test]
fn test_left_shift_plan_checks_index_before_amount() {
    assert_eq!(
        Splice::left_shift(3, 3, 0),
        Err(ArrayError::InvalidIndex {
            index: 3,
            length: 3
        })
    );
    assert_eq!(Splice::left_shift(3, 2, 0), Ok(None));
}

#[test]
fn test_left_shift_plan_rejects_amount_past_start() {
    assert_eq!(
        Splice::left_shift(8, 2, 3),
        Err(ArrayError::InvalidShiftAmount {
            index: 2,
            amount: 3
        })
    );
}

// =============================================================================
// right_shift()
// =============================================================================

#[test]
fn test_right_shift_plan() {
    assert_eq!(Splice::right_shift(5, 2, 3), Ok(Some(Splice::new(2, 0, 3))));
    assert_eq!(Splice::right_shift(5, 4, 0), Ok(None));
}

#[test]
fn test_right_shift_plan_rejects_index_at_length() {
    assert_eq!(
        Splice::right_shift(5, 5, 1),
        Err(ArrayError::InvalidIndex {
            index: 5,
            length: 5
        })
    );
    assert!(Splice::right_shift(0, 0, 1).is_err());
}

// =============================================================================
// insert() / erase()
// =============================================================================

#[test]
fn test_insert_plan_accepts_append() {
    assert_eq!(Splice::insert(5, 5, 2), Ok(Some(Splice::new(5, 0, 2))));
    assert_eq!(Splice::insert(0, 0, 1), Ok(Some(Splice::new(0, 0, 1))));
}

#[test]
fn test_insert_plan_rejects_past_length() {
    assert_eq!(
        Splice::insert(5, 6, 1),
        Err(ArrayError::InvalidIndex {
            index: 6,
            length: 5
        })
    );
    assert!(Splice::insert(5, 6, 0).is_err());
}

#[test]
fn test_erase_plan_accepts_suffix() {
    assert_eq!(Splice::erase(7, 3, 4), Ok(Some(Splice::new(3, 4, 0))));
    assert_eq!(Splice::erase(7, 0, 7), Ok(Some(Splice::new(0, 7, 0))));
}

#[test]
fn test_erase_plan_errors() {
    assert_eq!(
        Splice::erase(7, 7, 1),
        Err(ArrayError::InvalidIndex {
            index: 7,
            length: 7
        })
    );
    assert_eq!(
        Splice::erase(7, 5, 3),
        Err(ArrayError::InvalidCount {
            count: 3,
            length: 7
        })
    );
    assert_eq!(
        Splice::erase(7, 100, 0),
        Err(ArrayError::InvalidIndex {
            index: 100,
            length: 7
        })
    );
    assert_eq!(Splice::erase(7, 6, 0), Ok(None));
}

// =============================================================================
// push() / pop() / resize()
// =============================================================================

#[test]
fn test_push_pop_plans() {
    assert_eq!(Splice::push(4, 3), Some(Splice::new(4, 0, 3)));
    assert_eq!(Splice::push(4, 0), None);

    assert_eq!(Splice::pop(4, 2), Ok(Some(Splice::new(2, 2, 0))));
    assert_eq!(Splice::pop(4, 0), Ok(None));
    assert_eq!(
        Splice::pop(4, 5),
        Err(ArrayError::InvalidCount {
            count: 5,
            length: 4
        })
    );
}

#[test]
fn test_resize_plans() {
    assert_eq!(Splice::resize(4, 6), Some(Splice::new(4, 0, 2)));
    assert_eq!(Splice::resize(4, 1), Some(Splice::new(1, 3, 0)));
    assert_eq!(Splice::resize(4, 4), None);
}

// =============================================================================
// new_length()
// =============================================================================

#[test]
fn test_new_length_validates_plan() {
    assert_eq!(Splice::new(2, 3, 1).new_length(5), Ok(3));
    assert!(matches!(
        Splice::new(6, 0, 1).new_length(5),
        Err(ArrayError::InvalidIndex { .. })
    ));
    assert!(matches!(
        Splice::new(3, 3, 0).new_length(5),
        Err(ArrayError::InvalidCount { .. })
    ));
    assert_eq!(
        Splice::new(0, 0, usize::MAX).new_length(1),
        Err(ArrayError::CapacityOverflow)
    );
}
