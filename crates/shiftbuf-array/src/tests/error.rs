// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use shiftbuf_alloc::AllocError;

use crate::{ArrayError, ErrorKind};

#[test]
fn test_from_alloc_error() {
    let err = ArrayError::from(AllocError { bytes: 128 });

    assert_eq!(err, ArrayError::AllocationFailed { bytes: 128 });
    assert_eq!(err.kind(), ErrorKind::AllocationFailed);
}

#[test]
fn test_kind_mapping() {
    let cases = [
        (ArrayError::CapacityOverflow, ErrorKind::CapacityOverflow),
        (
            ArrayError::InvalidIndex {
                index: 1,
                length: 0,
            },
            ErrorKind::InvalidIndex,
        ),
        (
            ArrayError::InvalidShiftAmount {
                index: 1,
                amount: 2,
            },
            ErrorKind::InvalidShiftAmount,
        ),
        (
            ArrayError::InvalidCount {
                count: 3,
                length: 2,
            },
            ErrorKind::InvalidCount,
        ),
        (ArrayError::NotFound, ErrorKind::NotFound),
    ];

    for (err, kind) in cases {
        assert_eq!(err.kind(), kind);
    }
}

#[test]
fn test_kind_names_are_unique() {
    let mut names: Vec<&str> = ErrorKind::ALL.iter().map(|kind| kind.name()).collect();
    names.sort_unstable();
    names.dedup();

    assert_eq!(names.len(), ErrorKind::ALL.len());
    assert_eq!(ErrorKind::InvalidShiftAmount.name(), "INVALID_SHIFT_AMOUNT");
    assert_eq!(format!("{}", ErrorKind::NotFound), "NOT_FOUND");
}

#[test]
fn test_display() {
    let err = ArrayError::InvalidIndex {
        index: 4,
        length: 2,
    };

    assert_eq!(format!("{err}"), "index 4 out of bounds for length 2");
}
