// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// One structural change applied to a sequence of `len` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpliceCase {
    /// Length before the change.
    pub len: usize,
    /// First affected index.
    pub at: usize,
    /// Elements removed at `at`.
    pub remove: usize,
    /// Slots opened at `at`.
    pub insert: usize,
}

impl SpliceCase {
    /// Applies the change to a reference `Vec`, filling opened slots with
    /// `fill`.
    pub fn apply_to<T: Clone>(&self, model: &mut Vec<T>, fill: T) {
        model.splice(
            self.at..self.at + self.remove,
            std::iter::repeat_n(fill, self.insert),
        );
    }

    /// Length after the change.
    pub fn new_len(&self) -> usize {
        self.len - self.remove + self.insert
    }
}

/// Calls `callback` for every valid `(len, at, remove, insert)` with
/// `len <= max_len` and `insert <= max_insert`.
///
/// # Example
/// ```
/// use shiftbuf_test_utils::splice_cases;
///
/// let mut count = 0;
/// splice_cases(1, 1, |_| count += 1);
/// // len 0: (0,0,0) (0,0,1); len 1: at 0 x remove {0,1} x insert {0,1}, at 1 x insert {0,1}
/// assert_eq!(count, 8);
/// ```
pub fn splice_cases<F>(max_len: usize, max_insert: usize, mut callback: F)
where
    F: FnMut(SpliceCase),
{
    for len in 0..=max_len {
        for at in 0..=len {
            for remove in 0..=len - at {
                for insert in 0..=max_insert {
                    callback(SpliceCase {
                        len,
                        at,
                        remove,
                        insert,
                    });
                }
            }
        }
    }
}
