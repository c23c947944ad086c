// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Rule mapping a requested length to a capacity.
///
/// Growth always doubles from the current capacity (starting at 1) until the
/// length fits. The variants differ only in when they shrink.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum GrowthPolicy {
    /// Halve while `length < capacity / 2`.
    ///
    /// A length that oscillates across a power of two reallocates on every
    /// crossing.
    #[default]
    Halving,
    /// Halve while `length < capacity / 4`.
    ///
    /// Leaves a dead zone between one quarter and one half occupancy in which
    /// no reallocation happens.
    QuarterShrink,
}

impl GrowthPolicy {
    /// Returns the capacity a buffer of `capacity` slots should have to hold
    /// `length` elements, or `None` if doubling overflows `usize`.
    ///
    /// Callers handle `length == 0` themselves (the allocation is kept).
    pub fn next_capacity(self, length: usize, capacity: usize) -> Option<usize> {
        if length > capacity {
            let mut grown = capacity.max(1);
            while grown < length {
                grown = grown.checked_mul(2)?;
            }
            return Some(grown);
        }

        let divisor = match self {
            GrowthPolicy::Halving => 2,
            GrowthPolicy::QuarterShrink => 4,
        };

        let mut shrunk = capacity;
        while length < shrunk / divisor {
            shrunk /= 2;
        }

        Some(shrunk)
    }
}
