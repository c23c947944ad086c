// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Permutation utilities for exhaustive testing.

/// Calls `callback` once for every permutation of `[0, 1, ..., len - 1]`.
///
/// Iterative form of Heap's algorithm. `len == 0` yields nothing.
///
/// # Example
/// ```
/// use shiftbuf_test_utils::index_permutations;
///
/// let mut count = 0;
/// index_permutations(4, |_perm| count += 1);
/// assert_eq!(count, 24);
/// ```
pub fn index_permutations<F>(len: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    if len == 0 {
        return;
    }

    let mut indices: Vec<usize> = (0..len).collect();
    let mut counters = vec![0usize; len];

    callback(&indices);

    let mut i = 1;
    while i < len {
        if counters[i] < i {
            let swap_with = if i % 2 == 0 { 0 } else { counters[i] };
            indices.swap(swap_with, i);
            callback(&indices);

            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
}

/// Reorders `slice` so that position `i` receives the element that was at
/// `perm[i]`.
///
/// # Panics
///
/// Panics if `perm` is not a permutation of `0..slice.len()`.
///
/// # Example
/// ```
/// use shiftbuf_test_utils::apply_permutation;
///
/// let mut arr = ['a', 'b', 'c'];
/// apply_permutation(&mut arr, &[2, 0, 1]);
/// assert_eq!(arr, ['c', 'a', 'b']);
/// ```
pub fn apply_permutation<T>(slice: &mut [T], perm: &[usize]) {
    assert_eq!(slice.len(), perm.len(), "permutation length mismatch");

    let mut placed = vec![false; perm.len()];

    for start in 0..perm.len() {
        if placed[start] {
            continue;
        }

        // Walk the cycle: each swap settles `current`.
        let mut current = start;
        loop {
            placed[current] = true;
            let source = perm[current];
            if placed[source] {
                break;
            }
            slice.swap(current, source);
            current = source;
        }
    }
}
