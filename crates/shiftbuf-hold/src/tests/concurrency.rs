// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Element access racing structural operations.

use std::sync::Barrier;
use std::thread;
use std::time::Duration;

use super::Counter;
use crate::HoldArray;

const WRITERS: usize = 4;
const INCREMENTS: u64 = 500;
const STRUCTURAL: usize = 100;

#[test]
fn test_increments_survive_concurrent_relocation() {
    let counter = Counter::default();
    let a: HoldArray<u64, _> = HoldArray::create(8, &counter).expect("Failed to create");

    thread::scope(|scope| {
        for _ in 0..WRITERS {
            scope.spawn(|| {
                for _ in 0..INCREMENTS {
                    a.with_mut(0, |value| *value += 1)
                        .expect("Failed to with_mut");
                }
            });
        }

        scope.spawn(|| {
            for step in 0..STRUCTURAL {
                if step % 2 == 0 {
                    a.insert(0, 0).expect("Failed to insert");
                } else {
                    a.push(0).expect("Failed to push");
                }
            }
        });
    });

    let values = a.snapshot().expect("Failed to snapshot");
    assert_eq!(values.len(), 8 + STRUCTURAL);
    assert_eq!(values.iter().sum::<u64>(), WRITERS as u64 * INCREMENTS);

    assert_eq!(counter.created(), 8 + STRUCTURAL);
    assert_eq!(counter.destroyed(), 0);
    counter.assert_balanced();
}

#[test]
fn test_erase_and_push_keep_hook_accounting() {
    let counter = Counter::default();
    let a: HoldArray<u64, _> = HoldArray::new(&counter);
    a.multi_push([0; 16]).expect("Failed to multi_push");

    thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..STRUCTURAL {
                a.push(1).expect("Failed to push");
                a.erase(0).expect("Failed to erase");
            }
        });

        for _ in 0..2 {
            scope.spawn(|| {
                for _ in 0..STRUCTURAL {
                    let len = a.len();
                    // The index may be gone by the time it is held.
                    let _ = a.get(len.saturating_sub(1));
                    let _ = a.find(&1);
                }
            });
        }
    });

    assert_eq!(a.len(), 16);
    assert_eq!(counter.created() - counter.destroyed(), 16);
    counter.assert_balanced();
}

#[test]
fn test_disjoint_elements_are_held_at_once() {
    let a: HoldArray<u32> = HoldArray::new(());
    a.multi_push([1, 2]).expect("Failed to multi_push");
    let barrier = Barrier::new(2);

    thread::scope(|scope| {
        for index in 0..2 {
            let (a, barrier) = (&a, &barrier);
            scope.spawn(move || {
                let mut guard = a.hold(index).expect("Failed to hold");
                // Both guards are alive when the barrier opens.
                barrier.wait();
                *guard *= 10;
            });
        }
    });

    assert_eq!(a.snapshot().expect("Failed to snapshot"), [10, 20]);
}

#[test]
fn test_structural_op_waits_for_guard() {
    let a: HoldArray<u32> = HoldArray::new(());
    a.multi_push([1, 2, 3]).expect("Failed to multi_push");
    let barrier = Barrier::new(2);

    thread::scope(|scope| {
        scope.spawn(|| {
            let mut guard = a.hold(0).expect("Failed to hold");
            barrier.wait();
            thread::sleep(Duration::from_millis(20));
            *guard = 42;
        });

        scope.spawn(|| {
            barrier.wait();
            a.insert(0, 7).expect("Failed to insert");
        });
    });

    assert_eq!(a.snapshot().expect("Failed to snapshot"), [7, 42, 2, 3]);
}

#[test]
fn test_find_or_push_from_many_threads_pushes_once() {
    let a: HoldArray<u32> = HoldArray::new(());

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for value in 0..32 {
                    a.find_or_push(value).expect("Failed to find_or_push");
                }
            });
        }
    });

    let values = a.snapshot().expect("Failed to snapshot");
    assert_eq!(values, (0..32).collect::<Vec<u32>>());
}
