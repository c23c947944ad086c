// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::{ArrayConfig, ArrayError, DynArray, GrowthPolicy};

#[derive(Debug, Clone)]
enum Op {
    Push(u16),
    Pop,
    MultiPop(usize),
    Insert(usize, Vec<u16>),
    Erase(usize, usize),
    LeftShift(usize, usize),
    RightShift(usize, usize),
    Resize(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u16>().prop_map(Op::Push),
        Just(Op::Pop),
        (0..6usize).prop_map(Op::MultiPop),
        (0..24usize, prop::collection::vec(any::<u16>(), 0..6))
            .prop_map(|(index, items)| Op::Insert(index, items)),
        (0..24usize, 0..6usize).prop_map(|(index, count)| Op::Erase(index, count)),
        (0..24usize, 0..6usize).prop_map(|(index, amount)| Op::LeftShift(index, amount)),
        (0..24usize, 0..6usize).prop_map(|(index, amount)| Op::RightShift(index, amount)),
        (0..24usize).prop_map(Op::Resize),
    ]
}

/// Applies `op` to the `Vec` model with the same validation rules.
fn apply_model(model: &mut Vec<u16>, op: &Op) -> Result<(), ArrayError> {
    let len = model.len();
    match op {
        Op::Push(value) => model.push(*value),
        Op::Pop => {
            model.pop().ok_or(ArrayError::InvalidCount {
                count: 1,
                length: 0,
            })?;
        }
        Op::MultiPop(count) => {
            if *count > len {
                return Err(ArrayError::InvalidCount {
                    count: *count,
                    length: len,
                });
            }
            model.truncate(len - count);
        }
        Op::Insert(index, items) => {
            if *index > len {
                return Err(ArrayError::InvalidIndex {
                    index: *index,
                    length: len,
                });
            }
            model.splice(*index..*index, items.iter().copied());
        }
        Op::Erase(index, count) => {
            if *index >= len {
                return Err(ArrayError::InvalidIndex {
                    index: *index,
                    length: len,
                });
            }
            if *count == 0 {
                return Ok(());
            }
            if index + count > len {
                return Err(ArrayError::InvalidCount {
                    count: *count,
                    length: len,
                });
            }
            model.drain(*index..index + count);
        }
        Op::LeftShift(index, amount) => {
            if *index >= len {
                return Err(ArrayError::InvalidIndex {
                    index: *index,
                    length: len,
                });
            }
            if *amount > *index {
                return Err(ArrayError::InvalidShiftAmount {
                    index: *index,
                    amount: *amount,
                });
            }
            model.drain(index - amount..*index);
        }
        Op::RightShift(index, amount) => {
            if *index >= len {
                return Err(ArrayError::InvalidIndex {
                    index: *index,
                    length: len,
                });
            }
            model.splice(*index..*index, core::iter::repeat_n(0, *amount));
        }
        Op::Resize(new_len) => model.resize(*new_len, 0),
    }
    Ok(())
}

fn apply_array(array: &mut DynArray<u16>, op: &Op) -> Result<(), ArrayError> {
    match op {
        Op::Push(value) => array.push(*value),
        Op::Pop => array.pop().map(|_| ()),
        Op::MultiPop(count) => array.multi_pop(*count),
        Op::Insert(index, items) => array.multi_insert(*index, items.iter().copied()),
        Op::Erase(index, count) => array.multi_erase(*index, *count),
        Op::LeftShift(index, amount) => array.left_shift(*index, *amount),
        Op::RightShift(index, amount) => array.right_shift(*index, *amount),
        Op::Resize(new_len) => array.resize(*new_len),
    }
}

fn policy_strategy() -> impl Strategy<Value = GrowthPolicy> {
    prop_oneof![Just(GrowthPolicy::Halving), Just(GrowthPolicy::QuarterShrink)]
}

proptest! {
    #[test]
    fn prop_matches_vec_model(
        policy in policy_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let mut array = DynArray::<u16>::with_config(ArrayConfig::new().with_policy(policy));
        let mut model = Vec::new();

        for op in &ops {
            let before = array.capacity();
            let expected = apply_model(&mut model, op);
            let actual = apply_array(&mut array, op);

            prop_assert_eq!(actual, expected, "{:?}", op);
            prop_assert_eq!(array.as_slice(), model.as_slice(), "{:?}", op);
            prop_assert!(array.len() <= array.capacity());

            if actual.is_err() {
                prop_assert_eq!(array.capacity(), before);
            }
        }
    }

    #[test]
    fn prop_halving_capacity_stays_tight(
        ops in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let mut array = DynArray::<u16>::new();

        for op in &ops {
            let _ = apply_array(&mut array, op);

            if !array.is_empty() {
                prop_assert!(array.capacity() <= 2 * array.len() + 1, "{:?}", op);
            }
        }
    }

    #[test]
    fn prop_insert_erase_round_trip(
        initial in prop::collection::vec(any::<u16>(), 0..32),
        items in prop::collection::vec(any::<u16>(), 1..8),
        position in any::<prop::sample::Index>(),
    ) {
        let mut array = DynArray::from_slice(&initial).expect("Failed to build array");
        let index = position.index(initial.len() + 1);

        array.multi_insert_from_slice(index, &items).expect("Failed to multi_insert");
        prop_assert_eq!(&array[index..index + items.len()], items.as_slice());

        array.multi_erase(index, items.len()).expect("Failed to multi_erase");
        prop_assert_eq!(array.as_slice(), initial.as_slice());
    }

    #[test]
    fn prop_find_or_push_is_idempotent(
        initial in prop::collection::vec(0..16u16, 0..16),
        value in 0..16u16,
    ) {
        let mut array = DynArray::from_slice(&initial).expect("Failed to build array");

        let first = array.find_or_push(value).expect("Failed to find_or_push");
        let len = array.len();
        let second = array.find_or_push(value).expect("Failed to find_or_push");

        prop_assert_eq!(first, second);
        prop_assert_eq!(array.len(), len);
        prop_assert_eq!(array[first], value);
    }
}
