// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Resizable arrays that never lose data to a failed allocation.</em></p>
//!
//! ---
//!
//! Shiftbuf provides a contiguous, growable array whose structural changes
//! (insert, erase, shifts, resize) are planned as a single splice and
//! committed only after any allocation they need has succeeded, and a
//! thread-safe variant whose elements carry their own lock and lifecycle
//! hooks.
//!
//! # Features
//!
//! - **Transactional** - every failed operation leaves length, capacity and
//!   elements untouched
//! - **Zero-filled slots** - unused capacity is always all-zero bytes
//! - **Hysteresis** - capacity doubles on growth and halves on shrink, with an
//!   opt-in quarter-occupancy policy
//! - **Per-element locking** - element access never takes a container-wide
//!   lock
//! - **Lifecycle hooks** - `on_create`, `on_destroy`, `on_hold`, `on_release`
//! - **`no_std` compatible** - only `alloc` is required
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! shiftbuf = { version = "0.1.0-rc.1", features = ["full"] }
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use shiftbuf::array::{ArrayError, DynArray};
//!
//! fn main() -> Result<(), ArrayError> {
//!     let mut array = DynArray::from_slice(&[2u32, 3, 9, 6, 7])?;
//!
//!     array.right_shift(2, 3)?;
//!     assert_eq!(array.as_slice(), [2, 3, 0, 0, 0, 9, 6, 7]);
//!
//!     array.left_shift(5, 4)?;
//!     assert_eq!(array.as_slice(), [2, 9, 6, 7]);
//!
//!     assert_eq!(array.find_or_push(8)?, 4);
//!     Ok(())
//! }
//! ```
//!
//! # Shared arrays
//!
//! ```rust
//! use shiftbuf::hold::{HoldArray, HoldError};
//!
//! fn main() -> Result<(), HoldError> {
//!     let array = HoldArray::<u64>::new(());
//!     array.multi_push([1, 2, 3])?;
//!
//!     std::thread::scope(|scope| {
//!         scope.spawn(|| array.with_mut(0, |value| *value += 10));
//!         scope.spawn(|| array.push(4));
//!     });
//!
//!     assert_eq!(array.snapshot()?, [11, 2, 3, 4]);
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! | Module | Crate | Contents |
//! |--------|-------|----------|
//! | [`alloc`] | `shiftbuf-alloc` | `Allocator` seam, `Global` |
//! | [`array`] | `shiftbuf-array` | `Buffer`, `DynArray`, growth policy, splices |
//! | [`hold`] | `shiftbuf-hold` | `HoldArray`, locks, lifecycle hooks |
//!
//! # Testing
//!
//! The `test-utils` feature exposes a failure-injecting allocator under
//! [`support::test_utils`].
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod support;

pub use shiftbuf_alloc as alloc;
pub use shiftbuf_array as array;
pub use shiftbuf_hold as hold;

pub use shiftbuf_array::{ArrayError, DynArray, GrowthPolicy, Zeroable};
pub use shiftbuf_hold::{HoldArray, HoldError, Lifecycle};
