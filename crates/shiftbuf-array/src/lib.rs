// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # shiftbuf_array
//!
//! Resizable contiguous array with hysteresis growth, overlap-safe shifts and
//! transactional structural operations.
//!
//! ## Core Types
//!
//! - [`DynArray`]: The user-facing array (insert, erase, push, pop, find)
//! - [`Buffer`]: Raw storage plus the splice primitive every operation uses
//! - [`Splice`]: Validated plan `(at, remove, insert)` for one structural change
//! - [`GrowthPolicy`]: Capacity rule (double on growth, halve on shrink)
//! - [`Zeroable`]: Marker for types whose all-zero bit pattern is valid
//!
//! ## Guarantees
//!
//! - `len() <= capacity()` after every operation
//! - Slots in `[len, capacity)` are all-zero bytes
//! - A failed allocation leaves the array exactly as it was: nothing moved,
//!   nothing dropped
//!
//! ## Example
//!
//! ```rust
//! use shiftbuf_array::{ArrayError, DynArray};
//!
//! fn example() -> Result<(), ArrayError> {
//!     let mut array = DynArray::<u32>::from_slice(&[2, 3, 9, 6, 7])?;
//!
//!     array.right_shift(2, 3)?;
//!     assert_eq!(array.as_slice(), [2, 3, 0, 0, 0, 9, 6, 7]);
//!
//!     array.left_shift(5, 4)?;
//!     assert_eq!(array.as_slice(), [2, 9, 6, 7]);
//!
//!     assert_eq!(array.find_or_push(8)?, 4);
//!     assert_eq!(array.as_slice(), [2, 9, 6, 7, 8]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod buffer;
mod config;
mod dyn_array;
mod error;
mod ops;
mod policy;
mod search;
mod shift;
mod splice;
mod zeroable;

pub use buffer::Buffer;
pub use config::ArrayConfig;
pub use dyn_array::DynArray;
pub use error::{ArrayError, ErrorKind};
pub use policy::GrowthPolicy;
pub use splice::Splice;
pub use zeroable::Zeroable;

pub use shiftbuf_alloc::{AllocError, Allocator, Global};
