// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # shiftbuf_hold
//!
//! Thread-safe resizable array whose elements carry their own lock and
//! lifecycle hooks.
//!
//! Every element of a [`HoldArray`] sits next to a lock record. Reading or
//! writing an element means *holding* it; structural operations (insert,
//! erase, shifts, resize) hold every live element before relocating storage,
//! so element access on other threads never observes a half-moved value and
//! never needs a container-wide lock.
//!
//! ## Protocol
//!
//! 1. Structural operations are serialized by a mutator lock.
//! 2. Arguments are validated; nothing changes on failure.
//! 3. Every live element is held, in index order.
//! 4. The access gate closes and in-flight accessors drain.
//! 5. The buffer splice runs; a failed allocation releases every hold and
//!    changes nothing.
//! 6. `on_destroy` fires on removed elements, `on_create` on new ones.
//! 7. Survivors are released at their new indices.
//!
//! ## Example
//!
//! ```rust
//! use shiftbuf_hold::{HoldArray, HoldError};
//!
//! fn example() -> Result<(), HoldError> {
//!     let array = HoldArray::<u64>::new(());
//!     array.multi_push([1, 2, 3])?;
//!
//!     std::thread::scope(|scope| {
//!         scope.spawn(|| array.with_mut(0, |value| *value += 10));
//!         scope.spawn(|| array.insert(1, 7));
//!     });
//!
//!     assert_eq!(array.get(0)?, 11);
//!     assert_eq!(array.len(), 4);
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

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
mod tests;

mod acquire;
mod config;
mod error;
mod gate;
mod guard;
mod hold_array;
mod lifecycle;
mod lock;
mod ops;
mod slot;

pub use acquire::AcquirePolicy;
pub use config::HoldConfig;
pub use error::{HoldError, LockError};
pub use guard::ElementGuard;
pub use hold_array::HoldArray;
pub use lifecycle::{Lifecycle, LifecycleFns};
pub use lock::{RawLock, SpinLock};
