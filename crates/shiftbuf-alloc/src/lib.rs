// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # shiftbuf_alloc
//!
//! Fallible raw allocation for the shiftbuf containers.
//!
//! Containers never call the global allocator directly. They go through the
//! [`Allocator`] trait, which reports failure as a value instead of aborting,
//! so a failed growth or shrink can be rolled back.
//!
//! ## Core Types
//!
//! - [`Global`]: Delegates to `alloc::alloc` (the registered global allocator)
//! - [`AllocError`]: Returned when the allocator cannot satisfy a request
//!
//! ## Example
//!
//! ```rust
//! use core::alloc::Layout;
//! use shiftbuf_alloc::{Allocator, Global};
//!
//! let layout = Layout::array::<u32>(8).expect("Failed to build layout");
//! let ptr = Global.allocate(layout).expect("Failed to allocate");
//!
//! // SAFETY: `ptr` was returned by `Global.allocate` with the same layout.
//! unsafe { Global.deallocate(ptr, layout) };
//! ```
//!
//! ## Test Utilities
//!
//! Enable the `test-utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! shiftbuf-alloc = { version = "*", features = ["test-utils"] }
//! ```
//!
//! Then use [`test_utils::MockAllocator`] with a
//! [`test_utils::MockAllocatorBehaviour`] to fail the Nth allocation or
//! reallocation.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod global;
mod support;
mod traits;

pub use error::AllocError;
pub use global::Global;
pub use traits::Allocator;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
