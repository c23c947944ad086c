// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for shiftbuf crates.
//!
//! - [`index_permutations`] / [`apply_permutation`]: exhaustive orderings
//! - [`splice_cases`]: every `(at, remove, insert)` plan up to a length
//! - [`Tracked`]: value with process-wide live/drop accounting
//!
//! ## License
//!
//! GPL-3.0-only

mod permutations;
mod splices;
mod tracked;

pub use permutations::{apply_permutation, index_permutations};
pub use splices::{SpliceCase, splice_cases};
pub use tracked::{Tracked, TrackedStats};
