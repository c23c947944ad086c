// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use shiftbuf_test_utils::Tracked;

use crate::Zeroable;

// SAFETY: `Tracked` is a transparent `u32`; zero is its empty value.
unsafe impl Zeroable for Tracked {}

mod error;
mod properties;
mod shift;
mod splice;
