// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for shiftbuf-alloc.

use thiserror::Error;

/// The allocator could not satisfy a request.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("failed to allocate {bytes} bytes")]
pub struct AllocError {
    /// Size of the block that was requested.
    pub bytes: usize,
}
