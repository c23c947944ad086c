// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use shiftbuf_array::{ArrayConfig, GrowthPolicy};

use crate::acquire::AcquirePolicy;

/// Construction options for [`HoldArray`](crate::HoldArray).
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct HoldConfig {
    /// Storage options.
    pub array: ArrayConfig,
    /// Wait policy for every blocking point.
    pub acquire: AcquirePolicy,
}

impl HoldConfig {
    /// Returns the default configuration ([`GrowthPolicy::Halving`],
    /// [`AcquirePolicy::Blocking`]).
    pub const fn new() -> Self {
        Self {
            array: ArrayConfig::new(),
            acquire: AcquirePolicy::Blocking,
        }
    }

    /// Sets the growth policy.
    pub const fn with_policy(mut self, policy: GrowthPolicy) -> Self {
        self.array = self.array.with_policy(policy);
        self
    }

    /// Sets the acquisition policy.
    pub const fn with_acquire(mut self, acquire: AcquirePolicy) -> Self {
        self.acquire = acquire;
        self
    }
}
