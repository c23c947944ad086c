// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::policy::GrowthPolicy;

/// Construction options for [`DynArray`](crate::DynArray).
///
/// ```rust
/// use shiftbuf_array::{ArrayConfig, DynArray, GrowthPolicy};
///
/// let config = ArrayConfig::new().with_policy(GrowthPolicy::QuarterShrink);
/// let array = DynArray::<u8>::with_config(config);
///
/// assert_eq!(array.policy(), GrowthPolicy::QuarterShrink);
/// ```
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct ArrayConfig {
    /// Capacity rule applied on every resize.
    pub policy: GrowthPolicy,
}

impl ArrayConfig {
    /// Returns the default configuration ([`GrowthPolicy::Halving`]).
    pub const fn new() -> Self {
        Self {
            policy: GrowthPolicy::Halving,
        }
    }

    /// Sets the growth policy.
    pub const fn with_policy(mut self, policy: GrowthPolicy) -> Self {
        self.policy = policy;
        self
    }
}
