// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(any(test, feature = "std"))]
use core::time::Duration;

use crate::error::LockError;

/// How long blocking points wait before giving up.
///
/// Applies to element holds, the mutator lock and the commit window.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum AcquirePolicy {
    /// Spin until acquired.
    #[default]
    Blocking,
    /// Give up after this many failed attempts with
    /// [`LockError::Contended`].
    Spins(u32),
    /// Give up once this much time has passed with [`LockError::TimedOut`].
    #[cfg(any(test, feature = "std"))]
    Deadline(Duration),
}

/// Attempts between cooperative yields when a scheduler is available.
#[cfg(any(test, feature = "std"))]
const YIELD_EVERY: u32 = 64;

/// Per-acquisition retry state.
pub(crate) struct Backoff {
    policy: AcquirePolicy,
    attempts: u32,
    #[cfg(any(test, feature = "std"))]
    started: Option<std::time::Instant>,
}

impl Backoff {
    pub(crate) fn new(policy: AcquirePolicy) -> Self {
        Self {
            policy,
            attempts: 0,
            #[cfg(any(test, feature = "std"))]
            started: None,
        }
    }

    /// Records a failed attempt and waits a little.
    ///
    /// Returns an error once the policy says to stop.
    pub(crate) fn spin(&mut self) -> Result<(), LockError> {
        self.attempts = self.attempts.saturating_add(1);

        match self.policy {
            AcquirePolicy::Blocking => {}
            AcquirePolicy::Spins(limit) => {
                if self.attempts >= limit {
                    tracing::warn!(attempts = self.attempts, "lock still contended, giving up");
                    return Err(LockError::Contended {
                        attempts: self.attempts,
                    });
                }
            }
            #[cfg(any(test, feature = "std"))]
            AcquirePolicy::Deadline(limit) => {
                let started = *self.started.get_or_insert_with(std::time::Instant::now);
                if started.elapsed() >= limit {
                    tracing::warn!(attempts = self.attempts, "lock acquisition timed out");
                    return Err(LockError::TimedOut);
                }
            }
        }

        #[cfg(any(test, feature = "std"))]
        if self.attempts % YIELD_EVERY == 0 {
            std::thread::yield_now();
            return Ok(());
        }

        core::hint::spin_loop();
        Ok(())
    }

    pub(crate) fn attempts(&self) -> u32 {
        self.attempts
    }
}
