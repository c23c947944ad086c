// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::Lifecycle;

mod concurrency;

/// Counts hook calls for any element type.
#[derive(Debug, Default)]
pub(crate) struct Counter {
    created: AtomicUsize,
    destroyed: AtomicUsize,
    held: AtomicUsize,
    released: AtomicUsize,
}

impl Counter {
    pub(crate) fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub(crate) fn destroyed(&self) -> usize {
        self.destroyed.load(Ordering::SeqCst)
    }

    pub(crate) fn held(&self) -> usize {
        self.held.load(Ordering::SeqCst)
    }

    pub(crate) fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Every hold was either released or ended by the operation that
    /// destroyed the element. Only valid while the array is alive.
    pub(crate) fn assert_balanced(&self) {
        assert_eq!(
            self.held() - self.released(),
            self.destroyed(),
            "unbalanced hold/release"
        );
    }
}

impl<T> Lifecycle<T> for Counter {
    fn on_create(&self, _: &mut T) {
        self.created.fetch_add(1, Ordering::SeqCst);
    }

    fn on_destroy(&self, _: &mut T) {
        self.destroyed.fetch_add(1, Ordering::SeqCst);
    }

    fn on_hold(&self, _: &mut T) {
        self.held.fetch_add(1, Ordering::SeqCst);
    }

    fn on_release(&self, _: &mut T) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Event {
    Create(u32),
    Destroy(u32),
}

/// Records create/destroy events with the value seen by the hook.
#[derive(Debug, Default)]
pub(crate) struct Journal {
    events: Mutex<Vec<Event>>,
}

impl Journal {
    pub(crate) fn take(&self) -> Vec<Event> {
        core::mem::take(&mut *self.events.lock().expect("Failed to lock journal"))
    }

    fn record(&self, event: Event) {
        self.events.lock().expect("Failed to lock journal").push(event);
    }
}

impl Lifecycle<u32> for Journal {
    fn on_create(&self, value: &mut u32) {
        self.record(Event::Create(*value));
    }

    fn on_destroy(&self, value: &mut u32) {
        self.record(Event::Destroy(*value));
    }
}
