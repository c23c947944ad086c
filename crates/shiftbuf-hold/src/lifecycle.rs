// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Element lifecycle hooks.

use alloc::boxed::Box;
use alloc::sync::Arc;

/// Callbacks fired as elements move through
/// `Uninitialized -> Live -> (Held)* -> Destroyed`.
///
/// All hooks default to no-ops. Hooks run while the element is held and, for
/// `on_create` / `on_destroy`, while the array's commit window is closed:
/// they must not call back into the same array.
pub trait Lifecycle<T>: Send + Sync {
    /// The element became live. Fires once per element, after any inserted
    /// value has been written.
    fn on_create(&self, value: &mut T) {
        let _ = value;
    }

    /// The element is leaving the live range. Fires once per element; the
    /// value is dropped right after.
    fn on_destroy(&self, value: &mut T) {
        let _ = value;
    }

    /// The element was just held.
    fn on_hold(&self, value: &mut T) {
        let _ = value;
    }

    /// The element is about to be released.
    fn on_release(&self, value: &mut T) {
        let _ = value;
    }
}

impl<T> Lifecycle<T> for () {}

impl<T, H> Lifecycle<T> for &H
where
    H: Lifecycle<T> + ?Sized,
{
    fn on_create(&self, value: &mut T) {
        (**self).on_create(value)
    }

    fn on_destroy(&self, value: &mut T) {
        (**self).on_destroy(value)
    }

    fn on_hold(&self, value: &mut T) {
        (**self).on_hold(value)
    }

    fn on_release(&self, value: &mut T) {
        (**self).on_release(value)
    }
}

impl<T, H> Lifecycle<T> for Arc<H>
where
    H: Lifecycle<T> + ?Sized,
{
    fn on_create(&self, value: &mut T) {
        (**self).on_create(value)
    }

    fn on_destroy(&self, value: &mut T) {
        (**self).on_destroy(value)
    }

    fn on_hold(&self, value: &mut T) {
        (**self).on_hold(value)
    }

    fn on_release(&self, value: &mut T) {
        (**self).on_release(value)
    }
}

type Hook<T> = Option<Box<dyn Fn(&mut T) + Send + Sync>>;

/// [`Lifecycle`] built from closures.
///
/// ```rust
/// use core::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// use shiftbuf_hold::{HoldArray, LifecycleFns};
///
/// let created = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&created);
///
/// let hooks = LifecycleFns::new().with_create(move |_: &mut u32| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// let array: HoldArray<u32, _> = HoldArray::new(hooks);
/// array.multi_push([1, 2, 3]).unwrap();
///
/// assert_eq!(created.load(Ordering::SeqCst), 3);
/// ```
pub struct LifecycleFns<T> {
    create: Hook<T>,
    destroy: Hook<T>,
    hold: Hook<T>,
    release: Hook<T>,
}

impl<T> LifecycleFns<T> {
    /// Creates a set of no-op hooks.
    pub fn new() -> Self {
        Self {
            create: None,
            destroy: None,
            hold: None,
            release: None,
        }
    }

    /// Sets the `on_create` hook.
    pub fn with_create<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut T) + Send + Sync + 'static,
    {
        self.create = Some(Box::new(f));
        self
    }

    /// Sets the `on_destroy` hook.
    pub fn with_destroy<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut T) + Send + Sync + 'static,
    {
        self.destroy = Some(Box::new(f));
        self
    }

    /// Sets the `on_hold` hook.
    pub fn with_hold<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut T) + Send + Sync + 'static,
    {
        self.hold = Some(Box::new(f));
        self
    }

    /// Sets the `on_release` hook.
    pub fn with_release<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut T) + Send + Sync + 'static,
    {
        self.release = Some(Box::new(f));
        self
    }
}

impl<T> Default for LifecycleFns<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for LifecycleFns<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LifecycleFns")
            .field("create", &self.create.is_some())
            .field("destroy", &self.destroy.is_some())
            .field("hold", &self.hold.is_some())
            .field("release", &self.release.is_some())
            .finish()
    }
}

impl<T> Lifecycle<T> for LifecycleFns<T> {
    fn on_create(&self, value: &mut T) {
        if let Some(f) = &self.create {
            f(value);
        }
    }

    fn on_destroy(&self, value: &mut T) {
        if let Some(f) = &self.destroy {
            f(value);
        }
    }

    fn on_hold(&self, value: &mut T) {
        if let Some(f) = &self.hold {
            f(value);
        }
    }

    fn on_release(&self, value: &mut T) {
        if let Some(f) = &self.release {
            f(value);
        }
    }
}
