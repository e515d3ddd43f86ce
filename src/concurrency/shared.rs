//! Cooperative shared/exclusive lock surface for containers
//!
//! `List` and `Queue` never lock inside their own operations. Single-threaded
//! code works on them directly through `&mut`, which the borrow checker
//! already proves exclusive. When several threads need the same container,
//! move it into a [`Shared`] and acquire the lock around whatever sequence of
//! operations has to look atomic to the other threads:
//!
//! - `lock()` / `try_lock()` acquire the exclusive side
//! - `read()` / `try_read()` acquire the shared side
//! - dropping the guard (or [`Shared::unlock`] / [`Shared::unlock_read`])
//!   releases it
//!
//! Acquisition blocks synchronously with no timeout. The lock is not
//! reentrant: acquiring it again on a thread that already holds the exclusive
//! side deadlocks. That includes formatting or serializing the `Shared` itself
//! while holding its guard.

use crate::containers::{List, Queue};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Exclusive guard returned by [`Shared::lock`]
pub type SharedWriteGuard<'a, C> = RwLockWriteGuard<'a, C>;

/// Shared guard returned by [`Shared::read`]
pub type SharedReadGuard<'a, C> = RwLockReadGuard<'a, C>;

/// A [`List`] behind the cooperative lock
pub type SharedList<E> = Shared<List<E>>;

/// A [`Queue`] behind the cooperative lock
pub type SharedQueue<E> = Shared<Queue<E>>;

/// Container paired with a reader-writer lock that callers acquire explicitly.
///
/// # Examples
///
/// ```rust
/// use collectkit::{Queue, SharedQueue};
/// use std::sync::Arc;
/// use std::thread;
///
/// let queue: Arc<SharedQueue<i32>> = Arc::new(Queue::new().into_shared());
///
/// let handles: Vec<_> = (0..4)
///     .map(|i| {
///         let queue = Arc::clone(&queue);
///         thread::spawn(move || queue.lock().enqueue(i))
///     })
///     .collect();
/// for handle in handles {
///     assert!(handle.join().unwrap());
/// }
///
/// assert_eq!(queue.read().len(), 4);
/// ```
pub struct Shared<C> {
    inner: RwLock<C>,
}

impl<C> Shared<C> {
    /// Wrap `value` in a new, unlocked lock
    pub fn new(value: C) -> Self {
        Self {
            inner: RwLock::new(value),
        }
    }

    /// Acquire the exclusive side, blocking until no reader or writer holds it
    #[inline]
    pub fn lock(&self) -> SharedWriteGuard<'_, C> {
        self.inner.write()
    }

    /// Acquire the exclusive side if it is free right now
    #[inline]
    pub fn try_lock(&self) -> Option<SharedWriteGuard<'_, C>> {
        self.inner.try_write()
    }

    /// Acquire the shared side, blocking while a writer holds the lock
    #[inline]
    pub fn read(&self) -> SharedReadGuard<'_, C> {
        self.inner.read()
    }

    /// Acquire the shared side if no writer holds the lock right now
    #[inline]
    pub fn try_read(&self) -> Option<SharedReadGuard<'_, C>> {
        self.inner.try_read()
    }

    /// Release an exclusive acquisition
    #[inline]
    pub fn unlock(guard: SharedWriteGuard<'_, C>) {
        drop(guard);
    }

    /// Release a shared acquisition
    #[inline]
    pub fn unlock_read(guard: SharedReadGuard<'_, C>) {
        drop(guard);
    }

    /// Run `f` while holding the exclusive side
    pub fn with_lock<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut C) -> R,
    {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Run `f` while holding the shared side
    pub fn with_read<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&C) -> R,
    {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Whether any reader or writer currently holds the lock
    pub fn is_locked(&self) -> bool {
        self.inner.is_locked()
    }

    /// Whether a writer currently holds the lock
    pub fn is_locked_exclusive(&self) -> bool {
        self.inner.is_locked_exclusive()
    }

    /// Access the container without locking; `&mut self` already proves
    /// exclusivity
    #[inline]
    pub fn get_mut(&mut self) -> &mut C {
        self.inner.get_mut()
    }

    /// Unwrap the container
    pub fn into_inner(self) -> C {
        self.inner.into_inner()
    }
}

impl<C: Default> Default for Shared<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C> From<C> for Shared<C> {
    fn from(value: C) -> Self {
        Self::new(value)
    }
}

impl<C: fmt::Debug> fmt::Debug for Shared<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_read() {
            Some(guard) => f.debug_struct("Shared").field("inner", &*guard).finish(),
            None => f.debug_struct("Shared").field("inner", &"<locked>").finish(),
        }
    }
}

impl<C: fmt::Display> fmt::Display for Shared<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner.read(), f)
    }
}

impl<C: Serialize> Serialize for Shared<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.read().serialize(serializer)
    }
}

impl<'de, C: Deserialize<'de>> Deserialize<'de> for Shared<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        C::deserialize(deserializer).map(Shared::new)
    }
}
