//! Shared state handles.
//!
//! The pager state machine is single-threaded by contract: bounds updates,
//! derived reads and animation ticks happen on one logical thread. Hosts that
//! drive it from several threads wrap it in a [`State`], which serializes
//! every access through a `parking_lot` read-write lock.

use std::{fmt, sync::Arc};

use parking_lot::RwLock;

/// A cloneable handle to a value shared between event handlers.
///
/// ```
/// use swipe_ui::State;
///
/// let count = State::new(0usize);
/// let handle = count.clone();
/// handle.with_mut(|c| *c += 1);
/// assert_eq!(count.with(|c| *c), 1);
/// ```
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> State<T> {
    /// Wraps `value` in a new shared handle.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Execute a closure with a shared reference to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Execute a closure with a mutable reference to the stored value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|value| f.debug_tuple("State").field(value).finish())
    }
}
