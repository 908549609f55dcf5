//! Callback handles and change notifications.
//!
//! ## Usage
//!
//! Subscribe to a widget's [`Signal`] with [`Signal::connect`]; every
//! subscriber runs synchronously, in registration order, each time the
//! signal is emitted.
//!
//! ```
//! use std::sync::{Arc, atomic::{AtomicI32, Ordering}};
//! use range_slider::Signal;
//!
//! let signal = Signal::<i32>::new();
//! let last = Arc::new(AtomicI32::new(0));
//! let sink = Arc::clone(&last);
//! let id = signal.connect(move |value| sink.store(value, Ordering::SeqCst));
//!
//! signal.emit(7);
//! assert_eq!(last.load(Ordering::SeqCst), 7);
//!
//! assert!(signal.disconnect(id));
//! signal.emit(9);
//! assert_eq!(last.load(Ordering::SeqCst), 7);
//! ```

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use parking_lot::Mutex;
use smallvec::SmallVec;

/// Stable, comparable callback handle for `Fn(T)`.
///
/// `CallbackWith` compares by identity (`Arc::ptr_eq`), so two handles are
/// equal only when they share the same closure.
pub struct CallbackWith<T> {
    inner: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> CallbackWith<T> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(handler),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) {
        (self.inner)(value)
    }
}

impl<T, F> From<F> for CallbackWith<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T> Clone for CallbackWith<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for CallbackWith<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Eq for CallbackWith<T> {}

impl<T> std::fmt::Debug for CallbackWith<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackWith").finish_non_exhaustive()
    }
}

/// Identifies one subscription on one [`Signal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// An ordered list of subscribers notified synchronously on [`emit`](Self::emit).
///
/// Subscribers receive a clone of the payload. A subscriber may connect or
/// disconnect other subscribers while being notified; such changes take
/// effect from the next emission.
pub struct Signal<T> {
    subscribers: Mutex<SmallVec<[(SubscriptionId, CallbackWith<T>); 2]>>,
    next_id: AtomicU64,
}

impl<T: Clone> Signal<T> {
    /// Creates a signal with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(SmallVec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Appends a subscriber and returns the id needed to remove it.
    pub fn connect<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.connect_callback(CallbackWith::new(handler))
    }

    /// Like [`connect`](Self::connect), for an existing callback handle.
    /// The same handle may be connected more than once.
    pub fn connect_callback(&self, callback: CallbackWith<T>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers.lock().push((id, callback));
        id
    }

    /// Removes a subscriber. Returns `false` if `id` was not connected.
    pub fn disconnect(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    /// Removes every subscriber.
    pub fn clear(&self) {
        self.subscribers.lock().clear();
    }

    /// Number of connected subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    /// Calls every subscriber with `value`, in registration order.
    pub fn emit(&self, value: T) {
        // Snapshot so handlers can (dis)connect without deadlocking.
        let snapshot: SmallVec<[CallbackWith<T>; 2]> = self
            .subscribers
            .lock()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in snapshot {
            callback.call(value.clone());
        }
    }
}

impl<T: Clone> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscribers.lock().len())
            .finish()
    }
}
