#![forbid(unsafe_code)]

//! Multicast push streams.
//!
//! # Design
//!
//! A [`Stream<T>`] is a shared list of weak subscriber callbacks plus a
//! pending-value queue. [`Stream::emit`] enqueues the value and, unless a
//! delivery is already running on this stream, drains the queue, calling
//! every live subscriber for each value.
//!
//! A stream never completes. It stops delivering only when every
//! [`Subscription`] is dropped.
//!
//! # Failure Modes
//!
//! - **Subscriber panics**: The delivery flag is cleared by a drop guard, so
//!   the stream remains usable. Values still queued behind the panicking one
//!   are discarded.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

struct Callback<T>(Box<dyn Fn(&T)>);

struct StreamInner<T> {
    subscribers: RefCell<Vec<Weak<Callback<T>>>>,
    pending: RefCell<VecDeque<T>>,
    delivering: Cell<bool>,
    /// Number of values delivered so far.
    delivered: Cell<u64>,
}

/// A synchronous, multicast, never-completing stream of values.
///
/// Cloning a `Stream` creates a new handle to the **same** stream: emitting
/// on any clone reaches every subscriber.
pub struct Stream<T> {
    inner: Rc<StreamInner<T>>,
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("subscribers", &self.subscriber_count())
            .field("delivered", &self.inner.delivered.get())
            .finish()
    }
}

impl<T: 'static> Default for Stream<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps a subscriber callback alive. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    _guard: Rc<dyn Any>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

struct DeliveryGuard<'a, T>(&'a StreamInner<T>);

impl<T> Drop for DeliveryGuard<'_, T> {
    fn drop(&mut self) {
        self.0.delivering.set(false);
        if std::thread::panicking() {
            self.0.pending.borrow_mut().clear();
        }
    }
}

impl<T: 'static> Stream<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(StreamInner {
                subscribers: RefCell::new(Vec::new()),
                pending: RefCell::new(VecDeque::new()),
                delivering: Cell::new(false),
                delivered: Cell::new(0),
            }),
        }
    }

    /// Register `callback` for every future value.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong = Rc::new(Callback(Box::new(callback)));
        self.inner
            .subscribers
            .borrow_mut()
            .push(Rc::downgrade(&strong));
        Subscription { _guard: strong }
    }

    /// Push a value to every live subscriber.
    pub fn emit(&self, value: T) {
        self.inner.pending.borrow_mut().push_back(value);
        if self.inner.delivering.get() {
            return;
        }
        self.inner.delivering.set(true);
        let _guard = DeliveryGuard(&*self.inner);
        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(value) = next else { break };
            self.deliver(&value);
        }
    }

    fn deliver(&self, value: &T) {
        // Snapshot so callbacks may subscribe or unsubscribe while running.
        let live: Vec<Rc<Callback<T>>> = {
            let mut subscribers = self.inner.subscribers.borrow_mut();
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };
        for callback in &live {
            (callback.0)(value);
        }
        self.inner.delivered.set(self.inner.delivered.get() + 1);
    }
}

impl<T> Stream<T> {
    /// Number of subscribers whose [`Subscription`] is still alive.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .subscribers
            .borrow()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// Number of values delivered since creation.
    #[must_use]
    pub fn delivered(&self) -> u64 {
        self.inner.delivered.get()
    }
}
