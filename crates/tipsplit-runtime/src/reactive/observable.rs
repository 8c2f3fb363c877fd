#![forbid(unsafe_code)]

//! Version-tracked current values.
//!
//! An [`Observable<T>`] holds the latest value of something and republishes
//! every accepted write on a [`Stream<T>`]. It is the "current value subject"
//! half of the reactive layer: subscribers get pushed updates, and anyone can
//! read the latest value at any time.
//!
//! # Invariants
//!
//! 1. `version` increments exactly once per accepted write.
//! 2. `set` with a value equal to the current one is a no-op (no version
//!    bump, no notification).
//! 3. `emit` always stores, bumps the version and notifies.
//! 4. Subscribers observe the value being delivered through `get()`. A write
//!    made from inside a notification is queued by the stream and is stored
//!    only when its own delivery starts. No borrow is held across the
//!    notification.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::stream::{Stream, Subscription};

struct ObservableInner<T> {
    value: T,
    version: u64,
}

/// A shared, version-tracked value with change notification.
///
/// Cloning an `Observable` creates a new handle to the **same** value.
pub struct Observable<T> {
    inner: Rc<RefCell<ObservableInner<T>>>,
    changes: Stream<T>,
    /// First subscriber on `changes`; stores each value as delivery begins.
    _store: Rc<Subscription>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            changes: self.changes.clone(),
            _store: Rc::clone(&self._store),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .finish()
    }
}

impl<T: Clone + 'static> Observable<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        let inner = Rc::new(RefCell::new(ObservableInner { value, version: 0 }));
        let changes = Stream::new();
        let weak: Weak<RefCell<ObservableInner<T>>> = Rc::downgrade(&inner);
        let store = changes.subscribe(move |value: &T| {
            if let Some(inner) = weak.upgrade() {
                let mut inner = inner.borrow_mut();
                inner.value = value.clone();
                inner.version += 1;
            }
        });
        Self {
            inner,
            changes,
            _store: Rc::new(store),
        }
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Access the current value by reference.
    ///
    /// # Panics
    ///
    /// Panics if the closure writes to the same `Observable`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Store `value` and notify, even if it equals the current value.
    pub fn emit(&self, value: T) {
        self.changes.emit(value);
    }

    /// Number of accepted writes.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Register `callback` for every future accepted write.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.changes.subscribe(callback)
    }

    /// The stream of accepted writes.
    #[must_use]
    pub fn changes(&self) -> Stream<T> {
        self.changes.clone()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Store `value` and notify, unless it equals the current value.
    ///
    /// Returns `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        if self.inner.borrow().value == value {
            return false;
        }
        self.emit(value);
        true
    }

    /// Modify the value in place through a clone, then `set` it.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut next = self.get();
        f(&mut next);
        self.set(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn get_and_set() {
        let obs = Observable::new(1);
        assert_eq!(obs.get(), 1);
        assert!(obs.set(2));
        assert_eq!(obs.get(), 2);
        assert_eq!(obs.version(), 1);
    }

    #[test]
    fn set_same_value_is_noop() {
        let obs = Observable::new(5);
        let hits = Rc::new(Cell::new(0u32));
        let h = Rc::clone(&hits);
        let _sub = obs.subscribe(move |_| h.set(h.get() + 1));

        assert!(!obs.set(5));
        assert_eq!(obs.version(), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn emit_always_notifies() {
        let obs = Observable::new(5);
        let hits = Rc::new(Cell::new(0u32));
        let h = Rc::clone(&hits);
        let _sub = obs.subscribe(move |_| h.set(h.get() + 1));

        obs.emit(5);
        obs.emit(5);
        assert_eq!(obs.version(), 2);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn subscriber_reads_new_value() {
        let obs = Observable::new(String::from("a"));
        let reader = obs.clone();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = obs.subscribe(move |v: &String| {
            sink.borrow_mut().push((v.clone(), reader.get()));
        });

        obs.set(String::from("b"));
        assert_eq!(
            *seen.borrow(),
            vec![(String::from("b"), String::from("b"))]
        );
    }

    #[test]
    fn reentrant_write_is_stored_when_delivered() {
        let obs = Observable::new(0u32);
        let writer = obs.clone();
        let _first = obs.subscribe(move |v: &u32| {
            if *v == 1 {
                writer.emit(2);
            }
        });
        let reader = obs.clone();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _second = obs.subscribe(move |v: &u32| {
            sink.borrow_mut().push((*v, reader.get()));
        });

        obs.emit(1);
        // The queued 2 is not visible while 1 is still being delivered.
        assert_eq!(*seen.borrow(), vec![(1, 1), (2, 2)]);
        assert_eq!(obs.get(), 2);
        assert_eq!(obs.version(), 2);
    }

    #[test]
    fn update_in_place() {
        let obs = Observable::new(vec![1, 2]);
        assert!(obs.update(|v| v.push(3)));
        assert_eq!(obs.with(|v| v.len()), 3);
        assert!(!obs.update(|_| {}));
    }

    #[test]
    fn changes_stream_is_shared() {
        let obs = Observable::new(0u8);
        let stream = obs.changes();
        let seen = Rc::new(Cell::new(0u8));
        let s = Rc::clone(&seen);
        let _sub = stream.subscribe(move |v| s.set(*v));
        obs.set(9);
        assert_eq!(seen.get(), 9);
    }

    #[test]
    fn debug_format() {
        let obs = Observable::new(42);
        let dbg = format!("{obs:?}");
        assert!(dbg.contains("Observable"));
        assert!(dbg.contains("42"));
    }
}
