#![forbid(unsafe_code)]

//! Combine-latest over three streams.
//!
//! # Design
//!
//! [`CombineLatest3`] keeps one slot per source, seeded with a default, and a
//! mapping function. When any source emits, the matching slot is overwritten,
//! the map is re-run over all three slots, and the result is pushed to an
//! output [`Observable`] with `emit` (so equal results are still delivered).
//!
//! This is combine-latest, not zip: sources emit independently and with any
//! cardinality. Only the latest value per slot is kept; superseded values are
//! never observed downstream.
//!
//! # Invariants
//!
//! 1. Exactly one recomputation and one output emission per source emission.
//! 2. `version` equals the number of recomputations since construction.
//! 3. Before any source emits, `get()` returns the map applied to the seeds.
//! 4. No borrow of the slots is held while the output notifies.
//!
//! # Failure Modes
//!
//! - **Combinator dropped**: The subscriptions go with it. Later source
//!   emissions are ignored and the output keeps its last value.
//! - **Map panics**: The slot keeps the new value; the output is not
//!   updated for that emission.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::observable::Observable;
use super::stream::{Stream, Subscription};

/// Which source triggered a recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
    Third,
}

/// Shared interior for [`CombineLatest3`].
struct CombineInner<A, B, C, T> {
    latest: (A, B, C),
    map: Box<dyn Fn(&A, &B, &C) -> T>,
    /// Bumped on each recomputation.
    version: u64,
    /// Subscription guards keeping source callbacks alive.
    _subscriptions: Vec<Subscription>,
}

impl<A, B, C, T> CombineInner<A, B, C, T> {
    fn recompute(&mut self) -> T {
        self.version += 1;
        let (a, b, c) = &self.latest;
        (self.map)(a, b, c)
    }
}

/// The latest values of three streams, mapped into one derived value.
///
/// Cloning a `CombineLatest3` creates a new handle to the **same** state.
pub struct CombineLatest3<A, B, C, T> {
    inner: Rc<RefCell<CombineInner<A, B, C, T>>>,
    output: Observable<T>,
}

impl<A, B, C, T> Clone for CombineLatest3<A, B, C, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            output: self.output.clone(),
        }
    }
}

impl<A, B, C, T> fmt::Debug for CombineLatest3<A, B, C, T>
where
    A: fmt::Debug,
    B: fmt::Debug,
    C: fmt::Debug,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("CombineLatest3")
            .field("latest", &inner.latest)
            .field("version", &inner.version)
            .field("output", &self.output)
            .finish()
    }
}

impl<A, B, C, T> CombineLatest3<A, B, C, T>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    T: Clone + 'static,
{
    /// Combine three streams, seeding each slot with `seeds`.
    pub fn new(
        sources: (&Stream<A>, &Stream<B>, &Stream<C>),
        seeds: (A, B, C),
        map: impl Fn(&A, &B, &C) -> T + 'static,
    ) -> Self {
        let initial = map(&seeds.0, &seeds.1, &seeds.2);
        let output = Observable::new(initial);
        let inner = Rc::new(RefCell::new(CombineInner {
            latest: seeds,
            map: Box::new(map),
            version: 0,
            _subscriptions: Vec::new(),
        }));

        let sub1 = sources.0.subscribe(Self::on_emit(
            Rc::downgrade(&inner),
            output.clone(),
            Slot::First,
            |latest, v: &A| latest.0 = v.clone(),
        ));
        let sub2 = sources.1.subscribe(Self::on_emit(
            Rc::downgrade(&inner),
            output.clone(),
            Slot::Second,
            |latest, v: &B| latest.1 = v.clone(),
        ));
        let sub3 = sources.2.subscribe(Self::on_emit(
            Rc::downgrade(&inner),
            output.clone(),
            Slot::Third,
            |latest, v: &C| latest.2 = v.clone(),
        ));

        {
            let mut inner_mut = inner.borrow_mut();
            inner_mut._subscriptions.push(sub1);
            inner_mut._subscriptions.push(sub2);
            inner_mut._subscriptions.push(sub3);
        }

        Self { inner, output }
    }

    fn on_emit<V: 'static>(
        weak: Weak<RefCell<CombineInner<A, B, C, T>>>,
        output: Observable<T>,
        slot: Slot,
        write: impl Fn(&mut (A, B, C), &V) + 'static,
    ) -> impl Fn(&V) + 'static {
        move |value: &V| {
            let Some(strong) = weak.upgrade() else {
                return;
            };
            let result = {
                let mut inner = strong.borrow_mut();
                write(&mut inner.latest, value);
                let result = inner.recompute();
                tracing::trace!(
                    message = "combine.recompute",
                    ?slot,
                    version = inner.version
                );
                result
            };
            output.emit(result);
        }
    }

    /// The current derived value.
    #[must_use]
    pub fn get(&self) -> T {
        self.output.get()
    }

    /// Clone of the latest value held in each slot.
    #[must_use]
    pub fn latest(&self) -> (A, B, C) {
        self.inner.borrow().latest.clone()
    }

    /// Number of recomputations triggered by source emissions.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// The derived value as an [`Observable`].
    #[must_use]
    pub fn output(&self) -> &Observable<T> {
        &self.output
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
