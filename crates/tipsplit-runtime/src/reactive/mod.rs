#![forbid(unsafe_code)]

//! Reactive primitives for the calculator engine.
//!
//! - [`Stream`]: A multicast, synchronous, never-completing push source.
//! - [`Subscription`]: RAII guard that automatically unsubscribes on drop.
//! - [`Observable`]: A version-tracked current value whose changes are
//!   published on a [`Stream`].
//! - [`CombineLatest3`]: Holds the latest value of three streams and
//!   recomputes a derived [`Observable`] whenever any one of them emits.
//!
//! # Architecture
//!
//! Everything uses `Rc<RefCell<..>>` for single-threaded shared ownership.
//! Subscribers are stored as `Weak` callbacks and cleaned up lazily during
//! emission.
//!
//! # Invariants
//!
//! 1. Subscribers are notified in registration order.
//! 2. Emissions on one stream are delivered in arrival order; an emission
//!    made from inside a subscriber of the same stream is queued until the
//!    current delivery finishes.
//! 3. Dropping a [`Subscription`] removes the callback before the next
//!    emission.
//! 4. `Observable::set` with a value equal to the current one is a no-op;
//!    `Observable::emit` always notifies.
//! 5. `CombineLatest3` recomputes exactly once per source emission.

pub mod combine;
pub mod observable;
pub mod stream;

pub use combine::CombineLatest3;
pub use observable::Observable;
pub use stream::{Stream, Subscription};
