#![forbid(unsafe_code)]

//! Runtime: reactive streams, the combine-latest calculator engine, and a
//! headless session that drives it.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`). Recomputation runs
//! synchronously inside the `emit` call that delivers an input.

pub mod engine;
pub mod reactive;
pub mod session;

pub use engine::{CalculatorEngine, EngineInput, EngineOutput};
pub use reactive::{CombineLatest3, Observable, Stream, Subscription};
pub use session::CalculatorSession;
