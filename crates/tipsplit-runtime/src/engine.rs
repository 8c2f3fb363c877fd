#![forbid(unsafe_code)]

//! The calculator engine: three input streams in, one result stream out.
//!
//! [`CalculatorEngine::transform`] wires an [`EngineInput`] into an
//! [`EngineOutput`]:
//!
//! ```text
//! bill  ──┐
//! tip   ──┼── combine-latest ── compute() ── results
//! split ──┘
//! reset ─────────────────────────────────── reset_acknowledged
//! ```
//!
//! # Invariants
//!
//! 1. Every bill, tip or split emission yields exactly one result, computed
//!    from the latest value of all three inputs.
//! 2. Before an input emits, its value is taken from the normalised
//!    [`EngineConfig::initial`] (default `(0, Tip::None, 1)`).
//! 3. Every reset emission yields exactly one acknowledgment. A reset does
//!    not recompute and does not clear the held inputs.
//! 4. Dropping the [`EngineOutput`] disconnects it from the inputs.
//!
//! # Usage
//!
//! ```
//! use tipsplit_core::{EngineConfig, Tip};
//! use tipsplit_runtime::{CalculatorEngine, EngineInput};
//!
//! let input = EngineInput::new();
//! let output = CalculatorEngine::new(EngineConfig::default()).transform(&input);
//!
//! input.bill.emit(100.0);
//! input.tip.emit(Tip::TenPercent);
//! input.split.emit(2);
//!
//! assert_eq!(output.latest().amount_per_person, 55.0);
//! ```

use std::cell::Cell;
use std::rc::Rc;

use tipsplit_core::{BillInput, CalculationResult, EngineConfig, Result, Tip, compute};

use crate::reactive::{CombineLatest3, Stream, Subscription};

/// Producer side: the streams the input collaborators emit on.
///
/// Cloning shares the underlying streams.
#[derive(Debug, Clone, Default)]
pub struct EngineInput {
    pub bill: Stream<f64>,
    pub tip: Stream<Tip>,
    pub split: Stream<u32>,
    pub reset: Stream<()>,
}

impl EngineInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Consumer side: derived results and reset acknowledgments.
///
/// Holds the subscriptions on the input streams; dropping it tears them
/// down.
#[derive(Debug)]
pub struct EngineOutput {
    combined: CombineLatest3<f64, Tip, u32, CalculationResult>,
    reset_acknowledged: Stream<()>,
    resets: Rc<Cell<u64>>,
    _reset_subscription: Subscription,
}

impl EngineOutput {
    /// Stream of computed results, one per input emission.
    #[must_use]
    pub fn results(&self) -> Stream<CalculationResult> {
        self.combined.output().changes()
    }

    /// Stream of reset acknowledgments, one per reset trigger.
    #[must_use]
    pub fn reset_acknowledged(&self) -> Stream<()> {
        self.reset_acknowledged.clone()
    }

    /// The most recent result (the initial tuple's result before any input).
    #[must_use]
    pub fn latest(&self) -> CalculationResult {
        self.combined.get()
    }

    /// The latest value held for each input.
    #[must_use]
    pub fn inputs(&self) -> BillInput {
        let (bill, tip, split) = self.combined.latest();
        BillInput { bill, tip, split }
    }

    /// Number of recomputations so far.
    #[must_use]
    pub fn recompute_count(&self) -> u64 {
        self.combined.version()
    }

    /// Number of reset acknowledgments so far.
    #[must_use]
    pub fn reset_count(&self) -> u64 {
        self.resets.get()
    }
}

/// Maps input streams to result streams.
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    config: EngineConfig,
}

impl CalculatorEngine {
    /// Build an engine from `config`, normalising it first.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: config.normalized(),
        }
    }

    /// Build an engine, rejecting a config that is not already normalised.
    pub fn try_new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The normalised config in use.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Subscribe to `input` and return the derived outputs.
    #[must_use]
    pub fn transform(&self, input: &EngineInput) -> EngineOutput {
        let emit_tracing = self.config.emit_tracing;
        let initial = self.config.initial;

        let combined = CombineLatest3::new(
            (&input.bill, &input.tip, &input.split),
            (initial.bill, initial.tip, initial.split),
            move |bill: &f64, tip: &Tip, split: &u32| {
                let result = compute(*bill, *tip, *split);
                if emit_tracing {
                    tracing::debug!(
                        message = "engine.recompute",
                        bill = *bill,
                        tip = %tip,
                        split = *split,
                        total_bill = result.total_bill,
                        total_tip = result.total_tip,
                        amount_per_person = result.amount_per_person
                    );
                }
                result
            },
        );

        let reset_acknowledged = Stream::new();
        let resets = Rc::new(Cell::new(0u64));
        let ack = reset_acknowledged.clone();
        let counter = Rc::clone(&resets);
        let reset_subscription = input.reset.subscribe(move |_: &()| {
            counter.set(counter.get() + 1);
            if emit_tracing {
                tracing::debug!(message = "engine.reset", count = counter.get());
            }
            ack.emit(());
        });

        if emit_tracing {
            tracing::debug!(
                message = "engine.transform",
                bill = initial.bill,
                tip = %initial.tip,
                split = initial.split
            );
        }

        EngineOutput {
            combined,
            reset_acknowledged,
            resets,
            _reset_subscription: reset_subscription,
        }
    }
}
