#![forbid(unsafe_code)]

//! Headless calculator session.
//!
//! A [`CalculatorSession`] plays the part of the screen: it owns the input
//! producers (bill text field, tip buttons, custom-tip dialog, split stepper
//! and the reset gesture), feeds them into a [`CalculatorEngine`], and keeps
//! the values each control would display.
//!
//! The engine only acknowledges a reset. Clearing the controls is the
//! producers' job, so the session listens for the acknowledgment and re-emits
//! the initial tuple on all three inputs. The controls, the engine and the
//! reset path all read that tuple from the same normalised config.

use std::cell::RefCell;
use std::rc::Rc;

use tipsplit_core::{
    BillInput, CalculationResult, EngineConfig, InputError, Result, ResultDisplay, SplitCounter,
    Tip, custom_tip_label, parse_bill, parse_custom_tip,
};

use crate::engine::{CalculatorEngine, EngineInput, EngineOutput};
use crate::reactive::Subscription;

/// What the input controls currently show.
#[derive(Debug, Clone)]
struct Controls {
    bill_text: String,
    tip: Tip,
    split: SplitCounter,
}

impl Controls {
    fn new(config: &EngineConfig) -> Self {
        let split = SplitCounter::new(config.initial.split);
        let split = match config.max_split {
            Some(max) => split.with_max(max),
            None => split,
        };
        Self {
            bill_text: initial_bill_text(config.initial.bill),
            tip: config.initial.tip,
            split,
        }
    }
}

fn initial_bill_text(bill: f64) -> String {
    if bill > 0.0 {
        bill.to_string()
    } else {
        String::new()
    }
}

/// Input controls wired to a calculator engine.
#[derive(Debug)]
pub struct CalculatorSession {
    input: EngineInput,
    output: EngineOutput,
    controls: Rc<RefCell<Controls>>,
    _reset_subscription: Subscription,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CalculatorSession {
    /// Build a session from `config`, normalising it first.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_engine(CalculatorEngine::new(config))
    }

    /// Build a session, rejecting a config that is not already normalised.
    pub fn try_new(config: EngineConfig) -> Result<Self> {
        Ok(Self::with_engine(CalculatorEngine::try_new(config)?))
    }

    fn with_engine(engine: CalculatorEngine) -> Self {
        let config = engine.config();
        let input = EngineInput::new();
        let output = engine.transform(&input);
        let controls = Rc::new(RefCell::new(Controls::new(config)));

        let producers = input.clone();
        let state = Rc::clone(&controls);
        let emit_tracing = config.emit_tracing;
        let BillInput { bill, tip, split } = config.initial;
        let reset_subscription = output.reset_acknowledged().subscribe(move |_: &()| {
            {
                let mut controls = state.borrow_mut();
                controls.bill_text = initial_bill_text(bill);
                controls.tip = tip;
                controls.split.reset();
            }
            if emit_tracing {
                tracing::debug!(message = "session.reset", bill, tip = %tip, split);
            }
            producers.bill.emit(bill);
            producers.tip.emit(tip);
            producers.split.emit(split);
        });

        Self {
            input,
            output,
            controls,
            _reset_subscription: reset_subscription,
        }
    }

    /// Type into the bill field. Unparsable text counts as 0.
    pub fn enter_bill(&self, text: &str) {
        self.controls.borrow_mut().bill_text = text.to_owned();
        self.input.bill.emit(parse_bill(text));
    }

    /// Tap a tip button.
    pub fn select_tip(&self, tip: Tip) {
        self.controls.borrow_mut().tip = tip;
        self.input.tip.emit(tip);
    }

    /// Confirm the custom-tip dialog with `text`.
    ///
    /// On error nothing is emitted and the previous tip stays selected.
    pub fn enter_custom_tip(&self, text: &str) -> std::result::Result<Tip, InputError> {
        let tip = parse_custom_tip(text)?;
        self.select_tip(tip);
        Ok(tip)
    }

    /// Tap the split "+" button. Returns the new split.
    pub fn increment_split(&self) -> u32 {
        self.step_split(SplitCounter::increment)
    }

    /// Tap the split "-" button. Returns the new split.
    pub fn decrement_split(&self) -> u32 {
        self.step_split(SplitCounter::decrement)
    }

    fn step_split(&self, step: fn(&mut SplitCounter) -> bool) -> u32 {
        let (changed, value) = {
            let mut controls = self.controls.borrow_mut();
            let changed = step(&mut controls.split);
            (changed, controls.split.value())
        };
        if changed {
            self.input.split.emit(value);
        }
        value
    }

    /// Fire the reset gesture.
    pub fn request_reset(&self) {
        self.input.reset.emit(());
    }

    #[must_use]
    pub fn result(&self) -> CalculationResult {
        self.output.latest()
    }

    #[must_use]
    pub fn display(&self) -> ResultDisplay {
        ResultDisplay::from(&self.result())
    }

    #[must_use]
    pub fn bill_text(&self) -> String {
        self.controls.borrow().bill_text.clone()
    }

    #[must_use]
    pub fn tip(&self) -> Tip {
        self.controls.borrow().tip
    }

    #[must_use]
    pub fn split(&self) -> u32 {
        self.controls.borrow().split.value()
    }

    /// Label of the custom-tip button.
    #[must_use]
    pub fn custom_tip_label(&self) -> String {
        custom_tip_label(self.tip())
    }

    #[must_use]
    pub fn reset_count(&self) -> u64 {
        self.output.reset_count()
    }

    #[must_use]
    pub fn input(&self) -> &EngineInput {
        &self.input
    }

    #[must_use]
    pub fn output(&self) -> &EngineOutput {
        &self.output
    }
}
