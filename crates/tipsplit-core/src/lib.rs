#![forbid(unsafe_code)]

//! Core: tip model, bill calculation, input normalisation and currency display.
//!
//! Everything in this crate is pure and synchronous. The reactive wiring that
//! recomputes results as inputs change lives in `tipsplit-runtime`.

pub mod calc;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod tip;

pub use calc::{BillInput, CalculationResult, compute};
pub use config::EngineConfig;
pub use display::{ResultDisplay, custom_tip_label, format_currency};
pub use error::{ConfigError, Error, InputError, Result};
pub use input::{SplitCounter, parse_bill, parse_custom_tip};
pub use tip::Tip;
