#![forbid(unsafe_code)]

//! Errors raised at the edges: text entry and configuration.
//!
//! The calculation itself is total and never returns these.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}

/// Rejected custom-tip text. A rejected entry produces no tip emission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("custom tip is empty")]
    Empty,

    #[error("custom tip is not a whole number: {text:?}")]
    NotANumber { text: String },

    #[error("custom tip is negative: {value}")]
    Negative { value: i64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial split must be at least 1")]
    ZeroSplit,

    #[error("max split must be at least 1")]
    ZeroMaxSplit,

    #[error("initial split {split} exceeds max split {max}")]
    SplitAboveMax { split: u32, max: u32 },

    #[error("initial bill must be a non-negative number, got {value}")]
    NegativeBill { value: f64 },

    #[error("initial custom tip must be a non-negative number, got {value}")]
    NegativeTip { value: f64 },
}

impl InputError {
    #[must_use]
    pub fn not_a_number(text: impl Into<String>) -> Self {
        Self::NotANumber { text: text.into() }
    }
}
