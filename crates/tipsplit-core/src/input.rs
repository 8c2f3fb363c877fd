#![forbid(unsafe_code)]

//! Normalisation of raw user entry into engine inputs.
//!
//! - Bill text: lenient. Anything unparsable becomes `0`.
//! - Custom tip text: strict. A whole, non-negative number or an error, and
//!   an error means nothing is emitted.
//! - Split: a stepper that never goes below 1.

use crate::calc::MIN_SPLIT;
use crate::error::InputError;
use crate::tip::Tip;

/// Parse bill text into a non-negative amount.
///
/// Accepts surrounding whitespace, a leading `$` and `,` grouping. Empty,
/// unparsable, negative and non-finite entries all yield `0.0`.
#[must_use]
pub fn parse_bill(text: &str) -> f64 {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).trim_start();
    let cleaned: String = trimmed.chars().filter(|&c| c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Parse the custom-tip dialog text.
///
/// Stricter than [`parse_bill`]: the text must be a bare integer, so
/// surrounding whitespace, `$` and decimals are rejected.
pub fn parse_custom_tip(text: &str) -> Result<Tip, InputError> {
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    let value: i64 = text.parse().map_err(|_| InputError::not_a_number(text))?;
    if value < 0 {
        return Err(InputError::Negative { value });
    }
    Ok(Tip::custom(value as f64))
}

/// Increment/decrement stepper for the number of people.
///
/// # Invariants
///
/// 1. `value() >= 1` at all times.
/// 2. `value() <= max` when a max is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitCounter {
    value: u32,
    initial: u32,
    max: Option<u32>,
}

impl Default for SplitCounter {
    fn default() -> Self {
        Self::new(MIN_SPLIT)
    }
}

impl SplitCounter {
    /// Create a stepper starting at `initial` (clamped to at least 1).
    #[must_use]
    pub fn new(initial: u32) -> Self {
        let initial = initial.max(MIN_SPLIT);
        Self {
            value: initial,
            initial,
            max: None,
        }
    }

    /// Set an upper bound. A bound of 0 is raised to 1.
    #[must_use]
    pub fn with_max(mut self, max: u32) -> Self {
        let max = max.max(MIN_SPLIT);
        self.max = Some(max);
        self.initial = self.initial.min(max);
        self.value = self.value.min(max);
        self
    }

    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub const fn max(&self) -> Option<u32> {
        self.max
    }

    /// Step up by one. Returns `true` if the value changed.
    pub fn increment(&mut self) -> bool {
        let next = self.value.saturating_add(1);
        let next = self.max.map_or(next, |max| next.min(max));
        self.replace(next)
    }

    /// Step down by one, stopping at 1. Returns `true` if the value changed.
    pub fn decrement(&mut self) -> bool {
        let next = self.value.saturating_sub(1).max(MIN_SPLIT);
        self.replace(next)
    }

    /// Return to the initial value. Returns `true` if the value changed.
    pub fn reset(&mut self) -> bool {
        self.replace(self.initial)
    }

    fn replace(&mut self, next: u32) -> bool {
        let changed = next != self.value;
        self.value = next;
        changed
    }
}
