#![forbid(unsafe_code)]

//! Bill calculation.
//!
//! [`compute`] maps a `(bill, tip, split)` tuple to a [`CalculationResult`].
//! It is total: malformed inputs are normalised instead of rejected.
//!
//! # Invariants
//!
//! 1. `total_tip == tip.amount_for(bill)` and is never negative.
//! 2. `total_bill == bill + total_tip`.
//! 3. `amount_per_person == total_bill / split` with `split >= 1`.
//! 4. Equal inputs yield bit-identical results (no hidden state).
//!
//! No rounding happens here; formatting is the job of [`crate::display`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tip::{Tip, non_negative};

/// Smallest number of people a bill can be split between.
pub const MIN_SPLIT: u32 = 1;

/// Totals derived from one input tuple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationResult {
    /// Bill plus tip.
    pub total_bill: f64,
    /// Resolved tip amount.
    pub total_tip: f64,
    /// `total_bill` divided by the split count.
    pub amount_per_person: f64,
}

impl CalculationResult {
    /// The result for the default input tuple.
    pub const ZERO: Self = Self {
        total_bill: 0.0,
        total_tip: 0.0,
        amount_per_person: 0.0,
    };

    /// Bitwise equality of all three fields.
    ///
    /// Stricter than `==`: distinguishes `0.0` from `-0.0`.
    #[must_use]
    pub fn bits_eq(&self, other: &Self) -> bool {
        self.total_bill.to_bits() == other.total_bill.to_bits()
            && self.total_tip.to_bits() == other.total_tip.to_bits()
            && self.amount_per_person.to_bits() == other.amount_per_person.to_bits()
    }
}

/// The input tuple: latest bill, tip and split.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BillInput {
    pub bill: f64,
    pub tip: Tip,
    pub split: u32,
}

impl Default for BillInput {
    fn default() -> Self {
        Self {
            bill: 0.0,
            tip: Tip::None,
            split: MIN_SPLIT,
        }
    }
}

impl BillInput {
    #[must_use]
    pub fn new(bill: f64, tip: Tip, split: u32) -> Self {
        Self { bill, tip, split }
    }

    #[must_use]
    pub fn with_bill(mut self, bill: f64) -> Self {
        self.bill = bill;
        self
    }

    #[must_use]
    pub fn with_tip(mut self, tip: Tip) -> Self {
        self.tip = tip;
        self
    }

    #[must_use]
    pub fn with_split(mut self, split: u32) -> Self {
        self.split = split;
        self
    }

    /// Apply the hardening policy: split at least 1, a negative or
    /// non-finite bill or custom tip becomes 0.
    #[must_use]
    pub fn normalized(self) -> Self {
        let tip = match self.tip {
            Tip::Custom { value } => Tip::Custom {
                value: non_negative(value),
            },
            other => other,
        };
        Self {
            bill: non_negative(self.bill),
            tip,
            split: self.split.max(MIN_SPLIT),
        }
    }

    /// Compute the totals for this tuple.
    #[must_use]
    pub fn compute(&self) -> CalculationResult {
        compute(self.bill, self.tip, self.split)
    }
}

/// Compute the totals for a bill, a tip selection and a split count.
///
/// Split values below 1 are clamped to 1. A negative, NaN or infinite bill
/// or custom tip counts as 0.
#[must_use]
pub fn compute(bill: f64, tip: Tip, split: u32) -> CalculationResult {
    let bill = non_negative(bill);
    let split = split.max(MIN_SPLIT);
    let total_tip = tip.amount_for(bill);
    let total_bill = bill + total_tip;
    CalculationResult {
        total_bill,
        total_tip,
        amount_per_person: total_bill / f64::from(split),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_result(result: CalculationResult, total_bill: f64, total_tip: f64, per_person: f64) {
        assert_eq!(result.total_bill, total_bill, "total_bill");
        assert_eq!(result.total_tip, total_tip, "total_tip");
        assert_eq!(result.amount_per_person, per_person, "amount_per_person");
    }

    // =========================================================================
    // Reference scenarios
    // =========================================================================

    #[test]
    fn no_tip_one_person() {
        assert_result(compute(100.0, Tip::None, 1), 100.0, 0.0, 100.0);
    }

    #[test]
    fn no_tip_two_people() {
        assert_result(compute(100.0, Tip::None, 2), 100.0, 0.0, 50.0);
    }

    #[test]
    fn ten_percent_two_people() {
        assert_result(compute(100.0, Tip::TenPercent, 2), 110.0, 10.0, 55.0);
    }

    #[test]
    fn custom_tip_two_people() {
        assert_result(compute(100.0, Tip::custom(10.0), 2), 110.0, 10.0, 55.0);
    }

    #[test]
    fn custom_tip_is_not_a_percentage() {
        assert_result(compute(300.0, Tip::custom(200.0), 2), 500.0, 200.0, 250.0);
    }

    #[test]
    fn presets_then_split() {
        assert_result(compute(100.0, Tip::FifteenPercent, 1), 115.0, 15.0, 115.0);
        assert_result(compute(100.0, Tip::TwentyPercent, 4), 120.0, 20.0, 30.0);
        assert_result(compute(100.0, Tip::TwentyPercent, 2), 120.0, 20.0, 60.0);
    }

    // =========================================================================
    // Hardening
    // =========================================================================

    #[test]
    fn zero_split_is_clamped() {
        assert_eq!(compute(90.0, Tip::None, 0), compute(90.0, Tip::None, 1));
    }

    #[test]
    fn negative_and_non_finite_bill_is_zero() {
        assert_eq!(compute(-50.0, Tip::TenPercent, 2), CalculationResult::ZERO);
        assert_eq!(compute(f64::NAN, Tip::None, 1), CalculationResult::ZERO);
        assert_eq!(compute(f64::INFINITY, Tip::None, 1), CalculationResult::ZERO);
    }

    #[test]
    fn non_finite_custom_tip_is_zero() {
        assert_result(compute(100.0, Tip::custom(f64::INFINITY), 2), 100.0, 0.0, 50.0);
        assert_result(compute(100.0, Tip::custom(f64::NEG_INFINITY), 2), 100.0, 0.0, 50.0);
        let input = BillInput::new(100.0, Tip::custom(f64::INFINITY), 2).normalized();
        assert_eq!(input.tip, Tip::custom(0.0));
    }

    #[test]
    fn default_input_gives_zero() {
        assert!(BillInput::default().compute().bits_eq(&CalculationResult::ZERO));
    }

    #[test]
    fn normalized_clamps_every_field() {
        let input = BillInput::new(-3.0, Tip::custom(-7.0), 0).normalized();
        assert_eq!(input, BillInput::new(0.0, Tip::custom(0.0), 1));
        let untouched = BillInput::new(12.0, Tip::TenPercent, 3);
        assert_eq!(untouched.normalized(), untouched);
    }

    #[test]
    fn recompute_is_bit_identical() {
        let input = BillInput::default()
            .with_bill(87.35)
            .with_tip(Tip::FifteenPercent)
            .with_split(3);
        assert!(input.compute().bits_eq(&input.compute()));
    }

    #[test]
    fn bits_eq_distinguishes_signed_zero() {
        let neg = CalculationResult {
            total_bill: -0.0,
            ..CalculationResult::ZERO
        };
        assert_eq!(neg, CalculationResult::ZERO);
        assert!(!neg.bits_eq(&CalculationResult::ZERO));
    }
}
