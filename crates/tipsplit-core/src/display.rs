#![forbid(unsafe_code)]

//! Currency display for result labels.
//!
//! US dollars, `en_US` grouping. Whole amounts print without fraction digits
//! (`$110`), everything else with exactly two (`$12.50`).

use crate::calc::CalculationResult;
use crate::tip::Tip;

/// Label shown on the custom-tip button when no custom tip is selected.
pub const CUSTOM_TIP_PLACEHOLDER: &str = "Custom tip";

/// Format `value` as a dollar amount.
///
/// Non-finite values format as an empty string.
#[must_use]
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let magnitude = value.abs();
    let digits = if magnitude == magnitude.round() {
        format!("{magnitude:.0}")
    } else {
        format!("{magnitude:.2}")
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.push('$');
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Label for the custom-tip button given the current selection.
#[must_use]
pub fn custom_tip_label(tip: Tip) -> String {
    match tip {
        Tip::Custom { .. } => tip.label().into_owned(),
        _ => CUSTOM_TIP_PLACEHOLDER.to_owned(),
    }
}

/// Pre-formatted labels for a [`CalculationResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultDisplay {
    pub amount_per_person: String,
    pub total_bill: String,
    pub total_tip: String,
}

impl From<&CalculationResult> for ResultDisplay {
    fn from(result: &CalculationResult) -> Self {
        Self {
            amount_per_person: format_currency(result.amount_per_person),
            total_bill: format_currency(result.total_bill),
            total_tip: format_currency(result.total_tip),
        }
    }
}

impl From<CalculationResult> for ResultDisplay {
    fn from(result: CalculationResult) -> Self {
        Self::from(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_have_no_fraction() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(110.0), "$110");
        assert_eq!(format_currency(-0.0), "$0");
    }

    #[test]
    fn fractional_amounts_have_two_digits() {
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(33.333333), "$33.33");
        assert_eq!(format_currency(0.25), "$0.25");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(1234567.5), "$1,234,567.50");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(100000.0), "$100,000");
    }

    #[test]
    fn negative_amounts_lead_with_minus() {
        assert_eq!(format_currency(-12.5), "-$12.50");
        assert_eq!(format_currency(-2000.0), "-$2,000");
    }

    #[test]
    fn non_finite_is_empty() {
        assert_eq!(format_currency(f64::NAN), "");
        assert_eq!(format_currency(f64::INFINITY), "");
    }

    #[test]
    fn custom_button_label() {
        assert_eq!(custom_tip_label(Tip::None), "Custom tip");
        assert_eq!(custom_tip_label(Tip::TenPercent), "Custom tip");
        assert_eq!(custom_tip_label(Tip::custom(200.0)), "$200");
    }

    #[test]
    fn result_display_formats_each_field() {
        let display = ResultDisplay::from(CalculationResult {
            total_bill: 120.0,
            total_tip: 20.0,
            amount_per_person: 30.0,
        });
        assert_eq!(display.total_bill, "$120");
        assert_eq!(display.total_tip, "$20");
        assert_eq!(display.amount_per_person, "$30");
    }
}
