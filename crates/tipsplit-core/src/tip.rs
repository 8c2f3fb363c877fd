#![forbid(unsafe_code)]

//! Tip selection.
//!
//! A [`Tip`] is either nothing, one of three fixed percentages, or a custom
//! absolute amount. Resolution into a money amount happens in exactly one
//! place, [`Tip::amount_for`], via an exhaustive match.

use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::display::format_currency;

/// How the extra payment on top of the bill is determined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Tip {
    /// No tip.
    #[default]
    None,
    /// 10% of the bill.
    TenPercent,
    /// 15% of the bill.
    FifteenPercent,
    /// 20% of the bill.
    TwentyPercent,
    /// Absolute amount, not a percentage.
    ///
    /// Negative or NaN values resolve to zero; a missing value deserializes
    /// as zero.
    Custom {
        #[cfg_attr(feature = "serde", serde(default))]
        value: f64,
    },
}

impl Tip {
    /// The fixed-percentage presets, in button order.
    pub const PRESETS: [Tip; 3] = [Tip::TenPercent, Tip::FifteenPercent, Tip::TwentyPercent];

    /// Build a custom tip. An absent value is treated as zero.
    #[must_use]
    pub fn custom(value: impl Into<Option<f64>>) -> Self {
        Self::Custom {
            value: value.into().unwrap_or(0.0),
        }
    }

    /// Fraction of the bill for percentage tips.
    #[must_use]
    pub const fn fraction(self) -> Option<f64> {
        match self {
            Self::TenPercent => Some(0.10),
            Self::FifteenPercent => Some(0.15),
            Self::TwentyPercent => Some(0.20),
            Self::None | Self::Custom { .. } => None,
        }
    }

    /// Whether this is a custom absolute amount.
    #[must_use]
    pub const fn is_custom(self) -> bool {
        matches!(self, Self::Custom { .. })
    }

    /// Resolve the tip into an absolute amount for `bill`.
    ///
    /// Finite and non-negative for any finite, non-negative `bill`.
    #[must_use]
    pub fn amount_for(self, bill: f64) -> f64 {
        match self {
            Self::None => 0.0,
            Self::TenPercent | Self::FifteenPercent | Self::TwentyPercent => {
                // fraction() is Some for every arm routed here.
                bill * self.fraction().unwrap_or(0.0)
            }
            Self::Custom { value } => non_negative(value),
        }
    }

    /// Short label as shown on the selection buttons.
    #[must_use]
    pub fn label(self) -> Cow<'static, str> {
        match self {
            Self::None => Cow::Borrowed("No tip"),
            Self::TenPercent => Cow::Borrowed("10%"),
            Self::FifteenPercent => Cow::Borrowed("15%"),
            Self::TwentyPercent => Cow::Borrowed("20%"),
            Self::Custom { value } => Cow::Owned(format_currency(non_negative(value))),
        }
    }
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Keep finite positive values, map everything else (negatives, NaN and
/// infinities) to zero.
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
