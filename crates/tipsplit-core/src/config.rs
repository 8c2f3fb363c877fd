#![forbid(unsafe_code)]

//! Engine configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calc::{BillInput, MIN_SPLIT};
use crate::error::ConfigError;
use crate::tip::Tip;

/// Configuration for the calculator engine and session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Input tuple used before any input emits and restored on reset.
    /// Default: `(0, Tip::None, 1)`.
    pub initial: BillInput,

    /// Upper bound for the split stepper. Default: unbounded.
    pub max_split: Option<u32>,

    /// Emit `tracing` events for recomputes and resets.
    /// Default: true.
    pub emit_tracing: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial: BillInput::default(),
            max_split: None,
            emit_tracing: true,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_initial(mut self, initial: BillInput) -> Self {
        self.initial = initial;
        self
    }

    #[must_use]
    pub fn with_max_split(mut self, max_split: u32) -> Self {
        self.max_split = Some(max_split);
        self
    }

    #[must_use]
    pub fn with_tracing(mut self, emit_tracing: bool) -> Self {
        self.emit_tracing = emit_tracing;
        self
    }

    /// Bring the config into the form [`validate`](Self::validate) accepts.
    ///
    /// The initial tuple is hardened like any other input, a max split of 0
    /// is raised to 1, and the initial split is lowered to the max.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let max_split = self.max_split.map(|max| max.max(MIN_SPLIT));
        let mut initial = self.initial.normalized();
        if let Some(max) = max_split {
            initial.split = initial.split.min(max);
        }
        Self {
            initial,
            max_split,
            emit_tracing: self.emit_tracing,
        }
    }

    /// Check that the initial tuple is already in normalised form.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let BillInput { bill, tip, split } = self.initial;
        if split < MIN_SPLIT {
            return Err(ConfigError::ZeroSplit);
        }
        if let Some(max) = self.max_split {
            if max < MIN_SPLIT {
                return Err(ConfigError::ZeroMaxSplit);
            }
            if split > max {
                return Err(ConfigError::SplitAboveMax { split, max });
            }
        }
        if !(bill.is_finite() && bill >= 0.0) {
            return Err(ConfigError::NegativeBill { value: bill });
        }
        if let Tip::Custom { value } = tip {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NegativeTip { value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.initial, BillInput::default());
        assert!(config.emit_tracing);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_split() {
        let config = EngineConfig::default().with_initial(BillInput::default().with_split(0));
        assert_eq!(config.validate(), Err(ConfigError::ZeroSplit));
    }

    #[test]
    fn rejects_split_above_max() {
        let config = EngineConfig::default()
            .with_initial(BillInput::default().with_split(6))
            .with_max_split(4);
        assert_eq!(
            config.validate(),
            Err(ConfigError::SplitAboveMax { split: 6, max: 4 })
        );
        let config = EngineConfig::default().with_max_split(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxSplit));
    }

    #[test]
    fn rejects_negative_amounts() {
        let config = EngineConfig::default().with_initial(BillInput::default().with_bill(-1.0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeBill { value: -1.0 })
        );
        let config =
            EngineConfig::default().with_initial(BillInput::default().with_tip(Tip::custom(-2.0)));
        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeTip { value: -2.0 })
        );
    }

    #[test]
    fn normalized_lowers_split_to_max() {
        let config = EngineConfig::default()
            .with_initial(BillInput::new(100.0, Tip::None, 5))
            .with_max_split(2);
        let fixed = config.normalized();
        assert_eq!(fixed.initial, BillInput::new(100.0, Tip::None, 2));
        assert_eq!(fixed.max_split, Some(2));
        assert_eq!(fixed.validate(), Ok(()));
    }

    #[test]
    fn normalized_hardens_every_field() {
        let config = EngineConfig::default()
            .with_initial(BillInput::new(f64::NAN, Tip::custom(f64::INFINITY), 0))
            .with_max_split(0)
            .with_tracing(false);
        let fixed = config.normalized();
        assert_eq!(fixed.initial, BillInput::new(0.0, Tip::custom(0.0), 1));
        assert_eq!(fixed.max_split, Some(1));
        assert!(!fixed.emit_tracing);
        assert_eq!(fixed.validate(), Ok(()));
        assert_eq!(fixed.normalized(), fixed);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_partial_json() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"initial":{"split":2,"tip":{"kind":"ten_percent"}},"emit_tracing":false}"#)
                .expect("valid config json");
        assert_eq!(config.initial, BillInput::new(0.0, Tip::TenPercent, 2));
        assert_eq!(config.max_split, None);
        assert!(!config.emit_tracing);
        assert_eq!(config.validate(), Ok(()));
    }
}
