#![forbid(unsafe_code)]

//! tipsplit public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users.

pub use tipsplit_core::{
    BillInput, CalculationResult, ConfigError, EngineConfig, Error, InputError, Result, Tip,
    compute,
};

pub mod prelude {
    pub use tipsplit_core as core;
    #[cfg(feature = "runtime")]
    pub use tipsplit_runtime as runtime;

    pub use tipsplit_core::{BillInput, CalculationResult, EngineConfig, Tip, compute};
    #[cfg(feature = "runtime")]
    pub use tipsplit_runtime::{CalculatorEngine, CalculatorSession, EngineInput, EngineOutput};
}
