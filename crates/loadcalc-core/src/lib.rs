//! loadcalc-core — workload load formulas.
//!
//! Averages session duration and inter-arrival time, estimates aggregate
//! CPU and memory load, and scales both by a named scenario factor. Every
//! operation is a pure function over scalars; rendering lives in [`report`].

pub mod config;
pub mod error;
pub mod report;
pub mod scenario;
pub mod types;
pub mod workload;

pub use config::{CalcConfig, OutputSettings};
pub use error::{CalcError, CalcResult, ConfigError};
pub use scenario::{Scenario, scenario_factor, scenario_label};
pub use types::*;
pub use workload::*;
