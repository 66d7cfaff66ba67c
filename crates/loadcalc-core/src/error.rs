//! Calculator error types.

use thiserror::Error;

/// Validation failures raised by the guarded workload formulas.
///
/// The display strings are the exact lines shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Number of sessions must be greater than 0.")]
    NonPositiveSessions,

    #[error("Number of intervals must be greater than 0.")]
    NonPositiveIntervals,

    #[error("All inputs must be greater than 0.")]
    NonPositiveInputs,
}

pub type CalcResult<T> = Result<T, CalcError>;

/// Errors that can occur while loading or writing `loadcalc.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("output precision {0} is out of range (max {max})", max = crate::config::MAX_PRECISION)]
    InvalidPrecision(usize),
}
