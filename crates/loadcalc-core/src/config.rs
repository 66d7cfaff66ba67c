//! loadcalc.toml configuration parser.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::scenario::DEFAULT_SCENARIO;

/// File name written by `loadcalc config init`.
pub const CONFIG_FILE_NAME: &str = "loadcalc.toml";

pub const DEFAULT_PRECISION: usize = 2;
pub const DEFAULT_UNIT: &str = "units";
pub const MAX_PRECISION: usize = 12;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalcConfig {
    pub output: Option<OutputConfig>,
    pub simulate: Option<SimulateConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub precision: Option<usize>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulateConfig {
    pub default_scenario: Option<String>,
}

/// Resolved rendering settings, after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub precision: usize,
    pub unit: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}

impl CalcConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CalcConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(precision) = self.output.as_ref().and_then(|o| o.precision) {
            if precision > MAX_PRECISION {
                return Err(ConfigError::InvalidPrecision(precision));
            }
        }
        Ok(())
    }

    pub fn output_settings(&self) -> OutputSettings {
        let output = self.output.as_ref();
        OutputSettings {
            precision: output
                .and_then(|o| o.precision)
                .unwrap_or(DEFAULT_PRECISION),
            unit: output
                .and_then(|o| o.unit.clone())
                .unwrap_or_else(|| DEFAULT_UNIT.to_string()),
        }
    }

    /// Scenario used by `simulate` when the flag is not passed.
    pub fn default_scenario(&self) -> &str {
        self.simulate
            .as_ref()
            .and_then(|s| s.default_scenario.as_deref())
            .unwrap_or(DEFAULT_SCENARIO)
    }

    /// Scaffold with every key set to its built-in default.
    pub fn scaffold() -> Self {
        CalcConfig {
            output: Some(OutputConfig {
                precision: Some(DEFAULT_PRECISION),
                unit: Some(DEFAULT_UNIT.to_string()),
            }),
            simulate: Some(SimulateConfig {
                default_scenario: Some(DEFAULT_SCENARIO.to_string()),
            }),
        }
    }
}
