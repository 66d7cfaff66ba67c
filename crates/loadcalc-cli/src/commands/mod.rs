pub mod average;
pub mod config;
pub mod load;
pub mod simulate;

use clap::ValueEnum;
use loadcalc_core::report;
use loadcalc_core::{CalcResult, Metric, OutputSettings, SimulationReport};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Rendering target shared by every calculator command.
pub struct Output {
    format: OutputFormat,
    settings: OutputSettings,
}

impl Output {
    pub fn new(format: OutputFormat, settings: OutputSettings) -> Self {
        Self { format, settings }
    }

    /// Render a guarded result. A validation failure is rendered like any
    /// other output; it is not an error for the caller.
    pub fn metric(&self, result: CalcResult<Metric>) -> anyhow::Result<String> {
        match (result, self.format) {
            (Ok(metric), OutputFormat::Text) => Ok(report::format_metric(&metric, &self.settings)),
            (Ok(metric), OutputFormat::Json) => Ok(report::to_json(&metric)?),
            (Err(e), format) => {
                debug!(error = %e, "validation failed");
                match format {
                    OutputFormat::Text => Ok(report::format_error(&e)),
                    OutputFormat::Json => Ok(report::error_to_json(&e)?),
                }
            }
        }
    }

    pub fn simulation(&self, report: &SimulationReport) -> anyhow::Result<String> {
        match self.format {
            OutputFormat::Text => Ok(report::format_simulation(report, &self.settings)),
            OutputFormat::Json => Ok(report::to_json(report)?),
        }
    }
}
