//! Human-readable and JSON rendering of calculator results.

use serde::Serialize;

use crate::config::OutputSettings;
use crate::error::CalcError;
use crate::scenario::scenario_label;
use crate::types::{Metric, SimulationReport};

pub fn format_metric(metric: &Metric, settings: &OutputSettings) -> String {
    format!(
        "{}: {} {}",
        metric.kind.label(),
        format_value(metric.value, settings.precision),
        settings.unit
    )
}

/// Fixed-point value. NaN is spelled `nan`; infinities already render as
/// `inf` and `-inf`.
fn format_value(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:.precision$}")
    }
}

pub fn format_simulation(report: &SimulationReport, settings: &OutputSettings) -> String {
    let mut out = String::new();
    out.push_str(&format!("Simulation Scenario: {}\n", scenario_label(&report.scenario)));
    out.push_str(&format!("  {}\n", format_metric(&report.cpu(), settings)));
    out.push_str(&format!("  {}", format_metric(&report.memory(), settings)));
    out
}

/// Validation failures are shown as their message, nothing else.
pub fn format_error(err: &CalcError) -> String {
    err.to_string()
}

pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub fn error_to_json(err: &CalcError) -> serde_json::Result<String> {
    to_json(&ErrorBody { error: err.to_string() })
}
