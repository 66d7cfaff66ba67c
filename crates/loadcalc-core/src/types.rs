//! Result types shared between the formulas and the renderers.

use serde::Serialize;

/// Which quantity a [`Metric`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    SessionDuration,
    InterArrivalTime,
    CpuLoad,
    MemoryLoad,
}

impl MetricKind {
    /// Text-mode label, without the trailing colon.
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::SessionDuration => "Average session duration",
            MetricKind::InterArrivalTime => "Average inter-arrival time",
            MetricKind::CpuLoad => "Total CPU Load",
            MetricKind::MemoryLoad => "Total Memory Load",
        }
    }
}

/// A single computed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    pub kind: MetricKind,
    pub value: f64,
}

impl Metric {
    pub fn new(kind: MetricKind, value: f64) -> Self {
        Self { kind, value }
    }
}

/// Outcome of `simulate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Scenario name exactly as supplied, including unknown names.
    pub scenario: String,
    pub factor: f64,
    pub cpu_load: f64,
    pub memory_load: f64,
}

impl SimulationReport {
    pub fn cpu(&self) -> Metric {
        Metric::new(MetricKind::CpuLoad, self.cpu_load)
    }

    pub fn memory(&self) -> Metric {
        Metric::new(MetricKind::MemoryLoad, self.memory_load)
    }
}
