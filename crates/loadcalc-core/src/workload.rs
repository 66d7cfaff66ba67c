//! Workload formulas.
//!
//! ```text
//! session_duration   = total_duration / num_sessions
//! inter_arrival_time = total_interval / num_intervals
//! cpu_load           = users * requests_per_user * cpu_per_request
//! memory_load        = users * requests_per_user * memory_per_request
//! simulate           = cpu_load * factor, memory_load * factor
//! ```
//!
//! Counts are widened to `f64` before multiplying.

use tracing::debug;

use crate::error::{CalcError, CalcResult};
use crate::scenario::{Scenario, scenario_factor};
use crate::types::{Metric, MetricKind, SimulationReport};

/// Average session duration.
///
/// Only `num_sessions` is guarded; a zero or negative total is divided as is.
pub fn session_duration(total_duration: f64, num_sessions: i64) -> CalcResult<Metric> {
    if num_sessions <= 0 {
        return Err(CalcError::NonPositiveSessions);
    }
    let avg = total_duration / num_sessions as f64;
    debug!(total_duration, num_sessions, avg, "session duration");
    Ok(Metric::new(MetricKind::SessionDuration, avg))
}

/// Average time between session arrivals.
pub fn inter_arrival_time(total_interval: f64, num_intervals: i64) -> CalcResult<Metric> {
    if num_intervals <= 0 {
        return Err(CalcError::NonPositiveIntervals);
    }
    let avg = total_interval / num_intervals as f64;
    debug!(total_interval, num_intervals, avg, "inter-arrival time");
    Ok(Metric::new(MetricKind::InterArrivalTime, avg))
}

/// Aggregate CPU demand across all users.
pub fn total_cpu_load(
    users: i64,
    requests_per_user: i64,
    cpu_per_request: f64,
) -> CalcResult<Metric> {
    guarded_load(MetricKind::CpuLoad, users, requests_per_user, cpu_per_request)
}

/// Aggregate memory demand across all users.
pub fn total_memory_load(
    users: i64,
    requests_per_user: i64,
    memory_per_request: f64,
) -> CalcResult<Metric> {
    guarded_load(MetricKind::MemoryLoad, users, requests_per_user, memory_per_request)
}

/// Scenario-scaled CPU and memory load.
///
/// Unlike the other formulas this one does not reject non-positive inputs.
/// Unknown scenario names use the default factor of 1.0.
pub fn simulate(
    users: i64,
    requests_per_user: i64,
    cpu_per_request: f64,
    memory_per_request: f64,
    scenario: &str,
) -> SimulationReport {
    if Scenario::from_name(scenario).is_none() {
        debug!(scenario, "unknown scenario, using default factor");
    }
    let factor = scenario_factor(scenario);

    let report = SimulationReport {
        scenario: scenario.to_string(),
        factor,
        cpu_load: load(users, requests_per_user, cpu_per_request) * factor,
        memory_load: load(users, requests_per_user, memory_per_request) * factor,
    };
    debug!(
        scenario,
        factor,
        cpu = report.cpu_load,
        memory = report.memory_load,
        "simulated load"
    );
    report
}

fn guarded_load(
    kind: MetricKind,
    users: i64,
    requests_per_user: i64,
    per_request: f64,
) -> CalcResult<Metric> {
    // NaN compares false and is let through.
    if users <= 0 || requests_per_user <= 0 || per_request <= 0.0 {
        return Err(CalcError::NonPositiveInputs);
    }
    let value = load(users, requests_per_user, per_request);
    debug!(kind = kind.label(), users, requests_per_user, per_request, value, "load");
    Ok(Metric::new(kind, value))
}

fn load(users: i64, requests_per_user: i64, per_request: f64) -> f64 {
    users as f64 * requests_per_user as f64 * per_request
}
