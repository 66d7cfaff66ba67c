use loadcalc_core::workload;

use super::Output;

pub fn session_duration(
    out: &Output,
    total_duration: f64,
    num_sessions: i64,
) -> anyhow::Result<String> {
    out.metric(workload::session_duration(total_duration, num_sessions))
}

pub fn inter_arrival_time(
    out: &Output,
    total_interval: f64,
    num_intervals: i64,
) -> anyhow::Result<String> {
    out.metric(workload::inter_arrival_time(total_interval, num_intervals))
}
