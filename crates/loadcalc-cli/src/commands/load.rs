use loadcalc_core::workload;

use super::Output;

pub fn cpu(
    out: &Output,
    users: i64,
    requests_per_user: i64,
    cpu_per_request: f64,
) -> anyhow::Result<String> {
    out.metric(workload::total_cpu_load(users, requests_per_user, cpu_per_request))
}

pub fn memory(
    out: &Output,
    users: i64,
    requests_per_user: i64,
    memory_per_request: f64,
) -> anyhow::Result<String> {
    out.metric(workload::total_memory_load(users, requests_per_user, memory_per_request))
}
