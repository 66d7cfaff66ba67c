//! `loadcalc simulate` — scenario-scaled CPU and memory load.

use loadcalc_core::workload;
use tracing::info;

use super::Output;

/// Run the `simulate` command.
///
/// No positivity check is applied to the inputs; see `workload::simulate`.
pub fn simulate(
    out: &Output,
    users: i64,
    requests_per_user: i64,
    cpu_per_request: f64,
    memory_per_request: f64,
    scenario: &str,
) -> anyhow::Result<String> {
    info!(scenario, users, requests_per_user, "simulating load");
    let report = workload::simulate(
        users,
        requests_per_user,
        cpu_per_request,
        memory_per_request,
        scenario,
    );
    out.simulation(&report)
}
