use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use loadcalc_core::CalcConfig;

mod commands;

use commands::{Output, OutputFormat};

#[derive(Parser)]
#[command(
    name = "loadcalc",
    about = "Workload load calculator: session averages, CPU and memory load",
    version,
    propagate_version = true,
)]
struct Cli {
    /// Optional loadcalc.toml with output and simulate defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output format: text or json
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the average session duration
    #[command(allow_negative_numbers = true)]
    SessionDuration {
        total_duration: f64,
        num_sessions: i64,
    },
    /// Calculate the average inter-arrival time between sessions
    #[command(allow_negative_numbers = true)]
    InterArrivalTime {
        total_interval: f64,
        num_intervals: i64,
    },
    /// Calculate the total CPU load from active users, requests per user,
    /// and CPU usage per request
    #[command(allow_negative_numbers = true)]
    TotalCpuLoad {
        users: i64,
        requests_per_user: i64,
        cpu_per_request: f64,
    },
    /// Calculate the total memory load from active users, requests per
    /// user, and memory usage per request
    #[command(allow_negative_numbers = true)]
    TotalMemoryLoad {
        users: i64,
        requests_per_user: i64,
        memory_per_request: f64,
    },
    /// Simulate total CPU and memory load for a scenario.
    ///
    /// Scenario factors: low = 0.5, average = 1.0, peak = 1.5. Any other
    /// name is accepted and uses 1.0.
    #[command(allow_negative_numbers = true)]
    Simulate {
        users: i64,
        requests_per_user: i64,
        cpu_per_request: f64,
        memory_per_request: f64,
        /// Simulation scenario: 'low', 'average', or 'peak' [default: average]
        #[arg(long, visible_alias = "scenario")]
        simulation_scenario: Option<String>,
    },
    /// Manage the loadcalc.toml config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a loadcalc.toml scaffold with the built-in defaults
    Init {
        #[arg(short, long, default_value = ".")]
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loadcalc=warn,loadcalc_core=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let rendered = run(cli)?;
    println!("{rendered}");
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let config = match &cli.config {
        Some(path) => CalcConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CalcConfig::default(),
    };
    let out = Output::new(cli.format, config.output_settings());

    match cli.command {
        Commands::SessionDuration { total_duration, num_sessions } => {
            commands::average::session_duration(&out, total_duration, num_sessions)
        }
        Commands::InterArrivalTime { total_interval, num_intervals } => {
            commands::average::inter_arrival_time(&out, total_interval, num_intervals)
        }
        Commands::TotalCpuLoad { users, requests_per_user, cpu_per_request } => {
            commands::load::cpu(&out, users, requests_per_user, cpu_per_request)
        }
        Commands::TotalMemoryLoad { users, requests_per_user, memory_per_request } => {
            commands::load::memory(&out, users, requests_per_user, memory_per_request)
        }
        Commands::Simulate {
            users,
            requests_per_user,
            cpu_per_request,
            memory_per_request,
            simulation_scenario,
        } => {
            let scenario = simulation_scenario
                .as_deref()
                .unwrap_or_else(|| config.default_scenario());
            commands::simulate::simulate(
                &out,
                users,
                requests_per_user,
                cpu_per_request,
                memory_per_request,
                scenario,
            )
        }
        Commands::Config { action } => match action {
            ConfigAction::Init { path } => commands::config::init(&path),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn run_args(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("loadcalc").chain(args.iter().copied()))?;
        run(cli)
    }

    #[test]
    fn test_session_duration() {
        let out = run_args(&["session-duration", "100", "4"]).unwrap();
        assert_eq!(out, "Average session duration: 25.00 units");
    }

    #[test]
    fn test_negative_count_reaches_validation() {
        let out = run_args(&["session-duration", "100", "-2"]).unwrap();
        assert_eq!(out, "Number of sessions must be greater than 0.");
    }

    #[test]
    fn test_inter_arrival_time() {
        let out = run_args(&["inter-arrival-time", "10", "4"]).unwrap();
        assert_eq!(out, "Average inter-arrival time: 2.50 units");
    }

    #[test]
    fn test_total_cpu_load() {
        let out = run_args(&["total-cpu-load", "10", "5", "2.0"]).unwrap();
        assert_eq!(out, "Total CPU Load: 100.00 units");

        let out = run_args(&["total-cpu-load", "10", "5", "-2.0"]).unwrap();
        assert_eq!(out, "All inputs must be greater than 0.");
    }

    #[test]
    fn test_total_memory_load() {
        let out = run_args(&["total-memory-load", "10", "5", "1.5"]).unwrap();
        assert_eq!(out, "Total Memory Load: 75.00 units");
    }

    #[test]
    fn test_simulate_defaults_to_average() {
        let out = run_args(&["simulate", "10", "5", "2.0", "1.5"]).unwrap();
        assert!(out.starts_with("Simulation Scenario: Average\n"));
        assert!(out.contains("Total CPU Load: 100.00 units"));
    }

    #[test]
    fn test_simulate_peak() {
        let out = run_args(&["simulate", "10", "5", "2.0", "1.5", "--simulation-scenario", "peak"])
            .unwrap();
        assert_eq!(
            out,
            "Simulation Scenario: Peak\n  Total CPU Load: 150.00 units\n  Total Memory Load: 112.50 units"
        );
    }

    #[test]
    fn test_simulate_scenario_alias() {
        let out = run_args(&["simulate", "10", "5", "2.0", "1.5", "--scenario", "low"]).unwrap();
        assert!(out.contains("Total CPU Load: 50.00 units"));
    }

    #[test]
    fn test_simulate_unknown_scenario() {
        let out = run_args(&["simulate", "10", "5", "2.0", "1.5", "--scenario", "extreme"])
            .unwrap();
        assert!(out.starts_with("Simulation Scenario: Extreme\n"));
        assert!(out.contains("Total Memory Load: 75.00 units"));
    }

    #[test]
    fn test_json_format() {
        let out = run_args(&["--format", "json", "total-cpu-load", "10", "5", "2.0"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["kind"], "cpu_load");
        assert_eq!(v["value"], 100.0);

        let out = run_args(&["session-duration", "1", "0", "--format", "json"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["error"], "Number of sessions must be greater than 0.");
    }

    #[test]
    fn test_config_file_changes_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loadcalc.toml");
        fs::write(
            &path,
            "[output]\nprecision = 1\nunit = \"cores\"\n\n[simulate]\ndefault_scenario = \"peak\"\n",
        )
        .unwrap();
        let config = path.to_str().unwrap();

        let out = run_args(&["--config", config, "total-cpu-load", "10", "5", "2.0"]).unwrap();
        assert_eq!(out, "Total CPU Load: 100.0 cores");

        let out = run_args(&["--config", config, "simulate", "10", "5", "2.0", "1.5"]).unwrap();
        assert!(out.starts_with("Simulation Scenario: Peak\n"));

        let out = run_args(&[
            "--config", config, "simulate", "10", "5", "2.0", "1.5", "--scenario", "low",
        ])
        .unwrap();
        assert!(out.starts_with("Simulation Scenario: Low\n"));
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let result = run_args(&["--config", path.to_str().unwrap(), "session-duration", "1", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_positional_is_rejected() {
        assert!(Cli::try_parse_from(["loadcalc", "total-cpu-load", "10", "5"]).is_err());
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        assert!(Cli::try_parse_from(["loadcalc", "session-duration", "abc", "4"]).is_err());
        assert!(Cli::try_parse_from(["loadcalc", "session-duration", "10", "2.5"]).is_err());
    }
}
