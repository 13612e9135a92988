//! fas-sim - Fatty-acid synthase elongation simulator
//!
//! CLI entry point: resolves parameters, generates the series, and renders it.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fas_sim::synthesis::series::generate_seeded;
use fas_sim::{Dashboard, GenerateError, Overrides, RunReport, SimulationConfig};

/// Exit status for rejected parameters
const EXIT_INVALID_PARAMETER: i32 = 2;

/// Output format for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Colored terminal dashboard on stderr
    Dashboard,
    /// Pretty-printed JSON report on stdout
    Json,
}

/// Fatty-acid synthase elongation simulator
///
/// Generates per-cycle energy, enzyme activity, and cofactor consumption for
/// a simplified FAS model and renders it as a terminal dashboard.
#[derive(Parser, Debug)]
#[command(name = "fas-sim", version, about)]
struct Cli {
    /// Path to a fas-sim.toml configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of elongation cycles (0 = C2, 7 = C16)
    #[arg(long)]
    cycles: Option<u32>,

    /// Initial energy level in percent
    #[arg(long)]
    initial_energy: Option<f64>,

    /// Half-width of the per-cycle energy perturbation
    #[arg(long)]
    variation: Option<f64>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// ATP availability in percent
    #[arg(long)]
    atp_availability: Option<f64>,

    /// NADPH availability in percent
    #[arg(long)]
    nadph_availability: Option<f64>,

    /// Temperature in degrees Celsius
    #[arg(long)]
    temperature: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Dashboard)]
    format: Format,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Collect the parameter flags that were actually given.
    fn overrides(&self) -> Overrides {
        Overrides {
            cycles: self.cycles,
            initial_energy: self.initial_energy,
            energy_variation: self.variation,
            seed: self.seed,
            atp_availability: self.atp_availability,
            nadph_availability: self.nadph_availability,
            temperature_c: self.temperature,
        }
    }
}

/// Install the stderr tracing subscriber.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the config file (or defaults) and apply CLI overrides.
fn resolve_config(cli: &Cli) -> Result<SimulationConfig> {
    let base = match &cli.config {
        Some(path) => SimulationConfig::from_path(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display()))?,
        None => SimulationConfig::default(),
    };
    base.with_overrides(&cli.overrides())
        .context("Invalid simulation parameters")
}

/// Generate the series for a resolved config and bundle it into a report.
fn run(config: SimulationConfig) -> Result<RunReport, GenerateError> {
    let sim = &config.simulation;
    info!(
        cycles = sim.cycles,
        initial_energy = sim.initial_energy,
        energy_variation = sim.energy_variation,
        seed = ?sim.seed,
        "generating cycle series"
    );
    let series = generate_seeded(
        i64::from(sim.cycles),
        sim.initial_energy,
        sim.energy_variation,
        sim.seed,
    )?;
    Ok(RunReport::new(config, series))
}

/// Print a rejection message and exit without rendering anything.
fn reject(err: &anyhow::Error) -> ! {
    eprintln!("{} {err:#}", "Rejected:".red().bold());
    std::process::exit(EXIT_INVALID_PARAMETER);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(err) => reject(&err),
    };

    let report = match run(config) {
        Ok(report) => report,
        Err(err) => reject(&anyhow::Error::from(err)),
    };

    match cli.format {
        Format::Dashboard => Dashboard::new(&report)
            .print()
            .context("Failed to write dashboard")?,
        Format::Json => println!("{}", report.to_json_pretty()?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("fas-sim").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_without_flags() {
        let cli = parse(&[]);
        assert_eq!(cli.format, Format::Dashboard);
        assert_eq!(cli.overrides(), Overrides::default());

        let config = resolve_config(&cli).unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = parse(&[
            "--cycles",
            "7",
            "--initial-energy",
            "95",
            "--variation",
            "30",
            "--seed",
            "11",
            "--format",
            "json",
        ]);
        assert_eq!(cli.format, Format::Json);

        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.simulation.cycles, 7);
        assert_eq!(config.simulation.initial_energy, 95.0);
        assert_eq!(config.simulation.energy_variation, 30.0);
        assert_eq!(config.simulation.seed, Some(11));
    }

    #[test]
    fn test_out_of_range_flag_rejected() {
        let cli = parse(&["--cycles", "8"]);
        let err = resolve_config(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid cycles"));
    }

    #[test]
    fn test_negative_cycles_rejected_by_parser() {
        let result = Cli::try_parse_from(["fas-sim", "--cycles", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_produces_full_report() {
        let cli = parse(&["--cycles", "5", "--seed", "3"]);
        let report = run(resolve_config(&cli).unwrap()).unwrap();
        assert_eq!(report.series.len(), 6);
        assert_eq!(report.metrics.total_reactions, 20);
    }

    #[test]
    fn test_seeded_runs_match() {
        let cli = parse(&["--cycles", "7", "--variation", "20", "--seed", "8"]);
        let a = run(resolve_config(&cli).unwrap()).unwrap();
        let b = run(resolve_config(&cli).unwrap()).unwrap();
        assert_eq!(a.series, b.series);
    }
}
