//! Machine-readable run output
//!
//! Bundles the parameters, series, and derived metrics of one run so the
//! dashboard and the JSON export read from the same snapshot.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::synthesis::config::SimulationConfig;
use crate::synthesis::metrics::{reaction_steps, DashboardMetrics, MolecularSummary};
use crate::synthesis::series::CycleSeries;

/// Everything produced by a single simulation run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// When the series was generated
    pub generated_at: DateTime<Utc>,
    /// Effective configuration after overrides
    pub parameters: SimulationConfig,
    /// The generated per-cycle table
    pub series: CycleSeries,
    /// Metric cards
    pub metrics: DashboardMetrics,
    /// Structure of the final chain
    pub molecule: MolecularSummary,
    /// Reactions of one elongation cycle (empty when idle)
    pub reaction_steps: Vec<&'static str>,
}

impl RunReport {
    /// Derive a report from a generated series
    #[must_use]
    pub fn new(parameters: SimulationConfig, series: CycleSeries) -> Self {
        let metrics = DashboardMetrics::from_series(&series, &parameters);
        let molecule = MolecularSummary::from_record(series.last());
        let steps = reaction_steps(series.cycle_count()).to_vec();

        Self {
            generated_at: Utc::now(),
            parameters,
            series,
            metrics,
            molecule,
            reaction_steps: steps,
        }
    }

    /// Serialize the report as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize run report to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::perturbation::ScriptedPerturbation;
    use crate::synthesis::series::generate;

    fn report(cycles: u32) -> RunReport {
        let mut config = SimulationConfig::default();
        config.simulation.cycles = cycles;
        let series = generate(
            i64::from(cycles),
            config.simulation.initial_energy,
            config.simulation.energy_variation,
            &mut ScriptedPerturbation::default(),
        )
        .unwrap();
        RunReport::new(config, series)
    }

    #[test]
    fn test_json_contains_every_row() {
        let json = report(4).to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let rows = value["series"].as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4]["carbon_chain_label"], "C10");
        assert_eq!(value["parameters"]["simulation"]["cycles"], 4);
        assert_eq!(value["metrics"]["total_reactions"], 16);
        assert_eq!(value["metrics"]["status"], "running");
        assert_eq!(value["molecule"]["carbon_atoms"], 10);
        assert_eq!(value["reaction_steps"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_idle_report_has_no_steps() {
        let r = report(0);
        assert!(r.reaction_steps.is_empty());
        assert_eq!(r.series.len(), 1);

        let value: serde_json::Value = serde_json::from_str(&r.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["metrics"]["status"], "idle");
        assert!(value["parameters"]["simulation"].get("seed").is_none());
    }
}
