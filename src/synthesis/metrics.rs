//! Dashboard metrics derived from a generated series
//!
//! Scalar metric cards, the molecular structure summary of the final chain,
//! and the reaction steps of one elongation cycle.

use serde::Serialize;

use crate::synthesis::config::SimulationConfig;
use crate::synthesis::series::{CycleRecord, CycleSeries, MAX_CYCLES};

/// ATP availability above this percentage counts as normal
pub const ATP_NORMAL_THRESHOLD: f64 = 70.0;

/// NADPH availability above this percentage counts as sufficient
pub const NADPH_SUFFICIENT_THRESHOLD: f64 = 75.0;

/// Reactions per elongation cycle
pub const REACTIONS_PER_CYCLE: u32 = 4;

/// The four reactions of one elongation cycle, in order
pub const REACTION_STEPS: [&str; 4] = [
    "Condensation: acetyl-ACP + malonyl-ACP -> beta-ketoacyl-ACP",
    "First reduction: beta-ketoacyl-ACP -> beta-hydroxyacyl-ACP (NADPH + H+)",
    "Dehydration: beta-hydroxyacyl-ACP -> enoyl-ACP",
    "Second reduction: enoyl-ACP -> acyl-ACP (NADPH + H+)",
];

/// Whether the simulation has any elongation cycles to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationStatus {
    /// At least one cycle configured
    Running,
    /// Zero cycles, only the acetyl starter
    Idle,
}

/// Qualitative level of a cofactor's availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    /// ATP above its threshold
    Normal,
    /// NADPH above its threshold
    Sufficient,
    /// At or below the threshold
    Low,
}

impl AvailabilityStatus {
    /// Short display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Sufficient => "sufficient",
            Self::Low => "low",
        }
    }

    /// True unless the status is `Low`
    #[must_use]
    pub const fn is_ok(self) -> bool {
        !matches!(self, Self::Low)
    }
}

/// Metric cards computed from a series and its configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    /// Cumulative ATP plus NADPH units of the last cycle, in ATP equivalents
    pub total_energy_consumption: u32,
    /// Energy change from the first to the last record, in percentage points
    pub energy_delta_pct: f64,
    /// Completed cycles as a percentage of the full C16 synthesis
    pub synthesis_efficiency_pct: f64,
    /// Completed cycles
    pub cycles_completed: u32,
    /// Total cycles of a full synthesis
    pub cycles_total: u32,
    /// Total individual reactions across all cycles
    pub total_reactions: u32,
    /// Running or idle
    pub status: SimulationStatus,
    /// ATP availability in percent
    pub atp_availability: f64,
    /// ATP availability level
    pub atp_status: AvailabilityStatus,
    /// NADPH availability in percent
    pub nadph_availability: f64,
    /// NADPH availability level
    pub nadph_status: AvailabilityStatus,
    /// Temperature in degrees Celsius
    pub temperature_c: f64,
}

impl DashboardMetrics {
    /// Derive the metric cards from a generated series
    #[must_use]
    pub fn from_series(series: &CycleSeries, config: &SimulationConfig) -> Self {
        let first = series.first();
        let last = series.last();
        let cycles = series.cycle_count();
        let env = &config.environment;

        Self {
            total_energy_consumption: last.atp_consumed + last.nadph_consumed,
            energy_delta_pct: last.energy_level_pct - first.energy_level_pct,
            synthesis_efficiency_pct: progress_fraction(cycles) * 100.0,
            cycles_completed: cycles,
            cycles_total: MAX_CYCLES,
            total_reactions: cycles * REACTIONS_PER_CYCLE,
            status: if cycles > 0 {
                SimulationStatus::Running
            } else {
                SimulationStatus::Idle
            },
            atp_availability: env.atp_availability,
            atp_status: if env.atp_availability > ATP_NORMAL_THRESHOLD {
                AvailabilityStatus::Normal
            } else {
                AvailabilityStatus::Low
            },
            nadph_availability: env.nadph_availability,
            nadph_status: if env.nadph_availability > NADPH_SUFFICIENT_THRESHOLD {
                AvailabilityStatus::Sufficient
            } else {
                AvailabilityStatus::Low
            },
            temperature_c: env.temperature_c,
        }
    }
}

/// Fraction of the full synthesis completed, in `[0, 1]`
#[must_use]
pub fn progress_fraction(cycles: u32) -> f64 {
    f64::from(cycles.min(MAX_CYCLES)) / f64::from(MAX_CYCLES)
}

/// Structure of the saturated fatty acid at the end of the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MolecularSummary {
    /// Carbon atoms in the chain
    pub carbon_atoms: u32,
    /// Double bonds (always 0, the product is saturated)
    pub double_bonds: u32,
    /// Simplified molecular weight in daltons
    pub molecular_weight_da: u32,
    /// Repeat count of the `H3C-(CH2)n-COOH` skeleton
    pub repeat_units: u32,
    /// Condensed structural formula
    pub formula: String,
    /// Compound class
    pub class: &'static str,
}

impl MolecularSummary {
    /// Summarize the chain described by a record
    #[must_use]
    pub fn from_record(record: &CycleRecord) -> Self {
        let carbons = record.carbon_atom_count;
        let chain = carbons.saturating_sub(2);
        // Simplified weight: 12 per carbon plus the two carboxyl oxygens.
        Self {
            carbon_atoms: carbons,
            double_bonds: 0,
            molecular_weight_da: carbons * 12 + 32,
            repeat_units: chain / 2,
            formula: format!("CH3(CH2){chain}COOH"),
            class: "saturated fatty acid",
        }
    }
}

/// Reaction steps to display for a run of `cycles` cycles; empty when idle
#[must_use]
pub fn reaction_steps(cycles: u32) -> &'static [&'static str] {
    if cycles > 0 {
        &REACTION_STEPS
    } else {
        &[]
    }
}
