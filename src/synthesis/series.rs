//! Cycle series generation
//!
//! Produces the per-cycle table of a simulated fatty-acid synthase run: one
//! record for the starting acetyl unit plus one per elongation cycle.

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::GenerateError;
use crate::synthesis::perturbation::{PerturbationSource, UniformPerturbation};

/// Chain-length labels, indexed by cycle index
pub const CHAIN_LABELS: [&str; 8] = ["C2", "C4", "C6", "C8", "C10", "C12", "C14", "C16"];

/// Largest supported cycle count (bounded by [`CHAIN_LABELS`])
pub const MAX_CYCLES: u32 = 7;

/// Lower bound of the clamped energy level
pub const ENERGY_FLOOR: f64 = 10.0;

/// Upper bound of the clamped energy level
pub const ENERGY_CEILING: f64 = 100.0;

const ENZYME_ACTIVITY_FLOOR: f64 = 60.0;
const ENZYME_DECAY_PER_CYCLE: f64 = 5.0;
const REACTION_TIME_PER_CYCLE: f64 = 2.5;

/// Synthase state after completing `cycle_index` elongation cycles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleRecord {
    /// 0-based cycle number
    pub cycle_index: u32,
    /// Display label for the chain length, e.g. "C8"
    pub carbon_chain_label: String,
    /// Total carbons in the chain
    pub carbon_atom_count: u32,
    /// Simulated energy state in percent
    pub energy_level_pct: f64,
    /// Cumulative ATP units consumed
    pub atp_consumed: u32,
    /// Cumulative NADPH units consumed
    pub nadph_consumed: u32,
    /// Simulated elapsed reaction time
    pub reaction_time: f64,
    /// Simulated enzyme activity in percent
    pub enzyme_activity_pct: f64,
}

impl CycleRecord {
    /// Build the record for `cycle_index` with the given energy level.
    ///
    /// Every field except the energy level is a function of the index alone.
    fn at(cycle_index: u32, energy_level_pct: f64) -> Self {
        let index = f64::from(cycle_index);
        Self {
            cycle_index,
            carbon_chain_label: CHAIN_LABELS[cycle_index as usize].to_string(),
            carbon_atom_count: 2 * (cycle_index + 1),
            energy_level_pct,
            atp_consumed: cycle_index,
            nadph_consumed: 2 * cycle_index,
            reaction_time: REACTION_TIME_PER_CYCLE * index,
            enzyme_activity_pct: ENZYME_DECAY_PER_CYCLE
                .mul_add(-index, 100.0)
                .max(ENZYME_ACTIVITY_FLOOR),
        }
    }
}

/// Ordered, immutable sequence of cycle records
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CycleSeries {
    records: Vec<CycleRecord>,
}

impl CycleSeries {
    /// All records, ascending by cycle index
    #[must_use]
    pub fn records(&self) -> &[CycleRecord] {
        &self.records
    }

    /// Number of records (cycle count + 1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a generated series; present for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in order
    pub fn iter(&self) -> std::slice::Iter<'_, CycleRecord> {
        self.records.iter()
    }

    /// The seed record (cycle index 0)
    #[must_use]
    pub fn first(&self) -> &CycleRecord {
        &self.records[0]
    }

    /// The record of the last completed cycle
    #[must_use]
    pub fn last(&self) -> &CycleRecord {
        &self.records[self.records.len() - 1]
    }

    /// Number of elongation cycles this series covers
    #[must_use]
    pub fn cycle_count(&self) -> u32 {
        self.last().cycle_index
    }
}

impl<'a> IntoIterator for &'a CycleSeries {
    type Item = &'a CycleRecord;
    type IntoIter = std::slice::Iter<'a, CycleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Check generator inputs, returning the cycle count as an index bound.
fn validate(
    cycle_count: i64,
    initial_energy: f64,
    energy_variation: f64,
) -> Result<u32, GenerateError> {
    let cycles = u32::try_from(cycle_count)
        .ok()
        .filter(|c| *c <= MAX_CYCLES)
        .ok_or_else(|| {
            GenerateError::invalid(
                "cycle_count",
                cycle_count,
                format!("must be between 0 and {MAX_CYCLES}"),
            )
        })?;

    if !energy_variation.is_finite() || energy_variation < 0.0 {
        return Err(GenerateError::invalid(
            "energy_variation",
            energy_variation,
            "must be a finite, non-negative number",
        ));
    }

    if !initial_energy.is_finite() {
        return Err(GenerateError::invalid(
            "initial_energy",
            initial_energy,
            "must be a finite number",
        ));
    }

    Ok(cycles)
}

/// Generate the cycle series for the given parameters.
///
/// The record at index 0 carries `initial_energy` unmodified. Each later
/// record perturbs the running energy by one draw from `source` over
/// `[-energy_variation, energy_variation]` and clamps it to
/// [`ENERGY_FLOOR`]..=[`ENERGY_CEILING`].
///
/// # Errors
/// Returns [`GenerateError::InvalidParameter`] if `cycle_count` is outside
/// `0..=7`, if `energy_variation` is negative or not finite, or if
/// `initial_energy` is not finite. Out-of-range values are never clamped.
pub fn generate<S: PerturbationSource + ?Sized>(
    cycle_count: i64,
    initial_energy: f64,
    energy_variation: f64,
    source: &mut S,
) -> Result<CycleSeries, GenerateError> {
    let cycles = validate(cycle_count, initial_energy, energy_variation)?;

    if initial_energy < ENERGY_FLOOR {
        warn!(
            initial_energy,
            "initial energy is below the clamp floor; the first record keeps it unmodified"
        );
    }

    let mut energy_base = initial_energy;
    let mut records = Vec::with_capacity(cycles as usize + 1);
    records.push(CycleRecord::at(0, energy_base));

    for cycle_index in 1..=cycles {
        let mut perturbation = source.draw(energy_variation);
        if !perturbation.is_finite() {
            warn!(cycle_index, perturbation, "non-finite perturbation treated as zero");
            perturbation = 0.0;
        }
        energy_base = (energy_base + perturbation).clamp(ENERGY_FLOOR, ENERGY_CEILING);
        debug!(cycle_index, perturbation, energy_base, "elongation cycle");
        records.push(CycleRecord::at(cycle_index, energy_base));
    }

    Ok(CycleSeries { records })
}

/// Generate a series with a fresh ChaCha RNG.
///
/// A `Some` seed makes the run reproducible; `None` seeds from OS entropy so
/// independent calls never share a random stream.
pub fn generate_seeded(
    cycle_count: i64,
    initial_energy: f64,
    energy_variation: f64,
    seed: Option<u64>,
) -> Result<CycleSeries, GenerateError> {
    let mut source: UniformPerturbation<ChaCha8Rng> = seed.map_or_else(
        UniformPerturbation::from_entropy,
        UniformPerturbation::seeded,
    );
    generate(cycle_count, initial_energy, energy_variation, &mut source)
}
