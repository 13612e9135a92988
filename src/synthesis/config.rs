//! Simulation configuration parser
//!
//! Parses `fas-sim.toml` into simulation and environment parameters. Every
//! table and field is optional; missing values take the dashboard defaults.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::synthesis::series::MAX_CYCLES;

/// Parameters that drive the cycle series generator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationParams {
    /// Number of elongation cycles, 0 (C2) to 7 (C16)
    pub cycles: u32,
    /// Starting energy level in percent
    pub initial_energy: f64,
    /// Half-width of the per-cycle energy perturbation
    pub energy_variation: f64,
    /// RNG seed for reproducible runs; None draws from OS entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            cycles: 4,
            initial_energy: 20.0,
            energy_variation: 5.0,
            seed: None,
        }
    }
}

/// Environmental conditions shown alongside the series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentConditions {
    /// ATP availability in percent
    pub atp_availability: f64,
    /// NADPH availability in percent
    pub nadph_availability: f64,
    /// Temperature in degrees Celsius
    pub temperature_c: f64,
}

impl Default for EnvironmentConditions {
    fn default() -> Self {
        Self {
            atp_availability: 85.0,
            nadph_availability: 90.0,
            temperature_c: 37.0,
        }
    }
}

/// Top-level configuration parsed from fas-sim.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Generator parameters
    pub simulation: SimulationParams,
    /// Environmental conditions
    pub environment: EnvironmentConditions,
}

/// Values supplied on the command line; `Some` replaces the configured value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    /// Replacement cycle count
    pub cycles: Option<u32>,
    /// Replacement initial energy
    pub initial_energy: Option<f64>,
    /// Replacement energy variation
    pub energy_variation: Option<f64>,
    /// Replacement seed
    pub seed: Option<u64>,
    /// Replacement ATP availability
    pub atp_availability: Option<f64>,
    /// Replacement NADPH availability
    pub nadph_availability: Option<f64>,
    /// Replacement temperature
    pub temperature_c: Option<f64>,
}

impl SimulationConfig {
    /// Parse a fas-sim.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse fas-sim.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse fas-sim.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate the result
    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self> {
        let sim = &mut self.simulation;
        if let Some(cycles) = overrides.cycles {
            sim.cycles = cycles;
        }
        if let Some(energy) = overrides.initial_energy {
            sim.initial_energy = energy;
        }
        if let Some(variation) = overrides.energy_variation {
            sim.energy_variation = variation;
        }
        if overrides.seed.is_some() {
            sim.seed = overrides.seed;
        }

        let env = &mut self.environment;
        if let Some(atp) = overrides.atp_availability {
            env.atp_availability = atp;
        }
        if let Some(nadph) = overrides.nadph_availability {
            env.nadph_availability = nadph;
        }
        if let Some(temp) = overrides.temperature_c {
            env.temperature_c = temp;
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        if sim.cycles > MAX_CYCLES {
            bail!(
                "Invalid cycles {}: must be between 0 and {MAX_CYCLES}",
                sim.cycles
            );
        }
        check_range("initial_energy", sim.initial_energy, 0.0, 100.0)?;
        check_range("energy_variation", sim.energy_variation, 0.0, 30.0)?;

        let env = &self.environment;
        check_range("atp_availability", env.atp_availability, 0.0, 100.0)?;
        check_range("nadph_availability", env.nadph_availability, 0.0, 100.0)?;
        check_range("temperature_c", env.temperature_c, 25.0, 40.0)?;

        Ok(())
    }
}

/// Reject values outside `[min, max]`, including NaN.
fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if !(min..=max).contains(&value) {
        bail!("Invalid {name} {value}: must be between {min} and {max}");
    }
    Ok(())
}
