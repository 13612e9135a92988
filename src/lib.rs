//! fas-sim - Fatty-acid synthase elongation simulator
//!
//! Generates a per-cycle table of a simplified FAS model (chain length,
//! energy level, enzyme activity, cumulative ATP/NADPH use) and renders it
//! as a terminal dashboard.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod error;
pub mod synthesis;

// Re-export commonly used types
pub use cli::{Dashboard, RunReport};
pub use error::GenerateError;
pub use synthesis::config::{EnvironmentConditions, Overrides, SimulationConfig, SimulationParams};
pub use synthesis::metrics::{DashboardMetrics, MolecularSummary};
pub use synthesis::perturbation::{PerturbationSource, ScriptedPerturbation, UniformPerturbation};
pub use synthesis::series::{generate, generate_seeded, CycleRecord, CycleSeries};
