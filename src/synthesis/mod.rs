//! Fatty-acid synthase simulation
//!
//! This module handles configuration, series generation, and the metrics
//! derived from a generated series.

pub mod config;
pub mod metrics;
pub mod perturbation;
pub mod series;
