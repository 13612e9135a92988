//! Random energy perturbation sources
//!
//! The generator draws one perturbation per elongation cycle. Drawing goes
//! through [`PerturbationSource`] so callers can inject a seeded RNG, OS
//! entropy, or a fixed script.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies per-cycle energy perturbations
pub trait PerturbationSource {
    /// Draw a value from the closed interval `[-half_width, half_width]`.
    ///
    /// `half_width` is always finite and non-negative when called by the generator.
    /// Implementations must return a finite value; the generator treats a
    /// non-finite draw as no perturbation.
    fn draw(&mut self, half_width: f64) -> f64;
}

/// Uniform perturbations backed by any `rand` RNG
#[derive(Debug, Clone)]
pub struct UniformPerturbation<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformPerturbation<R> {
    /// Wrap an existing RNG
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformPerturbation<ChaCha8Rng> {
    /// Deterministic source for a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Source seeded from OS entropy; every call yields an independent stream
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> PerturbationSource for UniformPerturbation<R> {
    fn draw(&mut self, half_width: f64) -> f64 {
        // Scaling a unit sample stays finite even when `2 * half_width` overflows.
        self.rng.gen_range(-1.0..=1.0) * half_width
    }
}

/// Replays a fixed sequence of perturbations
///
/// Each scripted value is clamped into `[-half_width, half_width]`. Once the
/// script is exhausted every draw returns `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPerturbation {
    values: VecDeque<f64>,
}

impl ScriptedPerturbation {
    /// Create a script from the given values, drawn in order
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet drawn
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl PerturbationSource for ScriptedPerturbation {
    fn draw(&mut self, half_width: f64) -> f64 {
        self.values
            .pop_front()
            .map_or(0.0, |v| v.clamp(-half_width, half_width))
    }
}
