//! Fitness functions scoring genome sequences.
//!
//! Fitness determines reproductive success: individuals with higher scores
//! contribute more offspring to the next generation. A score of zero marks
//! an inviable genome; a generation in which every individual scores zero
//! leaves no parents and the population goes extinct.

use crate::base::Sequence;
pub use crate::errors::FitnessError;
use crate::population::Population;
use serde::{Deserialize, Serialize};

/// Fitness function fixed for the duration of one epoch.
pub trait FitnessFunction: Send + Sync {
    /// Refresh generation-dependent state (e.g. a changing selection
    /// pressure schedule) before the population is advanced.
    ///
    /// Called once per population per generation, before any individual is
    /// scored for that generation. The default is a no-op for
    /// generation-independent functions.
    fn update_generation(&mut self, _generation: u64, _population: &Population) {}

    /// Score a genome. Non-negative; higher is fitter, zero is inviable.
    fn score(&self, sequence: &Sequence) -> f64;
}

/// Neutral evolution: every genome scores 1.0.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NeutralFitness;

impl FitnessFunction for NeutralFitness {
    fn score(&self, _sequence: &Sequence) -> f64 {
        1.0
    }
}

/// Purifying selection against divergence from a preferred sequence.
///
/// Each mismatch to the preferred sequence multiplies fitness by
/// `1 - selection_coefficient`, so score = (1 - s)^d for Hamming distance
/// d. With s = 1.0 any mutant is lethal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurifyingFitness {
    preferred: Sequence,
    selection_coefficient: f64,
}

impl PurifyingFitness {
    /// Create a purifying fitness function.
    ///
    /// `selection_coefficient` is the per-site cost of a mismatch and must
    /// lie in `[0.0, 1.0]`.
    pub fn new(preferred: Sequence, selection_coefficient: f64) -> Result<Self, FitnessError> {
        if !(0.0..=1.0).contains(&selection_coefficient) {
            return Err(FitnessError::InvalidParameter(format!(
                "selection coefficient {selection_coefficient} outside [0, 1]"
            )));
        }
        Ok(Self {
            preferred,
            selection_coefficient,
        })
    }

    /// The sequence mismatches are measured against.
    pub fn preferred(&self) -> &Sequence {
        &self.preferred
    }
}

impl FitnessFunction for PurifyingFitness {
    fn score(&self, sequence: &Sequence) -> f64 {
        let distance = sequence.hamming_distance(&self.preferred);
        (1.0 - self.selection_coefficient).powi(distance as i32)
    }
}
