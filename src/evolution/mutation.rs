//! Mutation operators for genome sequences.
//!
//! Mutation is modeled as point substitutions drawn per replication event.
//! The number of substitutions for a genome of length L under per-site
//! rate mu is Poisson-distributed with mean `mu * L`, pre-sampled once so
//! that the per-base work stays proportional to the number of actual
//! mutations rather than the sequence length.

use crate::base::{Nucleotide, Sequence};
pub use crate::errors::MutationError;
use rand::{Rng, RngCore};
use rand_distr::{Distribution, Poisson};
use serde::{Deserialize, Serialize};

/// A single point substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    /// Site index within the genome.
    pub position: usize,
    /// Replacement base.
    pub base: Nucleotide,
}

/// Mutation operator applied to each replicated genome.
pub trait Mutator: Send + Sync {
    /// Draw the substitutions one replication of `sequence` incurs.
    ///
    /// Returned positions are always within `sequence`. An empty vector
    /// means the copy is faithful.
    fn mutate(&self, sequence: &Sequence, rng: &mut dyn RngCore) -> Vec<Substitution>;
}

/// Uniform per-site substitution model.
///
/// Every site mutates at the same rate and the replacement base is chosen
/// uniformly among the three alternatives to the current one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniformMutator {
    rate: f64,
}

impl UniformMutator {
    /// Create a uniform mutator with per-site, per-generation rate `rate`.
    pub fn new(rate: f64) -> Result<Self, MutationError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(MutationError::InvalidMutationRate(rate));
        }
        Ok(Self { rate })
    }

    /// The per-site mutation rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Mutator for UniformMutator {
    fn mutate(&self, sequence: &Sequence, rng: &mut dyn RngCore) -> Vec<Substitution> {
        let len = sequence.len();
        if len == 0 || self.rate == 0.0 {
            return Vec::new();
        }

        let mean = self.rate * len as f64;
        let count = match Poisson::new(mean) {
            Ok(poisson) => poisson.sample(&mut *rng) as usize,
            Err(_) => 0,
        };

        let mut substitutions = Vec::with_capacity(count);
        for _ in 0..count {
            let position = rng.random_range(0..len);
            let current = sequence.get(position).unwrap_or(Nucleotide::A);
            // Offset by 1..=3 to land on one of the three other bases.
            let shift = rng.random_range(1..4u8);
            let base = Nucleotide::from_index((current.to_index() + shift) % 4)
                .unwrap_or(Nucleotide::A);
            substitutions.push(Substitution { position, base });
        }
        substitutions
    }
}
