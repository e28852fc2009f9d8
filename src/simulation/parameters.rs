//! Run-level parameters: the inoculum policy.

use crate::base::Sequence;
use crate::genomes::ReferencePanel;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Policy for building the sequence list a replicate is seeded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InoculumType {
    /// Empty seed.
    None,
    /// The single consensus sequence of the reference panel.
    Consensus,
    /// One reference sequence chosen uniformly over the whole panel.
    Random,
    /// Every reference sequence, in panel order.
    All,
}

impl InoculumType {
    /// Build the inoculum sequence list for one replicate.
    ///
    /// `Random` draws uniformly over all reference sequences; when the
    /// panel holds exactly one sequence it is used directly, without
    /// consuming the random source.
    pub fn draw(&self, panel: &ReferencePanel, rng: &mut dyn RngCore) -> Vec<Sequence> {
        match self {
            Self::None => Vec::new(),
            Self::Consensus => vec![panel.consensus_sequence().clone()],
            Self::All => panel.reference_sequences().to_vec(),
            Self::Random => {
                let sequences = panel.reference_sequences();
                if sequences.len() == 1 {
                    vec![sequences[0].clone()]
                } else {
                    let index = rng.random_range(0..sequences.len());
                    vec![sequences[index].clone()]
                }
            }
        }
    }
}
