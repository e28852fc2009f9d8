//! Reference genome data: the sequences a run is inoculated from.

use crate::base::{Nucleotide, Sequence};
use crate::errors::InvalidSequence;

/// Immutable collection of reference sequences with a precomputed
/// consensus.
///
/// The panel is validated at construction (non-empty, equal lengths) and
/// its sequence order is stable for the lifetime of the process, so
/// inoculum construction is reproducible.
#[derive(Debug, Clone)]
pub struct ReferencePanel {
    sequences: Vec<Sequence>,
    consensus: Sequence,
}

impl ReferencePanel {
    /// Build a panel from reference sequences.
    ///
    /// The consensus is the per-site majority base; ties resolve to the
    /// lowest base index (A < C < G < T).
    pub fn new(sequences: Vec<Sequence>) -> Result<Self, InvalidSequence> {
        let first = sequences.first().ok_or(InvalidSequence::Empty)?;
        let len = first.len();
        for seq in &sequences {
            if seq.len() != len {
                return Err(InvalidSequence::UnequalLengths {
                    expected: len,
                    found: seq.len(),
                });
            }
        }

        let mut consensus = Vec::with_capacity(len);
        for site in 0..len {
            let mut counts = [0usize; 4];
            for seq in &sequences {
                if let Some(base) = seq.get(site) {
                    counts[base.to_index() as usize] += 1;
                }
            }
            let majority = counts
                .iter()
                .enumerate()
                .max_by_key(|&(idx, &count)| (count, std::cmp::Reverse(idx)))
                .map(|(idx, _)| idx as u8)
                .and_then(Nucleotide::from_index)
                .unwrap_or(Nucleotide::A);
            consensus.push(majority);
        }

        Ok(Self {
            sequences,
            consensus: Sequence::from_nucleotides(consensus),
        })
    }

    /// Build a single-sequence panel.
    pub fn from_sequence(sequence: Sequence) -> Result<Self, InvalidSequence> {
        Self::new(vec![sequence])
    }

    /// The per-site majority consensus over the panel.
    pub fn consensus_sequence(&self) -> &Sequence {
        &self.consensus
    }

    /// All reference sequences, in their defined order.
    pub fn reference_sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    /// Common length of every sequence in the panel.
    pub fn sequence_length(&self) -> usize {
        self.consensus.len()
    }
}
