//! Replication operators producing child genomes from parents.

use crate::evolution::mutation::Mutator;
use crate::genomes::{GenePool, GenomeId};
use rand::RngCore;

/// Replication operator fixed for the duration of one epoch.
pub trait Replicator: Send + Sync {
    /// Produce one child genome from `parent`, registering it in the gene
    /// pool. The returned record already holds the child's usage count.
    fn replicate(
        &self,
        parent: GenomeId,
        mutator: &dyn Mutator,
        pool: &mut GenePool,
        rng: &mut dyn RngCore,
    ) -> GenomeId;
}

/// Clonal (asexual) replication: copy the parent genome and apply the
/// mutation operator to the copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClonalReplicator;

impl Replicator for ClonalReplicator {
    fn replicate(
        &self,
        parent: GenomeId,
        mutator: &dyn Mutator,
        pool: &mut GenePool,
        rng: &mut dyn RngCore,
    ) -> GenomeId {
        let mutations = match pool.sequence(parent) {
            Some(sequence) => mutator.mutate(sequence, rng),
            None => Vec::new(),
        };
        pool.duplicate_genome(parent, &mutations)
    }
}
