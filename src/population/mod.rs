//! Population management: the current generation of individuals and the
//! select → replicate → mutate transformation producing the next one.

use std::collections::HashMap;
use std::sync::Arc;

use crate::base::{Nucleotide, Sequence};
use crate::evolution::{FitnessFunction, Mutator, PopulationGrowth, Replicator, Selector};
use crate::genomes::{GenePool, GenomeId};
use crate::phylogeny::{LineageId, Phylogeny};
use rand::RngCore;
use rayon::prelude::*;

/// Identifier of a population within a simulation.
pub type PopulationId = u32;

/// Identifier used by single-population configurations.
pub const DEFAULT_POPULATION_ID: PopulationId = 0;

#[derive(Debug, Clone)]
struct Individual {
    genome: GenomeId,
    fitness: f64,
    lineage: Option<LineageId>,
}

/// One population of individuals, advanced generation by generation.
///
/// A population is constructed once per configured experiment and
/// re-initialized (re-seeded) at the start of every replicate: its
/// identity persists, only its contents are reset. The ancestry tree is
/// present if and only if the sampling schedule declared tree sampling
/// when the population was built.
pub struct Population {
    id: PopulationId,
    individuals: Vec<Individual>,
    selector: Arc<dyn Selector>,
    growth: Arc<dyn PopulationGrowth>,
    consensus: Sequence,
    phylogeny: Option<Phylogeny>,
    target_size: usize,
}

impl Population {
    /// Create an empty population.
    ///
    /// `consensus` is the reference consensus used for mean-distance
    /// reporting and as the fallback seed when the inoculum is empty.
    pub fn new(
        id: PopulationId,
        selector: Arc<dyn Selector>,
        growth: Arc<dyn PopulationGrowth>,
        consensus: Sequence,
        phylogeny: Option<Phylogeny>,
    ) -> Self {
        Self {
            id,
            individuals: Vec::new(),
            selector,
            growth,
            consensus,
            phylogeny,
            target_size: 0,
        }
    }

    /// This population's identifier.
    pub fn id(&self) -> PopulationId {
        self.id
    }

    /// Re-seed the population for a new replicate.
    ///
    /// Any previous state is released back to the gene pool and the
    /// ancestry tree (when present) is cleared. The `size` individuals
    /// are distributed round-robin over the inoculum sequences; an empty
    /// inoculum seeds every individual with the blank (all-A) sequence of
    /// reference length, so a run without an inoculum is still viable.
    pub fn initialize(&mut self, inoculum: &[Sequence], size: usize, pool: &mut GenePool) {
        for individual in self.individuals.drain(..) {
            pool.release(individual.genome);
        }
        if let Some(tree) = self.phylogeny.as_mut() {
            tree.reset();
        }
        self.target_size = size;

        let blank;
        let seeds: &[Sequence] = if inoculum.is_empty() {
            blank = [Sequence::filled(Nucleotide::A, self.consensus.len())];
            &blank
        } else {
            inoculum
        };

        let genomes: Vec<GenomeId> = seeds
            .iter()
            .take(size.max(1))
            .map(|seq| pool.create_genome(seq.clone()))
            .collect();

        self.individuals.reserve(size);
        for i in 0..size {
            let genome = genomes[i % genomes.len()];
            pool.acquire(genome);
            let lineage = self
                .phylogeny
                .as_mut()
                .map(|tree| tree.record_birth(None, 0));
            self.individuals.push(Individual {
                genome,
                fitness: 1.0,
                lineage,
            });
        }
    }

    /// Number of live individuals in the current generation.
    pub fn current_generation_size(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the current generation holds zero live individuals.
    ///
    /// This is the single authoritative extinction check; the epoch step
    /// consults it after each generation and the orchestrator consumes
    /// the epoch's outcome.
    pub fn is_extinct(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Recompute every individual's fitness under `fitness`.
    ///
    /// Invoked at each epoch's first generation so cached scores adapt to
    /// the new epoch's parameters.
    pub fn update_all_fitnesses(&mut self, fitness: &dyn FitnessFunction, pool: &GenePool) {
        let scores: Vec<f64> = self
            .individuals
            .par_iter()
            .map(|individual| {
                pool.sequence(individual.genome)
                    .map_or(0.0, |seq| fitness.score(seq))
            })
            .collect();
        for (individual, score) in self.individuals.iter_mut().zip(scores) {
            individual.fitness = score;
        }
    }

    /// The atomic select → replicate → mutate transformation producing
    /// generation `generation + 1` from the current one.
    ///
    /// Fitness and frequency bookkeeping is left consistent for the
    /// reporting accessors. When no viable parent exists the next
    /// generation is empty and the population is extinct.
    pub fn select_next_generation(
        &mut self,
        generation: u64,
        replicator: &dyn Replicator,
        mutator: &dyn Mutator,
        fitness: &dyn FitnessFunction,
        pool: &mut GenePool,
        rng: &mut dyn RngCore,
    ) {
        let next_size = self
            .growth
            .next_size(self.individuals.len(), self.target_size);
        let weights: Vec<f64> = self.individuals.iter().map(|i| i.fitness).collect();
        let parents = self.selector.select_parents(&weights, next_size, rng);

        let mut next = Vec::with_capacity(parents.len());
        for parent_index in parents {
            let (parent_genome, parent_lineage) = {
                let parent = &self.individuals[parent_index];
                (parent.genome, parent.lineage)
            };
            let genome = replicator.replicate(parent_genome, mutator, pool, rng);
            let score = pool.sequence(genome).map_or(0.0, |seq| fitness.score(seq));
            let lineage = self
                .phylogeny
                .as_mut()
                .map(|tree| tree.record_birth(parent_lineage, generation));
            next.push(Individual {
                genome,
                fitness: score,
                lineage,
            });
        }

        for individual in self.individuals.drain(..) {
            pool.release(individual.genome);
            if let (Some(tree), Some(lineage)) = (self.phylogeny.as_mut(), individual.lineage) {
                tree.retire(lineage);
            }
        }
        self.individuals = next;
    }

    /// Mean fitness of the current generation (0.0 when extinct).
    pub fn mean_fitness(&self) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        let total: f64 = self.individuals.iter().map(|i| i.fitness).sum();
        total / self.individuals.len() as f64
    }

    /// Mean Hamming distance to the reference consensus (0.0 when
    /// extinct).
    pub fn mean_distance(&self, pool: &GenePool) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        let total: usize = self
            .individuals
            .par_iter()
            .map(|individual| {
                pool.sequence(individual.genome)
                    .map_or(0, |seq| seq.hamming_distance(&self.consensus))
            })
            .sum();
        total as f64 / self.individuals.len() as f64
    }

    /// Frequency of the most common genome in the current generation
    /// (0.0 when extinct).
    pub fn max_frequency(&self) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        let mut counts: HashMap<GenomeId, usize> = HashMap::new();
        for individual in &self.individuals {
            *counts.entry(individual.genome).or_insert(0) += 1;
        }
        let max = counts.values().copied().max().unwrap_or(0);
        max as f64 / self.individuals.len() as f64
    }

    /// The ancestry tree, when tree sampling is enabled.
    pub fn phylogeny(&self) -> Option<&Phylogeny> {
        self.phylogeny.as_ref()
    }

    /// Mutable access to the ancestry tree for pruning.
    pub fn phylogeny_mut(&mut self) -> Option<&mut Phylogeny> {
        self.phylogeny.as_mut()
    }
}

impl std::fmt::Debug for Population {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Population")
            .field("id", &self.id)
            .field("size", &self.individuals.len())
            .field("target_size", &self.target_size)
            .field("tracks_phylogeny", &self.phylogeny.is_some())
            .finish()
    }
}
