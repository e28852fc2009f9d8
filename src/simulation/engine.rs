//! The simulation orchestrator: one replicate from inoculum to completion
//! or extinction.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::errors::{BuilderError, SimulationError};
use crate::evolution::{PopulationGrowth, Selector};
use crate::genomes::{GenePool, ReferencePanel};
use crate::phylogeny::Phylogeny;
use crate::population::{Population, PopulationId};
use crate::samplers::SamplingSchedule;
use crate::simulation::epoch::{EpochOutcome, SimulationEpoch};
use crate::simulation::parameters::InoculumType;
use rand::{Rng, RngCore};
use tracing::{debug, info_span, warn};

/// Terminal state of one replicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every epoch completed; `generations` is the total number of
    /// generations processed.
    Completed { generations: u64 },
    /// A population went extinct at `generation`; remaining epochs were
    /// skipped and the sampling schedule was not finalized.
    Extinct {
        population: PopulationId,
        generation: u64,
    },
}

/// Orchestrates one or more populations through an ordered epoch
/// sequence.
///
/// A `Simulation` is constructed once per configured experiment; its
/// population objects are constructed once and re-seeded on every call to
/// [`run`](Self::run), so population identity persists across replicates.
pub struct Simulation {
    population_size: usize,
    inoculum: InoculumType,
    reference: Arc<ReferencePanel>,
    epochs: Vec<SimulationEpoch>,
    gene_pool: GenePool,
    schedule: Box<dyn SamplingSchedule>,
    populations: BTreeMap<PopulationId, Population>,
}

impl Simulation {
    /// Create a simulation over `population_count` populations with
    /// identifiers `0..population_count`.
    ///
    /// Each population is built with the shared selector and growth model;
    /// an ancestry tree is attached if and only if the sampling schedule
    /// samples trees.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        population_size: usize,
        selector: Arc<dyn Selector>,
        growth: Arc<dyn PopulationGrowth>,
        inoculum: InoculumType,
        reference: Arc<ReferencePanel>,
        epochs: Vec<SimulationEpoch>,
        schedule: Box<dyn SamplingSchedule>,
        population_count: u32,
    ) -> Result<Self, BuilderError> {
        if population_size == 0 {
            return Err(BuilderError::InvalidParameter(
                "population size must be positive".into(),
            ));
        }
        if population_count == 0 {
            return Err(BuilderError::InvalidParameter(
                "population count must be positive".into(),
            ));
        }
        if epochs.is_empty() {
            return Err(BuilderError::MissingRequired("epochs"));
        }
        if let Some(epoch) = epochs.iter().find(|e| e.generation_count() == 0) {
            return Err(BuilderError::InvalidParameter(format!(
                "epoch {name} spans zero generations",
                name = epoch.name().unwrap_or("(unnamed)")
            )));
        }

        let populations = (0..population_count)
            .map(|id| {
                let phylogeny = schedule
                    .is_sampling_trees()
                    .then(|| Phylogeny::with_capacity(population_size));
                let population = Population::new(
                    id,
                    selector.clone(),
                    growth.clone(),
                    reference.consensus_sequence().clone(),
                    phylogeny,
                );
                (id, population)
            })
            .collect();

        Ok(Self {
            population_size,
            inoculum,
            reference,
            epochs,
            gene_pool: GenePool::new(),
            schedule,
            populations,
        })
    }

    /// Run one replicate to completion or to extinction.
    ///
    /// The caller owns the random source; passing a generator seeded the
    /// same way reproduces the replicate exactly.
    pub fn run<R: Rng>(
        &mut self,
        replicate: u32,
        rng: &mut R,
    ) -> Result<RunOutcome, SimulationError> {
        let rng: &mut dyn RngCore = rng;

        self.schedule.initialize(replicate);

        let span = info_span!("replicate", replicate);
        let _guard = span.enter();

        let inoculum = self.inoculum.draw(&self.reference, rng);
        debug!(
            size = self.population_size,
            populations = self.populations.len(),
            sequences = inoculum.len(),
            "initializing populations"
        );
        for population in self.populations.values_mut() {
            population.initialize(&inoculum, self.population_size, &mut self.gene_pool);
        }

        let mut generation: u64 = 1;
        for (index, epoch) in self.epochs.iter_mut().enumerate() {
            let span = info_span!("epoch", epoch = index);
            let _guard = span.enter();

            let outcome = epoch.run(
                &mut self.populations,
                &mut self.gene_pool,
                self.schedule.as_mut(),
                generation,
                rng,
            )?;
            match outcome {
                EpochOutcome::Completed { next_generation } => generation = next_generation,
                EpochOutcome::Extinct {
                    population,
                    generation,
                } => {
                    warn!(
                        population,
                        generation, "population crashed; aborting replicate"
                    );
                    return Ok(RunOutcome::Extinct {
                        population,
                        generation,
                    });
                }
            }
        }

        self.schedule.clean_up();
        Ok(RunOutcome::Completed {
            generations: generation - 1,
        })
    }

    /// The first (lowest-identifier) population.
    ///
    /// In single-population configurations this is the only population.
    pub fn population(&self) -> &Population {
        self.populations
            .values()
            .next()
            .expect("a simulation always holds at least one population")
    }

    /// The population with the given identifier.
    ///
    /// Requesting an identifier outside the configured set is a
    /// configuration error, never a silent substitution.
    pub fn population_by_id(&self, id: PopulationId) -> Result<&Population, SimulationError> {
        self.populations
            .get(&id)
            .ok_or(SimulationError::UnknownPopulation { id })
    }

    /// The configured population identifiers, in ascending order.
    pub fn population_ids(&self) -> impl Iterator<Item = PopulationId> + '_ {
        self.populations.keys().copied()
    }

    /// The shared target size of every population.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// The shared gene pool.
    pub fn gene_pool(&self) -> &GenePool {
        &self.gene_pool
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("population_size", &self.population_size)
            .field("inoculum", &self.inoculum)
            .field("epochs", &self.epochs.len())
            .field("populations", &self.populations.len())
            .finish()
    }
}
