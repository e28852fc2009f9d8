//! The epoch scheduler: a fixed span of generations under one fixed
//! evolutionary-operator triple.

use std::collections::BTreeMap;

use crate::errors::SimulationError;
use crate::evolution::{FitnessFunction, Mutator, Replicator};
use crate::genomes::GenePool;
use crate::population::{Population, PopulationId};
use crate::samplers::SamplingSchedule;
use rand::RngCore;
use tracing::{debug, debug_span, info};

/// Result of running one epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpochOutcome {
    /// All generations were processed with every population non-empty.
    /// `next_generation` is the absolute generation the following epoch
    /// starts at.
    Completed { next_generation: u64 },
    /// A population's live count hit zero while processing `generation`.
    Extinct {
        population: PopulationId,
        generation: u64,
    },
}

/// A contiguous span of generations sharing one fitness function, one
/// mutation operator and one replication operator.
pub struct SimulationEpoch {
    name: Option<String>,
    generation_count: u64,
    fitness: Box<dyn FitnessFunction>,
    mutator: Box<dyn Mutator>,
    replicator: Box<dyn Replicator>,
}

impl SimulationEpoch {
    /// Create an unnamed epoch of `generation_count` generations.
    pub fn new(
        generation_count: u64,
        fitness: Box<dyn FitnessFunction>,
        mutator: Box<dyn Mutator>,
        replicator: Box<dyn Replicator>,
    ) -> Self {
        Self {
            name: None,
            generation_count,
            fitness,
            mutator,
            replicator,
        }
    }

    /// Attach a name, used for logging only.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The epoch's name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of generations this epoch spans.
    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    /// Advance every population through this epoch's generations, or stop
    /// early on extinction.
    ///
    /// Populations advance in lock-step: generation g is processed for
    /// every population, in ascending identifier order, before any
    /// population moves to g + 1. The instant a population's live count
    /// hits zero the epoch returns that exact generation; remaining
    /// populations and generations are not processed.
    pub fn run(
        &mut self,
        populations: &mut BTreeMap<PopulationId, Population>,
        pool: &mut GenePool,
        schedule: &mut dyn SamplingSchedule,
        start_generation: u64,
        rng: &mut dyn RngCore,
    ) -> Result<EpochOutcome, SimulationError> {
        info!(
            name = self.name.as_deref().unwrap_or("(unnamed)"),
            generations = self.generation_count,
            start_generation,
            "starting epoch"
        );

        let end_generation = start_generation + self.generation_count;
        for generation in start_generation..end_generation {
            for (&id, population) in populations.iter_mut() {
                self.do_generation(
                    generation,
                    start_generation,
                    id,
                    population,
                    pool,
                    schedule,
                    rng,
                )?;
                if population.is_extinct() {
                    return Ok(EpochOutcome::Extinct {
                        population: id,
                        generation,
                    });
                }
            }
        }

        Ok(EpochOutcome::Completed {
            next_generation: end_generation,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn do_generation(
        &mut self,
        generation: u64,
        start_generation: u64,
        id: PopulationId,
        population: &mut Population,
        pool: &mut GenePool,
        schedule: &mut dyn SamplingSchedule,
        rng: &mut dyn RngCore,
    ) -> Result<(), SimulationError> {
        let span = debug_span!("generation", population = id, generation);
        let _guard = span.enter();

        self.fitness.update_generation(generation, population);

        if generation == start_generation {
            // Adapt cached fitness to this epoch's parameters.
            population.update_all_fitnesses(self.fitness.as_ref(), pool);
            info!(
                population = id,
                fitness = population.mean_fitness(),
                distance = population.mean_distance(pool),
                max_frequency = population.max_frequency(),
                unique_genomes = pool.unique_genome_count(),
                available_genomes = pool.unused_genome_count(),
                "initial population state"
            );
        }

        population.select_next_generation(
            generation,
            self.replicator.as_ref(),
            self.mutator.as_ref(),
            self.fitness.as_ref(),
            pool,
            rng,
        );

        if generation % 100 == 0 {
            let tree_stats = population.phylogeny_mut().map(|tree| {
                tree.prune_dead_lineages();
                (tree.size(), tree.live_lineage_count(), tree.mrca_generation())
            });
            match tree_stats {
                Some((size, live, mrca)) => info!(
                    population = id,
                    generation,
                    fitness = population.mean_fitness(),
                    distance = population.mean_distance(pool),
                    max_frequency = population.max_frequency(),
                    unique_genomes = pool.unique_genome_count(),
                    available_genomes = pool.unused_genome_count(),
                    phylogeny_size = size,
                    live_lineages = live,
                    tmrca = mrca.unwrap_or(0),
                    "generation status"
                ),
                None => info!(
                    population = id,
                    generation,
                    fitness = population.mean_fitness(),
                    distance = population.mean_distance(pool),
                    max_frequency = population.max_frequency(),
                    unique_genomes = pool.unique_genome_count(),
                    available_genomes = pool.unused_genome_count(),
                    "generation status"
                ),
            }
        } else {
            debug!(
                population = id,
                generation,
                fitness = population.mean_fitness(),
                distance = population.mean_distance(pool),
                max_frequency = population.max_frequency(),
                unique_genomes = pool.unique_genome_count(),
                available_genomes = pool.unused_genome_count(),
                "generation status"
            );
        }

        schedule.do_sampling(generation, population, pool)?;
        Ok(())
    }
}

impl std::fmt::Debug for SimulationEpoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationEpoch")
            .field("name", &self.name)
            .field("generation_count", &self.generation_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Sequence;
    use crate::evolution::{
        ClonalReplicator, NeutralFitness, RouletteWheelSelector, StaticGrowth, UniformMutator,
    };
    use crate::samplers::NullSchedule;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;

    fn seq(s: &str) -> Sequence {
        s.parse().unwrap()
    }

    fn neutral_epoch(generations: u64) -> SimulationEpoch {
        SimulationEpoch::new(
            generations,
            Box::new(NeutralFitness),
            Box::new(UniformMutator::new(0.0).unwrap()),
            Box::new(ClonalReplicator),
        )
    }

    fn seeded_populations(
        count: u32,
        size: usize,
        pool: &mut GenePool,
    ) -> BTreeMap<PopulationId, Population> {
        let mut populations = BTreeMap::new();
        for id in 0..count {
            let mut population = Population::new(
                id,
                Arc::new(RouletteWheelSelector),
                Arc::new(StaticGrowth),
                seq("AAAA"),
                None,
            );
            population.initialize(&[seq("AAAA")], size, pool);
            populations.insert(id, population);
        }
        populations
    }

    #[test]
    fn test_completed_epoch_returns_next_generation() {
        let mut pool = GenePool::new();
        let mut populations = seeded_populations(1, 10, &mut pool);
        let mut schedule = NullSchedule;
        let mut rng = StdRng::seed_from_u64(4);

        let outcome = neutral_epoch(250)
            .run(&mut populations, &mut pool, &mut schedule, 1, &mut rng)
            .unwrap();
        assert_eq!(
            outcome,
            EpochOutcome::Completed {
                next_generation: 251
            }
        );
    }

    #[test]
    fn test_start_generation_carries_across_epochs() {
        let mut pool = GenePool::new();
        let mut populations = seeded_populations(1, 10, &mut pool);
        let mut schedule = NullSchedule;
        let mut rng = StdRng::seed_from_u64(4);

        let first = neutral_epoch(40)
            .run(&mut populations, &mut pool, &mut schedule, 1, &mut rng)
            .unwrap();
        let EpochOutcome::Completed { next_generation } = first else {
            panic!("unexpected extinction");
        };
        assert_eq!(next_generation, 41);

        let second = neutral_epoch(60)
            .run(
                &mut populations,
                &mut pool,
                &mut schedule,
                next_generation,
                &mut rng,
            )
            .unwrap();
        assert_eq!(
            second,
            EpochOutcome::Completed {
                next_generation: 101
            }
        );
    }

    #[test]
    fn test_lethal_fitness_reports_exact_generation() {
        struct Lethal;
        impl FitnessFunction for Lethal {
            fn score(&self, _sequence: &Sequence) -> f64 {
                0.0
            }
        }

        let mut pool = GenePool::new();
        let mut populations = seeded_populations(1, 10, &mut pool);
        let mut schedule = NullSchedule;
        let mut rng = StdRng::seed_from_u64(4);

        // The epoch-start recomputation zeroes every weight, so the very
        // first generation produces no offspring.
        let mut epoch = SimulationEpoch::new(
            50,
            Box::new(Lethal),
            Box::new(UniformMutator::new(0.0).unwrap()),
            Box::new(ClonalReplicator),
        );
        let outcome = epoch
            .run(&mut populations, &mut pool, &mut schedule, 7, &mut rng)
            .unwrap();
        assert_eq!(
            outcome,
            EpochOutcome::Extinct {
                population: 0,
                generation: 7
            }
        );
    }

    #[test]
    fn test_populations_step_in_identifier_order() {
        struct OrderProbe {
            seen: Vec<PopulationId>,
        }
        impl SamplingSchedule for OrderProbe {
            fn initialize(&mut self, _replicate: u32) {}
            fn do_sampling(
                &mut self,
                _generation: u64,
                population: &Population,
                _pool: &GenePool,
            ) -> Result<(), crate::errors::SamplingError> {
                self.seen.push(population.id());
                Ok(())
            }
            fn clean_up(&mut self) {}
        }

        let mut pool = GenePool::new();
        let mut populations = seeded_populations(3, 5, &mut pool);
        let mut schedule = OrderProbe { seen: Vec::new() };
        let mut rng = StdRng::seed_from_u64(4);

        neutral_epoch(2)
            .run(&mut populations, &mut pool, &mut schedule, 1, &mut rng)
            .unwrap();
        assert_eq!(schedule.seen, vec![0, 1, 2, 0, 1, 2]);
    }
}
