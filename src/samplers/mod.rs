//! Sampling schedules deciding when and what to persist.
//!
//! The schedule is consulted once per (generation, population); whether a
//! given generation's state is actually recorded is entirely the
//! schedule's decision. Output formats are owned by embedding
//! applications; the schedules here record in memory.

use std::sync::{Arc, Mutex};

pub use crate::errors::SamplingError;
use crate::genomes::GenePool;
use crate::population::{Population, PopulationId};
use serde::{Deserialize, Serialize};

/// Schedule deciding when population state is sampled.
pub trait SamplingSchedule: Send {
    /// Reset the schedule for a new replicate.
    fn initialize(&mut self, replicate: u32);

    /// Whether populations should maintain an ancestry tree.
    ///
    /// Consulted once, at population construction time: a population built
    /// under a schedule that does not sample trees never tracks ancestry.
    fn is_sampling_trees(&self) -> bool {
        false
    }

    /// Offer this generation's state for sampling.
    fn do_sampling(
        &mut self,
        generation: u64,
        population: &Population,
        pool: &GenePool,
    ) -> Result<(), SamplingError>;

    /// Finalize the schedule after a fully completed replicate.
    ///
    /// Not invoked when a replicate terminates on extinction.
    fn clean_up(&mut self);
}

/// Schedule that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSchedule;

impl SamplingSchedule for NullSchedule {
    fn initialize(&mut self, _replicate: u32) {}

    fn do_sampling(
        &mut self,
        _generation: u64,
        _population: &Population,
        _pool: &GenePool,
    ) -> Result<(), SamplingError> {
        Ok(())
    }

    fn clean_up(&mut self) {}
}

/// One recorded population snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub replicate: u32,
    pub generation: u64,
    pub population: PopulationId,
    pub population_size: usize,
    pub mean_fitness: f64,
    pub mean_distance: f64,
    pub max_frequency: f64,
}

/// Shared handle onto the records collected by an [`IntervalSchedule`].
///
/// Clone the handle before the schedule is handed to a simulation to read
/// the records afterwards.
#[derive(Debug, Clone, Default)]
pub struct SampleLog {
    records: Arc<Mutex<Vec<SampleRecord>>>,
}

impl SampleLog {
    fn push(&self, record: SampleRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }

    fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }

    /// Copy of the records collected so far.
    pub fn snapshot(&self) -> Vec<SampleRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Number of records collected so far.
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Whether no record has been collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Records a summary snapshot every `every` generations.
#[derive(Debug)]
pub struct IntervalSchedule {
    every: u64,
    sample_trees: bool,
    replicate: u32,
    log: SampleLog,
}

impl IntervalSchedule {
    /// Create a schedule sampling every `every` generations.
    pub fn new(every: u64) -> Result<Self, SamplingError> {
        if every == 0 {
            return Err(SamplingError::InvalidInterval(every));
        }
        Ok(Self {
            every,
            sample_trees: false,
            replicate: 0,
            log: SampleLog::default(),
        })
    }

    /// Also request ancestry trees from the populations.
    pub fn with_trees(mut self) -> Self {
        self.sample_trees = true;
        self
    }

    /// Shared handle onto the collected records.
    pub fn log(&self) -> SampleLog {
        self.log.clone()
    }
}

impl SamplingSchedule for IntervalSchedule {
    fn initialize(&mut self, replicate: u32) {
        self.replicate = replicate;
        self.log.clear();
    }

    fn is_sampling_trees(&self) -> bool {
        self.sample_trees
    }

    fn do_sampling(
        &mut self,
        generation: u64,
        population: &Population,
        pool: &GenePool,
    ) -> Result<(), SamplingError> {
        if generation % self.every != 0 {
            return Ok(());
        }
        self.log.push(SampleRecord {
            replicate: self.replicate,
            generation,
            population: population.id(),
            population_size: population.current_generation_size(),
            mean_fitness: population.mean_fitness(),
            mean_distance: population.mean_distance(pool),
            max_frequency: population.max_frequency(),
        });
        Ok(())
    }

    fn clean_up(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Sequence;
    use crate::evolution::{RouletteWheelSelector, StaticGrowth};
    use crate::population::DEFAULT_POPULATION_ID;
    use std::sync::Arc;

    fn test_population(pool: &mut GenePool) -> Population {
        let consensus: Sequence = "AAAA".parse().unwrap();
        let mut population = Population::new(
            DEFAULT_POPULATION_ID,
            Arc::new(RouletteWheelSelector),
            Arc::new(StaticGrowth),
            consensus.clone(),
            None,
        );
        population.initialize(&[consensus], 8, pool);
        population
    }

    #[test]
    fn test_interval_must_be_positive() {
        assert_eq!(
            IntervalSchedule::new(0).unwrap_err(),
            SamplingError::InvalidInterval(0)
        );
    }

    #[test]
    fn test_interval_schedule_records_on_interval() {
        let mut pool = GenePool::new();
        let population = test_population(&mut pool);

        let mut schedule = IntervalSchedule::new(10).unwrap();
        let log = schedule.log();
        schedule.initialize(3);

        for generation in 1..=25 {
            schedule.do_sampling(generation, &population, &pool).unwrap();
        }

        let records = log.snapshot();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].generation, 10);
        assert_eq!(records[1].generation, 20);
        assert_eq!(records[0].replicate, 3);
        assert_eq!(records[0].population_size, 8);
        assert_eq!(records[0].max_frequency, 1.0);
    }

    #[test]
    fn test_initialize_clears_previous_replicate() {
        let mut pool = GenePool::new();
        let population = test_population(&mut pool);

        let mut schedule = IntervalSchedule::new(1).unwrap();
        let log = schedule.log();
        schedule.initialize(0);
        schedule.do_sampling(1, &population, &pool).unwrap();
        assert_eq!(log.len(), 1);

        schedule.initialize(1);
        assert!(log.is_empty());
    }

    #[test]
    fn test_tree_gating_flag() {
        let plain = IntervalSchedule::new(5).unwrap();
        assert!(!plain.is_sampling_trees());
        let with_trees = IntervalSchedule::new(5).unwrap().with_trees();
        assert!(with_trees.is_sampling_trees());
    }
}
