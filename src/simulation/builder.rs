//! Fluent construction of `Simulation` instances.

use std::sync::Arc;

use crate::errors::BuilderError;
use crate::evolution::{PopulationGrowth, RouletteWheelSelector, Selector, StaticGrowth};
use crate::genomes::ReferencePanel;
use crate::samplers::{NullSchedule, SamplingSchedule};
use crate::simulation::engine::Simulation;
use crate::simulation::epoch::SimulationEpoch;
use crate::simulation::parameters::InoculumType;

/// Builder for [`Simulation`] with validation and sensible defaults.
///
/// Required: a positive population size, a reference panel and at least
/// one epoch. Defaults: consensus inoculum, roulette-wheel selection,
/// static growth, no sampling, one population.
pub struct SimulationBuilder {
    population_size: Option<usize>,
    population_count: u32,
    inoculum: InoculumType,
    reference: Option<Arc<ReferencePanel>>,
    selector: Arc<dyn Selector>,
    growth: Arc<dyn PopulationGrowth>,
    schedule: Option<Box<dyn SamplingSchedule>>,
    epochs: Vec<SimulationEpoch>,
}

impl SimulationBuilder {
    /// Start building a simulation.
    pub fn new() -> Self {
        Self {
            population_size: None,
            population_count: 1,
            inoculum: InoculumType::Consensus,
            reference: None,
            selector: Arc::new(RouletteWheelSelector),
            growth: Arc::new(StaticGrowth),
            schedule: None,
            epochs: Vec::new(),
        }
    }

    /// Target number of individuals in every population.
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }

    /// Number of independent populations (identifiers `0..count`).
    pub fn populations(mut self, count: u32) -> Self {
        self.population_count = count;
        self
    }

    /// Inoculum policy used to seed each replicate.
    pub fn inoculum(mut self, inoculum: InoculumType) -> Self {
        self.inoculum = inoculum;
        self
    }

    /// Reference panel the inoculum is drawn from.
    pub fn reference(mut self, reference: Arc<ReferencePanel>) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Parent selector shared by every population.
    pub fn selector(mut self, selector: impl Selector + 'static) -> Self {
        self.selector = Arc::new(selector);
        self
    }

    /// Growth model shared by every population.
    pub fn growth(mut self, growth: impl PopulationGrowth + 'static) -> Self {
        self.growth = Arc::new(growth);
        self
    }

    /// Sampling schedule for the run.
    pub fn sampling(mut self, schedule: impl SamplingSchedule + 'static) -> Self {
        self.schedule = Some(Box::new(schedule));
        self
    }

    /// Append an epoch to the ordered sequence.
    pub fn epoch(mut self, epoch: SimulationEpoch) -> Self {
        self.epochs.push(epoch);
        self
    }

    /// Validate and build the simulation.
    pub fn build(self) -> Result<Simulation, BuilderError> {
        let population_size = self
            .population_size
            .ok_or(BuilderError::MissingRequired("population_size"))?;
        let reference = self
            .reference
            .ok_or(BuilderError::MissingRequired("reference"))?;
        let schedule = self
            .schedule
            .unwrap_or_else(|| Box::new(NullSchedule));

        Simulation::new(
            population_size,
            self.selector,
            self.growth,
            self.inoculum,
            reference,
            self.epochs,
            schedule,
            self.population_count,
        )
    }
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
