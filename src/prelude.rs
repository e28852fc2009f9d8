//! Convenience re-exports of the most commonly used types.

pub use crate::base::{Nucleotide, Sequence};
pub use crate::errors;
pub use crate::evolution::{
    ClonalReplicator, ExponentialGrowth, FitnessFunction, Mutator, NeutralFitness,
    PopulationGrowth, PurifyingFitness, Replicator, RouletteWheelSelector, Selector, StaticGrowth,
    UniformMutator,
};
pub use crate::genomes::{GenePool, GenomeId, ReferencePanel};
pub use crate::phylogeny::Phylogeny;
pub use crate::population::{Population, PopulationId, DEFAULT_POPULATION_ID};
pub use crate::samplers::{IntervalSchedule, NullSchedule, SampleLog, SampleRecord, SamplingSchedule};
pub use crate::simulation::{
    EpochOutcome, InoculumType, RunOutcome, Simulation, SimulationBuilder, SimulationEpoch,
};
