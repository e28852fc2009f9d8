//! Evolutionary operators: the strategy objects fixed per epoch.
//!
//! An epoch pins one fitness function, one mutation operator and one
//! replication operator for its whole duration; the selector and the
//! growth model belong to the population and persist across epochs.

pub mod fitness;
pub mod growth;
pub mod mutation;
pub mod replication;
pub mod selection;

pub use fitness::{FitnessFunction, NeutralFitness, PurifyingFitness};
pub use growth::{ExponentialGrowth, PopulationGrowth, StaticGrowth};
pub use mutation::{Mutator, Substitution, UniformMutator};
pub use replication::{ClonalReplicator, Replicator};
pub use selection::{RouletteWheelSelector, Selector};
