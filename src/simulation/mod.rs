//! Simulation orchestration: epochs, replicates and inoculum policy.
//!
//! [`Simulation`] owns the population set and drives the ordered epoch
//! sequence over an increasing absolute generation counter;
//! [`SimulationEpoch`] advances the populations through one fixed span of
//! generations. Use [`SimulationBuilder`] to assemble an instance.

pub mod builder;
pub mod engine;
pub mod epoch;
pub mod parameters;

pub use builder::SimulationBuilder;
pub use engine::{RunOutcome, Simulation};
pub use epoch::{EpochOutcome, SimulationEpoch};
pub use parameters::InoculumType;
