//! # virosim
//!
//! Forward-time, discrete-generation stochastic simulation of evolving
//! viral populations. The crate seeds one or more populations from a
//! configurable inoculum, advances them generation by generation through a
//! sequence of epochs (each fixing a fitness function, mutation operator
//! and replication operator for a fixed number of generations), detects
//! extinction, and coordinates periodic housekeeping: ancestry-tree
//! pruning, sampling and progress logging.
//!
//! The entry point is [`simulation::Simulation`], usually assembled with
//! [`simulation::SimulationBuilder`]. One call to `run` executes one
//! replicate; the same instance can be run repeatedly with different
//! replicate indices, reusing its population objects.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod genomes;
pub mod phylogeny;
pub mod population;
pub mod prelude;
pub mod samplers;
pub mod simulation;

pub use base::{Nucleotide, Sequence};
