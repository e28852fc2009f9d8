use std::error;
use std::fmt;

use crate::population::PopulationId;

/// Error returned when attempting to convert an invalid byte/character into
/// a `Nucleotide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNucleotide(pub u8);

impl fmt::Display for InvalidNucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid nucleotide byte: {} ('{}')", self.0, self.0 as char)
    }
}

impl error::Error for InvalidNucleotide {}

/// Error type for failures when constructing a `Sequence` or a collection
/// of reference sequences.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidSequence {
    /// A character was not recognized as a valid nucleotide.
    InvalidChar(char),

    /// A non-empty sequence collection was required.
    Empty,

    /// Sequences in a reference collection differ in length.
    UnequalLengths { expected: usize, found: usize },
}

impl fmt::Display for InvalidSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar(c) => write!(f, "Invalid character in sequence: '{c}'"),
            Self::Empty => write!(f, "Empty sequence collection not allowed"),
            Self::UnequalLengths { expected, found } => {
                write!(f, "Sequence length mismatch: expected {expected}, found {found}")
            }
        }
    }
}

impl error::Error for InvalidSequence {}

/// Errors that can occur when configuring mutation operators.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationError {
    /// Invalid per-site mutation rate (must be between 0.0 and 1.0)
    InvalidMutationRate(f64),
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationError::InvalidMutationRate(mu) => {
                write!(f, "Invalid mutation rate: {mu} (must be between 0.0 and 1.0)")
            }
        }
    }
}

impl error::Error for MutationError {}

/// Errors that can occur when configuring fitness functions.
#[derive(Debug, Clone, PartialEq)]
pub enum FitnessError {
    /// Invalid parameter value
    InvalidParameter(String),
}

impl fmt::Display for FitnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitnessError::InvalidParameter(msg) => {
                write!(f, "Invalid fitness parameter: {msg}")
            }
        }
    }
}

impl error::Error for FitnessError {}

/// Errors that can occur when configuring growth models.
#[derive(Debug, Clone, PartialEq)]
pub enum GrowthError {
    /// Invalid growth rate (must be greater than 1.0)
    InvalidRate(f64),
}

impl fmt::Display for GrowthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthError::InvalidRate(rate) => {
                write!(f, "Invalid growth rate: {rate} (must be greater than 1.0)")
            }
        }
    }
}

impl error::Error for GrowthError {}

/// Errors raised by sampling schedules.
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// The sampling interval must be at least one generation.
    InvalidInterval(u64),
    /// The schedule failed to record a sample.
    Failed(String),
}

impl fmt::Display for SamplingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval(every) => {
                write!(f, "Invalid sampling interval: {every} (must be >= 1)")
            }
            Self::Failed(msg) => write!(f, "Sampling failed: {msg}"),
        }
    }
}

impl error::Error for SamplingError {}

/// Errors that can occur while assembling a simulation.
#[derive(Debug)]
pub enum BuilderError {
    /// A required parameter is missing
    MissingRequired(&'static str),
    /// An invalid parameter value was provided
    InvalidParameter(String),
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired(param) => {
                write!(f, "Missing required parameter: {param}")
            }
            Self::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {msg}")
            }
        }
    }
}

impl error::Error for BuilderError {}

/// Errors raised while running a replicate.
///
/// Extinction is not represented here: it is a well-defined terminal state
/// reported through `RunOutcome`, and the embedding process continues.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A population identifier outside the configured set was requested.
    UnknownPopulation { id: PopulationId },
    /// A sampling schedule fault; aborts the current replicate.
    Sampling(SamplingError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPopulation { id } => {
                write!(f, "Unknown population with ID: {id}")
            }
            Self::Sampling(e) => write!(f, "Sampling schedule error: {e}"),
        }
    }
}

impl error::Error for SimulationError {}

impl From<SamplingError> for SimulationError {
    fn from(e: SamplingError) -> Self {
        Self::Sampling(e)
    }
}
