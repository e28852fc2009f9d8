//! Population growth models.

pub use crate::errors::GrowthError;
use serde::{Deserialize, Serialize};

/// Decides how many offspring the next generation receives.
///
/// `target` is the configured population size; growth models may approach
/// it gradually from a small inoculum but never exceed it.
pub trait PopulationGrowth: Send + Sync {
    /// Size of the next generation given the current one.
    fn next_size(&self, current: usize, target: usize) -> usize;
}

/// Constant-size model: every generation is at the target size.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StaticGrowth;

impl PopulationGrowth for StaticGrowth {
    fn next_size(&self, _current: usize, target: usize) -> usize {
        target
    }
}

/// Exponential growth toward the target size.
///
/// The next generation is `current * rate`, rounded, capped at the target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExponentialGrowth {
    rate: f64,
}

impl ExponentialGrowth {
    /// Create an exponential growth model with per-generation factor
    /// `rate` (> 1.0).
    pub fn new(rate: f64) -> Result<Self, GrowthError> {
        if !rate.is_finite() || rate <= 1.0 {
            return Err(GrowthError::InvalidRate(rate));
        }
        Ok(Self { rate })
    }

    /// The per-generation growth factor.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl PopulationGrowth for ExponentialGrowth {
    fn next_size(&self, current: usize, target: usize) -> usize {
        let grown = (current as f64 * self.rate).round() as usize;
        grown.max(current).min(target)
    }
}
