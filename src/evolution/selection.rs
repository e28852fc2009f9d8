//! Parent selection.

use rand::{Rng, RngCore};

/// Chooses the parents of the next generation.
///
/// The selector belongs to the population and persists across epochs.
pub trait Selector: Send + Sync {
    /// Select `count` parent indices, weighted by the given fitness
    /// values.
    ///
    /// An empty result signals that no viable parent exists (all weights
    /// zero, or an empty generation); the caller treats the next
    /// generation as empty.
    fn select_parents(&self, fitnesses: &[f64], count: usize, rng: &mut dyn RngCore)
        -> Vec<usize>;
}

/// Fitness-proportional (roulette-wheel) selection over the cumulative
/// fitness distribution. Individuals may be chosen repeatedly.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouletteWheelSelector;

impl Selector for RouletteWheelSelector {
    fn select_parents(
        &self,
        fitnesses: &[f64],
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<usize> {
        let total: f64 = fitnesses.iter().sum();
        if fitnesses.is_empty() || total <= 0.0 {
            return Vec::new();
        }

        let cumulative: Vec<f64> = fitnesses
            .iter()
            .scan(0.0, |acc, &f| {
                *acc += f;
                Some(*acc)
            })
            .collect();

        (0..count)
            .map(|_| {
                let r = rng.random_range(0.0..total);
                cumulative
                    .iter()
                    .position(|&c| c >= r)
                    .unwrap_or(fitnesses.len() - 1)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_weights_select_nothing() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(RouletteWheelSelector
            .select_parents(&[], 10, &mut rng)
            .is_empty());
    }

    #[test]
    fn test_zero_total_fitness_selects_nothing() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(RouletteWheelSelector
            .select_parents(&[0.0, 0.0, 0.0], 10, &mut rng)
            .is_empty());
    }

    #[test]
    fn test_selects_requested_count_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let parents = RouletteWheelSelector.select_parents(&[1.0, 1.0, 1.0, 1.0], 25, &mut rng);
        assert_eq!(parents.len(), 25);
        assert!(parents.iter().all(|&p| p < 4));
    }

    #[test]
    fn test_zero_weight_individual_never_selected() {
        let mut rng = StdRng::seed_from_u64(11);
        let parents = RouletteWheelSelector.select_parents(&[1.0, 0.0, 1.0], 200, &mut rng);
        assert!(parents.iter().all(|&p| p != 1));
    }

    #[test]
    fn test_selection_tracks_weights() {
        let mut rng = StdRng::seed_from_u64(23);
        let parents = RouletteWheelSelector.select_parents(&[1.0, 9.0], 1000, &mut rng);
        let heavy = parents.iter().filter(|&&p| p == 1).count();
        // Expected ~900 of 1000 draws for the 9:1 weight.
        assert!(heavy > 800, "heavy parent drawn only {heavy} times");
    }
}
