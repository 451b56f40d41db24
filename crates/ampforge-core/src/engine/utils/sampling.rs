use rand::distributions::{WeightedError, WeightedIndex};
use rand::prelude::*;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum SamplingError {
    #[error("Cannot sample from an empty pool")]
    EmptyPool,
    #[error("Got {weights} weights for {items} items")]
    LengthMismatch { items: usize, weights: usize },
    #[error("Failed to create weighted distribution: {source}")]
    DistributionError {
        #[from]
        source: WeightedError,
    },
}

/// A fixed pool of items drawn with replacement according to their weights.
#[derive(Debug, Clone)]
pub struct WeightedPicker<T> {
    items: Vec<T>,
    distribution: WeightedIndex<f64>,
}

impl<T: Copy> WeightedPicker<T> {
    pub fn new(items: Vec<T>, weights: &[f64]) -> Result<Self, SamplingError> {
        if items.is_empty() {
            return Err(SamplingError::EmptyPool);
        }
        if items.len() != weights.len() {
            return Err(SamplingError::LengthMismatch {
                items: items.len(),
                weights: weights.len(),
            });
        }
        let distribution = WeightedIndex::new(weights)?;
        Ok(Self {
            items,
            distribution,
        })
    }

    /// Every item with the same weight.
    pub fn uniform(items: Vec<T>) -> Result<Self, SamplingError> {
        let weights = vec![1.0; items.len()];
        Self::new(items, &weights)
    }

    pub fn pick(&self, rng: &mut impl Rng) -> T {
        self.items[self.distribution.sample(rng)]
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

/// A random ordering of all indices of `weights` in which heavier items tend to come
/// first, i.e. repeated weighted sampling without replacement.
///
/// Uses Efraimidis-Spirakis keys `u^(1/w)`. Items with non-positive weight are placed
/// last in random order.
#[instrument(level = "trace", skip_all, fields(items = weights.len()))]
pub fn weighted_permutation(weights: &[f64], rng: &mut impl Rng) -> Vec<usize> {
    let mut keyed: Vec<(f64, usize)> = weights
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let u: f64 = rng.gen_range(f64::EPSILON..1.0);
            let key = if w > 0.0 { u.powf(1.0 / w) } else { u - 1.0 };
            (key, i)
        })
        .collect();
    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    keyed.into_iter().map(|(_, i)| i).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn picker_never_draws_zero_weight_items() {
        let picker = WeightedPicker::new(vec!['C', 'K', 'M'], &[0.0, 1.0, 0.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            assert_eq!(picker.pick(&mut rng), 'K');
        }
    }

    #[test]
    fn picker_rejects_empty_and_mismatched_input() {
        assert_eq!(
            WeightedPicker::<char>::new(vec![], &[]).unwrap_err(),
            SamplingError::EmptyPool
        );
        assert_eq!(
            WeightedPicker::new(vec!['A'], &[1.0, 2.0]).unwrap_err(),
            SamplingError::LengthMismatch {
                items: 1,
                weights: 2
            }
        );
    }

    #[test]
    fn picker_rejects_all_zero_weights() {
        let result = WeightedPicker::new(vec!['A', 'K'], &[0.0, 0.0]);
        assert!(matches!(
            result,
            Err(SamplingError::DistributionError { .. })
        ));
    }

    #[test]
    fn weighted_permutation_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(4);
        let order = weighted_permutation(&[5.0, 1.0, 3.0, 0.0], &mut rng);
        assert_eq!(order.len(), 4);
        let unique: HashSet<usize> = order.iter().copied().collect();
        assert_eq!(unique.len(), 4);
        assert_eq!(order[3], 3);
    }

    #[test]
    fn weighted_permutation_favours_heavy_items() {
        let mut rng = StdRng::seed_from_u64(12);
        let firsts = (0..2000)
            .filter(|_| weighted_permutation(&[50.0, 1.0], &mut rng)[0] == 0)
            .count();
        assert!(firsts > 1800, "heavy item first {firsts} times");
    }
}
