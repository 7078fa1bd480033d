//! Reduction of sorted value sets to a bounded sample
//!
//! All functions take data that is already sorted and finite, and return a
//! sorted sample.

use crate::adaptive::adaptive_sample;
use crate::strategy::SamplingStrategy;
use breaks_core::utils::sort_in_place;
use rand::Rng;
use tracing::debug;

/// Smallest meaningful sample: a sample must be able to hold min and max
pub const MIN_TARGET_SIZE: usize = 2;

/// Reduce `sorted` to `target` values with the given strategy.
///
/// The random strategy draws from `rand::thread_rng()`; use
/// [`reduce_with_rng`] for reproducible samples.
pub fn reduce(sorted: &[f64], target: usize, strategy: SamplingStrategy) -> Vec<f64> {
    reduce_with_rng(sorted, target, strategy, &mut rand::thread_rng())
}

/// Reduce `sorted` to `target` values, drawing randomness from `rng`.
///
/// Targets below [`MIN_TARGET_SIZE`] are raised to it. When the input is not
/// larger than the target it is returned unchanged.
pub fn reduce_with_rng<R: Rng + ?Sized>(
    sorted: &[f64],
    target: usize,
    strategy: SamplingStrategy,
    rng: &mut R,
) -> Vec<f64> {
    let target = target.max(MIN_TARGET_SIZE);
    if sorted.len() <= target {
        return sorted.to_vec();
    }

    match strategy {
        SamplingStrategy::Quantile => quantile_sample(sorted, target),
        SamplingStrategy::Random => random_sample(sorted, target, rng),
        SamplingStrategy::Adaptive => adaptive_sample(sorted, target),
    }
}

/// Evenly spaced percentile sample.
///
/// Takes `sorted[round(i * step)]` for `i in 0..target` with
/// `step = (n - 1) / (target - 1)`, so the first and last values are always
/// included.
///
/// # Examples
///
/// ```rust
/// use breaks_sampling::quantile_sample;
///
/// let data: Vec<f64> = (0..11).map(|i| i as f64).collect();
/// assert_eq!(quantile_sample(&data, 3), vec![0.0, 5.0, 10.0]);
/// ```
pub fn quantile_sample(sorted: &[f64], target: usize) -> Vec<f64> {
    if sorted.is_empty() || target == 0 {
        return Vec::new();
    }
    if target == 1 {
        return vec![sorted[0]];
    }

    let last = sorted.len() - 1;
    let step = last as f64 / (target - 1) as f64;
    (0..target)
        .map(|i| {
            let idx = ((i as f64 * step).round() as usize).min(last);
            sorted[idx]
        })
        .collect()
}

/// `target` uniform draws with replacement, returned sorted
pub fn random_sample<R: Rng + ?Sized>(sorted: &[f64], target: usize, rng: &mut R) -> Vec<f64> {
    if sorted.is_empty() {
        return Vec::new();
    }
    let mut sample: Vec<f64> = (0..target)
        .map(|_| sorted[rng.gen_range(0..sorted.len())])
        .collect();
    sort_in_place(&mut sample);
    sample
}

/// Decides when to sample and how.
///
/// # Example
///
/// ```rust
/// use breaks_sampling::{Sampler, SamplingStrategy};
///
/// let sampler = Sampler::new(SamplingStrategy::Quantile, 100);
/// assert!(!sampler.should_reduce(100, false));
/// assert!(sampler.should_reduce(101, false));
/// assert!(!sampler.should_reduce(5000, true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    strategy: SamplingStrategy,
    target_size: usize,
}

impl Sampler {
    /// Create a sampler; targets below [`MIN_TARGET_SIZE`] are raised
    pub fn new(strategy: SamplingStrategy, target_size: usize) -> Self {
        Self {
            strategy,
            target_size: target_size.max(MIN_TARGET_SIZE),
        }
    }

    /// Strategy used for reduction
    pub fn strategy(&self) -> SamplingStrategy {
        self.strategy
    }

    /// Number of values a reduced set holds
    pub fn target_size(&self) -> usize {
        self.target_size
    }

    /// Whether a set of `valid_count` values should be reduced
    pub fn should_reduce(&self, valid_count: usize, force_full: bool) -> bool {
        !force_full && valid_count > self.target_size
    }

    /// Reduce a sorted set, drawing randomness from the thread-local generator
    pub fn reduce(&self, sorted: &[f64]) -> Vec<f64> {
        self.reduce_with_rng(sorted, &mut rand::thread_rng())
    }

    /// Reduce a sorted set, drawing randomness from `rng`
    pub fn reduce_with_rng<R: Rng + ?Sized>(&self, sorted: &[f64], rng: &mut R) -> Vec<f64> {
        let sample = reduce_with_rng(sorted, self.target_size, self.strategy, rng);
        debug!(
            strategy = %self.strategy,
            input = sorted.len(),
            output = sample.len(),
            "reduced value set"
        );
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn test_quantile_keeps_extremes() {
        let data = ramp(1000);
        let sample = quantile_sample(&data, 100);
        assert_eq!(sample.len(), 100);
        assert_eq!(sample[0], 0.0);
        assert_eq!(sample[99], 999.0);
        assert!(sample.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_quantile_deterministic() {
        let data: Vec<f64> = (0..500).map(|i| ((i * 7919) % 1000) as f64).collect();
        let mut sorted = data.clone();
        sort_in_place(&mut sorted);
        let a = reduce(&sorted, 37, SamplingStrategy::Quantile);
        let b = reduce(&sorted, 37, SamplingStrategy::Quantile);
        assert_eq!(a, b);
    }

    #[test]
    fn test_quantile_small_targets() {
        let data = ramp(10);
        assert!(quantile_sample(&data, 0).is_empty());
        assert_eq!(quantile_sample(&data, 1), vec![0.0]);
        assert_eq!(quantile_sample(&data, 2), vec![0.0, 9.0]);
        assert!(quantile_sample(&[], 5).is_empty());
    }

    #[test]
    fn test_random_reproducible_with_seed() {
        let data = ramp(300);
        let mut rng_a = ChaCha8Rng::seed_from_u64(7);
        let mut rng_b = ChaCha8Rng::seed_from_u64(7);
        let a = reduce_with_rng(&data, 50, SamplingStrategy::Random, &mut rng_a);
        let b = reduce_with_rng(&data, 50, SamplingStrategy::Random, &mut rng_b);
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
        assert!(a.windows(2).all(|w| w[0] <= w[1]));
        assert!(a.iter().all(|v| data.contains(v)));
    }

    #[test]
    fn test_passthrough_when_small() {
        let data = ramp(20);
        for strategy in SamplingStrategy::ALL {
            assert_eq!(reduce(&data, 20, strategy), data);
            assert_eq!(reduce(&data, 50, strategy), data);
        }
    }

    #[test]
    fn test_target_floor() {
        let data = ramp(10);
        assert_eq!(reduce(&data, 0, SamplingStrategy::Quantile), vec![0.0, 9.0]);
        assert_eq!(Sampler::new(SamplingStrategy::Adaptive, 1).target_size(), 2);
    }

    #[test]
    fn test_sampler_should_reduce() {
        let sampler = Sampler::new(SamplingStrategy::Random, 100);
        assert_eq!(sampler.strategy(), SamplingStrategy::Random);
        assert!(!sampler.should_reduce(0, false));
        assert!(!sampler.should_reduce(100, false));
        assert!(sampler.should_reduce(101, false));
        assert!(!sampler.should_reduce(101, true));
    }

    #[test]
    fn test_sampler_reduce_lengths() {
        let data = ramp(1000);
        for strategy in SamplingStrategy::ALL {
            let sampler = Sampler::new(strategy, 64);
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            assert_eq!(sampler.reduce_with_rng(&data, &mut rng).len(), 64);
        }
    }
}
