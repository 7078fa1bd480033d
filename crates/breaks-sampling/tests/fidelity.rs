//! Sample shape tests across strategies
//!
//! These check that every strategy returns sorted values drawn from the
//! input, and that the deterministic strategies track the input
//! distribution closely.

use breaks_core::utils::sorted;
use breaks_sampling::{reduce_with_rng, SamplingStrategy};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp};

fn exponential_data(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let exp = Exp::new(0.01).unwrap();
    sorted(&(0..n).map(|_| exp.sample(&mut rng)).collect::<Vec<_>>())
}

/// Value at a fractional rank of a sorted slice
fn rank_value(sorted: &[f64], p: f64) -> f64 {
    sorted[((sorted.len() - 1) as f64 * p).round() as usize]
}

#[test]
fn test_quantile_tracks_median() {
    let data = exponential_data(5000, 11);
    let true_median = rank_value(&data, 0.5);
    let spread = rank_value(&data, 0.75) - rank_value(&data, 0.25);

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let sample = reduce_with_rng(&data, 200, SamplingStrategy::Quantile, &mut rng);
    let median = rank_value(&sample, 0.5);
    assert!(
        (median - true_median).abs() < 0.05 * spread,
        "sample median {median} vs {true_median}"
    );
}

#[test]
fn test_adaptive_favours_the_long_tail() {
    let data = exponential_data(5000, 11);
    let q90 = rank_value(&data, 0.9);

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let sample = reduce_with_rng(&data, 200, SamplingStrategy::Adaptive, &mut rng);
    assert_eq!(sample.len(), 200);

    // Every decile keeps a representative, the spread-out tail gets the bulk
    assert!(sample[0] <= rank_value(&data, 0.1));
    assert_eq!(*sample.last().unwrap(), *data.last().unwrap());
    let in_tail = sample.iter().filter(|&&v| v >= q90).count();
    assert!(in_tail > 100, "tail got {in_tail} of 200 samples");
}

#[test]
fn test_adaptive_is_reproducible() {
    let data = exponential_data(2000, 5);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let a = reduce_with_rng(&data, 120, SamplingStrategy::Adaptive, &mut rng);
    let b = reduce_with_rng(&data, 120, SamplingStrategy::Adaptive, &mut rng);
    assert_eq!(a, b);
    assert_eq!(a.len(), 120);
}

#[test]
fn test_strategy_serde_names() {
    let json = serde_json::to_string(&SamplingStrategy::Adaptive).unwrap();
    assert_eq!(json, "\"adaptive\"");
    let parsed: SamplingStrategy = serde_json::from_str("\"random\"").unwrap();
    assert_eq!(parsed, SamplingStrategy::Random);
}

proptest! {
    #[test]
    fn prop_sample_is_sorted_subset(
        raw in prop::collection::vec(-1e4f64..1e4, 1..400),
        target in 0usize..150,
        seed in any::<u64>(),
        strategy_idx in 0usize..3,
    ) {
        let data = sorted(&raw);
        let strategy = SamplingStrategy::ALL[strategy_idx];
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let sample = reduce_with_rng(&data, target, strategy, &mut rng);

        let effective = target.max(2);
        if data.len() <= effective {
            prop_assert_eq!(&sample, &data);
        } else {
            prop_assert_eq!(sample.len(), effective);
        }
        prop_assert!(sample.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(sample.iter().all(|v| data.contains(v)));
    }

    #[test]
    fn prop_quantile_keeps_extremes(raw in prop::collection::vec(-1e4f64..1e4, 3..400), target in 2usize..100) {
        let data = sorted(&raw);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let sample = reduce_with_rng(&data, target, SamplingStrategy::Quantile, &mut rng);
        prop_assert_eq!(sample[0], data[0]);
        prop_assert_eq!(*sample.last().unwrap(), *data.last().unwrap());
    }
}
