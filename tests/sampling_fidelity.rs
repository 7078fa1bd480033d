//! Quality of sampled classification against the exact optimum

use natural_breaks::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, LogNormal, Pareto};

fn pareto_data(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let pareto = Pareto::new(1.0, 1.5).unwrap();
    (0..n).map(|_| pareto.sample(&mut rng)).collect()
}

/// GVF of the cached result relative to the exact optimum
fn fit_ratio(values: &[f64], k: usize, options: &BreaksOptions) -> f64 {
    let exact = optimize_exact(values, k).unwrap();
    let cache = BreaksCache::new();
    let sampled = compute_breaks(&cache, values, k, options).unwrap();
    assert_eq!(sampled.len(), k + 1);
    goodness_of_variance_fit(values, &sampled) / goodness_of_variance_fit(values, &exact)
}

#[test]
fn test_default_sampling_fit_on_polynomial_growth() {
    let squares: Vec<f64> = (0..450).map(|i| (i as f64).powi(2)).collect();
    let cubes: Vec<f64> = (0..450).map(|i| (i as f64).powi(3)).collect();

    for values in [squares, cubes] {
        let ratio = fit_ratio(&values, 7, &BreaksOptions::default());
        assert!(ratio >= 0.95, "ratio {ratio:.4}");
        assert!(ratio <= 1.0 + 1e-9);
    }
}

#[test]
fn test_heavy_tail_needs_adaptive_sampling() {
    // Zipf-like: a handful of large values, a long flat run near zero
    let values: Vec<f64> = (0..450).map(|i| 1000.0 / (i + 1) as f64).collect();

    let quantile = fit_ratio(&values, 7, &BreaksOptions::default());
    let adaptive = fit_ratio(
        &values,
        7,
        &BreaksOptions::new().strategy(SamplingStrategy::Adaptive),
    );

    // Even spacing skips most of the tail
    assert!(quantile < 0.8, "quantile ratio {quantile:.4}");
    assert!(adaptive >= 0.8, "adaptive ratio {adaptive:.4}");
    assert!(adaptive > quantile);
}

#[test]
fn test_power_law_sampled_fit_close_to_exact() {
    let values = pareto_data(450, 2024);
    let exact = optimize_exact(&values, 7).unwrap();
    let exact_gvf = goodness_of_variance_fit(&values, &exact);

    let cache = BreaksCache::new();
    let options = BreaksOptions::new().strategy(SamplingStrategy::Adaptive);
    let sampled = compute_breaks(&cache, &values, 7, &options).unwrap();
    let sampled_gvf = goodness_of_variance_fit(&values, &sampled);

    assert_eq!(sampled.len(), 8);
    assert!(
        sampled_gvf >= 0.8 * exact_gvf,
        "sampled GVF {sampled_gvf:.4} vs exact {exact_gvf:.4}"
    );
    // The exact optimum is never beaten
    assert!(sampled_gvf <= exact_gvf + 1e-9);
}

#[test]
fn test_exact_fit_improves_with_classes() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let lognormal = LogNormal::new(3.0, 0.8).unwrap();
    let values: Vec<f64> = (0..300).map(|_| lognormal.sample(&mut rng)).collect();

    let mut previous = 0.0;
    for k in 1..=8 {
        let breaks = optimize_exact(&values, k).unwrap();
        let gvf = goodness_of_variance_fit(&values, &breaks);
        assert!(gvf + 1e-9 >= previous, "k={k}: {gvf} < {previous}");
        previous = gvf;
    }
    assert!(previous > 0.9);
}

#[test]
fn test_forced_full_matches_exact() {
    let values = pareto_data(250, 7);
    let cache = BreaksCache::new();
    let options = BreaksOptions::new().force_full(true);

    let breaks = compute_breaks(&cache, &values, 5, &options).unwrap();
    assert_eq!(breaks, optimize_exact(&values, 5).unwrap());
}
