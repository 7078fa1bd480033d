//! Natural breaks classification for choropleth scales
//!
//! Turns a numeric metric (trip counts per station, say) into a small set of
//! class boundaries that minimize within-class variance, so a color scale
//! keeps the clusters and gaps of the data.
//!
//! # Crates
//!
//! - [`breaks_core`]: errors, segment variance, quality measures
//! - [`breaks_jenks`]: the exact Fisher-Jenks optimizer
//! - [`breaks_sampling`]: sampling of oversized inputs
//! - [`breaks_cache`]: fingerprint-keyed LRU cache over sampled optimization
//!
//! # Quick Start
//!
//! ```rust
//! use natural_breaks::prelude::*;
//!
//! let cache = BreaksCache::new();
//! let trips = [12.0, 15.0, 14.0, 80.0, 85.0, 300.0, 310.0, 11.0];
//!
//! let breaks = compute_breaks(&cache, &trips, 3, &BreaksOptions::default()).unwrap();
//! assert_eq!(breaks, vec![11.0, 15.0, 85.0, 310.0]);
//!
//! // Map each feature to its class
//! assert_eq!(class_index(14.0, &breaks), Some(0));
//! assert_eq!(class_index(300.0, &breaks), Some(2));
//!
//! // Three tight clusters are separated almost perfectly
//! assert!(goodness_of_variance_fit(&trips, &breaks) > 0.99);
//! ```
//!
//! # Exact vs Sampled
//!
//! [`optimize_exact`] always runs the full optimizer and rejects non-finite
//! values. [`compute_breaks`] drops non-finite values, samples inputs larger
//! than [`BreaksOptions::sample_size`] and caches results by fingerprint.

pub use breaks_cache;
pub use breaks_core;
pub use breaks_jenks;
pub use breaks_sampling;

pub use breaks_cache::{
    BreaksCache, BreaksOptions, CacheConfig, CacheStats, EntryStats, Fingerprint,
    DEFAULT_CACHE_CAPACITY, DEFAULT_EVICTION_BATCH,
};
pub use breaks_core::{
    class_index, goodness_of_variance_fit, BreaksAlgorithm, Error, Result, DEFAULT_CLASS_COUNT,
};
pub use breaks_jenks::JenksOptimizer;
pub use breaks_sampling::{Sampler, SamplingStrategy, DEFAULT_SAMPLE_SIZE};

/// Class breaks through a cache, sampling large inputs.
///
/// Equivalent to [`BreaksCache::get_or_compute`].
///
/// The small-input shortcuts (a single value, all values equal, no more
/// distinct values than boundaries) are decided on the sample, not on the
/// full input. A sample with few distinct values therefore yields fewer
/// than `k + 1` boundaries even when the full input has enough: 980 zeros
/// followed by `1.0..=20.0` sample down to `0`, `10` and `20`, so `k = 7`
/// returns `[0.0, 10.0, 20.0]`. Set [`BreaksOptions::force_full()`] to
/// classify the full input.
pub fn compute_breaks<A: BreaksAlgorithm>(
    cache: &BreaksCache<A>,
    values: &[f64],
    k: usize,
    options: &BreaksOptions,
) -> Result<Vec<f64>> {
    cache.get_or_compute(values, k, options)
}

/// Exact natural breaks over the full input, without caching or sampling.
///
/// # Errors
///
/// [`Error::InvalidClassCount`] when `k == 0` and [`Error::InvalidValue`]
/// for the first non-finite value.
pub fn optimize_exact(values: &[f64], k: usize) -> Result<Vec<f64>> {
    breaks_jenks::optimize(values, k)
}

pub mod prelude {
    pub use crate::{
        class_index, compute_breaks, goodness_of_variance_fit, optimize_exact, BreaksAlgorithm,
        BreaksCache, BreaksOptions, CacheConfig, Error, JenksOptimizer, Result, SamplingStrategy,
    };
}
