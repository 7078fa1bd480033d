//! Configuration types for cached classification

use breaks_sampling::{Sampler, SamplingStrategy, DEFAULT_SAMPLE_SIZE, MIN_TARGET_SIZE};
use serde::{Deserialize, Serialize};

/// Default maximum number of cached boundary sequences
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

/// Default number of entries dropped when the cache overflows
pub const DEFAULT_EVICTION_BATCH: usize = 10;

/// Per-call options for the cached entry point
///
/// Field names serialize in camelCase, and the strategy is named
/// `stratification`, matching the JSON a map front end sends.
///
/// # Example
///
/// ```rust
/// use breaks_cache::BreaksOptions;
/// use breaks_sampling::SamplingStrategy;
///
/// let options = BreaksOptions::new()
///     .sample_size(250)
///     .strategy(SamplingStrategy::Adaptive);
/// assert_eq!(options.sample_size, 250);
/// assert!(!options.force_full);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreaksOptions {
    /// Inputs with more valid values than this are sampled down to it
    pub sample_size: usize,
    /// How to sample
    #[serde(rename = "stratification")]
    pub strategy: SamplingStrategy,
    /// Always optimize over the full value set
    pub force_full: bool,
    /// Seed for the random strategy; `None` uses the thread-local generator
    pub seed: Option<u64>,
}

impl Default for BreaksOptions {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            strategy: SamplingStrategy::default(),
            force_full: false,
            seed: None,
        }
    }
}

impl BreaksOptions {
    /// Options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sample size (at least 2).
    pub fn sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size.max(MIN_TARGET_SIZE);
        self
    }

    /// Sets the sampling strategy.
    pub fn strategy(mut self, strategy: SamplingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Skip sampling regardless of input size.
    pub fn force_full(mut self, force_full: bool) -> Self {
        self.force_full = force_full;
        self
    }

    /// Makes the random strategy reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sampler described by these options
    pub fn sampler(&self) -> Sampler {
        Sampler::new(self.strategy, self.sample_size)
    }
}

/// Capacity settings for [`BreaksCache`](crate::BreaksCache)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CacheConfig {
    /// Maximum number of entries kept
    pub capacity: usize,
    /// Entries removed, oldest access first, once the capacity is exceeded
    pub eviction_batch: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
            eviction_batch: DEFAULT_EVICTION_BATCH,
        }
    }
}

impl CacheConfig {
    /// Config with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the capacity (at least 1).
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Sets the eviction batch size.
    pub fn eviction_batch(mut self, eviction_batch: usize) -> Self {
        self.eviction_batch = eviction_batch;
        self
    }

    /// Clamp the fields into a usable range: capacity at least 1, eviction
    /// batch within `1..=capacity`.
    pub fn normalized(self) -> Self {
        let capacity = self.capacity.max(1);
        Self {
            capacity,
            eviction_batch: self.eviction_batch.clamp(1, capacity),
        }
    }
}
