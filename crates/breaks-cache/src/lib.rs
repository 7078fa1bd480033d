//! Cached, sampled natural breaks for interactive use
//!
//! Map styling recomputes class breaks every time a layer is restyled. This
//! crate puts a bounded cache in front of the optimizer so repeated requests
//! for the same (or statistically indistinguishable) value set are answered
//! without recomputation, and samples oversized inputs so misses stay fast.
//!
//! # Example
//!
//! ```rust
//! use breaks_cache::{BreaksCache, BreaksOptions, CacheConfig};
//! use breaks_sampling::SamplingStrategy;
//!
//! let cache = BreaksCache::with_config(CacheConfig::new().capacity(20));
//! let options = BreaksOptions::new()
//!     .sample_size(64)
//!     .strategy(SamplingStrategy::Adaptive);
//!
//! let values: Vec<f64> = (1..=500).map(|i| (i as f64).ln()).collect();
//! let breaks = cache.get_or_compute(&values, 5, &options).unwrap();
//!
//! assert_eq!(breaks.len(), 6);
//! assert_eq!(breaks[0], values[0]);
//! assert_eq!(breaks[5], values[499]);
//! ```

pub mod cache;
pub mod config;
pub mod fingerprint;
pub mod stats;

pub use cache::BreaksCache;
pub use config::{BreaksOptions, CacheConfig, DEFAULT_CACHE_CAPACITY, DEFAULT_EVICTION_BATCH};
pub use fingerprint::{positional_samples, rank_statistic, Fingerprint, FINGERPRINT_SAMPLES};
pub use stats::{CacheStats, EntryStats};
