//! Bounded sampling for oversized value sets
//!
//! The exact natural breaks optimizer is quadratic in memory and cubic-ish
//! in time, so large inputs are reduced to a representative subset first.
//! This trades a small, measurable loss in classification quality (goodness
//! of variance fit) for an order-of-magnitude speedup.
//!
//! # Strategies
//!
//! | Strategy | Deterministic | Keeps min/max | Notes |
//! |----------|---------------|---------------|-------|
//! | Quantile | yes | yes | evenly spaced percentiles (default) |
//! | Random | no | no | uniform draws with replacement |
//! | Adaptive | yes | usually | more samples where segments vary more |
//!
//! # Example
//!
//! ```rust
//! use breaks_sampling::{Sampler, SamplingStrategy};
//! use rand::SeedableRng;
//!
//! let sorted: Vec<f64> = (0..1000).map(|i| (i as f64).powf(1.5)).collect();
//!
//! let sampler = Sampler::new(SamplingStrategy::Quantile, 100);
//! let sample = sampler.reduce(&sorted);
//! assert_eq!(sample.len(), 100);
//! assert_eq!(sample[0], sorted[0]);
//! assert_eq!(sample[99], sorted[999]);
//!
//! // Random sampling with a seeded generator is reproducible
//! let random = Sampler::new(SamplingStrategy::Random, 100);
//! let a = random.reduce_with_rng(&sorted, &mut rand::rngs::StdRng::seed_from_u64(3));
//! let b = random.reduce_with_rng(&sorted, &mut rand::rngs::StdRng::seed_from_u64(3));
//! assert_eq!(a, b);
//! ```

pub mod adaptive;
pub mod sampler;
pub mod strategy;

pub use adaptive::{adaptive_sample, MAX_SEGMENTS};
pub use sampler::{
    quantile_sample, random_sample, reduce, reduce_with_rng, Sampler, MIN_TARGET_SIZE,
};
pub use strategy::SamplingStrategy;

/// Default number of values kept when sampling
pub const DEFAULT_SAMPLE_SIZE: usize = 100;
