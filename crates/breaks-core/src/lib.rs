//! Core types for natural breaks classification
//!
//! This crate holds the pieces every other breaks crate builds on:
//!
//! - [`Error`] / [`Result`]: the shared error taxonomy
//! - [`variance`]: total squared deviation of sorted segments, the objective
//!   the Fisher-Jenks optimizer minimizes
//! - [`quality`]: goodness of variance fit and class lookup for a boundary
//!   sequence
//! - [`BreaksAlgorithm`]: the seam between the cache and the optimizer
//!
//! # Example
//!
//! ```rust
//! use breaks_core::{goodness_of_variance_fit, variance::segment_variance};
//!
//! let data = [1.0, 2.0, 4.0, 5.0, 7.0, 9.0, 10.0, 20.0];
//! let total = segment_variance(&data, 0, data.len() - 1);
//! assert!(total > 0.0);
//!
//! let gvf = goodness_of_variance_fit(&data, &[1.0, 5.0, 10.0, 20.0]);
//! assert!(gvf > 0.8 && gvf <= 1.0);
//! ```

pub mod error;
pub mod quality;
pub mod traits;
pub mod utils;
pub mod variance;

// Re-export core types
pub use error::{Error, Result};
pub use quality::{class_index, goodness_of_variance_fit};
pub use traits::BreaksAlgorithm;
pub use variance::{
    population_variance, segment_variance, segment_variance_signed, SegmentAccumulator,
    VarianceMatrix,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of classes requested by callers that do not choose one
pub const DEFAULT_CLASS_COUNT: usize = 7;
