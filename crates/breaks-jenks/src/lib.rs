//! Exact natural breaks (Fisher-Jenks) classification
//!
//! This crate computes the class boundaries that minimize total within-class
//! variance for a one-dimensional value set. The result is exact and
//! deterministic: the same multiset of values and class count always yield
//! the same boundaries.
//!
//! The optimizer is O(n²k) in time and O(n²) in memory, so it is meant for
//! inputs of up to a few hundred values. Larger inputs should go through the
//! sampled, cached entry point in `breaks-cache`.
//!
//! # Examples
//!
//! ```rust
//! use breaks_jenks::{optimize, JenksOptimizer};
//! use breaks_core::BreaksAlgorithm;
//!
//! let trips = [12.0, 15.0, 14.0, 80.0, 85.0, 300.0, 310.0, 11.0];
//!
//! let breaks = optimize(&trips, 3).unwrap();
//! assert_eq!(breaks, vec![11.0, 15.0, 85.0, 310.0]);
//!
//! // Same thing through the trait, with a guard against large inputs
//! let optimizer = JenksOptimizer::new().with_max_exact_size(500);
//! assert_eq!(optimizer.breaks(&trips, 3).unwrap(), breaks);
//! ```

pub mod optimizer;

pub use optimizer::{degenerate_breaks, optimize, optimize_sorted, JenksOptimizer};
