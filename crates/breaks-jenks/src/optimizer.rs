//! Fisher-Jenks dynamic program
//!
//! Given n sorted values and a class count k, find the k-1 split points that
//! minimize the summed within-class squared deviation. The table
//! `dp[c][i]` holds the best cost of splitting the first `i + 1` values into
//! `c + 1` classes:
//!
//! ```text
//! dp[0][i] = var(0..=i)
//! dp[c][i] = min over j in [c-1, i) of dp[c-1][j] + var(j+1..=i)
//! ```
//!
//! The minimizing `j` is the last index of class `c - 1`, so walking the
//! backtrack table from `(k-1, n-1)` recovers every interior boundary as the
//! largest value of the class below it.
//!
//! Cost is O(n²k) time and O(n²) memory for the variance table, which is why
//! the cached entry point samples large inputs before getting here.

use breaks_core::utils::{distinct_count, distinct_sorted, sorted};
use breaks_core::{BreaksAlgorithm, Error, Result, VarianceMatrix};
use tracing::{debug, instrument, trace};

/// Exact natural breaks for unsorted input.
///
/// Fails with [`Error::InvalidClassCount`] when `k == 0` and with
/// [`Error::InvalidValue`] when any value is NaN or infinite.
///
/// # Examples
///
/// ```rust
/// use breaks_jenks::optimize;
///
/// let breaks = optimize(&[20.0, 1.0, 9.0, 2.0, 10.0, 4.0, 7.0, 5.0], 3).unwrap();
/// assert_eq!(breaks, vec![1.0, 5.0, 10.0, 20.0]);
/// ```
pub fn optimize(values: &[f64], k: usize) -> Result<Vec<f64>> {
    JenksOptimizer::new().breaks(values, k)
}

/// Exact natural breaks for data that is already sorted and finite
pub fn optimize_sorted(sorted: &[f64], k: usize) -> Result<Vec<f64>> {
    JenksOptimizer::new().breaks_sorted(sorted, k)
}

/// Fisher-Jenks optimizer
///
/// Stateless apart from an optional size limit that turns oversized inputs
/// into [`Error::InputTooLarge`] instead of an n² allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JenksOptimizer {
    max_exact_size: Option<usize>,
}

impl JenksOptimizer {
    /// Create an optimizer without a size limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse inputs with more than `limit` values
    pub fn with_max_exact_size(mut self, limit: usize) -> Self {
        self.max_exact_size = Some(limit);
        self
    }

    /// The configured size limit, if any
    pub fn max_exact_size(&self) -> Option<usize> {
        self.max_exact_size
    }
}

impl BreaksAlgorithm for JenksOptimizer {
    #[instrument(level = "debug", skip(self, values), fields(n = values.len()))]
    fn breaks(&self, values: &[f64], k: usize) -> Result<Vec<f64>> {
        Error::check_class_count(k)?;
        Error::check_finite(values)?;
        self.breaks_sorted(&sorted(values), k)
    }

    fn breaks_sorted(&self, sorted: &[f64], k: usize) -> Result<Vec<f64>> {
        Error::check_class_count(k)?;

        if let Some(shortcut) = degenerate_breaks(sorted, k) {
            debug!(n = sorted.len(), k, "degenerate input, skipping optimization");
            return Ok(shortcut);
        }

        if let Some(limit) = self.max_exact_size {
            if sorted.len() > limit {
                return Err(Error::InputTooLarge {
                    len: sorted.len(),
                    limit,
                });
            }
        }

        let matrix = variance_matrix(sorted);
        Ok(fisher_jenks(sorted, &matrix, k))
    }

    fn name(&self) -> &str {
        "fisher-jenks"
    }
}

/// Boundaries for inputs that need no optimization.
///
/// Returns `None` when the full dynamic program has to run. Checked in
/// order: empty input, a single value, all values equal, and fewer than
/// `k + 2` distinct values (the distinct values are then the boundaries).
pub fn degenerate_breaks(sorted: &[f64], k: usize) -> Option<Vec<f64>> {
    match sorted {
        [] => Some(Vec::new()),
        [only] => Some(vec![*only, *only]),
        [first, .., last] => {
            if first == last {
                return Some(vec![*first; k + 1]);
            }
            if k >= distinct_count(sorted) - 1 {
                return Some(distinct_sorted(sorted));
            }
            None
        }
    }
}

#[cfg(feature = "parallel")]
fn variance_matrix(sorted: &[f64]) -> VarianceMatrix<f64> {
    use rayon::prelude::*;

    let rows = (0..sorted.len())
        .into_par_iter()
        .map(|start| VarianceMatrix::compute_row(sorted, start))
        .collect();
    VarianceMatrix::from_rows(rows)
}

#[cfg(not(feature = "parallel"))]
fn variance_matrix(sorted: &[f64]) -> VarianceMatrix<f64> {
    VarianceMatrix::new(sorted)
}

/// Run the dynamic program. Requires `sorted.len() > k`.
fn fisher_jenks(sorted: &[f64], matrix: &VarianceMatrix<f64>, k: usize) -> Vec<f64> {
    let n = sorted.len();
    trace!(n, k, "running fisher-jenks dynamic program");

    let mut prev: Vec<f64> = (0..n).map(|i| matrix.get(0, i)).collect();
    let mut backtrack = vec![vec![0usize; n]; k];

    for c in 1..k {
        let mut row = vec![f64::INFINITY; n];
        for i in c..n {
            let mut best = f64::INFINITY;
            let mut best_j = c - 1;
            for j in (c - 1)..i {
                let cost = prev[j] + matrix.get(j + 1, i);
                if cost < best {
                    best = cost;
                    best_j = j;
                }
            }
            row[i] = best;
            backtrack[c][i] = best_j;
        }
        prev = row;
    }

    debug!(n, k, cost = prev[n - 1], "optimal within-class variance");

    let mut interior = Vec::with_capacity(k.saturating_sub(1));
    let mut end = n - 1;
    for c in (1..k).rev() {
        let split = backtrack[c][end];
        interior.push(sorted[split]);
        end = split;
    }
    interior.reverse();

    let mut boundaries = Vec::with_capacity(k + 1);
    boundaries.push(sorted[0]);
    boundaries.extend(interior);
    boundaries.push(sorted[n - 1]);
    boundaries
}
