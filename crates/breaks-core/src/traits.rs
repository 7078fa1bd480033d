//! Core traits for class break computation

use crate::Result;

/// An algorithm that turns a value set into class boundaries.
///
/// Implementations return an ascending boundary sequence whose first and
/// last elements are the minimum and maximum of the input.
pub trait BreaksAlgorithm: Send + Sync {
    /// Compute boundaries for `k` classes from unsorted input
    fn breaks(&self, values: &[f64], k: usize) -> Result<Vec<f64>>;

    /// Compute boundaries from pre-sorted, finite data
    ///
    /// This can be more efficient for algorithms that need sorted data.
    /// Default implementation just calls breaks().
    fn breaks_sorted(&self, sorted: &[f64], k: usize) -> Result<Vec<f64>> {
        self.breaks(sorted, k)
    }

    /// Short name used in logs
    fn name(&self) -> &str;
}
