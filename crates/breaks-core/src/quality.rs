//! Classification quality and class lookup
//!
//! A boundary sequence `[b0, b1, ..., bk]` describes k classes. Class `c`
//! holds the values in `(b[c], b[c+1]]`, except the first class which also
//! includes `b0`. An interior boundary is therefore the largest value of the
//! class below it, which is how the Fisher-Jenks optimizer reports splits.

use crate::utils::finite_sorted;
use crate::variance::segment_variance;

/// Index of the class `value` falls into.
///
/// Returns `None` when fewer than two boundaries are given, when the value is
/// not finite, or when it lies outside `[b0, bk]`.
///
/// # Examples
///
/// ```rust
/// use breaks_core::class_index;
///
/// let breaks = [1.0, 5.0, 10.0, 20.0];
/// assert_eq!(class_index(1.0, &breaks), Some(0));
/// assert_eq!(class_index(5.0, &breaks), Some(0));
/// assert_eq!(class_index(7.0, &breaks), Some(1));
/// assert_eq!(class_index(20.0, &breaks), Some(2));
/// assert_eq!(class_index(21.0, &breaks), None);
/// ```
pub fn class_index(value: f64, boundaries: &[f64]) -> Option<usize> {
    if boundaries.len() < 2 || !value.is_finite() {
        return None;
    }
    let last = boundaries[boundaries.len() - 1];
    if value < boundaries[0] || value > last {
        return None;
    }
    Some(clamped_class_index(value, boundaries))
}

/// Class index with out-of-range values clamped to the first/last class
fn clamped_class_index(value: f64, boundaries: &[f64]) -> usize {
    let classes = boundaries.len() - 1;
    boundaries[1..]
        .iter()
        .position(|&upper| value <= upper)
        .unwrap_or(classes - 1)
}

/// Goodness of variance fit: `1 - within_class / total`.
///
/// Non-finite values are ignored. Values outside the boundary range are
/// counted in the nearest end class. Returns 1.0 when the data has no
/// variance at all, and 0.0 when fewer than two boundaries are given.
pub fn goodness_of_variance_fit(values: &[f64], boundaries: &[f64]) -> f64 {
    let sorted = finite_sorted(values);
    if sorted.is_empty() {
        return 1.0;
    }
    if boundaries.len() < 2 {
        return 0.0;
    }

    let total = segment_variance(&sorted, 0, sorted.len() - 1);
    if total <= 0.0 {
        return 1.0;
    }

    // Sorted values map to non-decreasing class indices, so each class is a
    // contiguous run.
    let mut within = 0.0;
    let mut run_start = 0;
    let mut run_class = clamped_class_index(sorted[0], boundaries);
    for (i, &v) in sorted.iter().enumerate().skip(1) {
        let class = clamped_class_index(v, boundaries);
        if class != run_class {
            within += segment_variance(&sorted, run_start, i - 1);
            run_start = i;
            run_class = class;
        }
    }
    within += segment_variance(&sorted, run_start, sorted.len() - 1);

    1.0 - within / total
}
