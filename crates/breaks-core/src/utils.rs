//! Utility functions for working with data slices

use std::cmp::Ordering;

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use breaks_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sort_in_place(&mut sorted);
    sorted
}

/// Sort a slice ascending in place, NaN values last
pub fn sort_in_place(data: &mut [f64]) {
    data.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    });
}

/// Drop NaN and infinite values, then sort ascending
///
/// # Examples
///
/// ```rust
/// use breaks_core::utils::finite_sorted;
///
/// let data = [3.0, f64::NAN, 1.0, f64::INFINITY, 2.0];
/// assert_eq!(finite_sorted(&data), vec![1.0, 2.0, 3.0]);
/// ```
pub fn finite_sorted(data: &[f64]) -> Vec<f64> {
    let mut finite: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
    sort_in_place(&mut finite);
    finite
}

/// Sorted distinct values of an already sorted slice
pub fn distinct_sorted(sorted: &[f64]) -> Vec<f64> {
    let mut distinct = sorted.to_vec();
    distinct.dedup();
    distinct
}

/// Count distinct values of an already sorted slice
pub fn distinct_count(sorted: &[f64]) -> usize {
    if sorted.is_empty() {
        return 0;
    }
    1 + sorted.windows(2).filter(|w| w[0] != w[1]).count()
}
