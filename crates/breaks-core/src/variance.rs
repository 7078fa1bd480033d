//! Within-class variance primitives
//!
//! Everything here works with the *total* squared deviation of a segment
//! (the sum of squared distances from the segment mean, not divided by the
//! count). That is the quantity the Fisher-Jenks objective minimizes.

use num_traits::Float;

/// Convert a count to the float type. usize always converts to a float.
#[inline]
fn from_count<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::infinity)
}

/// Total squared deviation of `sorted[start..=end]` from its mean.
///
/// Returns zero when the range is empty or reversed, runs past the end of
/// the slice, or holds a single value. Uses two passes (mean first, then
/// squared deviations) so large-magnitude inputs do not lose precision.
///
/// # Examples
///
/// ```rust
/// use breaks_core::variance::segment_variance;
///
/// let data = [1.0, 2.0, 3.0, 10.0];
/// assert_eq!(segment_variance(&data, 0, 2), 2.0);
/// assert_eq!(segment_variance(&data, 3, 3), 0.0);
/// assert_eq!(segment_variance(&data, 2, 1), 0.0);
/// ```
pub fn segment_variance<T: Float>(sorted: &[T], start: usize, end: usize) -> T {
    if start > end || end >= sorted.len() || end == start {
        return T::zero();
    }

    let segment = &sorted[start..=end];
    let sum = segment.iter().fold(T::zero(), |acc, &x| acc + x);
    let mean = sum / from_count(segment.len());

    segment.iter().fold(T::zero(), |acc, &x| {
        let diff = x - mean;
        acc + diff * diff
    })
}

/// Signed-index variant of [`segment_variance`] for callers that compute
/// offsets which may go negative. A negative index yields zero.
pub fn segment_variance_signed<T: Float>(sorted: &[T], start: isize, end: isize) -> T {
    if start < 0 || end < 0 {
        return T::zero();
    }
    segment_variance(sorted, start as usize, end as usize)
}

/// Population variance (squared deviations divided by the count).
///
/// Returns zero for an empty slice.
pub fn population_variance<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    segment_variance(values, 0, values.len() - 1) / from_count(values.len())
}

/// Running total squared deviation (Welford's update).
///
/// Pushing the values of a segment one at a time yields the same result as
/// [`segment_variance`] up to rounding, in O(1) per value.
#[derive(Debug, Clone, Copy)]
pub struct SegmentAccumulator<T: Float = f64> {
    count: usize,
    mean: T,
    m2: T,
}

impl<T: Float> Default for SegmentAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SegmentAccumulator<T> {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: T::zero(),
            m2: T::zero(),
        }
    }

    /// Add one value to the segment
    #[inline]
    pub fn push(&mut self, x: T) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean = self.mean + delta / from_count(self.count);
        self.m2 = self.m2 + delta * (x - self.mean);
    }

    /// Number of values seen
    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean of the values seen (zero when empty)
    pub fn mean(&self) -> T {
        self.mean
    }

    /// Total squared deviation of the values seen
    pub fn sum_squared_deviations(&self) -> T {
        // Rounding can leave a tiny negative residue on constant runs
        self.m2.max(T::zero())
    }
}

/// Upper-triangular table of segment variances over a sorted slice.
///
/// Cell `(i, j)` holds `segment_variance(sorted, i, j)` for `i <= j`. Each
/// row is filled with a [`SegmentAccumulator`], so building the whole table
/// costs O(n²) time and memory.
#[derive(Debug, Clone)]
pub struct VarianceMatrix<T: Float = f64> {
    rows: Vec<Vec<T>>,
}

impl<T: Float> VarianceMatrix<T> {
    /// Build the full table sequentially
    pub fn new(sorted: &[T]) -> Self {
        let rows = (0..sorted.len())
            .map(|start| Self::compute_row(sorted, start))
            .collect();
        Self { rows }
    }

    /// Compute row `start`: the variances of `sorted[start..=j]` for every
    /// `j >= start`, in order.
    ///
    /// Rows are independent of each other, so callers may compute them in
    /// parallel and assemble the table with [`VarianceMatrix::from_rows`].
    pub fn compute_row(sorted: &[T], start: usize) -> Vec<T> {
        let tail = sorted.get(start..).unwrap_or(&[]);
        let mut acc = SegmentAccumulator::new();
        tail.iter()
            .map(|&x| {
                acc.push(x);
                acc.sum_squared_deviations()
            })
            .collect()
    }

    /// Assemble a table from rows produced by [`VarianceMatrix::compute_row`]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Self { rows }
    }

    /// Number of values the table was built over
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Variance of the segment `[i, j]`; zero outside the upper triangle
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        if i > j {
            return T::zero();
        }
        self.rows
            .get(i)
            .and_then(|row| row.get(j - i))
            .copied()
            .unwrap_or_else(T::zero)
    }
}
