//! Variance-weighted stratified sampling
//!
//! The sorted input is cut into at most [`MAX_SEGMENTS`] contiguous
//! segments. Segments where the values spread out more receive more sample
//! slots, so the sample stays dense where class boundaries are likely to
//! move. Every segment keeps at least one slot.

use crate::sampler::quantile_sample;
use breaks_core::population_variance;
use std::ops::Range;

/// Upper bound on the number of segments
pub const MAX_SEGMENTS: usize = 10;

/// Reduce `sorted` to exactly `target` values, weighted by segment variance.
///
/// Falls back to [`quantile_sample`] when the segments carry no variance.
/// Returns the input unchanged when `target >= sorted.len()`.
pub fn adaptive_sample(sorted: &[f64], target: usize) -> Vec<f64> {
    let n = sorted.len();
    if target >= n {
        return sorted.to_vec();
    }
    if target == 0 {
        return Vec::new();
    }

    let segments = split_segments(n, MAX_SEGMENTS.min(target));
    let variances: Vec<f64> = segments
        .iter()
        .map(|range| population_variance(&sorted[range.clone()]))
        .collect();
    let total: f64 = variances.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return quantile_sample(sorted, target);
    }

    let lengths: Vec<usize> = segments.iter().map(|range| range.len()).collect();
    let allocation = allocate(&variances, &lengths, target);

    let mut sample = Vec::with_capacity(target);
    for (range, count) in segments.into_iter().zip(allocation) {
        sample.extend(even_sample(&sorted[range], count));
    }
    sample
}

/// Cut `0..n` into `count` contiguous, near-equal, non-empty ranges.
///
/// Requires `1 <= count <= n`.
pub fn split_segments(n: usize, count: usize) -> Vec<Range<usize>> {
    (0..count)
        .map(|i| (i * n / count)..((i + 1) * n / count))
        .collect()
}

/// Distribute `target` slots across segments in proportion to variance.
///
/// Each segment gets at least one slot and at most its length. Rounding
/// uses largest remainders so the slots always sum to `target`. Requires
/// `lengths.len() <= target < lengths.iter().sum()`.
pub fn allocate(variances: &[f64], lengths: &[usize], target: usize) -> Vec<usize> {
    let total: f64 = variances.iter().sum();
    let quotas: Vec<f64> = variances
        .iter()
        .map(|v| target as f64 * v / total)
        .collect();

    let mut allocation: Vec<usize> = quotas
        .iter()
        .zip(lengths)
        .map(|(quota, &len)| (quota.floor() as usize).max(1).min(len))
        .collect();

    let mut assigned: usize = allocation.iter().sum();

    // Too many: take back from the segment furthest above its quota
    while assigned > target {
        let pick = (0..allocation.len())
            .filter(|&i| allocation[i] > 1)
            .max_by(|&a, &b| {
                let over_a = allocation[a] as f64 - quotas[a];
                let over_b = allocation[b] as f64 - quotas[b];
                over_a.total_cmp(&over_b)
            });
        match pick {
            Some(i) => {
                allocation[i] -= 1;
                assigned -= 1;
            }
            None => break,
        }
    }

    // Too few: hand out to the segment furthest below its quota
    while assigned < target {
        let pick = (0..allocation.len())
            .filter(|&i| allocation[i] < lengths[i])
            .max_by(|&a, &b| {
                let under_a = quotas[a] - allocation[a] as f64;
                let under_b = quotas[b] - allocation[b] as f64;
                under_a.total_cmp(&under_b)
            });
        match pick {
            Some(i) => {
                allocation[i] += 1;
                assigned += 1;
            }
            None => break,
        }
    }

    allocation
}

/// Pick `count` evenly spaced values from a sorted segment
fn even_sample(segment: &[f64], count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        _ if count >= segment.len() => segment.to_vec(),
        1 => vec![segment[segment.len() / 2]],
        _ => quantile_sample(segment, count),
    }
}
