//! Cache introspection

use serde::Serialize;
use std::time::Duration;

/// Snapshot of a [`BreaksCache`](crate::BreaksCache)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Entries currently stored
    pub size: usize,
    /// Configured capacity
    pub max_size: usize,
    /// Lookups answered from the cache
    pub total_hits: usize,
    /// Lookups that had to compute
    pub misses: usize,
    /// `total_hits / (total_hits + misses)`, 0 before any lookup
    pub hit_rate: f64,
    /// Per-entry details, most recently used first
    pub entries: Vec<EntryStats>,
}

/// One cached classification
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryStats {
    /// Fingerprint key
    pub key: String,
    /// Hits served by this entry
    pub hit_count: usize,
    /// Whether the boundaries were computed from a sample
    pub sampled: bool,
    /// Time since the entry was last stored or hit
    pub age: Duration,
}

impl CacheStats {
    pub(crate) fn hit_rate(hits: usize, misses: usize) -> f64 {
        if hits + misses > 0 {
            hits as f64 / (hits + misses) as f64
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate() {
        assert_eq!(CacheStats::hit_rate(0, 0), 0.0);
        assert_eq!(CacheStats::hit_rate(3, 1), 0.75);
        assert_eq!(CacheStats::hit_rate(0, 4), 0.0);
    }
}
