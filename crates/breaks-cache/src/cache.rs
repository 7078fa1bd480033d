//! Fingerprint-keyed LRU cache of computed class breaks
//!
//! # Thread Safety
//!
//! The cache uses three mechanisms:
//!
//! 1. **Storage**: a `Mutex<HashMap>` holds the entries. The lock is only
//!    held to look up, insert or evict, never while the optimizer runs.
//! 2. **Counters**: hits, misses and the access clock are atomics, so
//!    statistics never need the storage lock.
//! 3. **Shared handles**: `Clone` shares storage and counters, so clones
//!    observe each other's entries.
//!
//! Two threads that miss on the same fingerprint at the same time both
//! compute; the later insert replaces the earlier one.

use crate::config::{BreaksOptions, CacheConfig};
use crate::fingerprint::Fingerprint;
use crate::stats::{CacheStats, EntryStats};
use breaks_core::utils::finite_sorted;
use breaks_core::{BreaksAlgorithm, Error, Result};
use breaks_jenks::JenksOptimizer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use tracing::{debug, instrument, trace};

type EntryStorage = Arc<Mutex<HashMap<Fingerprint, CacheEntry>>>;

#[derive(Debug)]
struct CacheEntry {
    boundaries: Arc<Vec<f64>>,
    sampled: bool,
    hit_count: usize,
    last_tick: u64,
    last_access: Instant,
}

impl CacheEntry {
    fn new(boundaries: Vec<f64>, sampled: bool, tick: u64) -> Self {
        Self {
            boundaries: Arc::new(boundaries),
            sampled,
            hit_count: 0,
            last_tick: tick,
            last_access: Instant::now(),
        }
    }

    fn touch(&mut self, tick: u64) {
        self.hit_count += 1;
        self.last_tick = tick;
        self.last_access = Instant::now();
    }
}

/// Cache of class breaks keyed by value set fingerprint.
///
/// On a miss the value set is filtered to finite values, sampled when it is
/// larger than the configured sample size, and handed to the algorithm. The
/// first and last boundary are then pinned to the minimum and maximum of
/// the full (unsampled) data, so sampling never shrinks the covered range.
///
/// Entries remember whether they came from a sample. A `force_full` request
/// that finds a sampled entry counts as a miss, recomputes over the full
/// value set and replaces the entry.
///
/// # Example
///
/// ```rust
/// use breaks_cache::{BreaksCache, BreaksOptions};
///
/// let cache = BreaksCache::new();
/// let values = [12.0, 15.0, 14.0, 80.0, 85.0, 300.0, 310.0, 11.0];
///
/// let first = cache.get_or_compute(&values, 3, &BreaksOptions::default()).unwrap();
/// let second = cache.get_or_compute(&values, 3, &BreaksOptions::default()).unwrap();
/// assert_eq!(first, second);
/// assert_eq!(cache.stats().total_hits, 1);
/// ```
pub struct BreaksCache<A: BreaksAlgorithm = JenksOptimizer> {
    algorithm: Arc<A>,
    config: CacheConfig,
    storage: EntryStorage,
    hits: Arc<AtomicUsize>,
    misses: Arc<AtomicUsize>,
    access_counter: Arc<AtomicU64>,
}

impl BreaksCache<JenksOptimizer> {
    /// Cache with the default capacity around the exact optimizer
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Cache with a custom capacity around the exact optimizer
    pub fn with_config(config: CacheConfig) -> Self {
        Self::with_algorithm(JenksOptimizer::new(), config)
    }
}

impl Default for BreaksCache<JenksOptimizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: BreaksAlgorithm> BreaksCache<A> {
    /// Cache around any breaks algorithm
    pub fn with_algorithm(algorithm: A, config: CacheConfig) -> Self {
        Self {
            algorithm: Arc::new(algorithm),
            config: config.normalized(),
            storage: Arc::new(Mutex::new(HashMap::new())),
            hits: Arc::new(AtomicUsize::new(0)),
            misses: Arc::new(AtomicUsize::new(0)),
            access_counter: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Algorithm run on cache misses
    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    /// Effective (normalized) configuration
    pub fn config(&self) -> CacheConfig {
        self.config
    }

    /// Class breaks for `values`, served from the cache when the fingerprint
    /// matches a stored entry.
    ///
    /// Non-finite values are dropped first. If nothing is left the result is
    /// empty for any `k`, including 0. Otherwise `k` must be at least 1.
    ///
    /// A sampled input runs the algorithm on the sample, so a sample with
    /// few distinct values can produce fewer than `k + 1` boundaries.
    #[instrument(level = "debug", skip(self, values, options), fields(n = values.len()))]
    pub fn get_or_compute(
        &self,
        values: &[f64],
        k: usize,
        options: &BreaksOptions,
    ) -> Result<Vec<f64>> {
        let sorted = finite_sorted(values);
        if sorted.is_empty() {
            return Ok(Vec::new());
        }
        Error::check_class_count(k)?;

        let dropped = values.len() - sorted.len();
        if dropped > 0 {
            debug!(dropped, "ignoring non-finite values");
        }

        let key = Fingerprint::from_sorted(&sorted, k);
        if let Some(boundaries) = self.lookup(&key, options.force_full) {
            return Ok(boundaries.as_ref().clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(%key, "cache miss");

        let (boundaries, sampled) = self.compute(&sorted, k, options)?;
        self.store(key, boundaries.clone(), sampled);
        Ok(boundaries)
    }

    /// Whether a classification of `values` into `k` classes is cached.
    ///
    /// Does not count as an access.
    pub fn contains(&self, values: &[f64], k: usize) -> bool {
        let sorted = finite_sorted(values);
        if sorted.is_empty() {
            return false;
        }
        let key = Fingerprint::from_sorted(&sorted, k);
        self.lock_storage().contains_key(&key)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.lock_storage().len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of counters and per-entry details, most recently used first
    pub fn stats(&self) -> CacheStats {
        let total_hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);

        let storage = self.lock_storage();
        let mut by_recency: Vec<(&Fingerprint, &CacheEntry)> = storage.iter().collect();
        by_recency.sort_unstable_by(|a, b| b.1.last_tick.cmp(&a.1.last_tick));
        let entries = by_recency
            .into_iter()
            .map(|(key, entry)| EntryStats {
                key: key.to_string(),
                hit_count: entry.hit_count,
                sampled: entry.sampled,
                age: entry.last_access.elapsed(),
            })
            .collect();

        CacheStats {
            size: storage.len(),
            max_size: self.config.capacity,
            total_hits,
            misses,
            hit_rate: CacheStats::hit_rate(total_hits, misses),
            entries,
        }
    }

    /// Remove all entries and reset the counters
    pub fn clear(&self) {
        self.lock_storage().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.access_counter.store(0, Ordering::Relaxed);
        debug!("cache cleared");
    }

    fn lock_storage(&self) -> MutexGuard<'_, HashMap<Fingerprint, CacheEntry>> {
        // Entries are replaced whole, so a poisoned map is still consistent
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_tick(&self) -> u64 {
        self.access_counter.fetch_add(1, Ordering::Relaxed)
    }

    /// Stored boundaries for `key`. With `require_full`, an entry computed
    /// from a sample does not count.
    fn lookup(&self, key: &Fingerprint, require_full: bool) -> Option<Arc<Vec<f64>>> {
        let tick = self.next_tick();
        let mut storage = self.lock_storage();
        let entry = storage.get_mut(key)?;
        if require_full && entry.sampled {
            debug!(%key, "sampled entry cannot serve a full request");
            return None;
        }
        entry.touch(tick);
        self.hits.fetch_add(1, Ordering::Relaxed);
        debug!(%key, hit_count = entry.hit_count, "cache hit");
        Some(Arc::clone(&entry.boundaries))
    }

    /// Breaks for `sorted`, and whether they were computed from a sample
    fn compute(
        &self,
        sorted: &[f64],
        k: usize,
        options: &BreaksOptions,
    ) -> Result<(Vec<f64>, bool)> {
        let sampler = options.sampler();
        let sampled = sampler.should_reduce(sorted.len(), options.force_full);
        let mut boundaries = if sampled {
            let sample = match options.seed {
                Some(seed) => sampler.reduce_with_rng(sorted, &mut StdRng::seed_from_u64(seed)),
                None => sampler.reduce(sorted),
            };
            self.algorithm.breaks_sorted(&sample, k)?
        } else {
            self.algorithm.breaks_sorted(sorted, k)?
        };

        pin_extremes(&mut boundaries, sorted);
        trace!(algorithm = self.algorithm.name(), sampled, ?boundaries, "computed breaks");
        Ok((boundaries, sampled))
    }

    fn store(&self, key: Fingerprint, boundaries: Vec<f64>, sampled: bool) {
        let tick = self.next_tick();
        let mut storage = self.lock_storage();
        storage.insert(key, CacheEntry::new(boundaries, sampled, tick));
        if storage.len() > self.config.capacity {
            evict_oldest(&mut storage, self.config.eviction_batch);
        }
    }
}

impl<A: BreaksAlgorithm> Clone for BreaksCache<A> {
    fn clone(&self) -> Self {
        Self {
            algorithm: Arc::clone(&self.algorithm),
            config: self.config,
            storage: Arc::clone(&self.storage),
            hits: Arc::clone(&self.hits),
            misses: Arc::clone(&self.misses),
            access_counter: Arc::clone(&self.access_counter),
        }
    }
}

impl<A: BreaksAlgorithm> std::fmt::Debug for BreaksCache<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BreaksCache")
            .field("algorithm", &self.algorithm.name())
            .field("config", &self.config)
            .field("size", &self.len())
            .finish()
    }
}

/// Replace the outer boundaries with the extremes of the full data
fn pin_extremes(boundaries: &mut [f64], sorted: &[f64]) {
    if let (Some(first), Some(&min)) = (boundaries.first_mut(), sorted.first()) {
        *first = min;
    }
    if let (Some(last), Some(&max)) = (boundaries.last_mut(), sorted.last()) {
        *last = max;
    }
}

/// Drop the `count` entries with the oldest access ticks
fn evict_oldest(storage: &mut HashMap<Fingerprint, CacheEntry>, count: usize) {
    let mut by_age: Vec<(u64, Fingerprint)> = storage
        .iter()
        .map(|(key, entry)| (entry.last_tick, key.clone()))
        .collect();
    by_age.sort_unstable_by_key(|(tick, _)| *tick);

    for (_, key) in by_age.into_iter().take(count) {
        storage.remove(&key);
    }
    debug!(evicted = count, remaining = storage.len(), "evicted least recently used entries");
}
