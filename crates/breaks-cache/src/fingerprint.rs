//! Cheap summary keys for value sets
//!
//! A fingerprint identifies a value set by its length, five summary
//! statistics, the class count and a hash of ten positional samples. It is
//! computed in O(1) from sorted data, so two different sets that agree on
//! all of these share a key and therefore share cached breaks. That is an
//! accepted approximation.

use serde::Serialize;
use std::fmt;

/// Number of evenly spaced positions folded into the hash
pub const FINGERPRINT_SAMPLES: usize = 10;

/// Scale applied before rounding a sample into the hash
const HASH_SCALE: f64 = 1e6;

/// Key of one cached classification
///
/// Renders as `"{len}|{min}|{q1}|{median}|{q3}|{max}|{k}|{hash}"` with the
/// statistics at six decimals and the hash in base 36.
///
/// # Example
///
/// ```rust
/// use breaks_cache::Fingerprint;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0];
/// let key = Fingerprint::from_sorted(&sorted, 3);
/// assert!(key.as_str().starts_with("4|1.000000|2.000000|3.000000|4.000000|4.000000|3|"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint of sorted, finite values classified into `k` classes
    pub fn from_sorted(sorted: &[f64], k: usize) -> Self {
        let n = sorted.len();
        if n == 0 {
            return Self(format!("0|{k}"));
        }

        let hash = to_base36(positional_hash(sorted));
        Self(format!(
            "{n}|{:.6}|{:.6}|{:.6}|{:.6}|{:.6}|{k}|{hash}",
            sorted[0],
            rank_statistic(sorted, 0.25),
            rank_statistic(sorted, 0.5),
            rank_statistic(sorted, 0.75),
            sorted[n - 1],
        ))
    }

    /// Key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the fingerprint, returning the key string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// `sorted[floor(p * n)]`, clamped to the last index
pub fn rank_statistic(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    let idx = ((p * n as f64).floor() as usize).min(n - 1);
    sorted[idx]
}

/// Values at `floor(i * n / 10)` for `i in 0..10`
pub fn positional_samples(sorted: &[f64]) -> Vec<f64> {
    let n = sorted.len();
    if n == 0 {
        return Vec::new();
    }
    (0..FINGERPRINT_SAMPLES)
        .map(|i| sorted[i * n / FINGERPRINT_SAMPLES])
        .collect()
}

/// Multiply-xor rolling hash over the quantized positional samples
fn positional_hash(sorted: &[f64]) -> u32 {
    positional_samples(sorted)
        .into_iter()
        .fold(0u32, |hash, value| {
            let quantized = (value * HASH_SCALE).round() as i64 as u64;
            let folded = (quantized ^ (quantized >> 32)) as u32;
            let mixed = hash.wrapping_mul(31) ^ folded;
            mixed ^ (mixed >> 13)
        })
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
