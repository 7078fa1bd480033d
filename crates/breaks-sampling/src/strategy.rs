//! Sampling strategy selection

use breaks_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an oversized value set is reduced before optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingStrategy {
    /// Evenly spaced percentiles. Deterministic, keeps min and max.
    #[default]
    Quantile,
    /// Uniform random indices with replacement. Fastest, least faithful.
    Random,
    /// Variance-weighted stratified sampling over up to 10 segments
    Adaptive,
}

impl SamplingStrategy {
    /// All strategies, in declaration order
    pub const ALL: [SamplingStrategy; 3] = [Self::Quantile, Self::Random, Self::Adaptive];

    /// Get the name of this strategy
    pub fn name(&self) -> &'static str {
        match self {
            Self::Quantile => "quantile",
            Self::Random => "random",
            Self::Adaptive => "adaptive",
        }
    }

    /// Whether repeated calls on the same input give the same sample
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, Self::Random)
    }
}

impl fmt::Display for SamplingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SamplingStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "unknown sampling strategy '{wanted}' (expected quantile, random or adaptive)"
                ))
            })
    }
}
