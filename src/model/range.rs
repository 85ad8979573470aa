use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoringDirection {
    /// Best inside a middle band, worse on either side.
    OptimalRange,
    HigherIsBetter,
    LowerIsBetter,
}

/// Benchmark bounds for one submetric within one age group, as authored.
///
/// The acceptable bands touch the optimal band by construction, so only the
/// outer acceptable bounds are stored. Poor bounds may be omitted or
/// degenerate; `stage2_normalize` synthesizes them before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    #[serde(default)]
    pub poor_low_max: Option<f64>,
    pub acceptable_low_min: f64,
    pub optimal_min: f64,
    pub optimal_max: f64,
    pub acceptable_high_max: f64,
    #[serde(default)]
    pub poor_high_min: Option<f64>,
}

impl MetricRange {
    pub const fn new(
        poor_low_max: Option<f64>,
        acceptable_low_min: f64,
        optimal_min: f64,
        optimal_max: f64,
        acceptable_high_max: f64,
        poor_high_min: Option<f64>,
    ) -> Self {
        Self {
            poor_low_max,
            acceptable_low_min,
            optimal_min,
            optimal_max,
            acceptable_high_max,
            poor_high_min,
        }
    }

    pub fn acceptable_low_max(&self) -> f64 {
        self.optimal_min
    }

    pub fn acceptable_high_min(&self) -> f64 {
        self.optimal_max
    }
}

/// A range whose poor bounds are guaranteed to lie outside the acceptable bands.
/// Only `stage2_normalize::normalize_range` constructs these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRange {
    pub(crate) poor_low_max: f64,
    pub(crate) acceptable_low_min: f64,
    pub(crate) optimal_min: f64,
    pub(crate) optimal_max: f64,
    pub(crate) acceptable_high_max: f64,
    pub(crate) poor_high_min: f64,
}

impl NormalizedRange {
    pub fn poor_low_max(&self) -> f64 {
        self.poor_low_max
    }

    pub fn acceptable_low_min(&self) -> f64 {
        self.acceptable_low_min
    }

    pub fn optimal_min(&self) -> f64 {
        self.optimal_min
    }

    pub fn optimal_max(&self) -> f64 {
        self.optimal_max
    }

    pub fn acceptable_high_max(&self) -> f64 {
        self.acceptable_high_max
    }

    pub fn poor_high_min(&self) -> f64 {
        self.poor_high_min
    }

    pub fn in_optimal(&self, v: f64) -> bool {
        v >= self.optimal_min && v <= self.optimal_max
    }

    pub fn in_acceptable(&self, v: f64) -> bool {
        v >= self.acceptable_low_min && v <= self.acceptable_high_max
    }
}
