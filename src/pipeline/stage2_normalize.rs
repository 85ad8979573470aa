use crate::model::{MetricRange, NormalizedRange};

/// Repairs missing or degenerate poor bounds before scoring.
///
/// A poor bound that does not lie strictly outside its acceptable band is
/// replaced by mirroring the optimal-to-acceptable distance outward:
/// `poor_low_max = acceptable_low_min - (optimal_min - acceptable_low_min)` and
/// `poor_high_min = acceptable_high_max + (acceptable_high_max - optimal_max)`.
/// Only the schema's own bounds are used.
pub fn normalize_range(range: &MetricRange) -> NormalizedRange {
    let low_gap = range.optimal_min - range.acceptable_low_min;
    let poor_low_max = match range.poor_low_max {
        Some(v) if v < range.acceptable_low_min => v,
        _ => range.acceptable_low_min - low_gap,
    };

    let high_gap = range.acceptable_high_max - range.optimal_max;
    let poor_high_min = match range.poor_high_min {
        Some(v) if v > range.acceptable_high_max => v,
        _ => range.acceptable_high_max + high_gap,
    };

    NormalizedRange {
        poor_low_max,
        acceptable_low_min: range.acceptable_low_min,
        optimal_min: range.optimal_min,
        optimal_max: range.optimal_max,
        acceptable_high_max: range.acceptable_high_max,
        poor_high_min,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_normalize.rs"]
mod tests;
