use crate::model::{AgeGroup, NormalizedRange, RawMetrics, ScoringDirection, SubmetricScore};
use crate::pipeline::stage2_normalize::normalize_range;
use crate::schema::BenchmarkSchema;

// Breakpoints are exact, but positions like 0.1 or 0.2 are not representable
// in binary; without a tolerance 89.999... would truncate to 89.
const TRUNCATION_EPS: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct Stage3Output {
    /// One vector per schema pillar, in schema order.
    pub pillars: Vec<Vec<SubmetricScore>>,
}

/// Scores every submetric of the schema. Submetrics without a raw value are
/// carried with `raw_value: None` and are never passed to the scorer.
pub fn run_stage3(schema: &BenchmarkSchema, raw: &RawMetrics, group: AgeGroup) -> Stage3Output {
    let pillars = schema
        .pillars()
        .iter()
        .map(|pillar| {
            pillar
                .submetrics
                .iter()
                .map(|def| {
                    let raw_value = raw.get(def.id);
                    let score = match raw_value {
                        Some(v) => {
                            let range = normalize_range(def.range(group));
                            score_submetric(v, &range, def.direction)
                        }
                        None => 0,
                    };
                    SubmetricScore {
                        id: def.id,
                        raw_value,
                        score,
                    }
                })
                .collect()
        })
        .collect();

    Stage3Output { pillars }
}

/// Maps one measured value onto 0..=100 for the given direction.
///
/// | direction        | < poor low | poor low..acc low | acc low..opt min | optimal band | opt max..acc high | acc high..poor high | > poor high |
/// |------------------|-----------:|------------------:|-----------------:|-------------:|------------------:|--------------------:|------------:|
/// | optimal range    | 0          | 0..50             | 50..80           | 80..100      | 100..80           | 80..50              | 0           |
/// | higher is better | 0          | 0..60             | 60..80           | 80..100      | 100               | 100                 | 100         |
/// | lower is better  | 100        | 100               | 100              | 100..80      | 80..60            | 60..0               | 0           |
pub fn score_submetric(value: f64, range: &NormalizedRange, direction: ScoringDirection) -> u8 {
    let raw = match direction {
        ScoringDirection::OptimalRange => optimal_range_score(value, range),
        ScoringDirection::HigherIsBetter => higher_is_better_score(value, range),
        ScoringDirection::LowerIsBetter => lower_is_better_score(value, range),
    };
    truncate_score(raw)
}

fn optimal_range_score(v: f64, r: &NormalizedRange) -> f64 {
    if v < r.poor_low_max {
        0.0
    } else if v < r.acceptable_low_min {
        lerp(v, r.poor_low_max, r.acceptable_low_min, 0.0, 50.0)
    } else if v < r.optimal_min {
        lerp(v, r.acceptable_low_min, r.optimal_min, 50.0, 80.0)
    } else if v <= r.optimal_max {
        lerp(v, r.optimal_min, r.optimal_max, 80.0, 100.0)
    } else if v <= r.acceptable_high_max {
        lerp(v, r.optimal_max, r.acceptable_high_max, 100.0, 80.0)
    } else if v <= r.poor_high_min {
        lerp(v, r.acceptable_high_max, r.poor_high_min, 80.0, 50.0)
    } else {
        0.0
    }
}

fn higher_is_better_score(v: f64, r: &NormalizedRange) -> f64 {
    if v < r.poor_low_max {
        0.0
    } else if v < r.acceptable_low_min {
        lerp(v, r.poor_low_max, r.acceptable_low_min, 0.0, 60.0)
    } else if v < r.optimal_min {
        lerp(v, r.acceptable_low_min, r.optimal_min, 60.0, 80.0)
    } else if v <= r.optimal_max {
        lerp(v, r.optimal_min, r.optimal_max, 80.0, 100.0)
    } else {
        100.0
    }
}

fn lower_is_better_score(v: f64, r: &NormalizedRange) -> f64 {
    if v < r.optimal_min {
        100.0
    } else if v <= r.optimal_max {
        lerp(v, r.optimal_min, r.optimal_max, 100.0, 80.0)
    } else if v <= r.acceptable_high_max {
        lerp(v, r.optimal_max, r.acceptable_high_max, 80.0, 60.0)
    } else if v <= r.poor_high_min {
        lerp(v, r.acceptable_high_max, r.poor_high_min, 60.0, 0.0)
    } else {
        0.0
    }
}

/// Linear interpolation of `v` between two bounds. A zero-width segment
/// yields the far endpoint.
fn lerp(v: f64, from: f64, to: f64, score_from: f64, score_to: f64) -> f64 {
    let span = to - from;
    if span <= 0.0 {
        return score_to;
    }
    let t = ((v - from) / span).clamp(0.0, 1.0);
    score_from + t * (score_to - score_from)
}

pub(crate) fn truncate_score(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    let clamped = raw.clamp(0.0, 100.0);
    (clamped + TRUNCATION_EPS).floor().min(100.0) as u8
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_submetrics.rs"]
mod tests;
