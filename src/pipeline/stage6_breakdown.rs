use crate::model::{
    MetricRange, MetricStatus, NormalizedRange, PillarBreakdown, ScoringDirection,
    SubmetricBreakdown, SubmetricId, SubmetricScore, VitalityBreakdown, VitalitySnapshot,
};
use crate::pipeline::stage2_normalize::normalize_range;
use crate::report::{format_metric, format_number};
use crate::schema::{BenchmarkSchema, SubmetricDefinition};

#[derive(Debug, Clone)]
pub struct Stage6Inputs<'a> {
    pub schema: &'a BenchmarkSchema,
    pub snapshot: &'a VitalitySnapshot,
    pub hrv_type: Option<&'a str>,
}

/// Derives the display breakdown for a finished snapshot. Scores are read,
/// never recomputed or adjusted.
pub fn run_stage6(inputs: &Stage6Inputs<'_>) -> VitalityBreakdown {
    let group = inputs.snapshot.age_group;
    let mut pillars = Vec::with_capacity(inputs.snapshot.pillars.len());
    let mut earned_total = 0.0;
    let mut max_total = 0.0;
    let mut used = 0usize;

    for (def, pillar) in inputs
        .schema
        .pillars()
        .iter()
        .zip(inputs.snapshot.pillars.iter())
    {
        let submetrics: Vec<SubmetricBreakdown> = def
            .submetrics
            .iter()
            .zip(pillar.submetrics.iter())
            .map(|(sub_def, score)| {
                let range = sub_def.range(group);
                describe_submetric(sub_def, range, score, inputs.hrv_type)
            })
            .collect();

        let available = pillar.available();
        let max_points = 100.0 * def.weight;
        let earned_points = if available {
            f64::from(pillar.score) * def.weight
        } else {
            0.0
        };
        if available {
            used += 1;
            earned_total += earned_points;
            max_total += max_points;
        }

        pillars.push(PillarBreakdown {
            id: def.id,
            label: def.id.label(),
            score: available.then_some(pillar.score),
            earned_points,
            max_points,
            status: pillar_status(&submetrics),
            submetrics,
        });
    }

    VitalityBreakdown {
        total_score: inputs.snapshot.total_score,
        earned_points: earned_total,
        max_points: max_total,
        pillars_used: used,
        pillars_possible: inputs.schema.pillars().len(),
        hrv_note: inputs.hrv_type.map(str::to_string),
        pillars,
    }
}

fn describe_submetric(
    def: &SubmetricDefinition,
    range: &MetricRange,
    score: &SubmetricScore,
    hrv_type: Option<&str>,
) -> SubmetricBreakdown {
    let normalized = normalize_range(range);
    let status = classify_status(score.raw_value, &normalized, def.direction, score.score);
    let value_text = match score.raw_value {
        Some(v) => value_text(def.id, v, hrv_type),
        None => "no data".to_string(),
    };
    let (earned_points, max_points) = (
        score.raw_value.map_or(0.0, |_| f64::from(score.score) * def.weight),
        100.0 * def.weight,
    );

    SubmetricBreakdown {
        id: def.id,
        label: def.id.label(),
        direction: def.direction,
        value_text,
        target_text: target_text(def.id, range, def.direction),
        score: score.raw_value.map(|_| score.score),
        earned_points,
        max_points,
        status,
    }
}

/// Replays the scorer's range comparisons to label a value.
///
/// For lower-is-better metrics beyond the acceptable band the label falls back
/// to the produced score (`> 0` is `Ok`), so a value still earning points in
/// the poor slope reads as `Ok` rather than `Low`.
pub fn classify_status(
    value: Option<f64>,
    range: &NormalizedRange,
    direction: ScoringDirection,
    score: u8,
) -> MetricStatus {
    let Some(v) = value else {
        return MetricStatus::Missing;
    };
    match direction {
        ScoringDirection::OptimalRange => {
            if range.in_optimal(v) {
                MetricStatus::Optimal
            } else if range.in_acceptable(v) {
                MetricStatus::Ok
            } else {
                MetricStatus::Low
            }
        }
        ScoringDirection::HigherIsBetter => {
            if v >= range.optimal_min() {
                MetricStatus::Optimal
            } else if v >= range.acceptable_low_min() {
                MetricStatus::Ok
            } else {
                MetricStatus::Low
            }
        }
        ScoringDirection::LowerIsBetter => {
            if v <= range.optimal_max() {
                MetricStatus::Optimal
            } else if v <= range.acceptable_high_max() || score > 0 {
                MetricStatus::Ok
            } else {
                MetricStatus::Low
            }
        }
    }
}

/// Worst status among measured submetrics; `Missing` when nothing was measured.
fn pillar_status(submetrics: &[SubmetricBreakdown]) -> MetricStatus {
    submetrics
        .iter()
        .map(|s| s.status)
        .filter(|s| *s != MetricStatus::Missing)
        .max()
        .unwrap_or(MetricStatus::Missing)
}

fn value_text(id: SubmetricId, value: f64, hrv_type: Option<&str>) -> String {
    let text = format_metric(id, value);
    match (id, hrv_type) {
        (SubmetricId::Hrv, Some(kind)) if !kind.is_empty() => format!("{text} ({kind})"),
        _ => text,
    }
}

fn target_text(id: SubmetricId, range: &MetricRange, direction: ScoringDirection) -> String {
    match direction {
        ScoringDirection::OptimalRange => format!(
            "{}-{}",
            format_number(id, range.optimal_min),
            format_metric(id, range.optimal_max)
        ),
        ScoringDirection::HigherIsBetter => format!(">= {}", format_metric(id, range.optimal_min)),
        ScoringDirection::LowerIsBetter => format!("<= {}", format_metric(id, range.optimal_max)),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_breakdown.rs"]
mod tests;
