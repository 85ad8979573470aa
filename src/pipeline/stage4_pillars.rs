use crate::model::{PillarScore, SubmetricScore};
use crate::pipeline::stage3_submetrics::truncate_score;
use crate::schema::PillarDefinition;

/// Weighted mean over the given `(score, weight)` pairs, or `None` when there
/// is nothing to average.
pub fn weighted_average(items: impl IntoIterator<Item = (f64, f64)>) -> Option<f64> {
    let mut num = 0.0;
    let mut den = 0.0;
    for (score, weight) in items {
        num += score * weight;
        den += weight;
    }
    if den > 0.0 { Some(num / den) } else { None }
}

/// Combines a pillar's submetric scores.
///
/// Unmeasured submetrics are left out of both numerator and denominator, so a
/// missing value never pulls the pillar down. With nothing measured the pillar
/// scores 0 and reports itself unavailable.
pub fn aggregate_pillar(pillar: &PillarDefinition, submetrics: Vec<SubmetricScore>) -> PillarScore {
    let measured = pillar
        .submetrics
        .iter()
        .zip(submetrics.iter())
        .filter(|(_, s)| s.is_available())
        .map(|(def, s)| (f64::from(s.score), def.weight));

    let score = weighted_average(measured).map(truncate_score).unwrap_or(0);

    PillarScore {
        id: pillar.id,
        score,
        submetrics,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_pillars.rs"]
mod tests;
