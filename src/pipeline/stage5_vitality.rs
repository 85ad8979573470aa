use crate::model::{AgeGroup, PillarScore, VitalitySnapshot};
use crate::pipeline::stage3_submetrics::truncate_score;
use crate::pipeline::stage4_pillars::weighted_average;
use crate::schema::BenchmarkSchema;

#[derive(Debug, Clone)]
pub struct Stage5Inputs<'a> {
    pub schema: &'a BenchmarkSchema,
    pub age: i32,
    pub age_group: AgeGroup,
    pub pillars: Vec<PillarScore>,
}

/// Weighted mean of the available pillars, renormalized over their weights.
/// Unavailable pillars are excluded; with none available the total is 0.
pub fn total_score(schema: &BenchmarkSchema, pillars: &[PillarScore]) -> u8 {
    let available = schema
        .pillars()
        .iter()
        .zip(pillars.iter())
        .filter(|(_, p)| p.available())
        .map(|(def, p)| (f64::from(p.score), def.weight));
    weighted_average(available).map(truncate_score).unwrap_or(0)
}

pub fn run_stage5(inputs: Stage5Inputs<'_>) -> VitalitySnapshot {
    let total = total_score(inputs.schema, &inputs.pillars);
    VitalitySnapshot {
        age: inputs.age,
        age_group: inputs.age_group,
        total_score: total,
        pillars: inputs.pillars,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_vitality.rs"]
mod tests;
