use crate::model::{
    AgeGroup, DailyRecord, RawMetrics, ScoringProfile, VitalityBreakdown, VitalitySnapshot,
};
use crate::pipeline::stage1_window::{Stage1Inputs, Stage1Output, run_stage1};
use crate::pipeline::stage3_submetrics::run_stage3;
use crate::pipeline::stage4_pillars::aggregate_pillar;
use crate::pipeline::stage5_vitality::{Stage5Inputs, run_stage5};
use crate::pipeline::stage6_breakdown::{Stage6Inputs, run_stage6};
use crate::schema::{BenchmarkSchema, SchemaError};

/// Scoring entry point. Holds a validated schema and a profile; every call is
/// a pure function of its arguments, so one engine may be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct VitalityEngine {
    schema: BenchmarkSchema,
    profile: ScoringProfile,
}

impl VitalityEngine {
    pub fn new(schema: BenchmarkSchema, profile: ScoringProfile) -> Self {
        Self { schema, profile }
    }

    /// Engine over the built-in benchmark catalog and the default profile.
    pub fn builtin() -> Result<Self, SchemaError> {
        Ok(Self::new(BenchmarkSchema::builtin()?, ScoringProfile::default_v1()))
    }

    pub fn schema(&self) -> &BenchmarkSchema {
        &self.schema
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    pub fn build_raw_metrics(&self, age: i32, history: &[DailyRecord]) -> RawMetrics {
        self.build_window(age, history).raw
    }

    /// Same as [`build_raw_metrics`](Self::build_raw_metrics) but keeps the
    /// window audit for reporting.
    pub fn build_window(&self, age: i32, history: &[DailyRecord]) -> Stage1Output {
        run_stage1(&Stage1Inputs {
            age,
            history,
            profile: &self.profile,
        })
    }

    pub fn score(&self, raw: &RawMetrics) -> VitalitySnapshot {
        let age_group = AgeGroup::from_age(raw.age);
        let stage3 = run_stage3(&self.schema, raw, age_group);

        let pillars = self
            .schema
            .pillars()
            .iter()
            .zip(stage3.pillars)
            .map(|(def, subs)| aggregate_pillar(def, subs))
            .collect();

        let snapshot = run_stage5(Stage5Inputs {
            schema: &self.schema,
            age: raw.age,
            age_group,
            pillars,
        });

        tracing::debug!(
            age = raw.age,
            group = age_group.label(),
            total = snapshot.total_score,
            pillars = snapshot.pillars_available(),
            "scored snapshot"
        );
        snapshot
    }

    pub fn score_with_breakdown(&self, raw: &RawMetrics) -> (VitalitySnapshot, VitalityBreakdown) {
        let snapshot = self.score(raw);
        let breakdown = run_stage6(&Stage6Inputs {
            schema: &self.schema,
            snapshot: &snapshot,
            hrv_type: raw.hrv_type.as_deref(),
        });
        (snapshot, breakdown)
    }

    /// Scores only when at least `profile.min_pillars` pillars carry a
    /// measurement; otherwise returns `None` so callers can show a
    /// "not enough data" state instead of a low-coverage number.
    pub fn score_if_possible(
        &self,
        raw: &RawMetrics,
    ) -> Option<(VitalitySnapshot, VitalityBreakdown)> {
        let (snapshot, breakdown) = self.score_with_breakdown(raw);
        let available = snapshot.pillars_available();
        if available < self.profile.min_pillars {
            tracing::info!(
                available,
                required = self.profile.min_pillars,
                "insufficient data for a vitality score"
            );
            return None;
        }
        Some((snapshot, breakdown))
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/engine.rs"]
mod tests;
