use serde::Serialize;

use crate::model::metrics::{PillarId, SubmetricId};
use crate::model::range::ScoringDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    Optimal,
    Ok,
    Low,
    Missing,
}

impl MetricStatus {
    pub fn name(self) -> &'static str {
        match self {
            MetricStatus::Optimal => "optimal",
            MetricStatus::Ok => "ok",
            MetricStatus::Low => "low",
            MetricStatus::Missing => "missing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmetricBreakdown {
    pub id: SubmetricId,
    pub label: &'static str,
    pub direction: ScoringDirection,
    pub value_text: String,
    pub target_text: String,
    pub score: Option<u8>,
    pub earned_points: f64,
    pub max_points: f64,
    pub status: MetricStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarBreakdown {
    pub id: PillarId,
    pub label: &'static str,
    pub score: Option<u8>,
    pub earned_points: f64,
    pub max_points: f64,
    pub status: MetricStatus,
    pub submetrics: Vec<SubmetricBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalityBreakdown {
    pub total_score: u8,
    pub earned_points: f64,
    pub max_points: f64,
    pub pillars_used: usize,
    pub pillars_possible: usize,
    pub hrv_note: Option<String>,
    pub pillars: Vec<PillarBreakdown>,
}
