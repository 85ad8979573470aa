use serde::Serialize;

use crate::model::age::AgeGroup;
use crate::model::metrics::{PillarId, SubmetricId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmetricScore {
    pub id: SubmetricId,
    pub raw_value: Option<f64>,
    pub score: u8,
}

impl SubmetricScore {
    pub fn is_available(&self) -> bool {
        self.raw_value.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarScore {
    pub id: PillarId,
    pub score: u8,
    pub submetrics: Vec<SubmetricScore>,
}

impl PillarScore {
    /// True iff at least one contained raw value was measured.
    pub fn available(&self) -> bool {
        self.submetrics.iter().any(SubmetricScore::is_available)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalitySnapshot {
    pub age: i32,
    pub age_group: AgeGroup,
    pub total_score: u8,
    pub pillars: Vec<PillarScore>,
}

impl VitalitySnapshot {
    pub fn pillar(&self, id: PillarId) -> Option<&PillarScore> {
        self.pillars.iter().find(|p| p.id == id)
    }

    pub fn pillars_available(&self) -> usize {
        self.pillars.iter().filter(|p| p.available()).count()
    }
}
