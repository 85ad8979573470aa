use std::collections::BTreeMap;

use crate::model::{AgeGroup, MetricRange, PillarId, ScoringDirection, SubmetricId};
use crate::schema::{PillarSpec, SchemaSpec, SubmetricSpec};

#[derive(Debug, Clone, Copy)]
pub struct SubmetricDef {
    pub id: SubmetricId,
    pub weight: f64,
    pub direction: ScoringDirection,
    /// Indexed by `AgeGroup::index()`.
    pub ranges: [MetricRange; AgeGroup::COUNT],
}

#[derive(Debug, Clone, Copy)]
pub struct PillarDef {
    pub id: PillarId,
    pub weight: f64,
    pub submetrics: &'static [SubmetricDef],
}

const fn band(
    poor_low_max: f64,
    acceptable_low_min: f64,
    optimal_min: f64,
    optimal_max: f64,
    acceptable_high_max: f64,
    poor_high_min: f64,
) -> MetricRange {
    MetricRange::new(
        Some(poor_low_max),
        acceptable_low_min,
        optimal_min,
        optimal_max,
        acceptable_high_max,
        Some(poor_high_min),
    )
}

// Upper side is never consulted for higher-is-better metrics.
const fn floor(
    poor_low_max: f64,
    acceptable_low_min: f64,
    optimal_min: f64,
    optimal_max: f64,
) -> MetricRange {
    MetricRange::new(
        Some(poor_low_max),
        acceptable_low_min,
        optimal_min,
        optimal_max,
        optimal_max,
        None,
    )
}

// Lower side is never consulted for lower-is-better metrics.
const fn ceiling(
    optimal_min: f64,
    optimal_max: f64,
    acceptable_high_max: f64,
    poor_high_min: f64,
) -> MetricRange {
    MetricRange::new(
        None,
        optimal_min,
        optimal_min,
        optimal_max,
        acceptable_high_max,
        Some(poor_high_min),
    )
}

const SLEEP_DURATION: [MetricRange; 4] = [
    band(5.0, 6.0, 7.0, 9.0, 10.0, 11.0),
    band(5.0, 6.0, 7.0, 9.0, 10.0, 11.0),
    band(4.5, 6.0, 7.0, 8.5, 9.5, 10.5),
    band(4.5, 5.5, 7.0, 8.5, 9.5, 10.5),
];

// Deep + REM share of total sleep. The older bands leave the poor floor to
// the normalizer.
const RESTORATIVE_SLEEP: [MetricRange; 4] = [
    floor(25.0, 35.0, 45.0, 60.0),
    floor(22.0, 32.0, 42.0, 55.0),
    MetricRange::new(None, 30.0, 40.0, 55.0, 55.0, None),
    MetricRange::new(None, 28.0, 35.0, 50.0, 50.0, None),
];

const SLEEP_EFFICIENCY: [MetricRange; 4] = [
    floor(75.0, 85.0, 90.0, 100.0),
    floor(75.0, 85.0, 90.0, 100.0),
    floor(70.0, 80.0, 85.0, 100.0),
    floor(65.0, 75.0, 85.0, 100.0),
];

const AWAKE_PERCENT: [MetricRange; 4] = [
    ceiling(0.0, 5.0, 10.0, 20.0),
    ceiling(0.0, 7.0, 12.0, 20.0),
    ceiling(0.0, 8.0, 15.0, 25.0),
    ceiling(0.0, 10.0, 18.0, 30.0),
];

const MOVEMENT_MINUTES: [MetricRange; 4] = [
    floor(10.0, 20.0, 30.0, 60.0),
    floor(10.0, 20.0, 30.0, 60.0),
    floor(5.0, 15.0, 25.0, 50.0),
    floor(5.0, 10.0, 20.0, 45.0),
];

const STEPS: [MetricRange; 4] = [
    floor(3000.0, 5000.0, 8000.0, 12000.0),
    floor(3000.0, 5000.0, 7500.0, 11000.0),
    floor(2500.0, 4000.0, 7000.0, 10000.0),
    floor(2000.0, 3500.0, 6000.0, 9000.0),
];

const ACTIVE_CALORIES: [MetricRange; 4] = [
    floor(150.0, 250.0, 400.0, 700.0),
    floor(120.0, 200.0, 350.0, 600.0),
    floor(100.0, 180.0, 300.0, 500.0),
    floor(80.0, 150.0, 250.0, 450.0),
];

const HRV: [MetricRange; 4] = [
    floor(20.0, 35.0, 55.0, 100.0),
    floor(15.0, 28.0, 40.0, 80.0),
    floor(10.0, 20.0, 30.0, 60.0),
    floor(8.0, 15.0, 25.0, 50.0),
];

const RESTING_HEART_RATE: [MetricRange; 4] = [
    ceiling(50.0, 65.0, 75.0, 85.0),
    ceiling(52.0, 68.0, 78.0, 88.0),
    ceiling(55.0, 70.0, 80.0, 90.0),
    ceiling(55.0, 72.0, 82.0, 92.0),
];

const BREATHING_RATE: [MetricRange; 4] = [
    band(9.0, 11.0, 12.0, 16.0, 18.0, 20.0),
    band(9.0, 11.0, 12.0, 16.0, 18.0, 20.0),
    band(9.0, 11.0, 12.0, 17.0, 19.0, 21.0),
    band(9.0, 11.0, 12.0, 18.0, 20.0, 22.0),
];

const SLEEP_SUBMETRICS: &[SubmetricDef] = &[
    SubmetricDef {
        id: SubmetricId::SleepDuration,
        weight: 0.40,
        direction: ScoringDirection::OptimalRange,
        ranges: SLEEP_DURATION,
    },
    SubmetricDef {
        id: SubmetricId::RestorativeSleep,
        weight: 0.20,
        direction: ScoringDirection::HigherIsBetter,
        ranges: RESTORATIVE_SLEEP,
    },
    SubmetricDef {
        id: SubmetricId::SleepEfficiency,
        weight: 0.25,
        direction: ScoringDirection::HigherIsBetter,
        ranges: SLEEP_EFFICIENCY,
    },
    SubmetricDef {
        id: SubmetricId::AwakePercent,
        weight: 0.15,
        direction: ScoringDirection::LowerIsBetter,
        ranges: AWAKE_PERCENT,
    },
];

const MOVEMENT_SUBMETRICS: &[SubmetricDef] = &[
    SubmetricDef {
        id: SubmetricId::MovementMinutes,
        weight: 0.40,
        direction: ScoringDirection::HigherIsBetter,
        ranges: MOVEMENT_MINUTES,
    },
    SubmetricDef {
        id: SubmetricId::Steps,
        weight: 0.40,
        direction: ScoringDirection::HigherIsBetter,
        ranges: STEPS,
    },
    SubmetricDef {
        id: SubmetricId::ActiveCalories,
        weight: 0.20,
        direction: ScoringDirection::HigherIsBetter,
        ranges: ACTIVE_CALORIES,
    },
];

const STRESS_SUBMETRICS: &[SubmetricDef] = &[
    SubmetricDef {
        id: SubmetricId::Hrv,
        weight: 0.40,
        direction: ScoringDirection::HigherIsBetter,
        ranges: HRV,
    },
    SubmetricDef {
        id: SubmetricId::RestingHeartRate,
        weight: 0.40,
        direction: ScoringDirection::LowerIsBetter,
        ranges: RESTING_HEART_RATE,
    },
    SubmetricDef {
        id: SubmetricId::BreathingRate,
        weight: 0.20,
        direction: ScoringDirection::OptimalRange,
        ranges: BREATHING_RATE,
    },
];

const BUILTIN_PILLARS: &[PillarDef] = &[
    PillarDef {
        id: PillarId::Sleep,
        weight: 0.33,
        submetrics: SLEEP_SUBMETRICS,
    },
    PillarDef {
        id: PillarId::Movement,
        weight: 0.33,
        submetrics: MOVEMENT_SUBMETRICS,
    },
    PillarDef {
        id: PillarId::Stress,
        weight: 0.34,
        submetrics: STRESS_SUBMETRICS,
    },
];

pub fn builtin_pillars() -> &'static [PillarDef] {
    BUILTIN_PILLARS
}

pub fn builtin_schema() -> SchemaSpec {
    let pillars = builtin_pillars()
        .iter()
        .map(|p| PillarSpec {
            id: p.id,
            weight: p.weight,
            submetrics: p.submetrics.iter().map(to_spec).collect(),
        })
        .collect();
    SchemaSpec { pillars }
}

fn to_spec(def: &SubmetricDef) -> SubmetricSpec {
    let ranges = AgeGroup::ALL
        .iter()
        .map(|g| (*g, def.ranges[g.index()]))
        .collect::<BTreeMap<_, _>>();
    SubmetricSpec {
        id: def.id,
        weight: def.weight,
        direction: def.direction,
        ranges,
    }
}
