
use super::*;
use crate::model::{PillarId, SubmetricId};
use crate::schema::BenchmarkSchema;

fn sub(id: SubmetricId, value: Option<f64>, score: u8) -> SubmetricScore {
    SubmetricScore {
        id,
        raw_value: value,
        score,
    }
}

#[test]
fn test_weighted_average() {
    assert_eq!(weighted_average([(80.0, 0.5), (60.0, 0.5)]), Some(70.0));
    assert_eq!(weighted_average([(100.0, 0.0)]), None);
    assert_eq!(weighted_average(std::iter::empty()), None);
}

#[test]
fn test_missing_submetrics_are_renormalized_away() {
    let schema = BenchmarkSchema::builtin().unwrap();
    let movement = &schema.pillars()[1];
    assert_eq!(movement.id, PillarId::Movement);

    let subs = vec![
        sub(SubmetricId::MovementMinutes, None, 0),
        sub(SubmetricId::Steps, Some(9000.0), 85),
        sub(SubmetricId::ActiveCalories, None, 0),
    ];
    let pillar = aggregate_pillar(movement, subs);
    assert!(pillar.available());
    assert_eq!(pillar.score, 85);
    assert_eq!(pillar.submetrics.len(), 3);
}

#[test]
fn test_weighted_pillar_score_truncates() {
    let schema = BenchmarkSchema::builtin().unwrap();
    let stress = &schema.pillars()[2];
    // (90 * 0.4 + 71 * 0.4 + 100 * 0.2) / 1.0 = 84.4
    let subs = vec![
        sub(SubmetricId::Hrv, Some(60.0), 90),
        sub(SubmetricId::RestingHeartRate, Some(72.0), 71),
        sub(SubmetricId::BreathingRate, Some(14.0), 100),
    ];
    let pillar = aggregate_pillar(stress, subs);
    assert_eq!(pillar.score, 84);
}

#[test]
fn test_measured_zero_still_counts() {
    let schema = BenchmarkSchema::builtin().unwrap();
    let movement = &schema.pillars()[1];
    let subs = vec![
        sub(SubmetricId::MovementMinutes, Some(0.0), 0),
        sub(SubmetricId::Steps, Some(12000.0), 100),
        sub(SubmetricId::ActiveCalories, None, 0),
    ];
    let pillar = aggregate_pillar(movement, subs);
    assert_eq!(pillar.score, 50);
}

#[test]
fn test_unmeasured_pillar_is_unavailable() {
    let schema = BenchmarkSchema::builtin().unwrap();
    let sleep = &schema.pillars()[0];
    let subs = sleep
        .submetrics
        .iter()
        .map(|d| sub(d.id, None, 0))
        .collect();
    let pillar = aggregate_pillar(sleep, subs);
    assert!(!pillar.available());
    assert_eq!(pillar.score, 0);
}
