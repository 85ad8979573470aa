
use super::*;
use crate::model::{MetricRange, SubmetricId};

fn sleep_range() -> NormalizedRange {
    normalize_range(&MetricRange::new(Some(5.0), 6.0, 7.0, 9.0, 10.0, Some(11.0)))
}

fn senior_rhr() -> NormalizedRange {
    normalize_range(&MetricRange::new(None, 55.0, 55.0, 70.0, 80.0, Some(90.0)))
}

fn steps_range() -> NormalizedRange {
    normalize_range(&MetricRange::new(
        Some(3000.0),
        5000.0,
        8000.0,
        12000.0,
        12000.0,
        None,
    ))
}

#[test]
fn test_optimal_range_breakpoints() {
    let r = sleep_range();
    let d = ScoringDirection::OptimalRange;
    assert_eq!(score_submetric(4.0, &r, d), 0);
    assert_eq!(score_submetric(5.0, &r, d), 0);
    assert_eq!(score_submetric(5.5, &r, d), 25);
    assert_eq!(score_submetric(6.0, &r, d), 50);
    assert_eq!(score_submetric(6.5, &r, d), 65);
    assert_eq!(score_submetric(7.0, &r, d), 80);
    assert_eq!(score_submetric(8.0, &r, d), 90);
    assert_eq!(score_submetric(9.0, &r, d), 100);
    assert_eq!(score_submetric(9.5, &r, d), 90);
    assert_eq!(score_submetric(10.0, &r, d), 80);
    assert_eq!(score_submetric(10.5, &r, d), 65);
    assert_eq!(score_submetric(11.0, &r, d), 50);
    assert_eq!(score_submetric(11.01, &r, d), 0);
}

#[test]
fn test_higher_is_better_breakpoints() {
    let r = steps_range();
    let d = ScoringDirection::HigherIsBetter;
    assert_eq!(score_submetric(1000.0, &r, d), 0);
    assert_eq!(score_submetric(4000.0, &r, d), 30);
    assert_eq!(score_submetric(5000.0, &r, d), 60);
    assert_eq!(score_submetric(6500.0, &r, d), 70);
    assert_eq!(score_submetric(8000.0, &r, d), 80);
    assert_eq!(score_submetric(10000.0, &r, d), 90);
    assert_eq!(score_submetric(12000.0, &r, d), 100);
    assert_eq!(score_submetric(30000.0, &r, d), 100);
}

#[test]
fn test_lower_is_better_breakpoints() {
    let r = senior_rhr();
    let d = ScoringDirection::LowerIsBetter;
    assert_eq!(score_submetric(45.0, &r, d), 100);
    assert_eq!(score_submetric(55.0, &r, d), 100);
    assert_eq!(score_submetric(58.0, &r, d), 96);
    assert_eq!(score_submetric(70.0, &r, d), 80);
    assert_eq!(score_submetric(75.0, &r, d), 70);
    assert_eq!(score_submetric(80.0, &r, d), 60);
    assert_eq!(score_submetric(85.0, &r, d), 30);
    assert_eq!(score_submetric(90.0, &r, d), 0);
    assert_eq!(score_submetric(120.0, &r, d), 0);
}

#[test]
fn test_zero_width_segment_returns_far_endpoint() {
    assert_eq!(lerp(5.0, 5.0, 5.0, 60.0, 80.0), 80.0);
    let r = normalize_range(&MetricRange::new(None, 50.0, 50.0, 70.0, 70.0, None));
    assert_eq!(score_submetric(50.0, &r, ScoringDirection::HigherIsBetter), 80);
    assert_eq!(score_submetric(49.0, &r, ScoringDirection::HigherIsBetter), 0);
}

#[test]
fn test_truncation_not_rounding() {
    assert_eq!(truncate_score(89.99), 89);
    assert_eq!(truncate_score(89.999_999_999_99), 90);
    assert_eq!(truncate_score(-4.0), 0);
    assert_eq!(truncate_score(140.0), 100);
    assert_eq!(truncate_score(f64::NAN), 0);
}

#[test]
fn test_scores_stay_in_range_across_sweep() {
    let ranges = [sleep_range(), senior_rhr(), steps_range()];
    let directions = [
        ScoringDirection::OptimalRange,
        ScoringDirection::HigherIsBetter,
        ScoringDirection::LowerIsBetter,
    ];
    for r in &ranges {
        for d in directions {
            let mut v = -100.0;
            while v < 40000.0 {
                let s = score_submetric(v, r, d);
                assert!(s <= 100);
                v += 7.3;
            }
        }
    }
}

#[test]
fn test_monotonic_directions() {
    let r = steps_range();
    let mut prev = 0u8;
    for step in 0..400 {
        let s = score_submetric(f64::from(step) * 50.0, &r, ScoringDirection::HigherIsBetter);
        assert!(s >= prev);
        prev = s;
    }

    let r = senior_rhr();
    let mut prev = 100u8;
    for step in 0..200 {
        let s = score_submetric(40.0 + f64::from(step) * 0.3, &r, ScoringDirection::LowerIsBetter);
        assert!(s <= prev);
        prev = s;
    }
}

#[test]
fn test_run_stage3_carries_missing_without_scoring() {
    let schema = crate::schema::BenchmarkSchema::builtin().unwrap();
    let raw = RawMetrics::new(30).with(SubmetricId::SleepDuration, 8.0);
    let out = run_stage3(&schema, &raw, AgeGroup::Young);
    assert_eq!(out.pillars.len(), 3);

    let sleep = &out.pillars[0];
    assert_eq!(sleep[0].id, SubmetricId::SleepDuration);
    assert_eq!(sleep[0].raw_value, Some(8.0));
    assert_eq!(sleep[0].score, 90);
    for sub in sleep.iter().skip(1) {
        assert!(!sub.is_available());
        assert_eq!(sub.score, 0);
    }
    assert!(out.pillars[1].iter().all(|s| !s.is_available()));
}
