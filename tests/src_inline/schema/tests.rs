
use super::*;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::schema::defs::builtin_pillars;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("vitality_schema_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn sub_mut(spec: &mut SchemaSpec, id: SubmetricId) -> &mut SubmetricSpec {
    spec.pillars
        .iter_mut()
        .flat_map(|p| p.submetrics.iter_mut())
        .find(|s| s.id == id)
        .unwrap()
}

#[test]
fn test_builtin_schema_is_valid() {
    let spec = builtin_schema();
    validate_schema(&spec).unwrap();
    let schema = BenchmarkSchema::from_spec(spec).unwrap();
    assert_eq!(schema.pillars().len(), PillarId::COUNT);
    assert_eq!(schema.submetric_count(), SubmetricId::COUNT);
}

#[test]
fn test_builtin_weights() {
    let schema = BenchmarkSchema::builtin().unwrap();
    let weights: Vec<f64> = schema.pillars().iter().map(|p| p.weight).collect();
    assert_eq!(weights, vec![0.33, 0.33, 0.34]);
    assert_eq!(schema.submetric(SubmetricId::SleepDuration).weight, 0.40);
    assert_eq!(schema.submetric(SubmetricId::AwakePercent).weight, 0.15);
    assert_eq!(schema.submetric(SubmetricId::ActiveCalories).weight, 0.20);
    assert_eq!(schema.submetric(SubmetricId::BreathingRate).weight, 0.20);
    assert_eq!(builtin_pillars().len(), 3);
}

#[test]
fn test_lookup_resolves_every_submetric() {
    let schema = BenchmarkSchema::builtin().unwrap();
    for id in SubmetricId::ALL {
        let def = schema.submetric(id);
        assert_eq!(def.id, id);
        for group in AgeGroup::ALL {
            let range = schema.range(id, group);
            assert!(range.optimal_min <= range.optimal_max);
        }
    }
    assert_eq!(
        schema.submetric(SubmetricId::RestingHeartRate).pillar,
        PillarId::Stress
    );
    assert_eq!(
        schema.submetric(SubmetricId::Steps).direction,
        ScoringDirection::HigherIsBetter
    );
}

#[test]
fn test_builtin_reference_ranges() {
    let schema = BenchmarkSchema::builtin().unwrap();
    let young_sleep = schema.range(SubmetricId::SleepDuration, AgeGroup::Young);
    assert_eq!(young_sleep.optimal_min, 7.0);
    assert_eq!(young_sleep.optimal_max, 9.0);

    let senior_rhr = schema.range(SubmetricId::RestingHeartRate, AgeGroup::Senior);
    assert_eq!(senior_rhr.optimal_min, 55.0);
    assert_eq!(senior_rhr.optimal_max, 70.0);
    assert_eq!(senior_rhr.acceptable_high_max, 80.0);
    assert_eq!(senior_rhr.poor_high_min, Some(90.0));
}

#[test]
fn test_pillar_weight_sum_rejected() {
    let mut spec = builtin_schema();
    spec.pillars[0].weight = 0.5;
    let err = validate_schema(&spec).unwrap_err();
    assert!(matches!(err, SchemaError::PillarWeightSum { .. }));
}

#[test]
fn test_weight_sum_tolerance() {
    let mut spec = builtin_schema();
    spec.pillars[2].weight = 0.3405;
    assert!(validate_schema(&spec).is_ok());
    spec.pillars[2].weight = 0.345;
    assert!(validate_schema(&spec).is_err());
}

#[test]
fn test_submetric_weight_sum_rejected() {
    let mut spec = builtin_schema();
    sub_mut(&mut spec, SubmetricId::Steps).weight = 0.1;
    let err = validate_schema(&spec).unwrap_err();
    match err {
        SchemaError::SubmetricWeightSum { pillar, .. } => assert_eq!(pillar, "movement"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_negative_weight_rejected() {
    let mut spec = builtin_schema();
    spec.pillars[0].weight = -0.33;
    spec.pillars[1].weight = 0.99;
    let err = validate_schema(&spec).unwrap_err();
    assert!(matches!(err, SchemaError::InvalidWeight { owner: "sleep", .. }));
}

#[test]
fn test_zero_submetric_weight_rejected() {
    let mut spec = builtin_schema();
    for sub in &mut spec.pillars[0].submetrics {
        sub.weight = if sub.id == SubmetricId::SleepDuration { 1.0 } else { 0.0 };
    }
    let err = validate_schema(&spec).unwrap_err();
    assert!(matches!(
        err,
        SchemaError::InvalidWeight {
            owner: "restorative_sleep",
            ..
        }
    ));
    assert!(BenchmarkSchema::from_spec(spec).is_err());
}

#[test]
fn test_zero_pillar_weight_rejected() {
    let mut spec = builtin_schema();
    spec.pillars[1].weight = 0.0;
    spec.pillars[0].weight = 0.66;
    let err = validate_schema(&spec).unwrap_err();
    assert!(matches!(err, SchemaError::InvalidWeight { owner: "movement", .. }));
}

#[test]
fn test_duplicate_and_missing_pillar() {
    let mut spec = builtin_schema();
    let copy = spec.pillars[0].clone();
    spec.pillars.push(copy);
    assert!(matches!(
        validate_schema(&spec).unwrap_err(),
        SchemaError::DuplicatePillar("sleep")
    ));

    let mut spec = builtin_schema();
    spec.pillars.pop();
    assert!(matches!(
        validate_schema(&spec).unwrap_err(),
        SchemaError::MissingPillar("stress")
    ));
}

#[test]
fn test_duplicate_submetric_rejected() {
    let mut spec = builtin_schema();
    let steps = sub_mut(&mut spec, SubmetricId::Steps).clone();
    spec.pillars[0].submetrics.push(steps);
    let err = validate_schema(&spec).unwrap_err();
    assert!(matches!(err, SchemaError::DuplicateSubmetric("steps")));
}

#[test]
fn test_missing_submetric_rejected() {
    let mut spec = builtin_schema();
    // Keep the movement weights summing to 1.0 so only coverage fails.
    spec.pillars[1].submetrics.retain(|s| s.id != SubmetricId::ActiveCalories);
    for sub in &mut spec.pillars[1].submetrics {
        sub.weight = 0.5;
    }
    let err = validate_schema(&spec).unwrap_err();
    assert!(matches!(err, SchemaError::MissingSubmetric("active_calories")));
}

#[test]
fn test_missing_age_range_rejected() {
    let mut spec = builtin_schema();
    sub_mut(&mut spec, SubmetricId::Hrv)
        .ranges
        .remove(&AgeGroup::Elder);
    let err = validate_schema(&spec).unwrap_err();
    match err {
        SchemaError::MissingAgeRange { submetric, group } => {
            assert_eq!(submetric, "hrv");
            assert_eq!(group, "75+");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_non_monotonic_range_rejected() {
    let mut spec = builtin_schema();
    let range = sub_mut(&mut spec, SubmetricId::SleepDuration)
        .ranges
        .get_mut(&AgeGroup::Young)
        .unwrap();
    range.optimal_min = 9.5;
    let err = validate_schema(&spec).unwrap_err();
    assert!(matches!(err, SchemaError::NonMonotonicRange { .. }));
    assert!(err.to_string().contains("optimal_min=9.5"));
}

#[test]
fn test_non_finite_bound_rejected() {
    let mut spec = builtin_schema();
    sub_mut(&mut spec, SubmetricId::Steps)
        .ranges
        .get_mut(&AgeGroup::Middle)
        .unwrap()
        .poor_low_max = Some(f64::NAN);
    let err = validate_schema(&spec).unwrap_err();
    assert!(matches!(
        err,
        SchemaError::NonFiniteBound {
            bound: "poor_low_max",
            ..
        }
    ));
}

#[test]
fn test_from_spec_refuses_invalid() {
    let mut spec = builtin_schema();
    spec.pillars[1].weight = 0.0;
    assert!(BenchmarkSchema::from_spec(spec).is_err());
}

#[test]
fn test_load_schema_json_roundtrips_builtin() {
    let dir = make_temp_dir();
    let path = dir.join("schema.json");
    let json = loader::render_schema_json(&builtin_schema()).unwrap();
    write_file(&path, &json);

    let loaded = load_schema_json(&path).unwrap();
    assert_eq!(loaded, builtin_schema());
    assert!(BenchmarkSchema::from_spec(loaded).is_ok());
}

#[test]
fn test_load_schema_json_errors() {
    let dir = make_temp_dir();
    let missing = dir.join("absent.json");
    assert!(matches!(
        load_schema_json(&missing).unwrap_err(),
        SchemaError::Io { .. }
    ));

    let broken = dir.join("broken.json");
    write_file(&broken, "{\"pillars\": [ {\"id\": \"sleep\" ");
    assert!(matches!(
        load_schema_json(&broken).unwrap_err(),
        SchemaError::Parse { .. }
    ));

    let unknown = dir.join("unknown.json");
    write_file(
        &unknown,
        "{\"pillars\": [{\"id\": \"nutrition\", \"weight\": 1.0, \"submetrics\": []}]}",
    );
    assert!(matches!(
        load_schema_json(&unknown).unwrap_err(),
        SchemaError::Parse { .. }
    ));
}
