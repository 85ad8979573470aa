use std::collections::BTreeSet;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::{AgeGroup, MetricRange, PillarId, SubmetricId};
use crate::schema::{PillarSpec, SchemaSpec, SubmetricSpec};

/// Allowed deviation of a weight sum from 1.0.
pub const WEIGHT_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("pillar weights sum to {sum:.4}, expected 1.0")]
    PillarWeightSum { sum: f64 },
    #[error("submetric weights of pillar '{pillar}' sum to {sum:.4}, expected 1.0")]
    SubmetricWeightSum { pillar: &'static str, sum: f64 },
    #[error("weight of '{owner}' must be finite and positive, got {weight}")]
    InvalidWeight { owner: &'static str, weight: f64 },
    #[error("pillar '{0}' is defined more than once")]
    DuplicatePillar(&'static str),
    #[error("pillar '{0}' is not defined")]
    MissingPillar(&'static str),
    #[error("submetric '{0}' is defined more than once")]
    DuplicateSubmetric(&'static str),
    #[error("submetric '{0}' is not defined")]
    MissingSubmetric(&'static str),
    #[error("submetric '{submetric}' has no range for age group '{group}'")]
    MissingAgeRange {
        submetric: &'static str,
        group: &'static str,
    },
    #[error("submetric '{submetric}' ({group}): bounds are not monotonic: {detail}")]
    NonMonotonicRange {
        submetric: &'static str,
        group: &'static str,
        detail: String,
    },
    #[error("submetric '{submetric}' ({group}): bound '{bound}' is not finite")]
    NonFiniteBound {
        submetric: &'static str,
        group: &'static str,
        bound: &'static str,
    },
    #[error("failed to read schema {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse schema {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Checks every structural invariant of a benchmark schema.
///
/// Runs in all build profiles. Any error here is a schema authoring fault and
/// must stop the process before the first scoring request.
pub fn validate_schema(spec: &SchemaSpec) -> Result<(), SchemaError> {
    check_pillar_set(&spec.pillars)?;
    check_submetric_set(&spec.pillars)?;

    let mut pillar_sum = 0.0;
    for pillar in &spec.pillars {
        check_weight(pillar.id.name(), pillar.weight)?;
        pillar_sum += pillar.weight;
    }
    if (pillar_sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(SchemaError::PillarWeightSum { sum: pillar_sum });
    }

    for pillar in &spec.pillars {
        let mut sum = 0.0;
        for sub in &pillar.submetrics {
            check_weight(sub.id.name(), sub.weight)?;
            sum += sub.weight;
            check_ranges(sub)?;
        }
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(SchemaError::SubmetricWeightSum {
                pillar: pillar.id.name(),
                sum,
            });
        }
    }

    Ok(())
}

fn check_pillar_set(pillars: &[PillarSpec]) -> Result<(), SchemaError> {
    let mut seen = BTreeSet::new();
    for pillar in pillars {
        if !seen.insert(pillar.id) {
            return Err(SchemaError::DuplicatePillar(pillar.id.name()));
        }
    }
    for id in PillarId::ALL {
        if !seen.contains(&id) {
            return Err(SchemaError::MissingPillar(id.name()));
        }
    }
    Ok(())
}

fn check_submetric_set(pillars: &[PillarSpec]) -> Result<(), SchemaError> {
    let mut seen = BTreeSet::new();
    for sub in pillars.iter().flat_map(|p| p.submetrics.iter()) {
        if !seen.insert(sub.id) {
            return Err(SchemaError::DuplicateSubmetric(sub.id.name()));
        }
    }
    for id in SubmetricId::ALL {
        if !seen.contains(&id) {
            return Err(SchemaError::MissingSubmetric(id.name()));
        }
    }
    Ok(())
}

// Zero counts as invalid: a measured value must carry weight.
fn check_weight(owner: &'static str, weight: f64) -> Result<(), SchemaError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(SchemaError::InvalidWeight { owner, weight });
    }
    Ok(())
}

fn check_ranges(sub: &SubmetricSpec) -> Result<(), SchemaError> {
    for group in AgeGroup::ALL {
        let range = sub
            .ranges
            .get(&group)
            .ok_or(SchemaError::MissingAgeRange {
                submetric: sub.id.name(),
                group: group.label(),
            })?;
        check_range(sub.id, group, range)?;
    }
    Ok(())
}

pub(crate) fn check_range(
    id: SubmetricId,
    group: AgeGroup,
    range: &MetricRange,
) -> Result<(), SchemaError> {
    let bounds = [
        ("acceptable_low_min", Some(range.acceptable_low_min)),
        ("optimal_min", Some(range.optimal_min)),
        ("optimal_max", Some(range.optimal_max)),
        ("acceptable_high_max", Some(range.acceptable_high_max)),
        ("poor_low_max", range.poor_low_max),
        ("poor_high_min", range.poor_high_min),
    ];
    for (bound, value) in bounds {
        if let Some(v) = value {
            if !v.is_finite() {
                return Err(SchemaError::NonFiniteBound {
                    submetric: id.name(),
                    group: group.label(),
                    bound,
                });
            }
        }
    }

    let ordered = [
        ("acceptable_low_min", range.acceptable_low_min),
        ("optimal_min", range.optimal_min),
        ("optimal_max", range.optimal_max),
        ("acceptable_high_max", range.acceptable_high_max),
    ];
    for pair in ordered.windows(2) {
        let (lo_name, lo) = pair[0];
        let (hi_name, hi) = pair[1];
        if lo > hi {
            return Err(SchemaError::NonMonotonicRange {
                submetric: id.name(),
                group: group.label(),
                detail: format!("{lo_name}={lo} > {hi_name}={hi}"),
            });
        }
    }
    Ok(())
}
