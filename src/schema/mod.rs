pub mod defs;
pub mod loader;
pub mod validate;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{AgeGroup, MetricRange, PillarId, ScoringDirection, SubmetricId};

pub use defs::builtin_schema;
pub use loader::load_schema_json;
pub use validate::{SchemaError, validate_schema};

/// Authoring form of the benchmark catalog. Nothing may score against it
/// until it has been turned into a [`BenchmarkSchema`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaSpec {
    pub pillars: Vec<PillarSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarSpec {
    pub id: PillarId,
    pub weight: f64,
    pub submetrics: Vec<SubmetricSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmetricSpec {
    pub id: SubmetricId,
    pub weight: f64,
    pub direction: ScoringDirection,
    pub ranges: BTreeMap<AgeGroup, MetricRange>,
}

#[derive(Debug, Clone)]
pub struct SubmetricDefinition {
    pub id: SubmetricId,
    pub pillar: PillarId,
    pub weight: f64,
    pub direction: ScoringDirection,
    ranges: [MetricRange; AgeGroup::COUNT],
}

impl SubmetricDefinition {
    pub fn range(&self, group: AgeGroup) -> &MetricRange {
        &self.ranges[group.index()]
    }
}

#[derive(Debug, Clone)]
pub struct PillarDefinition {
    pub id: PillarId,
    pub weight: f64,
    pub submetrics: Vec<SubmetricDefinition>,
}

/// Validated, read-only benchmark catalog.
///
/// Construction goes through [`validate_schema`], so every submetric and every
/// age group resolves to a definition and lookups cannot fail afterwards.
#[derive(Debug, Clone)]
pub struct BenchmarkSchema {
    pillars: Vec<PillarDefinition>,
    locations: [(usize, usize); SubmetricId::COUNT],
}

impl BenchmarkSchema {
    pub fn from_spec(spec: SchemaSpec) -> Result<Self, SchemaError> {
        validate_schema(&spec)?;

        let mut locations: [Option<(usize, usize)>; SubmetricId::COUNT] =
            [None; SubmetricId::COUNT];
        let mut pillars = Vec::with_capacity(spec.pillars.len());

        for (p_idx, pillar) in spec.pillars.into_iter().enumerate() {
            let mut submetrics = Vec::with_capacity(pillar.submetrics.len());
            for (s_idx, sub) in pillar.submetrics.into_iter().enumerate() {
                locations[sub.id.index()] = Some((p_idx, s_idx));
                submetrics.push(SubmetricDefinition {
                    id: sub.id,
                    pillar: pillar.id,
                    weight: sub.weight,
                    direction: sub.direction,
                    ranges: ranges_by_group(sub.id, &sub.ranges)?,
                });
            }
            pillars.push(PillarDefinition {
                id: pillar.id,
                weight: pillar.weight,
                submetrics,
            });
        }

        let mut resolved = [(0usize, 0usize); SubmetricId::COUNT];
        for id in SubmetricId::ALL {
            resolved[id.index()] =
                locations[id.index()].ok_or(SchemaError::MissingSubmetric(id.name()))?;
        }

        Ok(Self {
            pillars,
            locations: resolved,
        })
    }

    pub fn builtin() -> Result<Self, SchemaError> {
        Self::from_spec(builtin_schema())
    }

    pub fn pillars(&self) -> &[PillarDefinition] {
        &self.pillars
    }

    pub fn submetric(&self, id: SubmetricId) -> &SubmetricDefinition {
        let (p, s) = self.locations[id.index()];
        &self.pillars[p].submetrics[s]
    }

    pub fn range(&self, id: SubmetricId, group: AgeGroup) -> &MetricRange {
        self.submetric(id).range(group)
    }

    pub fn submetric_count(&self) -> usize {
        self.pillars.iter().map(|p| p.submetrics.len()).sum()
    }
}

fn ranges_by_group(
    id: SubmetricId,
    ranges: &BTreeMap<AgeGroup, MetricRange>,
) -> Result<[MetricRange; AgeGroup::COUNT], SchemaError> {
    let resolved = AgeGroup::ALL
        .iter()
        .map(|group| {
            ranges
                .get(group)
                .copied()
                .ok_or(SchemaError::MissingAgeRange {
                    submetric: id.name(),
                    group: group.label(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    <[MetricRange; AgeGroup::COUNT]>::try_from(resolved).map_err(|_| {
        SchemaError::MissingAgeRange {
            submetric: id.name(),
            group: AgeGroup::Elder.label(),
        }
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/schema/tests.rs"]
mod tests;
