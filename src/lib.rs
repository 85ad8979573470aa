//! Age-aware vitality scoring.
//!
//! Converts daily sleep, movement and cardiovascular measurements into a
//! 0-100 vitality score with an auditable per-metric breakdown. The engine is
//! pure and synchronous: history in, snapshot out, no I/O. The `input` and
//! `pipeline::stage7_report` modules are the file-facing edges used by the
//! `vitality` binary.

pub mod engine;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod schema;
pub mod tracing;

pub use engine::VitalityEngine;
pub use model::{
    AgeGroup, DailyRecord, MetricStatus, PillarId, RawMetrics, ScoringDirection, ScoringProfile,
    SubmetricId, VitalityBreakdown, VitalitySnapshot,
};
pub use schema::{BenchmarkSchema, SchemaError, SchemaSpec, builtin_schema, validate_schema};
