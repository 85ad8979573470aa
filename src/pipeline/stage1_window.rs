use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::model::{DailyRecord, RawMetrics, ScoringProfile, SubmetricId};

#[derive(Debug, Clone)]
pub struct Stage1Inputs<'a> {
    pub age: i32,
    /// Candidate history in any order.
    pub history: &'a [DailyRecord],
    pub profile: &'a ScoringProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackfillNote {
    pub id: SubmetricId,
    pub source_date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WindowAudit {
    pub records_total: usize,
    pub window_len: usize,
    pub window_start: Option<NaiveDate>,
    pub window_end: Option<NaiveDate>,
    /// Number of window days that carried each submetric, in `SubmetricId::ALL` order.
    pub days_averaged: Vec<(SubmetricId, usize)>,
    pub backfilled: Vec<BackfillNote>,
}

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub raw: RawMetrics,
    pub audit: WindowAudit,
}

/// Turns daily history into one averaged scoring row.
///
/// The window is the most recent `profile.window_days` records (or all of
/// them when fewer exist). Each metric is averaged over the window days that
/// carry it. A metric absent from the whole window takes the single most recent
/// value from the `profile.backfill_lookback_days` days before the window
/// start; nothing later than the window start and nothing older than the
/// lookback is consulted.
pub fn run_stage1(inputs: &Stage1Inputs<'_>) -> Stage1Output {
    let mut sorted: Vec<&DailyRecord> = inputs.history.iter().collect();
    sorted.sort_by_key(|r| r.date);

    let window_len = sorted.len().min(inputs.profile.window_days.max(1));
    let (before, window) = sorted.split_at(sorted.len() - window_len);

    let mut raw = RawMetrics::new(inputs.age);
    let mut audit = WindowAudit {
        records_total: sorted.len(),
        window_len,
        window_start: window.first().map(|r| r.date),
        window_end: window.last().map(|r| r.date),
        days_averaged: Vec::with_capacity(SubmetricId::COUNT),
        backfilled: Vec::new(),
    };

    let lookback_start = audit.window_start.map(|start| {
        start
            .checked_sub_days(Days::new(inputs.profile.backfill_lookback_days))
            .unwrap_or(NaiveDate::MIN)
    });

    let mut hrv_source: Option<&DailyRecord> = None;

    for id in SubmetricId::ALL {
        let (sum, days) = window
            .iter()
            .filter_map(|r| r.value(id))
            .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
        audit.days_averaged.push((id, days));

        if days > 0 {
            raw.set(id, Some(sum / days as f64));
            continue;
        }

        let (Some(start), Some(floor)) = (audit.window_start, lookback_start) else {
            continue;
        };
        let found = before
            .iter()
            .rev()
            .filter(|r| r.date < start && r.date >= floor)
            .find_map(|r| r.value(id).map(|v| (*r, v)));
        if let Some((record, value)) = found {
            raw.set(id, Some(value));
            audit.backfilled.push(BackfillNote {
                id,
                source_date: record.date,
                value,
            });
            if id == SubmetricId::Hrv {
                hrv_source = Some(record);
            }
        }
    }

    raw.hrv_type = match hrv_source {
        Some(record) => record.hrv_type.clone(),
        None => window
            .iter()
            .rev()
            .filter(|r| r.value(SubmetricId::Hrv).is_some())
            .find_map(|r| r.hrv_type.clone()),
    };

    tracing::debug!(
        records = audit.records_total,
        window = audit.window_len,
        measured = raw.measured_count(),
        backfilled = audit.backfilled.len(),
        "built scoring window"
    );

    Stage1Output { raw, audit }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_window.rs"]
mod tests;
