//! Daily history ingest.
//!
//! Reads the per-day CSV produced by wearable export converters
//! (`date,sleep_hours,steps,hrv_ms,resting_hr` plus optional extended columns)
//! into [`DailyRecord`]s. Bad rows are skipped and reported, never fatal.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::input::InputError;
use crate::model::DailyRecord;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A row-level problem encountered during ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct HistoryLoad {
    pub records: Vec<DailyRecord>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Column {
    Date,
    SleepHours,
    RestorativeSleep,
    SleepEfficiency,
    AwakePercent,
    MovementMinutes,
    Steps,
    ActiveCalories,
    HrvMs,
    HrvType,
    RestingHr,
    BreathingRate,
}

fn column_for(header: &str) -> Option<Column> {
    let col = match header {
        "date" | "day" => Column::Date,
        "sleep_hours" | "sleep" => Column::SleepHours,
        "restorative_sleep_percent" | "restorative_sleep" => Column::RestorativeSleep,
        "sleep_efficiency_percent" | "sleep_efficiency" => Column::SleepEfficiency,
        "awake_percent" => Column::AwakePercent,
        "movement_minutes" | "exercise_minutes" => Column::MovementMinutes,
        "steps" => Column::Steps,
        "active_calories" => Column::ActiveCalories,
        "hrv_ms" | "hrv" => Column::HrvMs,
        "hrv_type" => Column::HrvType,
        "resting_hr" | "resting_heart_rate" => Column::RestingHr,
        "breathing_rate" | "respiratory_rate" => Column::BreathingRate,
        _ => return None,
    };
    Some(col)
}

pub fn load_history(path: &Path) -> Result<HistoryLoad, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader.headers().map_err(InputError::Header)?.clone();
    let columns = build_column_map(&headers);
    if !columns.contains_key(&Column::Date) {
        return Err(InputError::MissingColumn("date"));
    }

    let mut records = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        rows_read += 1;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };
        match parse_row(&record, &columns) {
            Ok(row) => records.push(row),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    for err in &row_errors {
        tracing::warn!(line = err.line, "skipping history row: {}", err.message);
    }

    if records.is_empty() {
        return Err(InputError::Empty(path.to_path_buf()));
    }

    tracing::info!(
        path = %path.display(),
        rows = rows_read,
        used = records.len(),
        "loaded daily history"
    );

    Ok(HistoryLoad {
        records,
        row_errors,
        rows_read,
    })
}

fn build_column_map(headers: &StringRecord) -> HashMap<Column, usize> {
    let mut map = HashMap::new();
    for (idx, name) in headers.iter().enumerate() {
        let name = normalize_header_name(name);
        if let Some(col) = column_for(&name) {
            map.entry(col).or_insert(idx);
        }
    }
    map
}

fn normalize_header_name(name: &str) -> String {
    name.trim()
        .trim_start_matches('\u{feff}')
        .to_ascii_lowercase()
        .replace([' ', '-'], "_")
}

fn parse_row(
    record: &StringRecord,
    columns: &HashMap<Column, usize>,
) -> Result<DailyRecord, String> {
    let cell = |col: Column| {
        columns
            .get(&col)
            .and_then(|&idx| record.get(idx))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };

    let date_text = cell(Column::Date).ok_or_else(|| "missing date".to_string())?;
    let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT)
        .or_else(|_| parse_datetime_prefix(date_text))
        .map_err(|e| format!("invalid date '{date_text}': {e}"))?;

    let number = |col: Column, name: &str| -> Result<Option<f64>, String> {
        match cell(col) {
            None => Ok(None),
            Some(text) => {
                let v: f64 = text
                    .parse()
                    .map_err(|_| format!("invalid {name} '{text}'"))?;
                if v.is_finite() {
                    Ok(Some(v))
                } else {
                    Err(format!("invalid {name} '{text}'"))
                }
            }
        }
    };

    Ok(DailyRecord {
        date,
        sleep_hours: number(Column::SleepHours, "sleep_hours")?,
        restorative_sleep_percent: number(Column::RestorativeSleep, "restorative_sleep_percent")?,
        sleep_efficiency_percent: number(Column::SleepEfficiency, "sleep_efficiency_percent")?,
        awake_percent: number(Column::AwakePercent, "awake_percent")?,
        movement_minutes: number(Column::MovementMinutes, "movement_minutes")?,
        steps: number(Column::Steps, "steps")?,
        active_calories: number(Column::ActiveCalories, "active_calories")?,
        hrv_ms: number(Column::HrvMs, "hrv_ms")?,
        hrv_type: cell(Column::HrvType).map(str::to_string),
        resting_hr: number(Column::RestingHr, "resting_hr")?,
        breathing_rate: number(Column::BreathingRate, "breathing_rate")?,
    })
}

// Export tools sometimes write full timestamps (`2024-03-01T00:00:00Z`);
// the calendar date is the first ten characters.
fn parse_datetime_prefix(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    let prefix = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(prefix, DATE_FORMAT)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
