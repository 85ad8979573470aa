use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarId {
    Sleep,
    Movement,
    Stress,
}

impl PillarId {
    pub const COUNT: usize = 3;

    pub const ALL: [PillarId; PillarId::COUNT] =
        [PillarId::Sleep, PillarId::Movement, PillarId::Stress];

    pub fn index(self) -> usize {
        match self {
            PillarId::Sleep => 0,
            PillarId::Movement => 1,
            PillarId::Stress => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PillarId::Sleep => "sleep",
            PillarId::Movement => "movement",
            PillarId::Stress => "stress",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PillarId::Sleep => "Sleep",
            PillarId::Movement => "Movement",
            PillarId::Stress => "Stress & Recovery",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmetricId {
    SleepDuration,
    RestorativeSleep,
    SleepEfficiency,
    AwakePercent,
    MovementMinutes,
    Steps,
    ActiveCalories,
    Hrv,
    RestingHeartRate,
    BreathingRate,
}

impl SubmetricId {
    pub const COUNT: usize = 10;

    pub const ALL: [SubmetricId; SubmetricId::COUNT] = [
        SubmetricId::SleepDuration,
        SubmetricId::RestorativeSleep,
        SubmetricId::SleepEfficiency,
        SubmetricId::AwakePercent,
        SubmetricId::MovementMinutes,
        SubmetricId::Steps,
        SubmetricId::ActiveCalories,
        SubmetricId::Hrv,
        SubmetricId::RestingHeartRate,
        SubmetricId::BreathingRate,
    ];

    pub fn index(self) -> usize {
        match self {
            SubmetricId::SleepDuration => 0,
            SubmetricId::RestorativeSleep => 1,
            SubmetricId::SleepEfficiency => 2,
            SubmetricId::AwakePercent => 3,
            SubmetricId::MovementMinutes => 4,
            SubmetricId::Steps => 5,
            SubmetricId::ActiveCalories => 6,
            SubmetricId::Hrv => 7,
            SubmetricId::RestingHeartRate => 8,
            SubmetricId::BreathingRate => 9,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SubmetricId::SleepDuration => "sleep_duration",
            SubmetricId::RestorativeSleep => "restorative_sleep",
            SubmetricId::SleepEfficiency => "sleep_efficiency",
            SubmetricId::AwakePercent => "awake_percent",
            SubmetricId::MovementMinutes => "movement_minutes",
            SubmetricId::Steps => "steps",
            SubmetricId::ActiveCalories => "active_calories",
            SubmetricId::Hrv => "hrv",
            SubmetricId::RestingHeartRate => "resting_heart_rate",
            SubmetricId::BreathingRate => "breathing_rate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SubmetricId::SleepDuration => "Sleep duration",
            SubmetricId::RestorativeSleep => "Restorative sleep",
            SubmetricId::SleepEfficiency => "Sleep efficiency",
            SubmetricId::AwakePercent => "Time awake",
            SubmetricId::MovementMinutes => "Movement minutes",
            SubmetricId::Steps => "Steps",
            SubmetricId::ActiveCalories => "Active calories",
            SubmetricId::Hrv => "Heart rate variability",
            SubmetricId::RestingHeartRate => "Resting heart rate",
            SubmetricId::BreathingRate => "Breathing rate",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            SubmetricId::SleepDuration => "h",
            SubmetricId::RestorativeSleep
            | SubmetricId::SleepEfficiency
            | SubmetricId::AwakePercent => "%",
            SubmetricId::MovementMinutes => "min",
            SubmetricId::Steps => "steps",
            SubmetricId::ActiveCalories => "kcal",
            SubmetricId::Hrv => "ms",
            SubmetricId::RestingHeartRate => "bpm",
            SubmetricId::BreathingRate => "br/min",
        }
    }

    /// Decimal places used when rendering values of this metric.
    pub fn precision(self) -> usize {
        match self {
            SubmetricId::SleepDuration | SubmetricId::BreathingRate => 1,
            _ => 0,
        }
    }
}

/// One averaged input row for scoring. Absent values mean "not measured".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawMetrics {
    pub age: i32,
    values: [Option<f64>; SubmetricId::COUNT],
    /// Display-only note describing how HRV was measured (e.g. `SDNN`).
    pub hrv_type: Option<String>,
}

impl RawMetrics {
    pub fn new(age: i32) -> Self {
        Self {
            age,
            values: [None; SubmetricId::COUNT],
            hrv_type: None,
        }
    }

    pub fn get(&self, id: SubmetricId) -> Option<f64> {
        self.values[id.index()]
    }

    pub fn set(&mut self, id: SubmetricId, value: Option<f64>) {
        self.values[id.index()] = value.filter(|v| v.is_finite());
    }

    pub fn with(mut self, id: SubmetricId, value: f64) -> Self {
        self.set(id, Some(value));
        self
    }

    pub fn measured_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

/// A single day of measurements as supplied by the persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub sleep_hours: Option<f64>,
    pub restorative_sleep_percent: Option<f64>,
    pub sleep_efficiency_percent: Option<f64>,
    pub awake_percent: Option<f64>,
    pub movement_minutes: Option<f64>,
    pub steps: Option<f64>,
    pub active_calories: Option<f64>,
    pub hrv_ms: Option<f64>,
    pub hrv_type: Option<String>,
    pub resting_hr: Option<f64>,
    pub breathing_rate: Option<f64>,
}

impl DailyRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }

    pub fn value(&self, id: SubmetricId) -> Option<f64> {
        let v = match id {
            SubmetricId::SleepDuration => self.sleep_hours,
            SubmetricId::RestorativeSleep => self.restorative_sleep_percent,
            SubmetricId::SleepEfficiency => self.sleep_efficiency_percent,
            SubmetricId::AwakePercent => self.awake_percent,
            SubmetricId::MovementMinutes => self.movement_minutes,
            SubmetricId::Steps => self.steps,
            SubmetricId::ActiveCalories => self.active_calories,
            SubmetricId::Hrv => self.hrv_ms,
            SubmetricId::RestingHeartRate => self.resting_hr,
            SubmetricId::BreathingRate => self.breathing_rate,
        };
        v.filter(|x| x.is_finite())
    }
}
