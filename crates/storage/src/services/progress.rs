use chrono::{DateTime, Datelike, Months, Utc};
use uuid::Uuid;

use crate::dto::progress::ProgressPoint;
use crate::models::{ExerciseLog, Workout};

/// Look-back window accepted by the progress endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl TimeRange {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1m" => Some(Self::OneMonth),
            "3m" => Some(Self::ThreeMonths),
            "6m" => Some(Self::SixMonths),
            "1y" => Some(Self::OneYear),
            _ => None,
        }
    }

    pub fn months(self) -> u32 {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::OneYear => 12,
        }
    }

    /// Midnight UTC on the first day of the month `months()` before `now`.
    pub fn lower_bound(self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.date_naive()
            .with_day(1)
            .and_then(|first| first.checked_sub_months(Months::new(self.months())))
            .and_then(|day| day.and_hms_opt(0, 0, 0))
            .map(|start| start.and_utc())
            .unwrap_or(DateTime::UNIX_EPOCH)
    }
}

/// Lower bound for an optional range code. Missing or unknown codes mean
/// "since the beginning".
pub fn range_start(code: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
    code.and_then(TimeRange::from_code)
        .map(|range| range.lower_bound(now))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// How a progress request names its exercise: by id when the reference parses
/// as one, otherwise by the name denormalized into each workout log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseSelector {
    Id(Uuid),
    Name(String),
}

impl ExerciseSelector {
    pub fn parse(reference: &str) -> Self {
        match Uuid::parse_str(reference.trim()) {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(reference.to_string()),
        }
    }

    pub fn matches(&self, log: &ExerciseLog) -> bool {
        match self {
            Self::Id(id) => log.exercise_id == *id,
            Self::Name(name) => log.exercise_name == *name,
        }
    }

    /// JSONB containment pattern selecting workouts that log this exercise.
    pub fn containment(&self) -> serde_json::Value {
        match self {
            Self::Id(id) => serde_json::json!([{ "exercise_id": id }]),
            Self::Name(name) => serde_json::json!([{ "exercise_name": name }]),
        }
    }
}

/// One point per workout containing the exercise, oldest first.
///
/// Every matching log entry in a workout contributes to that workout's point;
/// workouts without the exercise produce no point at all.
pub fn progress_series(workouts: &[Workout], selector: &ExerciseSelector) -> Vec<ProgressPoint> {
    let mut points: Vec<(DateTime<Utc>, ProgressPoint)> = workouts
        .iter()
        .filter_map(|workout| {
            let logs: Vec<&ExerciseLog> = workout
                .exercises
                .iter()
                .filter(|log| selector.matches(log))
                .collect();

            if logs.is_empty() {
                return None;
            }

            let point = ProgressPoint {
                date: workout.date.date_naive(),
                max_weight: logs.iter().map(|log| log.max_weight()).fold(0.0, f64::max),
                total_volume: logs.iter().map(|log| log.volume()).sum(),
                sets: logs.iter().flat_map(|log| log.sets.iter().cloned()).collect(),
            };

            Some((workout.date, point))
        })
        .collect();

    points.sort_by_key(|(date, _)| *date);
    points.into_iter().map(|(_, point)| point).collect()
}
