use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::{FromRow, types::Json};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Workout {
    pub workout_id: Uuid,
    pub user_id: String,
    pub workout_day_id: Uuid,
    pub workout_day_name: String,
    pub date: DateTime<Utc>,
    pub exercises: Json<Vec<ExerciseLog>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workout {
    /// Σ weight×reps over every set of every exercise in the session.
    pub fn total_volume(&self) -> f64 {
        self.exercises.iter().map(ExerciseLog::volume).sum()
    }
}

/// One exercise performed during a workout, with its name denormalized so the
/// log stays readable after the exercise is renamed or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseLog {
    pub exercise_id: Uuid,
    pub exercise_name: String,
    #[serde(default)]
    pub sets: Vec<SetEntry>,
}

impl ExerciseLog {
    pub fn max_weight(&self) -> f64 {
        self.sets.iter().map(|s| s.weight).fold(0.0, f64::max)
    }

    pub fn volume(&self) -> f64 {
        self.sets.iter().map(SetEntry::volume).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SetEntry {
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub reps: f64,
    /// Reps in reserve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SetEntry {
    pub fn volume(&self) -> f64 {
        self.weight * self.reps
    }
}

/// Stored documents may carry numbers as strings, nulls or garbage; anything
/// that is not a finite number reads back as zero.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let number = match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    Ok(if number.is_finite() { number } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_set_fields_read_as_zero() {
        let log: ExerciseLog = serde_json::from_value(serde_json::json!({
            "exercise_id": "6f1c2a1e-2d7e-4c55-9a0e-3f1f5c1c9b10",
            "exercise_name": "Bench Press",
            "sets": [
                { "weight": "62.5", "reps": 5 },
                { "weight": null, "reps": "lots" },
                { "reps": 8 }
            ]
        }))
        .unwrap();

        assert_eq!(log.sets[0].weight, 62.5);
        assert_eq!(log.sets[1].weight, 0.0);
        assert_eq!(log.sets[1].reps, 0.0);
        assert_eq!(log.sets[2].weight, 0.0);
        assert_eq!(log.max_weight(), 62.5);
        assert_eq!(log.volume(), 312.5);
    }

    #[test]
    fn empty_log_has_zero_max_weight() {
        let log = ExerciseLog {
            exercise_id: Uuid::nil(),
            exercise_name: "Squat".into(),
            sets: vec![],
        };
        assert_eq!(log.max_weight(), 0.0);
        assert_eq!(log.volume(), 0.0);
    }
}
