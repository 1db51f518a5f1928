use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::common::{PaginationMeta, flexible_datetime};
use crate::models::{ExerciseLog, SetEntry, Workout};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetRequest {
    #[validate(range(min = 0.0, max = 10000.0, message = "Weight must be between 0 and 10000"))]
    pub weight: f64,

    #[validate(range(max = 10000))]
    pub reps: u32,

    /// Reps in reserve, e.g. "2" or "1-2"
    #[validate(length(max = 10))]
    pub rir: Option<String>,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

impl From<SetRequest> for SetEntry {
    fn from(set: SetRequest) -> Self {
        Self {
            weight: set.weight,
            reps: f64::from(set.reps),
            rir: set.rir,
            notes: set.notes.filter(|n| !n.is_empty()),
        }
    }
}

/// One exercise in a logged workout. The exercise name is copied from the
/// stored exercise when the workout is saved.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ExerciseLogRequest {
    pub exercise_id: Uuid,

    #[validate(length(max = 100), nested)]
    pub sets: Vec<SetRequest>,
}

impl ExerciseLogRequest {
    pub fn into_log(self, exercise_name: String) -> ExerciseLog {
        ExerciseLog {
            exercise_id: self.exercise_id,
            exercise_name,
            sets: self.sets.into_iter().map(SetEntry::from).collect(),
        }
    }
}

/// Log a workout, or replace a logged one
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct WorkoutRequest {
    pub workout_day_id: Uuid,

    /// RFC 3339 timestamp or YYYY-MM-DD
    #[serde(deserialize_with = "flexible_datetime::deserialize")]
    pub date: DateTime<Utc>,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,

    #[validate(length(max = 50), nested)]
    pub exercises: Vec<ExerciseLogRequest>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WorkoutHistoryFilter {
    /// First day to include (YYYY-MM-DD), required
    pub start_date: Option<NaiveDate>,
    /// Last day to include (YYYY-MM-DD), required
    pub end_date: Option<NaiveDate>,
    pub workout_day_id: Option<Uuid>,
    pub exercise_id: Option<Uuid>,
}

impl WorkoutHistoryFilter {
    /// Inclusive `[start 00:00, end 23:59:59.999]` window in UTC.
    pub fn window(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), String> {
        let (Some(start), Some(end)) = (self.start_date, self.end_date) else {
            return Err("Start date and end date are required".to_string());
        };
        if start > end {
            return Err("Start date must not be after end date".to_string());
        }

        let from = start.and_time(NaiveTime::MIN).and_utc();
        let until = end
            .succ_opt()
            .map(|next| next.and_time(NaiveTime::MIN).and_utc() - chrono::Duration::milliseconds(1))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Ok((from, until))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutResponse {
    pub workout_id: Uuid,
    pub workout_day_id: Uuid,
    pub workout_day_name: String,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub exercises: Vec<ExerciseLog>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        Self {
            workout_id: workout.workout_id,
            workout_day_id: workout.workout_day_id,
            workout_day_name: workout.workout_day_name,
            date: workout.date,
            notes: workout.notes,
            exercises: workout.exercises.0,
            created_at: workout.created_at,
            updated_at: workout.updated_at,
        }
    }
}

/// Recent-session summary for the dashboard
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecentWorkout {
    pub workout_id: Uuid,
    pub workout_day_name: String,
    pub date: DateTime<Utc>,
    pub exercises: Vec<ExerciseLog>,
    pub exercise_count: usize,
    pub total_volume: f64,
}

impl From<Workout> for RecentWorkout {
    fn from(workout: Workout) -> Self {
        let total_volume = workout.total_volume();
        Self {
            workout_id: workout.workout_id,
            workout_day_name: workout.workout_day_name,
            date: workout.date,
            exercise_count: workout.exercises.len(),
            exercises: workout.exercises.0,
            total_volume,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WorkoutEnvelope {
    pub success: bool,
    pub workout: WorkoutResponse,
}

impl WorkoutEnvelope {
    pub fn new(workout: Workout) -> Self {
        Self {
            success: true,
            workout: workout.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WorkoutPageResponse {
    pub success: bool,
    pub workouts: Vec<WorkoutResponse>,
    #[serde(flatten)]
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WorkoutListResponse {
    pub success: bool,
    pub workouts: Vec<WorkoutResponse>,
}

impl WorkoutListResponse {
    pub fn new(workouts: Vec<Workout>) -> Self {
        Self {
            success: true,
            workouts: workouts.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecentWorkoutsResponse {
    pub success: bool,
    pub data: Vec<RecentWorkout>,
}
