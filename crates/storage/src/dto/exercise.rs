use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::common::not_blank;
use crate::models::Exercise;

pub const DEFAULT_CATEGORY: &str = "Other";

/// Create an exercise, or replace all of its fields on update
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ExerciseRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    /// Defaults to "Other"
    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,

    pub workout_day_id: Option<Uuid>,

    #[validate(range(min = 1, max = 100, message = "Default sets must be a positive integer"))]
    pub default_sets: Option<i32>,

    #[validate(range(min = 1, max = 1000, message = "Default reps must be a positive integer"))]
    pub default_reps: Option<i32>,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

impl ExerciseRequest {
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExerciseFilter {
    /// Only exercises attached to this workout day
    pub workout_day_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseResponse {
    pub exercise_id: Uuid,
    pub name: String,
    pub category: String,
    pub workout_day_id: Option<Uuid>,
    pub default_sets: Option<i32>,
    pub default_reps: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Exercise> for ExerciseResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            exercise_id: exercise.exercise_id,
            name: exercise.name,
            category: exercise.category,
            workout_day_id: exercise.workout_day_id,
            default_sets: exercise.default_sets,
            default_reps: exercise.default_reps,
            notes: exercise.notes,
            created_at: exercise.created_at,
            updated_at: exercise.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExerciseEnvelope {
    pub success: bool,
    pub exercise: ExerciseResponse,
}

impl ExerciseEnvelope {
    pub fn new(exercise: Exercise) -> Self {
        Self {
            success: true,
            exercise: exercise.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExerciseListResponse {
    pub success: bool,
    pub exercises: Vec<ExerciseResponse>,
}

impl ExerciseListResponse {
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self {
            success: true,
            exercises: exercises.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ExerciseRequest {
        ExerciseRequest {
            name: "Bench Press".into(),
            category: None,
            workout_day_id: None,
            default_sets: Some(3),
            default_reps: Some(8),
            notes: None,
        }
    }

    #[test]
    fn category_defaults_to_other() {
        assert_eq!(request().category(), "Other");
    }

    #[test]
    fn default_counts_must_be_positive() {
        assert!(request().validate().is_ok());

        let mut req = request();
        req.default_sets = Some(0);
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("default_sets"));

        let mut req = request();
        req.default_reps = Some(-3);
        assert!(req.validate().is_err());
    }
}
