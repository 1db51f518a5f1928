use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::not_blank;
use crate::models::WorkoutDay;

/// Create or rename a workout day
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct WorkoutDayRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutDayResponse {
    pub workout_day_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<WorkoutDay> for WorkoutDayResponse {
    fn from(day: WorkoutDay) -> Self {
        Self {
            workout_day_id: day.workout_day_id,
            name: day.name,
            created_at: day.created_at,
            updated_at: day.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WorkoutDayEnvelope {
    pub success: bool,
    pub workout_day: WorkoutDayResponse,
}

impl WorkoutDayEnvelope {
    pub fn new(day: WorkoutDay) -> Self {
        Self {
            success: true,
            workout_day: day.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WorkoutDayListResponse {
    pub success: bool,
    pub workout_days: Vec<WorkoutDayResponse>,
}

impl WorkoutDayListResponse {
    pub fn new(days: Vec<WorkoutDay>) -> Self {
        Self {
            success: true,
            workout_days: days.into_iter().map(Into::into).collect(),
        }
    }
}
