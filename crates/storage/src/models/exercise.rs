use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Exercise {
    pub exercise_id: Uuid,
    pub user_id: String,
    pub name: String,
    pub category: String,
    pub workout_day_id: Option<Uuid>,
    pub default_sets: Option<i32>,
    pub default_reps: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
