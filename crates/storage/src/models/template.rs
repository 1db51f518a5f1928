use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkoutTemplate {
    pub template_id: Uuid,
    pub user_id: String,
    pub template_name: String,
    pub workout_day_id: Uuid,
    pub workout_day_name: String,
    pub exercises: Json<Vec<TemplateExercise>>,
    pub last_used: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TemplateExercise {
    pub exercise_id: Uuid,
    pub exercise_name: String,
    #[serde(default)]
    pub default_sets: Vec<TemplateSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TemplateSet {
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub reps: u32,
    #[serde(default = "default_rir")]
    pub rir: String,
}

fn default_rir() -> String {
    "2".to_string()
}
