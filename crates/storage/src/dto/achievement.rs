use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{not_blank, to_f64};
use crate::models::{Achievement, AchievementKind};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAchievementRequest {
    #[serde(rename = "type")]
    pub kind: AchievementKind,

    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(length(min = 1, max = 500, message = "Description is required"))]
    pub description: String,

    #[schema(value_type = Option<f64>)]
    pub value: Option<Decimal>,

    /// When set, must be one of the caller's exercises
    pub exercise_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AchievementResponse {
    pub achievement_id: Uuid,
    #[serde(rename = "type")]
    pub kind: AchievementKind,
    pub name: String,
    pub description: String,
    pub value: Option<f64>,
    pub exercise_id: Option<Uuid>,
    pub exercise_name: Option<String>,
    pub earned_at: DateTime<Utc>,
}

impl From<Achievement> for AchievementResponse {
    fn from(achievement: Achievement) -> Self {
        Self {
            achievement_id: achievement.achievement_id,
            kind: achievement.kind,
            name: achievement.name,
            description: achievement.description,
            value: achievement.value.map(to_f64),
            exercise_id: achievement.exercise_id,
            exercise_name: achievement.exercise_name,
            earned_at: achievement.earned_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AchievementEnvelope {
    pub success: bool,
    pub achievement: AchievementResponse,
}

impl AchievementEnvelope {
    pub fn new(achievement: Achievement) -> Self {
        Self {
            success: true,
            achievement: achievement.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AchievementListResponse {
    pub success: bool,
    pub achievements: Vec<AchievementResponse>,
}

impl AchievementListResponse {
    pub fn new(achievements: Vec<Achievement>) -> Self {
        Self {
            success: true,
            achievements: achievements.into_iter().map(Into::into).collect(),
        }
    }
}
