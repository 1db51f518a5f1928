use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    FirstWorkout,
    WorkoutStreak,
    WeightMilestone,
    VolumeMilestone,
    GoalAchieved,
    PrStreak,
}

text_enum!(AchievementKind, "achievement kind", {
    FirstWorkout => "first_workout",
    WorkoutStreak => "workout_streak",
    WeightMilestone => "weight_milestone",
    VolumeMilestone => "volume_milestone",
    GoalAchieved => "goal_achieved",
    PrStreak => "pr_streak",
});

/// Append-only milestone event. Rows are never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Achievement {
    pub achievement_id: Uuid,
    pub user_id: String,
    #[sqlx(try_from = "String")]
    pub kind: AchievementKind,
    pub name: String,
    pub description: String,
    pub value: Option<Decimal>,
    pub exercise_id: Option<Uuid>,
    pub exercise_name: Option<String>,
    pub earned_at: DateTime<Utc>,
}
