use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Heaviest single set
    Weight,
    /// Σ weight×reps
    Volume,
    /// Sessions per period
    Frequency,
}

text_enum!(GoalType, "goal type", {
    Weight => "weight",
    Volume => "volume",
    Frequency => "frequency",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    InProgress,
    Achieved,
    Missed,
}

text_enum!(GoalStatus, "goal status", {
    InProgress => "in_progress",
    Achieved => "achieved",
    Missed => "missed",
});

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Goal {
    pub goal_id: Uuid,
    pub user_id: String,
    pub exercise_id: Uuid,
    pub exercise_name: String,
    #[sqlx(try_from = "String")]
    pub goal_type: GoalType,
    pub target: Decimal,
    pub deadline: Option<NaiveDate>,
    pub start_value: Decimal,
    pub current_value: Decimal,
    #[sqlx(try_from = "String")]
    pub status: GoalStatus,
    pub achieved_date: Option<DateTime<Utc>>,
    /// Bumped on every write; updates must present the version they read.
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
