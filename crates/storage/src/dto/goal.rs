use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{non_negative, positive, to_f64};
use crate::models::{Goal, GoalStatus, GoalType};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGoalRequest {
    pub exercise_id: Uuid,
    pub goal_type: GoalType,

    #[validate(custom(function = "positive"))]
    #[schema(value_type = f64)]
    pub target: Decimal,

    pub deadline: Option<NaiveDate>,

    /// Defaults to 0
    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = Option<f64>)]
    pub start_value: Option<Decimal>,

    /// Defaults to the start value
    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = Option<f64>)]
    pub current_value: Option<Decimal>,
}

impl CreateGoalRequest {
    pub fn start_value(&self) -> Decimal {
        self.start_value.unwrap_or(Decimal::ZERO)
    }

    pub fn current_value(&self) -> Decimal {
        self.current_value.unwrap_or_else(|| self.start_value())
    }
}

/// Progress update. `version` must match the value last read.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateGoalRequest {
    pub version: i64,

    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = f64)]
    pub current_value: Decimal,

    #[validate(custom(function = "positive"))]
    #[schema(value_type = Option<f64>)]
    pub target: Option<Decimal>,

    pub deadline: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GoalResponse {
    pub goal_id: Uuid,
    pub exercise_id: Uuid,
    pub exercise_name: String,
    pub goal_type: GoalType,
    pub target: f64,
    pub deadline: Option<NaiveDate>,
    pub start_value: f64,
    pub current_value: f64,
    pub status: GoalStatus,
    pub achieved_date: Option<DateTime<Utc>>,
    pub version: i64,
    /// Percentage toward the target, 0 to 100
    pub progress: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Goal> for GoalResponse {
    fn from(goal: Goal) -> Self {
        let progress = goal.progress();
        Self {
            goal_id: goal.goal_id,
            exercise_id: goal.exercise_id,
            exercise_name: goal.exercise_name,
            goal_type: goal.goal_type,
            target: to_f64(goal.target),
            deadline: goal.deadline,
            start_value: to_f64(goal.start_value),
            current_value: to_f64(goal.current_value),
            status: goal.status,
            achieved_date: goal.achieved_date,
            version: goal.version,
            progress,
            created_at: goal.created_at,
            updated_at: goal.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GoalEnvelope {
    pub success: bool,
    pub goal: GoalResponse,
}

impl GoalEnvelope {
    pub fn new(goal: Goal) -> Self {
        Self {
            success: true,
            goal: goal.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GoalListResponse {
    pub success: bool,
    pub goals: Vec<GoalResponse>,
}

impl GoalListResponse {
    pub fn new(goals: Vec<Goal>) -> Self {
        Self {
            success: true,
            goals: goals.into_iter().map(Into::into).collect(),
        }
    }
}
