use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::dto::achievement::CreateAchievementRequest;
use crate::error::{Result, StorageError};
use crate::models::{Achievement, AchievementKind, Exercise, Goal};

const COLUMNS: &str = "achievement_id, user_id, kind, name, description, value, \
                       exercise_id, exercise_name, earned_at";

/// Achievement row about to be appended.
#[derive(Debug, Clone)]
pub struct NewAchievement {
    pub kind: AchievementKind,
    pub name: String,
    pub description: String,
    pub value: Option<Decimal>,
    pub exercise_id: Option<Uuid>,
    pub exercise_name: Option<String>,
}

impl NewAchievement {
    pub fn first_workout() -> Self {
        Self {
            kind: AchievementKind::FirstWorkout,
            name: "First Workout".to_string(),
            description: "Logged your first workout".to_string(),
            value: None,
            exercise_id: None,
            exercise_name: None,
        }
    }

    pub fn goal_achieved(goal: &Goal) -> Self {
        Self {
            kind: AchievementKind::GoalAchieved,
            name: "Goal Achieved".to_string(),
            description: format!(
                "Reached a {} goal of {} on {}",
                goal.goal_type, goal.target, goal.exercise_name
            ),
            value: Some(goal.target),
            exercise_id: Some(goal.exercise_id),
            exercise_name: Some(goal.exercise_name.clone()),
        }
    }

    pub fn from_request(request: &CreateAchievementRequest, exercise: Option<&Exercise>) -> Self {
        Self {
            kind: request.kind,
            name: request.name.trim().to_string(),
            description: request.description.clone(),
            value: request.value,
            exercise_id: exercise.map(|e| e.exercise_id),
            exercise_name: exercise.map(|e| e.name.clone()),
        }
    }
}

/// Append an achievement inside whatever transaction the caller holds.
///
/// Returns `None` when a one-per-user kind (first workout) was already
/// earned.
pub(crate) async fn append<'e, E>(
    executor: E,
    user_id: &str,
    achievement: &NewAchievement,
    earned_at: DateTime<Utc>,
) -> Result<Option<Achievement>>
where
    E: PgExecutor<'e>,
{
    let sql = format!(
        "INSERT INTO achievements ({COLUMNS}) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
         ON CONFLICT DO NOTHING \
         RETURNING {COLUMNS}"
    );

    let achievement = sqlx::query_as::<_, Achievement>(&sql)
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(achievement.kind.as_str())
        .bind(&achievement.name)
        .bind(&achievement.description)
        .bind(achievement.value)
        .bind(achievement.exercise_id)
        .bind(achievement.exercise_name.as_deref())
        .bind(earned_at)
        .fetch_optional(executor)
        .await
        .map_err(|e| StorageError::from(e).on_missing_reference("Exercise not found"))?;

    Ok(achievement)
}

pub struct AchievementRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AchievementRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Newest first
    pub async fn list(&self, user_id: &str) -> Result<Vec<Achievement>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM achievements WHERE user_id = $1 ORDER BY earned_at DESC"
        );
        let achievements = sqlx::query_as::<_, Achievement>(&sql)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        Ok(achievements)
    }

    /// Returns `None` if the achievement is a first workout the user
    /// already has.
    pub async fn create(
        &self,
        user_id: &str,
        achievement: &NewAchievement,
    ) -> Result<Option<Achievement>> {
        append(self.pool, user_id, achievement, Utc::now()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalStatus, GoalType};

    #[test]
    fn goal_achievement_describes_the_goal() {
        let now = Utc::now();
        let goal = Goal {
            goal_id: Uuid::new_v4(),
            user_id: "u1".into(),
            exercise_id: Uuid::new_v4(),
            exercise_name: "Squat".into(),
            goal_type: GoalType::Weight,
            target: Decimal::from(140),
            deadline: None,
            start_value: Decimal::from(100),
            current_value: Decimal::from(140),
            status: GoalStatus::Achieved,
            achieved_date: Some(now),
            version: 1,
            created_at: now,
            updated_at: now,
        };

        let achievement = NewAchievement::goal_achieved(&goal);
        assert_eq!(achievement.kind, AchievementKind::GoalAchieved);
        assert_eq!(achievement.description, "Reached a weight goal of 140 on Squat");
        assert_eq!(achievement.exercise_id, Some(goal.exercise_id));
    }
}
