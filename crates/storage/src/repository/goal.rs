use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use super::achievement::{self, NewAchievement};
use crate::dto::goal::{CreateGoalRequest, UpdateGoalRequest};
use crate::error::{Result, StorageError};
use crate::models::{Exercise, Goal, GoalStatus, GoalType};
use crate::services::goals::evaluate_status;

const COLUMNS: &str = "goal_id, user_id, exercise_id, exercise_name, goal_type, target, \
                       deadline, start_value, current_value, status, achieved_date, \
                       version, created_at, updated_at";

pub struct GoalRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GoalRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Newest first
    pub async fn list(&self, user_id: &str) -> Result<Vec<Goal>> {
        let sql = format!("SELECT {COLUMNS} FROM goals WHERE user_id = $1 ORDER BY created_at DESC");
        let goals = sqlx::query_as::<_, Goal>(&sql)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        Ok(goals)
    }

    /// In-progress goals, newest first
    pub async fn active(&self, user_id: &str) -> Result<Vec<Goal>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM goals WHERE user_id = $1 AND status = $2 \
             ORDER BY created_at DESC"
        );
        let goals = sqlx::query_as::<_, Goal>(&sql)
            .bind(user_id)
            .bind(GoalStatus::InProgress.as_str())
            .fetch_all(self.pool)
            .await?;

        Ok(goals)
    }

    pub async fn find(&self, user_id: &str, goal_id: Uuid) -> Result<Goal> {
        let sql = format!("SELECT {COLUMNS} FROM goals WHERE goal_id = $1 AND user_id = $2");
        sqlx::query_as::<_, Goal>(&sql)
            .bind(goal_id)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound("Goal"))
    }

    /// Create a goal on one of the user's exercises. The initial status is
    /// evaluated against `today`, so a goal may start out achieved.
    pub async fn create(
        &self,
        user_id: &str,
        exercise: &Exercise,
        request: &CreateGoalRequest,
    ) -> Result<Goal> {
        let now = Utc::now();
        let start = request.start_value();
        let current = request.current_value();
        let status = evaluate_status(start, current, request.target, request.deadline, now.date_naive());
        let achieved_date = (status == GoalStatus::Achieved).then_some(now);

        let sql = format!(
            "INSERT INTO goals ({COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, 0, $12, $12) \
             RETURNING {COLUMNS}"
        );
        let goal = sqlx::query_as::<_, Goal>(&sql)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(exercise.exercise_id)
            .bind(&exercise.name)
            .bind(request.goal_type.as_str())
            .bind(request.target)
            .bind(request.deadline)
            .bind(start)
            .bind(current)
            .bind(status.as_str())
            .bind(achieved_date)
            .bind(now)
            .fetch_one(self.pool)
            .await
            .map_err(|e| StorageError::from(e).on_missing_reference("Exercise not found"))?;

        Ok(goal)
    }

    /// Apply a progress update written against `request.version`.
    ///
    /// Fails with [`StorageError::StaleWrite`] when the goal changed since the
    /// caller read it. A goal that becomes achieved here earns a
    /// goal-achieved achievement in the same transaction.
    pub async fn update_progress(
        &self,
        user_id: &str,
        goal_id: Uuid,
        request: &UpdateGoalRequest,
    ) -> Result<Goal> {
        let now = Utc::now();
        let stored = self.find(user_id, goal_id).await?;

        let target = request.target.unwrap_or(stored.target);
        let deadline = request.deadline.or(stored.deadline);
        let status = evaluate_status(
            stored.start_value,
            request.current_value,
            target,
            deadline,
            now.date_naive(),
        );
        let achieved_date = match status {
            GoalStatus::Achieved => stored.achieved_date.or(Some(now)),
            _ => None,
        };

        let mut tx = self.pool.begin().await?;

        let sql = format!(
            "UPDATE goals \
             SET current_value = $4, target = $5, deadline = $6, status = $7, \
                 achieved_date = $8, version = version + 1, updated_at = $9 \
             WHERE goal_id = $1 AND user_id = $2 AND version = $3 \
             RETURNING {COLUMNS}"
        );
        let goal = sqlx::query_as::<_, Goal>(&sql)
            .bind(goal_id)
            .bind(user_id)
            .bind(request.version)
            .bind(request.current_value)
            .bind(target)
            .bind(deadline)
            .bind(status.as_str())
            .bind(achieved_date)
            .bind(now)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| StorageError::StaleWrite("Goal was modified concurrently".into()))?;

        if goal.status == GoalStatus::Achieved && stored.status != GoalStatus::Achieved {
            achievement::append(&mut *tx, user_id, &NewAchievement::goal_achieved(&goal), now)
                .await?;
        }

        tx.commit().await?;
        Ok(goal)
    }

    pub async fn delete(&self, user_id: &str, goal_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM goals WHERE goal_id = $1 AND user_id = $2")
            .bind(goal_id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("Goal"));
        }

        Ok(())
    }
}

/// Raise every in-progress weight goal on `exercise_id` whose current value
/// is below `value`, flipping those that reach their target to achieved.
///
/// A single conditional `UPDATE`, so concurrent record admissions can only
/// move a goal upward. Goals that become achieved earn an achievement.
pub(crate) async fn raise_weight_goals(
    conn: &mut PgConnection,
    user_id: &str,
    exercise_id: Uuid,
    value: Decimal,
    now: DateTime<Utc>,
) -> Result<()> {
    let sql = format!(
        "UPDATE goals \
         SET current_value = $4, \
             status = CASE WHEN $4 >= target THEN $6 ELSE status END, \
             achieved_date = CASE WHEN $4 >= target THEN $5 ELSE achieved_date END, \
             version = version + 1, \
             updated_at = $5 \
         WHERE user_id = $1 AND exercise_id = $2 AND goal_type = $3 \
           AND status = $7 AND current_value < $4 AND target >= start_value \
         RETURNING {COLUMNS}"
    );
    let raised = sqlx::query_as::<_, Goal>(&sql)
        .bind(user_id)
        .bind(exercise_id)
        .bind(GoalType::Weight.as_str())
        .bind(value)
        .bind(now)
        .bind(GoalStatus::Achieved.as_str())
        .bind(GoalStatus::InProgress.as_str())
        .fetch_all(&mut *conn)
        .await?;

    for goal in raised.iter().filter(|g| g.status == GoalStatus::Achieved) {
        achievement::append(&mut *conn, user_id, &NewAchievement::goal_achieved(goal), now)
            .await?;
    }

    Ok(())
}
