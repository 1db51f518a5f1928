use chrono::{DateTime, Utc};
use sqlx::{PgPool, types::Json};
use uuid::Uuid;

use super::achievement::{self, NewAchievement};
use crate::dto::common::PaginationParams;
use crate::error::{Result, StorageError};
use crate::models::{ExerciseLog, Workout, WorkoutDay};
use crate::services::progress::ExerciseSelector;

const COLUMNS: &str = "workout_id, user_id, workout_day_id, workout_day_name, date, \
                       exercises, notes, created_at, updated_at";

const RECENT_LIMIT: i64 = 5;

/// Workout ready to be written, with names already resolved.
#[derive(Debug, Clone)]
pub struct WorkoutDraft<'d> {
    pub workout_day: &'d WorkoutDay,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub exercises: Vec<ExerciseLog>,
}

pub struct WorkoutRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// One page of workouts, newest first, with the user's total count
    pub async fn page(
        &self,
        user_id: &str,
        params: &PaginationParams,
    ) -> Result<(Vec<Workout>, i64)> {
        let sql = format!(
            "SELECT {COLUMNS} FROM workouts WHERE user_id = $1 \
             ORDER BY date DESC LIMIT $2 OFFSET $3"
        );
        let workouts = sqlx::query_as::<_, Workout>(&sql)
            .bind(user_id)
            .bind(params.limit())
            .bind(params.offset())
            .fetch_all(self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workouts WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(self.pool)
            .await?;

        Ok((workouts, total))
    }

    pub async fn recent(&self, user_id: &str) -> Result<Vec<Workout>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM workouts WHERE user_id = $1 ORDER BY date DESC LIMIT $2"
        );
        let workouts = sqlx::query_as::<_, Workout>(&sql)
            .bind(user_id)
            .bind(RECENT_LIMIT)
            .fetch_all(self.pool)
            .await?;

        Ok(workouts)
    }

    /// Workouts inside `[from, until]`, newest first, optionally narrowed to
    /// one workout day and/or one logged exercise.
    pub async fn history(
        &self,
        user_id: &str,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
        workout_day_id: Option<Uuid>,
        exercise_id: Option<Uuid>,
    ) -> Result<Vec<Workout>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM workouts \
             WHERE user_id = $1 AND date >= $2 AND date <= $3 \
               AND ($4::uuid IS NULL OR workout_day_id = $4) \
               AND ($5::jsonb IS NULL OR exercises @> $5) \
             ORDER BY date DESC"
        );
        let containment = exercise_id.map(|id| Json(ExerciseSelector::Id(id).containment()));

        let workouts = sqlx::query_as::<_, Workout>(&sql)
            .bind(user_id)
            .bind(from)
            .bind(until)
            .bind(workout_day_id)
            .bind(containment)
            .fetch_all(self.pool)
            .await?;

        Ok(workouts)
    }

    /// Workouts logging the selected exercise between `since` and `until`,
    /// oldest first.
    pub async fn logging_exercise(
        &self,
        user_id: &str,
        selector: &ExerciseSelector,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<Workout>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM workouts \
             WHERE user_id = $1 AND date >= $2 AND date <= $3 AND exercises @> $4 \
             ORDER BY date"
        );
        let workouts = sqlx::query_as::<_, Workout>(&sql)
            .bind(user_id)
            .bind(since)
            .bind(until)
            .bind(Json(selector.containment()))
            .fetch_all(self.pool)
            .await?;

        Ok(workouts)
    }

    /// Every workout date of the user, newest first
    pub async fn dates(&self, user_id: &str) -> Result<Vec<DateTime<Utc>>> {
        let dates = sqlx::query_scalar::<_, DateTime<Utc>>(
            "SELECT date FROM workouts WHERE user_id = $1 ORDER BY date DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(dates)
    }

    pub async fn find(&self, user_id: &str, workout_id: Uuid) -> Result<Workout> {
        let sql = format!("SELECT {COLUMNS} FROM workouts WHERE workout_id = $1 AND user_id = $2");
        sqlx::query_as::<_, Workout>(&sql)
            .bind(workout_id)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound("Workout"))
    }

    /// Store a workout. The user's first workout also earns the
    /// first-workout achievement, in the same transaction.
    pub async fn create(&self, user_id: &str, draft: WorkoutDraft<'_>) -> Result<Workout> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            "INSERT INTO workouts ({COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8) \
             RETURNING {COLUMNS}"
        );
        let workout = sqlx::query_as::<_, Workout>(&sql)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(draft.workout_day.workout_day_id)
            .bind(&draft.workout_day.name)
            .bind(draft.date)
            .bind(Json(&draft.exercises))
            .bind(draft.notes.as_deref())
            .bind(now)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| StorageError::from(e).on_missing_reference("Workout day not found"))?;

        achievement::append(&mut *tx, user_id, &NewAchievement::first_workout(), now).await?;

        tx.commit().await?;
        Ok(workout)
    }

    /// Replace a logged workout in full
    pub async fn update(
        &self,
        user_id: &str,
        workout_id: Uuid,
        draft: WorkoutDraft<'_>,
    ) -> Result<Workout> {
        let sql = format!(
            "UPDATE workouts \
             SET workout_day_id = $3, workout_day_name = $4, date = $5, \
                 exercises = $6, notes = $7, updated_at = $8 \
             WHERE workout_id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Workout>(&sql)
            .bind(workout_id)
            .bind(user_id)
            .bind(draft.workout_day.workout_day_id)
            .bind(&draft.workout_day.name)
            .bind(draft.date)
            .bind(Json(&draft.exercises))
            .bind(draft.notes.as_deref())
            .bind(Utc::now())
            .fetch_optional(self.pool)
            .await
            .map_err(|e| StorageError::from(e).on_missing_reference("Workout day not found"))?
            .ok_or(StorageError::NotFound("Workout"))
    }

    pub async fn delete(&self, user_id: &str, workout_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM workouts WHERE workout_id = $1 AND user_id = $2")
            .bind(workout_id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("Workout"));
        }

        Ok(())
    }
}
