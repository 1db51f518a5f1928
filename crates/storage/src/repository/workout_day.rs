use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::WorkoutDay;

const DUPLICATE_NAME: &str = "A workout day with this name already exists";

pub struct WorkoutDayRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutDayRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the user's workout days by name
    pub async fn list(&self, user_id: &str) -> Result<Vec<WorkoutDay>> {
        let days = sqlx::query_as::<_, WorkoutDay>(
            r#"
            SELECT workout_day_id, user_id, name, created_at, updated_at
            FROM workout_days
            WHERE user_id = $1
            ORDER BY name
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(days)
    }

    pub async fn find(&self, user_id: &str, workout_day_id: Uuid) -> Result<WorkoutDay> {
        sqlx::query_as::<_, WorkoutDay>(
            r#"
            SELECT workout_day_id, user_id, name, created_at, updated_at
            FROM workout_days
            WHERE workout_day_id = $1 AND user_id = $2
            "#,
        )
        .bind(workout_day_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("Workout day"))
    }

    pub async fn create(&self, user_id: &str, name: &str) -> Result<WorkoutDay> {
        let now = Utc::now();
        sqlx::query_as::<_, WorkoutDay>(
            r#"
            INSERT INTO workout_days (workout_day_id, user_id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING workout_day_id, user_id, name, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(name.trim())
        .bind(now)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique(DUPLICATE_NAME))
    }

    /// Rename a workout day. Workouts keep the name they were logged under.
    pub async fn update(&self, user_id: &str, workout_day_id: Uuid, name: &str) -> Result<WorkoutDay> {
        sqlx::query_as::<_, WorkoutDay>(
            r#"
            UPDATE workout_days
            SET name = $3, updated_at = $4
            WHERE workout_day_id = $1 AND user_id = $2
            RETURNING workout_day_id, user_id, name, created_at, updated_at
            "#,
        )
        .bind(workout_day_id)
        .bind(user_id)
        .bind(name.trim())
        .bind(Utc::now())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique(DUPLICATE_NAME))?
        .ok_or(StorageError::NotFound("Workout day"))
    }

    /// Delete a workout day and its templates. Refused while exercises or
    /// workouts still point at it.
    pub async fn delete(&self, user_id: &str, workout_day_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM workout_days WHERE workout_day_id = $1 AND user_id = $2")
            .bind(workout_day_id)
            .bind(user_id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                StorageError::from(e)
                    .on_dependents("Workout day is still used by exercises or workouts")
            })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("Workout day"));
        }

        Ok(())
    }
}
