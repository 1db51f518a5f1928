use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::exercise::ExerciseRequest;
use crate::error::{Result, StorageError};
use crate::models::Exercise;

const DUPLICATE_NAME: &str = "An exercise with this name already exists";
const UNKNOWN_WORKOUT_DAY: &str = "Workout day not found";

pub struct ExerciseRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ExerciseRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List exercises by name, optionally only those of one workout day
    pub async fn list(&self, user_id: &str, workout_day_id: Option<Uuid>) -> Result<Vec<Exercise>> {
        let exercises = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT exercise_id, user_id, name, category, workout_day_id,
                   default_sets, default_reps, notes, created_at, updated_at
            FROM exercises
            WHERE user_id = $1
              AND ($2::uuid IS NULL OR workout_day_id = $2)
            ORDER BY name
            "#,
        )
        .bind(user_id)
        .bind(workout_day_id)
        .fetch_all(self.pool)
        .await?;

        Ok(exercises)
    }

    pub async fn find(&self, user_id: &str, exercise_id: Uuid) -> Result<Exercise> {
        sqlx::query_as::<_, Exercise>(
            r#"
            SELECT exercise_id, user_id, name, category, workout_day_id,
                   default_sets, default_reps, notes, created_at, updated_at
            FROM exercises
            WHERE exercise_id = $1 AND user_id = $2
            "#,
        )
        .bind(exercise_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("Exercise"))
    }

    /// Like [`find`](Self::find), but a missing exercise is a bad reference
    /// in the caller's payload rather than a missing resource.
    pub async fn find_referenced(&self, user_id: &str, exercise_id: Uuid) -> Result<Exercise> {
        self.find(user_id, exercise_id).await.map_err(|e| match e {
            StorageError::NotFound(_) => StorageError::InvalidReference("Exercise not found".into()),
            other => other,
        })
    }

    /// Fetch the user's exercises among `ids`. Ids that are unknown or
    /// belong to someone else are simply absent from the result.
    pub async fn find_many(&self, user_id: &str, ids: &[Uuid]) -> Result<Vec<Exercise>> {
        let exercises = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT exercise_id, user_id, name, category, workout_day_id,
                   default_sets, default_reps, notes, created_at, updated_at
            FROM exercises
            WHERE user_id = $1 AND exercise_id = ANY($2)
            "#,
        )
        .bind(user_id)
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(exercises)
    }

    pub async fn create(&self, user_id: &str, request: &ExerciseRequest) -> Result<Exercise> {
        let now = Utc::now();
        sqlx::query_as::<_, Exercise>(
            r#"
            INSERT INTO exercises (
                exercise_id, user_id, name, category, workout_day_id,
                default_sets, default_reps, notes, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING exercise_id, user_id, name, category, workout_day_id,
                      default_sets, default_reps, notes, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(request.name.trim())
        .bind(request.category())
        .bind(request.workout_day_id)
        .bind(request.default_sets)
        .bind(request.default_reps)
        .bind(request.notes.as_deref())
        .bind(now)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique(DUPLICATE_NAME)
                .on_missing_reference(UNKNOWN_WORKOUT_DAY)
        })
    }

    /// Replace every editable field of an exercise
    pub async fn update(
        &self,
        user_id: &str,
        exercise_id: Uuid,
        request: &ExerciseRequest,
    ) -> Result<Exercise> {
        sqlx::query_as::<_, Exercise>(
            r#"
            UPDATE exercises
            SET name = $3, category = $4, workout_day_id = $5,
                default_sets = $6, default_reps = $7, notes = $8, updated_at = $9
            WHERE exercise_id = $1 AND user_id = $2
            RETURNING exercise_id, user_id, name, category, workout_day_id,
                      default_sets, default_reps, notes, created_at, updated_at
            "#,
        )
        .bind(exercise_id)
        .bind(user_id)
        .bind(request.name.trim())
        .bind(request.category())
        .bind(request.workout_day_id)
        .bind(request.default_sets)
        .bind(request.default_reps)
        .bind(request.notes.as_deref())
        .bind(Utc::now())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique(DUPLICATE_NAME)
                .on_missing_reference(UNKNOWN_WORKOUT_DAY)
        })?
        .ok_or(StorageError::NotFound("Exercise"))
    }

    /// Delete an exercise together with its goals and personal records.
    /// Logged workouts keep their copy of the exercise name.
    pub async fn delete(&self, user_id: &str, exercise_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM exercises WHERE exercise_id = $1 AND user_id = $2")
            .bind(exercise_id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("Exercise"));
        }

        Ok(())
    }
}
