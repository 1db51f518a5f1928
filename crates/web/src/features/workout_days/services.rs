use sqlx::PgPool;
use storage::{
    error::{Result, StorageError},
    models::WorkoutDay,
    repository::WorkoutDayRepository,
};
use uuid::Uuid;

pub async fn list_workout_days(pool: &PgPool, user_id: &str) -> Result<Vec<WorkoutDay>> {
    WorkoutDayRepository::new(pool).list(user_id).await
}

pub async fn create_workout_day(pool: &PgPool, user_id: &str, name: &str) -> Result<WorkoutDay> {
    WorkoutDayRepository::new(pool).create(user_id, name).await
}

pub async fn update_workout_day(
    pool: &PgPool,
    user_id: &str,
    workout_day_id: Uuid,
    name: &str,
) -> Result<WorkoutDay> {
    WorkoutDayRepository::new(pool)
        .update(user_id, workout_day_id, name)
        .await
}

pub async fn delete_workout_day(pool: &PgPool, user_id: &str, workout_day_id: Uuid) -> Result<()> {
    WorkoutDayRepository::new(pool)
        .delete(user_id, workout_day_id)
        .await
}

/// Look up a workout day named in a request body. A missing or foreign day
/// is a bad reference, not a missing resource.
pub async fn referenced_workout_day(
    pool: &PgPool,
    user_id: &str,
    workout_day_id: Uuid,
) -> Result<WorkoutDay> {
    WorkoutDayRepository::new(pool)
        .find(user_id, workout_day_id)
        .await
        .map_err(|e| match e {
            StorageError::NotFound(_) => {
                StorageError::InvalidReference("Workout day not found".to_string())
            }
            other => other,
        })
}
