use std::collections::HashMap;

use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::{exercise::ExerciseRequest, progress::ProgressPoint},
    error::{Result, StorageError},
    models::Exercise,
    repository::ExerciseRepository,
    services::progress::ExerciseSelector,
};
use uuid::Uuid;

use crate::features::workouts::services::exercise_progress;

pub async fn list_exercises(
    pool: &PgPool,
    user_id: &str,
    workout_day_id: Option<Uuid>,
) -> Result<Vec<Exercise>> {
    ExerciseRepository::new(pool).list(user_id, workout_day_id).await
}

pub async fn create_exercise(
    pool: &PgPool,
    user_id: &str,
    request: &ExerciseRequest,
) -> Result<Exercise> {
    ExerciseRepository::new(pool).create(user_id, request).await
}

pub async fn update_exercise(
    pool: &PgPool,
    user_id: &str,
    exercise_id: Uuid,
    request: &ExerciseRequest,
) -> Result<Exercise> {
    ExerciseRepository::new(pool)
        .update(user_id, exercise_id, request)
        .await
}

pub async fn delete_exercise(pool: &PgPool, user_id: &str, exercise_id: Uuid) -> Result<()> {
    ExerciseRepository::new(pool).delete(user_id, exercise_id).await
}

/// Progress for an exercise named either by id or by its logged name
pub async fn progress(
    pool: &PgPool,
    user_id: &str,
    reference: &str,
    time_range: Option<&str>,
) -> Result<Vec<ProgressPoint>> {
    let selector = ExerciseSelector::parse(reference);
    exercise_progress(pool, user_id, &selector, time_range, Utc::now()).await
}

/// Map each referenced exercise id to its current name. Every id must be
/// one of the user's exercises.
pub async fn exercise_names(
    pool: &PgPool,
    user_id: &str,
    ids: &[Uuid],
) -> Result<HashMap<Uuid, String>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let names: HashMap<Uuid, String> = ExerciseRepository::new(pool)
        .find_many(user_id, ids)
        .await?
        .into_iter()
        .map(|e| (e.exercise_id, e.name))
        .collect();

    if ids.iter().any(|id| !names.contains_key(id)) {
        return Err(StorageError::InvalidReference("Exercise not found".to_string()));
    }

    Ok(names)
}
