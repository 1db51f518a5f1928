use sqlx::PgPool;
use storage::{
    dto::achievement::CreateAchievementRequest,
    error::{Result, StorageError},
    models::Achievement,
    repository::{AchievementRepository, ExerciseRepository, achievement::NewAchievement},
};

pub async fn list_achievements(pool: &PgPool, user_id: &str) -> Result<Vec<Achievement>> {
    AchievementRepository::new(pool).list(user_id).await
}

pub async fn create_achievement(
    pool: &PgPool,
    user_id: &str,
    request: &CreateAchievementRequest,
) -> Result<Achievement> {
    let exercise = match request.exercise_id {
        Some(exercise_id) => Some(
            ExerciseRepository::new(pool)
                .find_referenced(user_id, exercise_id)
                .await?,
        ),
        None => None,
    };

    AchievementRepository::new(pool)
        .create(user_id, &NewAchievement::from_request(request, exercise.as_ref()))
        .await?
        // only the once-per-user first workout can collide
        .ok_or_else(|| {
            StorageError::ConstraintViolation(
                "The first workout achievement has already been earned".to_string(),
            )
        })
}
