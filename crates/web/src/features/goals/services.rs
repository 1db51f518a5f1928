use sqlx::PgPool;
use storage::{
    dto::goal::{CreateGoalRequest, UpdateGoalRequest},
    error::Result,
    models::Goal,
    repository::{ExerciseRepository, GoalRepository},
};
use uuid::Uuid;

pub async fn list_goals(pool: &PgPool, user_id: &str) -> Result<Vec<Goal>> {
    GoalRepository::new(pool).list(user_id).await
}

pub async fn active_goals(pool: &PgPool, user_id: &str) -> Result<Vec<Goal>> {
    GoalRepository::new(pool).active(user_id).await
}

pub async fn create_goal(
    pool: &PgPool,
    user_id: &str,
    request: &CreateGoalRequest,
) -> Result<Goal> {
    let exercise = ExerciseRepository::new(pool)
        .find_referenced(user_id, request.exercise_id)
        .await?;

    GoalRepository::new(pool)
        .create(user_id, &exercise, request)
        .await
}

pub async fn update_goal(
    pool: &PgPool,
    user_id: &str,
    goal_id: Uuid,
    request: &UpdateGoalRequest,
) -> Result<Goal> {
    GoalRepository::new(pool)
        .update_progress(user_id, goal_id, request)
        .await
}

pub async fn delete_goal(pool: &PgPool, user_id: &str, goal_id: Uuid) -> Result<()> {
    GoalRepository::new(pool).delete(user_id, goal_id).await
}
