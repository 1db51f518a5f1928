use sqlx::PgPool;
use storage::{
    dto::template::CreateTemplateRequest,
    error::Result,
    models::WorkoutTemplate,
    repository::TemplateRepository,
};
use uuid::Uuid;

use crate::features::exercises::services::exercise_names;
use crate::features::workout_days::services::referenced_workout_day;

pub async fn list_templates(pool: &PgPool, user_id: &str) -> Result<Vec<WorkoutTemplate>> {
    TemplateRepository::new(pool).list(user_id).await
}

pub async fn create_template(
    pool: &PgPool,
    user_id: &str,
    request: CreateTemplateRequest,
) -> Result<WorkoutTemplate> {
    let workout_day = referenced_workout_day(pool, user_id, request.workout_day_id).await?;

    let ids: Vec<Uuid> = request.exercises.iter().map(|e| e.exercise_id).collect();
    let names = exercise_names(pool, user_id, &ids).await?;
    let exercises: Vec<_> = request
        .exercises
        .into_iter()
        .map(|entry| {
            let name = names.get(&entry.exercise_id).cloned().unwrap_or_default();
            entry.into_exercise(name)
        })
        .collect();

    TemplateRepository::new(pool)
        .create(user_id, &request.template_name, &workout_day, &exercises)
        .await
}

pub async fn use_template(pool: &PgPool, user_id: &str, template_id: Uuid) -> Result<WorkoutTemplate> {
    TemplateRepository::new(pool).mark_used(user_id, template_id).await
}

pub async fn delete_template(pool: &PgPool, user_id: &str, template_id: Uuid) -> Result<()> {
    TemplateRepository::new(pool).delete(user_id, template_id).await
}
