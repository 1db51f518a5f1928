use chrono::{DateTime, Utc};
use sqlx::PgPool;
use storage::{
    dto::{
        common::{PaginationMeta, PaginationParams},
        progress::ProgressPoint,
        workout::{ExerciseLogRequest, RecentWorkout, WorkoutPageResponse, WorkoutRequest},
    },
    error::Result,
    models::{ExerciseLog, Workout},
    repository::{WorkoutRepository, workout::WorkoutDraft},
    services::{
        progress::{ExerciseSelector, progress_series, range_start},
        stats::{WorkoutStats, workout_stats},
    },
};
use uuid::Uuid;

use crate::features::exercises::services::exercise_names;
use crate::features::workout_days::services::referenced_workout_day;

pub async fn list_workouts(
    pool: &PgPool,
    user_id: &str,
    params: &PaginationParams,
) -> Result<WorkoutPageResponse> {
    let (workouts, total) = WorkoutRepository::new(pool).page(user_id, params).await?;

    Ok(WorkoutPageResponse {
        success: true,
        workouts: workouts.into_iter().map(Into::into).collect(),
        pagination: PaginationMeta::new(params, total),
    })
}

pub async fn get_workout(pool: &PgPool, user_id: &str, workout_id: Uuid) -> Result<Workout> {
    WorkoutRepository::new(pool).find(user_id, workout_id).await
}

/// Turn the request's exercise references into log entries carrying the
/// exercises' current names.
async fn resolve_logs(
    pool: &PgPool,
    user_id: &str,
    entries: Vec<ExerciseLogRequest>,
) -> Result<Vec<ExerciseLog>> {
    let ids: Vec<Uuid> = entries.iter().map(|e| e.exercise_id).collect();
    let names = exercise_names(pool, user_id, &ids).await?;

    Ok(entries
        .into_iter()
        .map(|entry| {
            let name = names.get(&entry.exercise_id).cloned().unwrap_or_default();
            entry.into_log(name)
        })
        .collect())
}

pub async fn create_workout(
    pool: &PgPool,
    user_id: &str,
    request: WorkoutRequest,
) -> Result<Workout> {
    let workout_day = referenced_workout_day(pool, user_id, request.workout_day_id).await?;
    let exercises = resolve_logs(pool, user_id, request.exercises).await?;

    let draft = WorkoutDraft {
        workout_day: &workout_day,
        date: request.date,
        notes: request.notes,
        exercises,
    };
    WorkoutRepository::new(pool).create(user_id, draft).await
}

pub async fn update_workout(
    pool: &PgPool,
    user_id: &str,
    workout_id: Uuid,
    request: WorkoutRequest,
) -> Result<Workout> {
    let repo = WorkoutRepository::new(pool);
    // 404 for someone else's workout before complaining about its payload
    repo.find(user_id, workout_id).await?;

    let workout_day = referenced_workout_day(pool, user_id, request.workout_day_id).await?;
    let exercises = resolve_logs(pool, user_id, request.exercises).await?;

    let draft = WorkoutDraft {
        workout_day: &workout_day,
        date: request.date,
        notes: request.notes,
        exercises,
    };
    repo.update(user_id, workout_id, draft).await
}

pub async fn delete_workout(pool: &PgPool, user_id: &str, workout_id: Uuid) -> Result<()> {
    WorkoutRepository::new(pool).delete(user_id, workout_id).await
}

pub async fn recent_workouts(pool: &PgPool, user_id: &str) -> Result<Vec<RecentWorkout>> {
    let workouts = WorkoutRepository::new(pool).recent(user_id).await?;
    Ok(workouts.into_iter().map(RecentWorkout::from).collect())
}

pub async fn workout_history(
    pool: &PgPool,
    user_id: &str,
    (from, until): (DateTime<Utc>, DateTime<Utc>),
    workout_day_id: Option<Uuid>,
    exercise_id: Option<Uuid>,
) -> Result<Vec<Workout>> {
    WorkoutRepository::new(pool)
        .history(user_id, from, until, workout_day_id, exercise_id)
        .await
}

pub async fn stats(pool: &PgPool, user_id: &str, now: DateTime<Utc>) -> Result<WorkoutStats> {
    let dates = WorkoutRepository::new(pool).dates(user_id).await?;
    Ok(workout_stats(&dates, now))
}

/// Progress series for one exercise between the time-range start and `now`.
pub async fn exercise_progress(
    pool: &PgPool,
    user_id: &str,
    selector: &ExerciseSelector,
    time_range: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Vec<ProgressPoint>> {
    let since = range_start(time_range, now);
    let workouts = WorkoutRepository::new(pool)
        .logging_exercise(user_id, selector, since, now)
        .await?;

    Ok(progress_series(&workouts, selector))
}
