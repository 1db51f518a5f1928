use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{
    Database,
    dto::{
        common::{ErrorResponse, PaginationParams, SuccessResponse},
        progress::{ProgressQuery, ProgressResponse, StatsResponse},
        workout::{
            RecentWorkoutsResponse, WorkoutEnvelope, WorkoutHistoryFilter, WorkoutListResponse,
            WorkoutPageResponse, WorkoutRequest,
        },
    },
    services::progress::ExerciseSelector,
};
use validator::Validate;

use crate::error::WebError;
use crate::extract::{ApiJson, ApiQuery, parse_id};
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/workouts",
    params(PaginationParams),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "One page of workouts, newest first", body = WorkoutPageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "workouts"
)]
pub async fn list_workouts(
    State(db): State<Database>,
    user: AuthUser,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Response, WebError> {
    let page = services::list_workouts(db.pool(), &user.user_id, &params).await?;

    Ok(Json(page).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/{id}",
    params(
        ("id" = String, Path, description = "Workout ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout found", body = WorkoutEnvelope),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Workout not found", body = ErrorResponse)
    ),
    tag = "workouts"
)]
pub async fn get_workout(
    State(db): State<Database>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let workout_id = parse_id(&id, "workout")?;

    let workout = services::get_workout(db.pool(), &user.user_id, workout_id).await?;

    Ok(Json(WorkoutEnvelope::new(workout)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/workouts",
    request_body = WorkoutRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Workout logged", body = WorkoutEnvelope),
        (status = 400, description = "Validation error or unknown workout day / exercise", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "workouts"
)]
pub async fn create_workout(
    State(db): State<Database>,
    user: AuthUser,
    ApiJson(req): ApiJson<WorkoutRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let workout = services::create_workout(db.pool(), &user.user_id, req).await?;
    tracing::info!(workout_id = %workout.workout_id, "Workout logged");

    Ok((StatusCode::CREATED, Json(WorkoutEnvelope::new(workout))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/workouts/{id}",
    params(
        ("id" = String, Path, description = "Workout ID")
    ),
    request_body = WorkoutRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout replaced", body = WorkoutEnvelope),
        (status = 400, description = "Validation error, malformed ID or unknown reference", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Workout not found", body = ErrorResponse)
    ),
    tag = "workouts"
)]
pub async fn update_workout(
    State(db): State<Database>,
    user: AuthUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<WorkoutRequest>,
) -> Result<Response, WebError> {
    let workout_id = parse_id(&id, "workout")?;
    req.validate()?;

    let workout = services::update_workout(db.pool(), &user.user_id, workout_id, req).await?;

    Ok(Json(WorkoutEnvelope::new(workout)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/workouts/{id}",
    params(
        ("id" = String, Path, description = "Workout ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout deleted", body = SuccessResponse),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Workout not found", body = ErrorResponse)
    ),
    tag = "workouts"
)]
pub async fn delete_workout(
    State(db): State<Database>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let workout_id = parse_id(&id, "workout")?;

    services::delete_workout(db.pool(), &user.user_id, workout_id).await?;

    Ok(Json(SuccessResponse::ok()).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/recent",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Five most recent workouts with volume summaries", body = RecentWorkoutsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "workouts"
)]
pub async fn recent_workouts(
    State(db): State<Database>,
    user: AuthUser,
) -> Result<Response, WebError> {
    let data = services::recent_workouts(db.pool(), &user.user_id).await?;

    Ok(Json(RecentWorkoutsResponse {
        success: true,
        data,
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/history",
    params(WorkoutHistoryFilter),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workouts in the date window, newest first", body = WorkoutListResponse),
        (status = 400, description = "Missing or inverted date window", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "workouts"
)]
pub async fn workout_history(
    State(db): State<Database>,
    user: AuthUser,
    ApiQuery(filter): ApiQuery<WorkoutHistoryFilter>,
) -> Result<Response, WebError> {
    let window = filter.window().map_err(WebError::BadRequest)?;

    let workouts = services::workout_history(
        db.pool(),
        &user.user_id,
        window,
        filter.workout_day_id,
        filter.exercise_id,
    )
    .await?;

    Ok(Json(WorkoutListResponse::new(workouts)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/stats",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Totals, weekly and monthly counts and the current streak", body = StatsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "workouts"
)]
pub async fn workout_stats(
    State(db): State<Database>,
    user: AuthUser,
) -> Result<Response, WebError> {
    let data = services::stats(db.pool(), &user.user_id, Utc::now()).await?;

    Ok(Json(StatsResponse {
        success: true,
        data,
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/progress",
    params(ProgressQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Per-workout progress for one exercise, oldest first", body = ProgressResponse),
        (status = 400, description = "Missing or malformed exercise ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "workouts"
)]
pub async fn workout_progress(
    State(db): State<Database>,
    user: AuthUser,
    ApiQuery(query): ApiQuery<ProgressQuery>,
) -> Result<Response, WebError> {
    let reference = query.exercise_reference().map_err(WebError::BadRequest)?;
    let exercise_id = parse_id(reference.trim(), "exercise")?;

    let data = services::exercise_progress(
        db.pool(),
        &user.user_id,
        &ExerciseSelector::Id(exercise_id),
        query.time_range.as_deref(),
        Utc::now(),
    )
    .await?;

    Ok(Json(ProgressResponse {
        success: true,
        data,
    })
    .into_response())
}
