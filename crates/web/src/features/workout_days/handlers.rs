use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::{ErrorResponse, SuccessResponse},
        workout_day::{WorkoutDayEnvelope, WorkoutDayListResponse, WorkoutDayRequest},
    },
};
use validator::Validate;

use crate::error::WebError;
use crate::extract::{ApiJson, parse_id};
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/workout-days",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout days ordered by name", body = WorkoutDayListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "workout-days"
)]
pub async fn list_workout_days(
    State(db): State<Database>,
    user: AuthUser,
) -> Result<Response, WebError> {
    let days = services::list_workout_days(db.pool(), &user.user_id).await?;

    Ok(Json(WorkoutDayListResponse::new(days)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/workout-days",
    request_body = WorkoutDayRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Workout day created", body = WorkoutDayEnvelope),
        (status = 400, description = "Validation error or duplicate name", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "workout-days"
)]
pub async fn create_workout_day(
    State(db): State<Database>,
    user: AuthUser,
    ApiJson(req): ApiJson<WorkoutDayRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let day = services::create_workout_day(db.pool(), &user.user_id, &req.name).await?;
    tracing::info!(workout_day_id = %day.workout_day_id, "Workout day created");

    Ok((StatusCode::CREATED, Json(WorkoutDayEnvelope::new(day))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/workout-days/{id}",
    params(
        ("id" = String, Path, description = "Workout day ID")
    ),
    request_body = WorkoutDayRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout day renamed", body = WorkoutDayEnvelope),
        (status = 400, description = "Validation error, malformed ID or duplicate name", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Workout day not found", body = ErrorResponse)
    ),
    tag = "workout-days"
)]
pub async fn update_workout_day(
    State(db): State<Database>,
    user: AuthUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<WorkoutDayRequest>,
) -> Result<Response, WebError> {
    let workout_day_id = parse_id(&id, "workout day")?;
    req.validate()?;

    let day = services::update_workout_day(db.pool(), &user.user_id, workout_day_id, &req.name)
        .await?;

    Ok(Json(WorkoutDayEnvelope::new(day)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/workout-days/{id}",
    params(
        ("id" = String, Path, description = "Workout day ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout day deleted", body = SuccessResponse),
        (status = 400, description = "Malformed ID, or exercises or workouts still use it", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Workout day not found", body = ErrorResponse)
    ),
    tag = "workout-days"
)]
pub async fn delete_workout_day(
    State(db): State<Database>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let workout_day_id = parse_id(&id, "workout day")?;

    services::delete_workout_day(db.pool(), &user.user_id, workout_day_id).await?;

    Ok(Json(SuccessResponse::ok()).into_response())
}
