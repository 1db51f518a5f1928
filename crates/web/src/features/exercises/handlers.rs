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
        exercise::{ExerciseEnvelope, ExerciseFilter, ExerciseListResponse, ExerciseRequest},
        progress::{ProgressQuery, ProgressResponse},
    },
};
use validator::Validate;

use crate::error::WebError;
use crate::extract::{ApiJson, ApiQuery, parse_id};
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/exercises",
    params(ExerciseFilter),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Exercises ordered by name", body = ExerciseListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "exercises"
)]
pub async fn list_exercises(
    State(db): State<Database>,
    user: AuthUser,
    ApiQuery(filter): ApiQuery<ExerciseFilter>,
) -> Result<Response, WebError> {
    let exercises =
        services::list_exercises(db.pool(), &user.user_id, filter.workout_day_id).await?;

    Ok(Json(ExerciseListResponse::new(exercises)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/exercises",
    request_body = ExerciseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Exercise created", body = ExerciseEnvelope),
        (status = 400, description = "Validation error, duplicate name or unknown workout day", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "exercises"
)]
pub async fn create_exercise(
    State(db): State<Database>,
    user: AuthUser,
    ApiJson(req): ApiJson<ExerciseRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let exercise = services::create_exercise(db.pool(), &user.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(ExerciseEnvelope::new(exercise))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/exercises/{id}",
    params(
        ("id" = String, Path, description = "Exercise ID")
    ),
    request_body = ExerciseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Exercise updated", body = ExerciseEnvelope),
        (status = 400, description = "Validation error, malformed ID or duplicate name", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Exercise not found", body = ErrorResponse)
    ),
    tag = "exercises"
)]
pub async fn update_exercise(
    State(db): State<Database>,
    user: AuthUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<ExerciseRequest>,
) -> Result<Response, WebError> {
    let exercise_id = parse_id(&id, "exercise")?;
    req.validate()?;

    let exercise = services::update_exercise(db.pool(), &user.user_id, exercise_id, &req).await?;

    Ok(Json(ExerciseEnvelope::new(exercise)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/exercises/{id}",
    params(
        ("id" = String, Path, description = "Exercise ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Exercise deleted along with its goals and records", body = SuccessResponse),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Exercise not found", body = ErrorResponse)
    ),
    tag = "exercises"
)]
pub async fn delete_exercise(
    State(db): State<Database>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let exercise_id = parse_id(&id, "exercise")?;

    services::delete_exercise(db.pool(), &user.user_id, exercise_id).await?;

    Ok(Json(SuccessResponse::ok()).into_response())
}

#[utoipa::path(
    get,
    path = "/api/exercises/progress",
    params(ProgressQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Per-workout progress, oldest first", body = ProgressResponse),
        (status = 400, description = "Missing exercise reference", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "exercises"
)]
pub async fn exercise_progress(
    State(db): State<Database>,
    user: AuthUser,
    ApiQuery(query): ApiQuery<ProgressQuery>,
) -> Result<Response, WebError> {
    let reference = query.exercise_reference().map_err(WebError::BadRequest)?;

    let data = services::progress(
        db.pool(),
        &user.user_id,
        reference,
        query.time_range.as_deref(),
    )
    .await?;

    Ok(Json(ProgressResponse {
        success: true,
        data,
    })
    .into_response())
}
