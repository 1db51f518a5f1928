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
        goal::{CreateGoalRequest, GoalEnvelope, GoalListResponse, UpdateGoalRequest},
    },
};
use validator::Validate;

use crate::error::WebError;
use crate::extract::{ApiJson, parse_id};
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/goals",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All goals with progress, newest first", body = GoalListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "goals"
)]
pub async fn list_goals(State(db): State<Database>, user: AuthUser) -> Result<Response, WebError> {
    let goals = services::list_goals(db.pool(), &user.user_id).await?;

    Ok(Json(GoalListResponse::new(goals)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/goals/active",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "In-progress goals with progress, newest first", body = GoalListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "goals"
)]
pub async fn active_goals(
    State(db): State<Database>,
    user: AuthUser,
) -> Result<Response, WebError> {
    let goals = services::active_goals(db.pool(), &user.user_id).await?;

    Ok(Json(GoalListResponse::new(goals)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/goals",
    request_body = CreateGoalRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Goal created", body = GoalEnvelope),
        (status = 400, description = "Validation error or unknown exercise", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "goals"
)]
pub async fn create_goal(
    State(db): State<Database>,
    user: AuthUser,
    ApiJson(req): ApiJson<CreateGoalRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let goal = services::create_goal(db.pool(), &user.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(GoalEnvelope::new(goal))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/goals/{id}",
    params(
        ("id" = String, Path, description = "Goal ID")
    ),
    request_body = UpdateGoalRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Goal updated and its status re-evaluated", body = GoalEnvelope),
        (status = 400, description = "Validation error or malformed ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Goal not found", body = ErrorResponse),
        (status = 409, description = "Goal was modified since it was read", body = ErrorResponse)
    ),
    tag = "goals"
)]
pub async fn update_goal(
    State(db): State<Database>,
    user: AuthUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateGoalRequest>,
) -> Result<Response, WebError> {
    let goal_id = parse_id(&id, "goal")?;
    req.validate()?;

    let goal = services::update_goal(db.pool(), &user.user_id, goal_id, &req).await?;

    Ok(Json(GoalEnvelope::new(goal)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/goals/{id}",
    params(
        ("id" = String, Path, description = "Goal ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Goal deleted", body = SuccessResponse),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Goal not found", body = ErrorResponse)
    ),
    tag = "goals"
)]
pub async fn delete_goal(
    State(db): State<Database>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let goal_id = parse_id(&id, "goal")?;

    services::delete_goal(db.pool(), &user.user_id, goal_id).await?;

    Ok(Json(SuccessResponse::ok()).into_response())
}
