use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        achievement::{AchievementEnvelope, AchievementListResponse, CreateAchievementRequest},
        common::ErrorResponse,
    },
};
use validator::Validate;

use crate::error::WebError;
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/achievements",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Earned achievements, newest first", body = AchievementListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "achievements"
)]
pub async fn list_achievements(
    State(db): State<Database>,
    user: AuthUser,
) -> Result<Response, WebError> {
    let achievements = services::list_achievements(db.pool(), &user.user_id).await?;

    Ok(Json(AchievementListResponse::new(achievements)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/achievements",
    request_body = CreateAchievementRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Achievement recorded", body = AchievementEnvelope),
        (status = 400, description = "Validation error, unknown exercise or first workout already earned", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "achievements"
)]
pub async fn create_achievement(
    State(db): State<Database>,
    user: AuthUser,
    ApiJson(req): ApiJson<CreateAchievementRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let achievement = services::create_achievement(db.pool(), &user.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(AchievementEnvelope::new(achievement))).into_response())
}
