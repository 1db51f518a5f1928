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
        template::{CreateTemplateRequest, TemplateEnvelope, TemplateListResponse},
    },
};
use validator::Validate;

use crate::error::WebError;
use crate::extract::{ApiJson, parse_id};
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/templates",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Templates, most recently used first", body = TemplateListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "templates"
)]
pub async fn list_templates(
    State(db): State<Database>,
    user: AuthUser,
) -> Result<Response, WebError> {
    let templates = services::list_templates(db.pool(), &user.user_id).await?;

    Ok(Json(TemplateListResponse::new(templates)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/templates",
    request_body = CreateTemplateRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Template created", body = TemplateEnvelope),
        (status = 400, description = "Validation error, duplicate name or unknown reference", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "templates"
)]
pub async fn create_template(
    State(db): State<Database>,
    user: AuthUser,
    ApiJson(req): ApiJson<CreateTemplateRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let template = services::create_template(db.pool(), &user.user_id, req).await?;

    Ok((StatusCode::CREATED, Json(TemplateEnvelope::new(template))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/templates/{id}/use",
    params(
        ("id" = String, Path, description = "Template ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Template stamped as used now", body = TemplateEnvelope),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Template not found", body = ErrorResponse)
    ),
    tag = "templates"
)]
pub async fn use_template(
    State(db): State<Database>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let template_id = parse_id(&id, "template")?;

    let template = services::use_template(db.pool(), &user.user_id, template_id).await?;

    Ok(Json(TemplateEnvelope::new(template)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/templates/{id}",
    params(
        ("id" = String, Path, description = "Template ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Template deleted", body = SuccessResponse),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Template not found", body = ErrorResponse)
    ),
    tag = "templates"
)]
pub async fn delete_template(
    State(db): State<Database>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let template_id = parse_id(&id, "template")?;

    services::delete_template(db.pool(), &user.user_id, template_id).await?;

    Ok(Json(SuccessResponse::ok()).into_response())
}
