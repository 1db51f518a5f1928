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
        metric::{MetricEnvelope, MetricListResponse, MetricRequest},
    },
};
use validator::Validate;

use crate::error::WebError;
use crate::extract::{ApiJson, parse_id};
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/metrics",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Body metrics, newest first", body = MetricListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "metrics"
)]
pub async fn list_metrics(
    State(db): State<Database>,
    user: AuthUser,
) -> Result<Response, WebError> {
    let metrics = services::list_metrics(db.pool(), &user.user_id).await?;

    Ok(Json(MetricListResponse::new(metrics)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/metrics",
    request_body = MetricRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Metric recorded", body = MetricEnvelope),
        (status = 400, description = "Validation error or a metric already exists for the date", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "metrics"
)]
pub async fn create_metric(
    State(db): State<Database>,
    user: AuthUser,
    ApiJson(req): ApiJson<MetricRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let metric = services::create_metric(db.pool(), &user.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(MetricEnvelope::new(metric))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/metrics/{id}",
    params(
        ("id" = String, Path, description = "Metric ID")
    ),
    request_body = MetricRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Metric updated", body = MetricEnvelope),
        (status = 400, description = "Validation error, malformed ID or duplicate date", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Metric not found", body = ErrorResponse)
    ),
    tag = "metrics"
)]
pub async fn update_metric(
    State(db): State<Database>,
    user: AuthUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<MetricRequest>,
) -> Result<Response, WebError> {
    let metric_id = parse_id(&id, "metric")?;
    req.validate()?;

    let metric = services::update_metric(db.pool(), &user.user_id, metric_id, &req).await?;

    Ok(Json(MetricEnvelope::new(metric)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/metrics/{id}",
    params(
        ("id" = String, Path, description = "Metric ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Metric deleted", body = SuccessResponse),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Metric not found", body = ErrorResponse)
    ),
    tag = "metrics"
)]
pub async fn delete_metric(
    State(db): State<Database>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let metric_id = parse_id(&id, "metric")?;

    services::delete_metric(db.pool(), &user.user_id, metric_id).await?;

    Ok(Json(SuccessResponse::ok()).into_response())
}
