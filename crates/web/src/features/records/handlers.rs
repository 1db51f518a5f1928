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
        record::{
            CreateRecordRequest, RecordAdmission, RecordAdmissionResponse, RecordListResponse,
        },
    },
};
use validator::Validate;

use crate::error::WebError;
use crate::extract::{ApiJson, parse_id};
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/records",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Personal records, newest first", body = RecordListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "records"
)]
pub async fn list_records(
    State(db): State<Database>,
    user: AuthUser,
) -> Result<Response, WebError> {
    let records = services::list_records(db.pool(), &user.user_id).await?;

    Ok(Json(RecordListResponse::new(records)).into_response())
}

/// A record that beats the stored best is created (201); one that does not
/// is answered with the current best (200, `is_personal_record: false`).
#[utoipa::path(
    post,
    path = "/api/records",
    request_body = CreateRecordRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "New personal record", body = RecordAdmissionResponse),
        (status = 200, description = "Not a personal record; the current best is returned", body = RecordAdmissionResponse),
        (status = 400, description = "Validation error or unknown exercise", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "records"
)]
pub async fn create_record(
    State(db): State<Database>,
    user: AuthUser,
    ApiJson(req): ApiJson<CreateRecordRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let admission = services::submit_record(db.pool(), &user.user_id, &req).await?;
    let status = match admission {
        RecordAdmission::Admitted(_) => StatusCode::CREATED,
        RecordAdmission::Rejected(_) => StatusCode::OK,
    };

    Ok((status, Json(RecordAdmissionResponse::from(admission))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/records/{id}",
    params(
        ("id" = String, Path, description = "Record ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Record deleted", body = SuccessResponse),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Record not found", body = ErrorResponse)
    ),
    tag = "records"
)]
pub async fn delete_record(
    State(db): State<Database>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let record_id = parse_id(&id, "record")?;

    services::delete_record(db.pool(), &user.user_id, record_id).await?;

    Ok(Json(SuccessResponse::ok()).into_response())
}
