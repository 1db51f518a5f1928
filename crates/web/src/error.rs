use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use storage::{dto::common::ErrorResponse, error::StorageError};
use validator::{ValidationErrors, ValidationErrorsKind};

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
    Unauthorized,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized"),
        }
    }
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Storage(StorageError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::BAD_REQUEST,
            Self::Storage(StorageError::InvalidReference(_)) => StatusCode::BAD_REQUEST,
            Self::Storage(StorageError::StaleWrite(_)) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    fn body(&self) -> ErrorResponse {
        let (error, details) = match self {
            Self::Storage(StorageError::NotFound(resource)) => (format!("{resource} not found"), None),
            Self::Storage(
                StorageError::ConstraintViolation(msg)
                | StorageError::InvalidReference(msg)
                | StorageError::StaleWrite(msg),
            ) => (msg.clone(), None),
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                ("An internal error occurred".to_string(), None)
            }
            Self::Validation(errors) => (
                "Validation failed".to_string(),
                Some(validation_details(errors, "")),
            ),
            Self::BadRequest(msg) => (msg.clone(), None),
            Self::Unauthorized => ("Unauthorized".to_string(), None),
        };

        ErrorResponse {
            success: false,
            error,
            details,
        }
    }
}

/// Flatten nested validation errors into `path: message` lines, e.g.
/// `exercises[0].sets[1].weight: Weight must be between 0 and 10000`.
fn validation_details(errors: &ValidationErrors, prefix: &str) -> Vec<String> {
    let mut details = Vec::new();

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                details.extend(field_errors.iter().map(|e| {
                    format!(
                        "{}: {}",
                        path,
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    )
                }));
            }
            ValidationErrorsKind::Struct(nested) => {
                details.extend(validation_details(nested, &path));
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    details.extend(validation_details(nested, &format!("{path}[{index}]")));
                }
            }
        }
    }

    details.sort();
    details
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for WebError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_map_to_statuses() {
        let cases = [
            (StorageError::NotFound("Goal"), StatusCode::NOT_FOUND),
            (
                StorageError::ConstraintViolation("dup".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                StorageError::InvalidReference("Exercise not found".into()),
                StatusCode::BAD_REQUEST,
            ),
            (StorageError::StaleWrite("stale".into()), StatusCode::CONFLICT),
            (
                StorageError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(WebError::from(error).status(), status);
        }
    }

    #[test]
    fn not_found_names_the_resource() {
        let body = WebError::from(StorageError::NotFound("Workout day")).body();
        assert!(!body.success);
        assert_eq!(body.error, "Workout day not found");
        assert!(body.details.is_none());
    }

    #[test]
    fn internal_errors_are_not_leaked() {
        let body = WebError::from(StorageError::Database(sqlx::Error::PoolTimedOut)).body();
        assert_eq!(body.error, "An internal error occurred");
    }
}
