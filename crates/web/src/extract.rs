use axum::extract::{FromRequest, FromRequestParts};
use uuid::Uuid;

use crate::error::WebError;

/// `axum::Json` whose rejections come back in the error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(WebError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` whose rejections come back in the error envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(WebError))]
pub struct ApiQuery<T>(pub T);

/// Parse a path identifier, e.g. `parse_id(raw, "workout day")`.
pub fn parse_id(raw: &str, resource: &str) -> Result<Uuid, WebError> {
    Uuid::parse_str(raw).map_err(|_| WebError::BadRequest(format!("Invalid {resource} ID format")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_ids_name_the_resource() {
        let err = parse_id("42", "workout day").unwrap_err();
        assert!(matches!(err, WebError::BadRequest(msg) if msg == "Invalid workout day ID format"));
    }

    #[test]
    fn well_formed_ids_parse() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "goal").unwrap(), id);
    }
}
