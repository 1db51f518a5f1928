use axum::{
    Router, middleware,
    routing::{delete, get},
};
use storage::Database;

use super::handlers::{create_record, delete_record, list_records};
use crate::middleware::auth::{SessionKeys, require_auth};

pub fn routes(keys: SessionKeys) -> Router<Database> {
    Router::new()
        .route("/", get(list_records).post(create_record))
        .route("/:id", delete(delete_record))
        .route_layer(middleware::from_fn_with_state(keys, require_auth))
}
