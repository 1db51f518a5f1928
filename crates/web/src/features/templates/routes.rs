use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{create_template, delete_template, list_templates, use_template};
use crate::middleware::auth::{SessionKeys, require_auth};

pub fn routes(keys: SessionKeys) -> Router<Database> {
    Router::new()
        .route("/", get(list_templates).post(create_template))
        .route("/:id/use", post(use_template))
        .route("/:id", delete(delete_template))
        .route_layer(middleware::from_fn_with_state(keys, require_auth))
}
