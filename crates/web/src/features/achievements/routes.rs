use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::{create_achievement, list_achievements};
use crate::middleware::auth::{SessionKeys, require_auth};

pub fn routes(keys: SessionKeys) -> Router<Database> {
    Router::new()
        .route("/", get(list_achievements).post(create_achievement))
        .route_layer(middleware::from_fn_with_state(keys, require_auth))
}
