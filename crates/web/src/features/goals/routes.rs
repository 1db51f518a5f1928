use axum::{
    Router, middleware,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{active_goals, create_goal, delete_goal, list_goals, update_goal};
use crate::middleware::auth::{SessionKeys, require_auth};

pub fn routes(keys: SessionKeys) -> Router<Database> {
    Router::new()
        .route("/", get(list_goals).post(create_goal))
        .route("/active", get(active_goals))
        .route("/:id", put(update_goal).delete(delete_goal))
        .route_layer(middleware::from_fn_with_state(keys, require_auth))
}
