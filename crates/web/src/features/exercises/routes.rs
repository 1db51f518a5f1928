use axum::{
    Router, middleware,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{
    create_exercise, delete_exercise, exercise_progress, list_exercises, update_exercise,
};
use crate::middleware::auth::{SessionKeys, require_auth};

pub fn routes(keys: SessionKeys) -> Router<Database> {
    Router::new()
        .route("/", get(list_exercises).post(create_exercise))
        .route("/progress", get(exercise_progress))
        .route("/:id", put(update_exercise).delete(delete_exercise))
        .route_layer(middleware::from_fn_with_state(keys, require_auth))
}
