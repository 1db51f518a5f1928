use axum::{
    Router, middleware,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{
    create_workout_day, delete_workout_day, list_workout_days, update_workout_day,
};
use crate::middleware::auth::{SessionKeys, require_auth};

pub fn routes(keys: SessionKeys) -> Router<Database> {
    Router::new()
        .route("/", get(list_workout_days).post(create_workout_day))
        .route("/:id", put(update_workout_day).delete(delete_workout_day))
        .route_layer(middleware::from_fn_with_state(keys, require_auth))
}
