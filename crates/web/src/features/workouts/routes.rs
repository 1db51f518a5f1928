use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::{
    create_workout, delete_workout, get_workout, list_workouts, recent_workouts, update_workout,
    workout_history, workout_progress, workout_stats,
};
use crate::middleware::auth::{SessionKeys, require_auth};

pub fn routes(keys: SessionKeys) -> Router<Database> {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route("/recent", get(recent_workouts))
        .route("/history", get(workout_history))
        .route("/stats", get(workout_stats))
        .route("/progress", get(workout_progress))
        .route(
            "/:id",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
        .route_layer(middleware::from_fn_with_state(keys, require_auth))
}
