use axum::{
    Router, middleware,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{create_metric, delete_metric, list_metrics, update_metric};
use crate::middleware::auth::{SessionKeys, require_auth};

pub fn routes(keys: SessionKeys) -> Router<Database> {
    Router::new()
        .route("/", get(list_metrics).post(create_metric))
        .route("/:id", put(update_metric).delete(delete_metric))
        .route_layer(middleware::from_fn_with_state(keys, require_auth))
}
