use std::time::Duration;

use axum::{Router, http::HeaderValue};
use storage::Database;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod extract;
pub mod features;
pub mod middleware;
pub mod openapi;

use features::{achievements, exercises, goals, metrics, records, templates, workout_days, workouts};
use middleware::auth::SessionKeys;
use openapi::ApiDoc;

/// The whole HTTP surface: every `/api` resource behind the session gate,
/// plus the OpenAPI document and Swagger UI.
pub fn app(db: Database, keys: SessionKeys) -> Router {
    Router::new()
        .nest("/api/workout-days", workout_days::routes::routes(keys.clone()))
        .nest("/api/exercises", exercises::routes::routes(keys.clone()))
        .nest("/api/workouts", workouts::routes::routes(keys.clone()))
        .nest("/api/goals", goals::routes::routes(keys.clone()))
        .nest("/api/records", records::routes::routes(keys.clone()))
        .nest("/api/metrics", metrics::routes::routes(keys.clone()))
        .nest("/api/achievements", achievements::routes::routes(keys.clone()))
        .nest("/api/templates", templates::routes::routes(keys))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

/// Any origin when `origins` is empty, otherwise exactly the listed ones.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}
