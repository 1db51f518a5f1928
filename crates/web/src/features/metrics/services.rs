use sqlx::PgPool;
use storage::{
    dto::metric::MetricRequest, error::Result, models::BodyMetric, repository::MetricRepository,
};
use uuid::Uuid;

pub async fn list_metrics(pool: &PgPool, user_id: &str) -> Result<Vec<BodyMetric>> {
    MetricRepository::new(pool).list(user_id).await
}

pub async fn create_metric(
    pool: &PgPool,
    user_id: &str,
    request: &MetricRequest,
) -> Result<BodyMetric> {
    MetricRepository::new(pool).create(user_id, request).await
}

pub async fn update_metric(
    pool: &PgPool,
    user_id: &str,
    metric_id: Uuid,
    request: &MetricRequest,
) -> Result<BodyMetric> {
    MetricRepository::new(pool)
        .update(user_id, metric_id, request)
        .await
}

pub async fn delete_metric(pool: &PgPool, user_id: &str, metric_id: Uuid) -> Result<()> {
    MetricRepository::new(pool).delete(user_id, metric_id).await
}
