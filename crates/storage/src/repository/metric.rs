use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::metric::MetricRequest;
use crate::error::{Result, StorageError};
use crate::models::BodyMetric;

const COLUMNS: &str = "metric_id, user_id, date, weight, notes, photo_front, photo_back, \
                       photo_side, created_at, updated_at";

const DUPLICATE_DATE: &str = "A metric for this date already exists";

pub struct MetricRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MetricRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Newest first
    pub async fn list(&self, user_id: &str) -> Result<Vec<BodyMetric>> {
        let sql = format!("SELECT {COLUMNS} FROM body_metrics WHERE user_id = $1 ORDER BY date DESC");
        let metrics = sqlx::query_as::<_, BodyMetric>(&sql)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        Ok(metrics)
    }

    pub async fn create(&self, user_id: &str, request: &MetricRequest) -> Result<BodyMetric> {
        let photos = request.photos();
        let sql = format!(
            "INSERT INTO body_metrics ({COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BodyMetric>(&sql)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(request.date)
            .bind(request.weight)
            .bind(request.notes.as_deref())
            .bind(photos.front)
            .bind(photos.back)
            .bind(photos.side)
            .bind(Utc::now())
            .fetch_one(self.pool)
            .await
            .map_err(|e| StorageError::from(e).on_unique(DUPLICATE_DATE))
    }

    pub async fn update(
        &self,
        user_id: &str,
        metric_id: Uuid,
        request: &MetricRequest,
    ) -> Result<BodyMetric> {
        let photos = request.photos();
        let sql = format!(
            "UPDATE body_metrics \
             SET date = $3, weight = $4, notes = $5, photo_front = $6, photo_back = $7, \
                 photo_side = $8, updated_at = $9 \
             WHERE metric_id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BodyMetric>(&sql)
            .bind(metric_id)
            .bind(user_id)
            .bind(request.date)
            .bind(request.weight)
            .bind(request.notes.as_deref())
            .bind(photos.front)
            .bind(photos.back)
            .bind(photos.side)
            .bind(Utc::now())
            .fetch_optional(self.pool)
            .await
            .map_err(|e| StorageError::from(e).on_unique(DUPLICATE_DATE))?
            .ok_or(StorageError::NotFound("Metric"))
    }

    pub async fn delete(&self, user_id: &str, metric_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM body_metrics WHERE metric_id = $1 AND user_id = $2")
            .bind(metric_id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("Metric"));
        }

        Ok(())
    }
}
