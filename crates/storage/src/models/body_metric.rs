use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BodyMetric {
    pub metric_id: Uuid,
    pub user_id: String,
    pub date: NaiveDate,
    pub weight: Decimal,
    pub notes: Option<String>,
    pub photo_front: Option<String>,
    pub photo_back: Option<String>,
    pub photo_side: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
