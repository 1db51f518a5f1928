use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{positive, to_f64};
use crate::models::BodyMetric;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProgressPhotos {
    #[validate(url, length(max = 2048))]
    pub front: Option<String>,
    #[validate(url, length(max = 2048))]
    pub back: Option<String>,
    #[validate(url, length(max = 2048))]
    pub side: Option<String>,
}

/// One body-weight entry per calendar day
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct MetricRequest {
    pub date: NaiveDate,

    #[validate(custom(function = "positive"))]
    #[schema(value_type = f64)]
    pub weight: Decimal,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,

    #[validate(nested)]
    pub photos: Option<ProgressPhotos>,
}

impl MetricRequest {
    pub fn photos(&self) -> ProgressPhotos {
        self.photos.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MetricResponse {
    pub metric_id: Uuid,
    pub date: NaiveDate,
    pub weight: f64,
    pub notes: Option<String>,
    pub photos: ProgressPhotos,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BodyMetric> for MetricResponse {
    fn from(metric: BodyMetric) -> Self {
        Self {
            metric_id: metric.metric_id,
            date: metric.date,
            weight: to_f64(metric.weight),
            notes: metric.notes,
            photos: ProgressPhotos {
                front: metric.photo_front,
                back: metric.photo_back,
                side: metric.photo_side,
            },
            created_at: metric.created_at,
            updated_at: metric.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MetricEnvelope {
    pub success: bool,
    pub metric: MetricResponse,
}

impl MetricEnvelope {
    pub fn new(metric: BodyMetric) -> Self {
        Self {
            success: true,
            metric: metric.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MetricListResponse {
    pub success: bool,
    pub metrics: Vec<MetricResponse>,
}

impl MetricListResponse {
    pub fn new(metrics: Vec<BodyMetric>) -> Self {
        Self {
            success: true,
            metrics: metrics.into_iter().map(Into::into).collect(),
        }
    }
}
