use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    Weight,
    Reps,
    Time,
    Distance,
}

text_enum!(RecordType, "record type", {
    Weight => "weight",
    Reps => "reps",
    Time => "time",
    Distance => "distance",
});

/// Best value for one (user, exercise, record type). The table holds at most
/// one row per key; a new value replaces the old one only when it is higher.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonalRecord {
    pub record_id: Uuid,
    pub user_id: String,
    pub exercise_id: Uuid,
    pub exercise_name: String,
    #[sqlx(try_from = "String")]
    pub record_type: RecordType,
    pub value: Decimal,
    pub unit: String,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
