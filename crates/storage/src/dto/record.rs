use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{flexible_datetime, not_blank, positive, to_f64};
use crate::models::{PersonalRecord, RecordType};

/// Candidate personal record. It is stored only when it beats the current
/// best for the same exercise and record type.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecordRequest {
    pub exercise_id: Uuid,
    pub record_type: RecordType,

    #[validate(custom(function = "positive"))]
    #[schema(value_type = f64)]
    pub value: Decimal,

    #[validate(length(min = 1, max = 20, message = "Unit is required"))]
    #[validate(custom(function = "not_blank"))]
    pub unit: String,

    /// Defaults to now
    #[serde(default, deserialize_with = "flexible_datetime::option")]
    pub date: Option<DateTime<Utc>>,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonalRecordResponse {
    pub record_id: Uuid,
    pub exercise_id: Uuid,
    pub exercise_name: String,
    pub record_type: RecordType,
    pub value: f64,
    pub unit: String,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PersonalRecord> for PersonalRecordResponse {
    fn from(record: PersonalRecord) -> Self {
        Self {
            record_id: record.record_id,
            exercise_id: record.exercise_id,
            exercise_name: record.exercise_name,
            record_type: record.record_type,
            value: to_f64(record.value),
            unit: record.unit,
            date: record.date,
            notes: record.notes,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Outcome of submitting a candidate record
#[derive(Debug, Clone)]
pub enum RecordAdmission {
    Admitted(PersonalRecord),
    /// The stored best, which the candidate did not beat
    Rejected(PersonalRecord),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecordAdmissionResponse {
    pub success: bool,
    pub is_personal_record: bool,
    pub record: PersonalRecordResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<RecordAdmission> for RecordAdmissionResponse {
    fn from(admission: RecordAdmission) -> Self {
        match admission {
            RecordAdmission::Admitted(record) => Self {
                success: true,
                is_personal_record: true,
                record: record.into(),
                message: None,
            },
            RecordAdmission::Rejected(record) => Self {
                success: true,
                is_personal_record: false,
                record: record.into(),
                message: Some("Not a personal record".to_string()),
            },
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecordListResponse {
    pub success: bool,
    pub records: Vec<PersonalRecordResponse>,
}

impl RecordListResponse {
    pub fn new(records: Vec<PersonalRecord>) -> Self {
        Self {
            success: true,
            records: records.into_iter().map(Into::into).collect(),
        }
    }
}
