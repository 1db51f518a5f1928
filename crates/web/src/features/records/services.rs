use sqlx::PgPool;
use storage::{
    dto::record::{CreateRecordRequest, RecordAdmission},
    error::Result,
    models::PersonalRecord,
    repository::{ExerciseRepository, RecordRepository},
};
use uuid::Uuid;

pub async fn list_records(pool: &PgPool, user_id: &str) -> Result<Vec<PersonalRecord>> {
    RecordRepository::new(pool).list(user_id).await
}

pub async fn submit_record(
    pool: &PgPool,
    user_id: &str,
    request: &CreateRecordRequest,
) -> Result<RecordAdmission> {
    let exercise = ExerciseRepository::new(pool)
        .find_referenced(user_id, request.exercise_id)
        .await?;

    let admission = RecordRepository::new(pool)
        .admit(user_id, &exercise, request)
        .await?;

    if let RecordAdmission::Admitted(record) = &admission {
        tracing::info!(
            exercise = %record.exercise_name,
            record_type = %record.record_type,
            value = %record.value,
            "New personal record"
        );
    }

    Ok(admission)
}

pub async fn delete_record(pool: &PgPool, user_id: &str, record_id: Uuid) -> Result<()> {
    RecordRepository::new(pool).delete(user_id, record_id).await
}
