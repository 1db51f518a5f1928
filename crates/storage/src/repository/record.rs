use chrono::Utc;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use super::goal::raise_weight_goals;
use crate::dto::record::{CreateRecordRequest, RecordAdmission};
use crate::error::{Result, StorageError};
use crate::models::{Exercise, PersonalRecord, RecordType};

const COLUMNS: &str = "record_id, user_id, exercise_id, exercise_name, record_type, value, \
                       unit, date, notes, created_at, updated_at";

pub struct RecordRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RecordRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Newest first
    pub async fn list(&self, user_id: &str) -> Result<Vec<PersonalRecord>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM personal_records WHERE user_id = $1 ORDER BY date DESC"
        );
        let records = sqlx::query_as::<_, PersonalRecord>(&sql)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        Ok(records)
    }

    pub async fn current_best(
        &self,
        user_id: &str,
        exercise_id: Uuid,
        record_type: RecordType,
    ) -> Result<Option<PersonalRecord>> {
        stored_best(self.pool, user_id, exercise_id, record_type).await
    }

    /// Submit a candidate record.
    ///
    /// The candidate replaces the stored best only when its value is strictly
    /// higher; the comparison and the write are one statement. An admitted
    /// weight record also raises the matching weight goals.
    pub async fn admit(
        &self,
        user_id: &str,
        exercise: &Exercise,
        request: &CreateRecordRequest,
    ) -> Result<RecordAdmission> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            "INSERT INTO personal_records ({COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10) \
             ON CONFLICT (user_id, exercise_id, record_type) DO UPDATE \
             SET exercise_name = EXCLUDED.exercise_name, value = EXCLUDED.value, \
                 unit = EXCLUDED.unit, date = EXCLUDED.date, notes = EXCLUDED.notes, \
                 updated_at = EXCLUDED.updated_at \
             WHERE personal_records.value < EXCLUDED.value \
             RETURNING {COLUMNS}"
        );
        let admitted = sqlx::query_as::<_, PersonalRecord>(&sql)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(exercise.exercise_id)
            .bind(&exercise.name)
            .bind(request.record_type.as_str())
            .bind(request.value)
            .bind(request.unit.trim())
            .bind(request.date.unwrap_or(now))
            .bind(request.notes.as_deref())
            .bind(now)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| StorageError::from(e).on_missing_reference("Exercise not found"))?;

        // A losing upsert still locks the stored row, so it is read before
        // the transaction ends.
        let Some(record) = admitted else {
            let best = stored_best(&mut *tx, user_id, exercise.exercise_id, request.record_type)
                .await?
                .ok_or(StorageError::NotFound("Personal record"))?;
            tx.rollback().await?;
            return Ok(RecordAdmission::Rejected(best));
        };

        if record.record_type == RecordType::Weight {
            raise_weight_goals(&mut tx, user_id, record.exercise_id, record.value, now).await?;
        }

        tx.commit().await?;
        Ok(RecordAdmission::Admitted(record))
    }

    pub async fn delete(&self, user_id: &str, record_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM personal_records WHERE record_id = $1 AND user_id = $2")
            .bind(record_id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("Personal record"));
        }

        Ok(())
    }
}

async fn stored_best<'e, E>(
    executor: E,
    user_id: &str,
    exercise_id: Uuid,
    record_type: RecordType,
) -> Result<Option<PersonalRecord>>
where
    E: PgExecutor<'e>,
{
    let sql = format!(
        "SELECT {COLUMNS} FROM personal_records \
         WHERE user_id = $1 AND exercise_id = $2 AND record_type = $3"
    );
    let record = sqlx::query_as::<_, PersonalRecord>(&sql)
        .bind(user_id)
        .bind(exercise_id)
        .bind(record_type.as_str())
        .fetch_optional(executor)
        .await?;

    Ok(record)
}
