use chrono::Utc;
use sqlx::{PgPool, types::Json};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{TemplateExercise, WorkoutDay, WorkoutTemplate};

const COLUMNS: &str = "template_id, user_id, template_name, workout_day_id, workout_day_name, \
                       exercises, last_used, created_at, updated_at";

pub struct TemplateRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TemplateRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Most recently used first; never-used templates last
    pub async fn list(&self, user_id: &str) -> Result<Vec<WorkoutTemplate>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM workout_templates WHERE user_id = $1 \
             ORDER BY last_used DESC NULLS LAST, created_at DESC"
        );
        let templates = sqlx::query_as::<_, WorkoutTemplate>(&sql)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        Ok(templates)
    }

    pub async fn create(
        &self,
        user_id: &str,
        template_name: &str,
        workout_day: &WorkoutDay,
        exercises: &[TemplateExercise],
    ) -> Result<WorkoutTemplate> {
        let sql = format!(
            "INSERT INTO workout_templates ({COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, NULL, $7, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutTemplate>(&sql)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(template_name.trim())
            .bind(workout_day.workout_day_id)
            .bind(&workout_day.name)
            .bind(Json(exercises))
            .bind(Utc::now())
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                StorageError::from(e)
                    .on_unique("A template with this name already exists")
                    .on_missing_reference("Workout day not found")
            })
    }

    /// Stamp a template as used now
    pub async fn mark_used(&self, user_id: &str, template_id: Uuid) -> Result<WorkoutTemplate> {
        let now = Utc::now();
        let sql = format!(
            "UPDATE workout_templates SET last_used = $3, updated_at = $3 \
             WHERE template_id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutTemplate>(&sql)
            .bind(template_id)
            .bind(user_id)
            .bind(now)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound("Template"))
    }

    pub async fn delete(&self, user_id: &str, template_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM workout_templates WHERE template_id = $1 AND user_id = $2")
            .bind(template_id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("Template"));
        }

        Ok(())
    }
}
