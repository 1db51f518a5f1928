use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::not_blank;
use crate::models::{TemplateExercise, TemplateSet, WorkoutTemplate};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TemplateSetRequest {
    #[serde(default)]
    #[validate(range(min = 0.0, max = 10000.0))]
    pub weight: f64,

    #[serde(default)]
    #[validate(range(max = 10000))]
    pub reps: u32,

    /// Defaults to "2"
    #[validate(length(max = 10))]
    pub rir: Option<String>,
}

impl From<TemplateSetRequest> for TemplateSet {
    fn from(set: TemplateSetRequest) -> Self {
        Self {
            weight: set.weight,
            reps: set.reps,
            rir: set.rir.unwrap_or_else(|| "2".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TemplateExerciseRequest {
    pub exercise_id: Uuid,

    #[serde(default)]
    #[validate(length(max = 50), nested)]
    pub default_sets: Vec<TemplateSetRequest>,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

impl TemplateExerciseRequest {
    pub fn into_exercise(self, exercise_name: String) -> TemplateExercise {
        TemplateExercise {
            exercise_id: self.exercise_id,
            exercise_name,
            default_sets: self.default_sets.into_iter().map(Into::into).collect(),
            notes: self.notes.filter(|n| !n.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTemplateRequest {
    #[validate(length(min = 1, max = 100, message = "Template name is required"))]
    #[validate(custom(function = "not_blank"))]
    pub template_name: String,

    pub workout_day_id: Uuid,

    #[validate(length(max = 50), nested)]
    pub exercises: Vec<TemplateExerciseRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TemplateResponse {
    pub template_id: Uuid,
    pub template_name: String,
    pub workout_day_id: Uuid,
    pub workout_day_name: String,
    pub exercises: Vec<TemplateExercise>,
    pub last_used: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<WorkoutTemplate> for TemplateResponse {
    fn from(template: WorkoutTemplate) -> Self {
        Self {
            template_id: template.template_id,
            template_name: template.template_name,
            workout_day_id: template.workout_day_id,
            workout_day_name: template.workout_day_name,
            exercises: template.exercises.0,
            last_used: template.last_used,
            created_at: template.created_at,
            updated_at: template.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TemplateEnvelope {
    pub success: bool,
    pub template: TemplateResponse,
}

impl TemplateEnvelope {
    pub fn new(template: WorkoutTemplate) -> Self {
        Self {
            success: true,
            template: template.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TemplateListResponse {
    pub success: bool,
    pub templates: Vec<TemplateResponse>,
}

impl TemplateListResponse {
    pub fn new(templates: Vec<WorkoutTemplate>) -> Self {
        Self {
            success: true,
            templates: templates.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_defaults_fill_in() {
        let req: CreateTemplateRequest = serde_json::from_value(serde_json::json!({
            "template_name": "Push A",
            "workout_day_id": "0b8f5f0c-8b0e-4a8c-9d57-2f3d1d3c6a11",
            "exercises": [{
                "exercise_id": "6f1c2a1e-2d7e-4c55-9a0e-3f1f5c1c9b10",
                "default_sets": [{ "reps": 8 }]
            }]
        }))
        .unwrap();
        assert!(req.validate().is_ok());

        let exercise = req
            .exercises
            .into_iter()
            .next()
            .unwrap()
            .into_exercise("Bench Press".into());
        assert_eq!(
            exercise.default_sets,
            vec![TemplateSet {
                weight: 0.0,
                reps: 8,
                rir: "2".into()
            }]
        );
    }

    #[test]
    fn blank_template_name_is_rejected() {
        let req = CreateTemplateRequest {
            template_name: "   ".into(),
            workout_day_id: Uuid::new_v4(),
            exercises: vec![],
        };
        assert!(req.validate().is_err());
    }
}
