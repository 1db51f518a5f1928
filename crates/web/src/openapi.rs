use utoipa::OpenApi;

use crate::features::{
    achievements, exercises, goals, metrics, records, templates, workout_days, workouts,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        workout_days::handlers::list_workout_days,
        workout_days::handlers::create_workout_day,
        workout_days::handlers::update_workout_day,
        workout_days::handlers::delete_workout_day,
        exercises::handlers::list_exercises,
        exercises::handlers::create_exercise,
        exercises::handlers::update_exercise,
        exercises::handlers::delete_exercise,
        exercises::handlers::exercise_progress,
        workouts::handlers::list_workouts,
        workouts::handlers::get_workout,
        workouts::handlers::create_workout,
        workouts::handlers::update_workout,
        workouts::handlers::delete_workout,
        workouts::handlers::recent_workouts,
        workouts::handlers::workout_history,
        workouts::handlers::workout_stats,
        workouts::handlers::workout_progress,
        goals::handlers::list_goals,
        goals::handlers::active_goals,
        goals::handlers::create_goal,
        goals::handlers::update_goal,
        goals::handlers::delete_goal,
        records::handlers::list_records,
        records::handlers::create_record,
        records::handlers::delete_record,
        metrics::handlers::list_metrics,
        metrics::handlers::create_metric,
        metrics::handlers::update_metric,
        metrics::handlers::delete_metric,
        achievements::handlers::list_achievements,
        achievements::handlers::create_achievement,
        templates::handlers::list_templates,
        templates::handlers::create_template,
        templates::handlers::use_template,
        templates::handlers::delete_template,
    ),
    components(
        schemas(
            storage::dto::common::ErrorResponse,
            storage::dto::common::SuccessResponse,
            storage::dto::common::PaginationMeta,
            storage::dto::workout_day::WorkoutDayRequest,
            storage::dto::workout_day::WorkoutDayResponse,
            storage::dto::workout_day::WorkoutDayEnvelope,
            storage::dto::workout_day::WorkoutDayListResponse,
            storage::dto::exercise::ExerciseRequest,
            storage::dto::exercise::ExerciseResponse,
            storage::dto::exercise::ExerciseEnvelope,
            storage::dto::exercise::ExerciseListResponse,
            storage::dto::workout::SetRequest,
            storage::dto::workout::ExerciseLogRequest,
            storage::dto::workout::WorkoutRequest,
            storage::dto::workout::WorkoutResponse,
            storage::dto::workout::WorkoutEnvelope,
            storage::dto::workout::WorkoutPageResponse,
            storage::dto::workout::WorkoutListResponse,
            storage::dto::workout::RecentWorkout,
            storage::dto::workout::RecentWorkoutsResponse,
            storage::dto::progress::ProgressPoint,
            storage::dto::progress::ProgressResponse,
            storage::dto::progress::StatsResponse,
            storage::dto::goal::CreateGoalRequest,
            storage::dto::goal::UpdateGoalRequest,
            storage::dto::goal::GoalResponse,
            storage::dto::goal::GoalEnvelope,
            storage::dto::goal::GoalListResponse,
            storage::dto::record::CreateRecordRequest,
            storage::dto::record::PersonalRecordResponse,
            storage::dto::record::RecordAdmissionResponse,
            storage::dto::record::RecordListResponse,
            storage::dto::metric::ProgressPhotos,
            storage::dto::metric::MetricRequest,
            storage::dto::metric::MetricResponse,
            storage::dto::metric::MetricEnvelope,
            storage::dto::metric::MetricListResponse,
            storage::dto::achievement::CreateAchievementRequest,
            storage::dto::achievement::AchievementResponse,
            storage::dto::achievement::AchievementEnvelope,
            storage::dto::achievement::AchievementListResponse,
            storage::dto::template::TemplateSetRequest,
            storage::dto::template::TemplateExerciseRequest,
            storage::dto::template::CreateTemplateRequest,
            storage::dto::template::TemplateResponse,
            storage::dto::template::TemplateEnvelope,
            storage::dto::template::TemplateListResponse,
            storage::models::ExerciseLog,
            storage::models::SetEntry,
            storage::models::TemplateExercise,
            storage::models::TemplateSet,
            storage::models::GoalType,
            storage::models::GoalStatus,
            storage::models::RecordType,
            storage::models::AchievementKind,
            storage::services::stats::WorkoutStats,
        )
    ),
    tags(
        (name = "workout-days", description = "Named training days"),
        (name = "exercises", description = "Exercise catalogue and per-exercise progress"),
        (name = "workouts", description = "Logged sessions, history and statistics"),
        (name = "goals", description = "Goals and their progress"),
        (name = "records", description = "Personal records"),
        (name = "metrics", description = "Body weight and progress photos"),
        (name = "achievements", description = "Earned milestones"),
        (name = "templates", description = "Reusable workout plans"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_resource() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/workout-days",
            "/api/exercises/progress",
            "/api/workouts/{id}",
            "/api/workouts/stats",
            "/api/goals/active",
            "/api/records",
            "/api/metrics/{id}",
            "/api/achievements",
            "/api/templates/{id}/use",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
