use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::SetEntry;
use crate::services::stats::WorkoutStats;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProgressQuery {
    /// Exercise id, or its exact name as logged
    pub exercise_id: Option<String>,
    /// One of 1m, 3m, 6m, 1y; anything else means all time
    pub time_range: Option<String>,
}

impl ProgressQuery {
    /// The reference exactly as sent; names are matched verbatim.
    pub fn exercise_reference(&self) -> Result<&str, String> {
        self.exercise_id
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .ok_or_else(|| "Exercise ID is required".to_string())
    }
}

/// One workout's worth of a single exercise
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProgressPoint {
    pub date: NaiveDate,
    pub max_weight: f64,
    pub total_volume: f64,
    pub sets: Vec<SetEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProgressResponse {
    pub success: bool,
    pub data: Vec<ProgressPoint>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub success: bool,
    pub data: WorkoutStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::progress::ExerciseSelector;

    fn query(exercise_id: Option<&str>) -> ProgressQuery {
        ProgressQuery {
            exercise_id: exercise_id.map(String::from),
            time_range: None,
        }
    }

    #[test]
    fn missing_or_blank_reference_is_required() {
        for reference in [None, Some(""), Some("   ")] {
            assert_eq!(
                query(reference).exercise_reference().unwrap_err(),
                "Exercise ID is required"
            );
        }
    }

    #[test]
    fn names_are_passed_through_untrimmed() {
        let q = query(Some(" Bench Press "));
        let reference = q.exercise_reference().unwrap();
        assert_eq!(reference, " Bench Press ");
        assert_eq!(
            ExerciseSelector::parse(reference),
            ExerciseSelector::Name(" Bench Press ".to_string())
        );
    }
}
