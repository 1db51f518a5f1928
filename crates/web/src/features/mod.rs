pub mod achievements;
pub mod exercises;
pub mod goals;
pub mod metrics;
pub mod records;
pub mod templates;
pub mod workout_days;
pub mod workouts;
