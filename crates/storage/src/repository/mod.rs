pub mod achievement;
pub mod exercise;
pub mod goal;
pub mod metric;
pub mod record;
pub mod template;
pub mod workout;
pub mod workout_day;

pub use achievement::AchievementRepository;
pub use exercise::ExerciseRepository;
pub use goal::GoalRepository;
pub use metric::MetricRepository;
pub use record::RecordRepository;
pub use template::TemplateRepository;
pub use workout::WorkoutRepository;
pub use workout_day::WorkoutDayRepository;
