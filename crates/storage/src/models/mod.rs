/// Enums persisted as snake_case TEXT columns guarded by CHECK constraints.
macro_rules! text_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($text => Ok($name::$variant),)+
                    other => Err($crate::models::UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::models::UnknownVariant;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod achievement;
mod body_metric;
mod exercise;
mod goal;
mod personal_record;
mod template;
mod workout;
mod workout_day;

pub use achievement::{Achievement, AchievementKind};
pub use body_metric::BodyMetric;
pub use exercise::Exercise;
pub use goal::{Goal, GoalStatus, GoalType};
pub use personal_record::{PersonalRecord, RecordType};
pub use template::{TemplateExercise, TemplateSet, WorkoutTemplate};
pub use workout::{ExerciseLog, SetEntry, Workout};
pub use workout_day::WorkoutDay;

/// Raised when a TEXT column holds a value outside its enum.
#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
