pub mod achievement;
pub mod common;
pub mod exercise;
pub mod goal;
pub mod metric;
pub mod progress;
pub mod record;
pub mod template;
pub mod workout;
pub mod workout_day;
