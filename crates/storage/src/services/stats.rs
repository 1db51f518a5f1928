use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct WorkoutStats {
    pub total_workouts: u32,
    pub current_streak: u32,
    pub this_week: u32,
    pub this_month: u32,
}

/// Summarise a user's workout dates. `dates` must be sorted newest first.
pub fn workout_stats(dates: &[DateTime<Utc>], now: DateTime<Utc>) -> WorkoutStats {
    let week_start = start_of_week(now);
    let month_start = start_of_month(now);

    let count_since = |from: DateTime<Utc>| dates.iter().filter(|d| **d >= from).count() as u32;

    WorkoutStats {
        total_workouts: dates.len() as u32,
        current_streak: current_streak(dates, start_of_day(now)),
        this_week: count_since(week_start),
        this_month: count_since(month_start),
    }
}

/// Walk backwards from `today` (midnight) through `dates` (newest first),
/// counting entries until two consecutive ones are more than one whole day
/// apart. A one-day gap does not break the streak.
pub fn current_streak(dates: &[DateTime<Utc>], today: DateTime<Utc>) -> u32 {
    let mut streak = 0;
    let mut last = today;

    for date in dates {
        let days = (last - *date).num_milliseconds().div_euclid(MILLIS_PER_DAY);
        if days > 1 {
            break;
        }
        streak += 1;
        last = *date;
    }

    streak
}

pub fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Weeks start on Sunday.
pub fn start_of_week(now: DateTime<Utc>) -> DateTime<Utc> {
    let back = i64::from(now.weekday().num_days_from_sunday());
    start_of_day(now) - Duration::days(back)
}

pub fn start_of_month(now: DateTime<Utc>) -> DateTime<Utc> {
    start_of_day(now) - Duration::days(i64::from(now.day0()))
}
