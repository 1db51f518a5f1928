use chrono::NaiveDate;
use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::models::{Goal, GoalStatus};

/// Percentage of the way from `start` to `target`, clamped to `[0, 100]`.
///
/// A goal whose target equals its start value has no interval to cover: it is
/// complete once `current` reaches the target and untouched otherwise.
pub fn goal_progress(start: Decimal, current: Decimal, target: Decimal) -> f64 {
    if target == start {
        return if current >= target { 100.0 } else { 0.0 };
    }
    let Some(span) = target.checked_sub(start) else {
        return approximate_progress(start, current, target).clamp(0.0, 100.0);
    };

    let ratio = current
        .checked_sub(start)
        .and_then(|gained| gained.checked_div(span))
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|pct| pct.to_f64())
        .unwrap_or_else(|| approximate_progress(start, current, target));

    ratio.clamp(0.0, 100.0)
}

/// Ratios past `Decimal`'s range. Only the sign and magnitude matter once
/// the result is clamped.
fn approximate_progress(start: Decimal, current: Decimal, target: Decimal) -> f64 {
    let as_f64 = |value: Decimal| value.to_f64().unwrap_or(0.0);
    let span = as_f64(target) - as_f64(start);
    if span == 0.0 {
        return 0.0;
    }

    (as_f64(current) - as_f64(start)) / span * 100.0
}

/// Status a goal should carry after its values change.
pub fn evaluate_status(
    start: Decimal,
    current: Decimal,
    target: Decimal,
    deadline: Option<NaiveDate>,
    today: NaiveDate,
) -> GoalStatus {
    if goal_progress(start, current, target) >= 100.0 {
        GoalStatus::Achieved
    } else if deadline.is_some_and(|d| d < today) {
        GoalStatus::Missed
    } else {
        GoalStatus::InProgress
    }
}

impl Goal {
    pub fn progress(&self) -> f64 {
        goal_progress(self.start_value, self.current_value, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(value: i64) -> Decimal {
        Decimal::from(value)
    }

    #[test]
    fn progress_is_linear_between_start_and_target() {
        assert_eq!(goal_progress(d(100), d(110), d(120)), 50.0);
        assert_eq!(goal_progress(d(100), d(100), d(120)), 0.0);
        assert_eq!(goal_progress(d(100), d(120), d(120)), 100.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(goal_progress(d(100), d(90), d(120)), 0.0);
        assert_eq!(goal_progress(d(100), d(150), d(120)), 100.0);
    }

    #[test]
    fn progress_works_for_decreasing_targets() {
        // e.g. a 5k time going from 30 to 25 minutes
        assert_eq!(goal_progress(d(30), d(28), d(25)), 40.0);
        assert_eq!(goal_progress(d(30), d(31), d(25)), 0.0);
    }

    #[test]
    fn progress_stays_in_bounds_for_many_combinations() {
        for start in [-50, 0, 10, 99] {
            for target in [-20, 1, 60, 250] {
                if start == target {
                    continue;
                }
                for current in [-1000, -5, 0, 42, 500, 10_000] {
                    let p = goal_progress(d(start), d(current), d(target));
                    assert!((0.0..=100.0).contains(&p), "{start} {current} {target} -> {p}");
                }
            }
        }
    }

    #[test]
    fn ratios_beyond_decimal_range_saturate() {
        let huge = Decimal::from_i128_with_scale(10i128.pow(26), 0);
        let cent = Decimal::new(1, 2);
        let tiny = Decimal::new(1, 22);

        assert_eq!(goal_progress(Decimal::ZERO, huge, cent), 100.0);
        assert_eq!(goal_progress(Decimal::ZERO, d(10_000_000), tiny), 100.0);
        // decreasing by a tiny step, but moved the wrong way by a lot
        assert_eq!(goal_progress(Decimal::new(2, 22), d(10_000_000), tiny), 0.0);

        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(
            evaluate_status(Decimal::ZERO, huge, cent, None, today),
            GoalStatus::Achieved
        );
    }

    #[test]
    fn equal_start_and_target_is_all_or_nothing() {
        assert_eq!(goal_progress(d(80), d(80), d(80)), 100.0);
        assert_eq!(goal_progress(d(80), d(95), d(80)), 100.0);
        assert_eq!(goal_progress(d(80), d(79), d(80)), 0.0);
    }

    #[test]
    fn status_follows_progress_then_deadline() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let yesterday = today.pred_opt();

        assert_eq!(
            evaluate_status(d(100), d(120), d(120), yesterday, today),
            GoalStatus::Achieved
        );
        assert_eq!(
            evaluate_status(d(100), d(110), d(120), yesterday, today),
            GoalStatus::Missed
        );
        assert_eq!(
            evaluate_status(d(100), d(110), d(120), Some(today), today),
            GoalStatus::InProgress
        );
        assert_eq!(
            evaluate_status(d(100), d(110), d(120), None, today),
            GoalStatus::InProgress
        );
    }
}
