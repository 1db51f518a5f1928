//! Repository tests against a real Postgres. Run with
//! `DATABASE_URL=postgres://... cargo test -p storage -- --ignored`.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use storage::{
    dto::{
        exercise::ExerciseRequest,
        goal::{CreateGoalRequest, UpdateGoalRequest},
        metric::MetricRequest,
        record::{CreateRecordRequest, RecordAdmission},
    },
    error::StorageError,
    models::{
        AchievementKind, Exercise, ExerciseLog, GoalStatus, GoalType, RecordType, SetEntry,
        WorkoutDay,
    },
    repository::{
        AchievementRepository, ExerciseRepository, GoalRepository, MetricRepository,
        RecordRepository, TemplateRepository, WorkoutDayRepository, WorkoutRepository,
        achievement::NewAchievement, workout::WorkoutDraft,
    },
};

const USER: &str = "user-1";
const OTHER: &str = "user-2";

async fn bench_press(pool: &PgPool, user_id: &str) -> Exercise {
    ExerciseRepository::new(pool)
        .create(
            user_id,
            &ExerciseRequest {
                name: "Bench Press".into(),
                category: Some("Chest".into()),
                workout_day_id: None,
                default_sets: Some(3),
                default_reps: Some(8),
                notes: None,
            },
        )
        .await
        .unwrap()
}

fn weight_goal(exercise: &Exercise, start: i64, current: i64, target: i64) -> CreateGoalRequest {
    CreateGoalRequest {
        exercise_id: exercise.exercise_id,
        goal_type: GoalType::Weight,
        target: Decimal::from(target),
        deadline: None,
        start_value: Some(Decimal::from(start)),
        current_value: Some(Decimal::from(current)),
    }
}

fn body_weight(date: NaiveDate, kg: i64) -> MetricRequest {
    MetricRequest {
        date,
        weight: Decimal::from(kg),
        notes: None,
        photos: None,
    }
}

fn draft<'d>(day: &'d WorkoutDay, exercise: &Exercise) -> WorkoutDraft<'d> {
    WorkoutDraft {
        workout_day: day,
        date: Utc::now(),
        notes: None,
        exercises: vec![ExerciseLog {
            exercise_id: exercise.exercise_id,
            exercise_name: exercise.name.clone(),
            sets: vec![SetEntry {
                weight: 60.0,
                reps: 8.0,
                rir: None,
                notes: None,
            }],
        }],
    }
}

fn weight_record(exercise: &Exercise, value: Decimal) -> CreateRecordRequest {
    CreateRecordRequest {
        exercise_id: exercise.exercise_id,
        record_type: RecordType::Weight,
        value,
        unit: "kg".into(),
        date: None,
        notes: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn workout_day_names_are_unique_per_user(pool: PgPool) {
    let repo = WorkoutDayRepository::new(&pool);

    repo.create(USER, "Push Day A").await.unwrap();
    let days = repo.list(USER).await.unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].name, "Push Day A");

    let err = repo.create(USER, "Push Day A").await.unwrap_err();
    assert!(matches!(
        err,
        StorageError::ConstraintViolation(ref msg) if msg == "A workout day with this name already exists"
    ));

    // same name, different owner
    repo.create(OTHER, "Push Day A").await.unwrap();
    assert_eq!(repo.list(USER).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn other_users_rows_are_not_found(pool: PgPool) {
    let repo = WorkoutDayRepository::new(&pool);
    let day = repo.create(USER, "Legs").await.unwrap();

    let err = repo.update(OTHER, day.workout_day_id, "Mine now").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound("Workout day")));

    let err = repo.delete(OTHER, day.workout_day_id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound("Workout day")));

    assert_eq!(repo.find(USER, day.workout_day_id).await.unwrap().name, "Legs");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn workout_day_delete_is_blocked_by_exercises(pool: PgPool) {
    let days = WorkoutDayRepository::new(&pool);
    let day = days.create(USER, "Pull").await.unwrap();

    ExerciseRepository::new(&pool)
        .create(
            USER,
            &ExerciseRequest {
                name: "Row".into(),
                category: None,
                workout_day_id: Some(day.workout_day_id),
                default_sets: None,
                default_reps: None,
                notes: None,
            },
        )
        .await
        .unwrap();

    let err = days.delete(USER, day.workout_day_id).await.unwrap_err();
    assert!(matches!(err, StorageError::ConstraintViolation(_)));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn records_are_admitted_only_when_strictly_higher(pool: PgPool) {
    let exercise = bench_press(&pool, USER).await;
    let repo = RecordRepository::new(&pool);

    let first = repo
        .admit(USER, &exercise, &weight_record(&exercise, Decimal::from(100)))
        .await
        .unwrap();
    assert!(matches!(first, RecordAdmission::Admitted(_)));

    let tie = repo
        .admit(USER, &exercise, &weight_record(&exercise, Decimal::from(100)))
        .await
        .unwrap();
    match tie {
        RecordAdmission::Rejected(best) => assert_eq!(best.value, Decimal::from(100)),
        RecordAdmission::Admitted(_) => panic!("a tie is not a personal record"),
    }

    let better = repo
        .admit(USER, &exercise, &weight_record(&exercise, Decimal::new(1001, 1)))
        .await
        .unwrap();
    match better {
        RecordAdmission::Admitted(record) => assert_eq!(record.value, Decimal::new(1001, 1)),
        RecordAdmission::Rejected(_) => panic!("100.1 beats 100"),
    }

    assert_eq!(repo.list(USER).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn weight_records_raise_and_complete_goals(pool: PgPool) {
    let exercise = bench_press(&pool, USER).await;
    let goals = GoalRepository::new(&pool);

    let goal = goals
        .create(
            USER,
            &exercise,
            &CreateGoalRequest {
                exercise_id: exercise.exercise_id,
                goal_type: GoalType::Weight,
                target: Decimal::from(100),
                deadline: None,
                start_value: Some(Decimal::from(80)),
                current_value: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(goal.status, GoalStatus::InProgress);

    RecordRepository::new(&pool)
        .admit(USER, &exercise, &weight_record(&exercise, Decimal::from(90)))
        .await
        .unwrap();
    let raised = goals.find(USER, goal.goal_id).await.unwrap();
    assert_eq!(raised.current_value, Decimal::from(90));
    assert_eq!(raised.status, GoalStatus::InProgress);
    assert_eq!(raised.progress(), 50.0);

    RecordRepository::new(&pool)
        .admit(USER, &exercise, &weight_record(&exercise, Decimal::from(102)))
        .await
        .unwrap();
    let done = goals.find(USER, goal.goal_id).await.unwrap();
    assert_eq!(done.status, GoalStatus::Achieved);
    assert!(done.achieved_date.is_some());

    let achievements = AchievementRepository::new(&pool).list(USER).await.unwrap();
    assert_eq!(achievements.len(), 1);
    assert_eq!(achievements[0].kind, AchievementKind::GoalAchieved);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn stale_goal_versions_are_refused(pool: PgPool) {
    let exercise = bench_press(&pool, USER).await;
    let goals = GoalRepository::new(&pool);
    let goal = goals
        .create(
            USER,
            &exercise,
            &CreateGoalRequest {
                exercise_id: exercise.exercise_id,
                goal_type: GoalType::Volume,
                target: Decimal::from(5000),
                deadline: None,
                start_value: None,
                current_value: None,
            },
        )
        .await
        .unwrap();

    let update = UpdateGoalRequest {
        version: goal.version,
        current_value: Decimal::from(2500),
        target: None,
        deadline: None,
    };
    let updated = goals.update_progress(USER, goal.goal_id, &update).await.unwrap();
    assert_eq!(updated.version, goal.version + 1);
    assert_eq!(updated.progress(), 50.0);

    let err = goals.update_progress(USER, goal.goal_id, &update).await.unwrap_err();
    assert!(matches!(err, StorageError::StaleWrite(_)));

    let err = goals.update_progress(OTHER, goal.goal_id, &update).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound("Goal")));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn only_the_first_workout_earns_an_achievement(pool: PgPool) {
    let day = WorkoutDayRepository::new(&pool).create(USER, "Push").await.unwrap();
    let exercise = bench_press(&pool, USER).await;
    let workouts = WorkoutRepository::new(&pool);

    for _ in 0..2 {
        workouts.create(USER, draft(&day, &exercise)).await.unwrap();
    }

    let achievements = AchievementRepository::new(&pool).list(USER).await.unwrap();
    let firsts = achievements
        .iter()
        .filter(|a| a.kind == AchievementKind::FirstWorkout)
        .count();
    assert_eq!(firsts, 1);
    assert_eq!(workouts.dates(USER).await.unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn rejected_candidates_return_the_stored_record(pool: PgPool) {
    let exercise = bench_press(&pool, USER).await;
    let repo = RecordRepository::new(&pool);

    let mut original = weight_record(&exercise, Decimal::from(120));
    original.notes = Some("paused".into());
    repo.admit(USER, &exercise, &original).await.unwrap();

    let mut weaker = weight_record(&exercise, Decimal::from(110));
    weaker.notes = Some("touch and go".into());
    match repo.admit(USER, &exercise, &weaker).await.unwrap() {
        RecordAdmission::Rejected(best) => {
            assert_eq!(best.value, Decimal::from(120));
            assert_eq!(best.notes.as_deref(), Some("paused"));
        }
        RecordAdmission::Admitted(_) => panic!("110 does not beat 120"),
    }

    let stored = repo
        .current_best(USER, exercise.exercise_id, RecordType::Weight)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.notes.as_deref(), Some("paused"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn exercise_names_are_unique_per_user(pool: PgPool) {
    bench_press(&pool, USER).await;

    let err = ExerciseRepository::new(&pool)
        .create(
            USER,
            &ExerciseRequest {
                name: "Bench Press".into(),
                category: None,
                workout_day_id: None,
                default_sets: None,
                default_reps: None,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StorageError::ConstraintViolation(ref msg) if msg == "An exercise with this name already exists"
    ));

    bench_press(&pool, OTHER).await;
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn metric_dates_are_unique_per_user(pool: PgPool) {
    let repo = MetricRepository::new(&pool);
    let day = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

    repo.create(USER, &body_weight(day, 82)).await.unwrap();
    let err = repo.create(USER, &body_weight(day, 81)).await.unwrap_err();
    assert!(matches!(
        err,
        StorageError::ConstraintViolation(ref msg) if msg == "A metric for this date already exists"
    ));

    // moving another entry onto a taken date is refused too
    let next = repo
        .create(USER, &body_weight(day.succ_opt().unwrap(), 81))
        .await
        .unwrap();
    let err = repo
        .update(USER, next.metric_id, &body_weight(day, 81))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::ConstraintViolation(_)));

    repo.create(OTHER, &body_weight(day, 70)).await.unwrap();
    assert_eq!(repo.list(USER).await.unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn template_names_are_unique_per_user(pool: PgPool) {
    let day = WorkoutDayRepository::new(&pool).create(USER, "Push").await.unwrap();
    let other_day = WorkoutDayRepository::new(&pool).create(OTHER, "Push").await.unwrap();
    let repo = TemplateRepository::new(&pool);

    repo.create(USER, "Heavy Push", &day, &[]).await.unwrap();
    let err = repo.create(USER, "Heavy Push", &day, &[]).await.unwrap_err();
    assert!(matches!(
        err,
        StorageError::ConstraintViolation(ref msg) if msg == "A template with this name already exists"
    ));

    repo.create(OTHER, "Heavy Push", &other_day, &[]).await.unwrap();
    assert_eq!(repo.list(USER).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn deleting_an_exercise_removes_its_goals_and_records(pool: PgPool) {
    let exercise = bench_press(&pool, USER).await;
    let goals = GoalRepository::new(&pool);
    let records = RecordRepository::new(&pool);

    goals
        .create(USER, &exercise, &weight_goal(&exercise, 80, 80, 100))
        .await
        .unwrap();
    records
        .admit(USER, &exercise, &weight_record(&exercise, Decimal::from(105)))
        .await
        .unwrap();

    ExerciseRepository::new(&pool)
        .delete(USER, exercise.exercise_id)
        .await
        .unwrap();

    assert!(goals.list(USER).await.unwrap().is_empty());
    assert!(records.list(USER).await.unwrap().is_empty());

    // the goal-achieved achievement outlives the exercise it mentions
    let achievements = AchievementRepository::new(&pool).list(USER).await.unwrap();
    assert_eq!(achievements.len(), 1);
    assert_eq!(achievements[0].exercise_id, None);
    assert_eq!(achievements[0].exercise_name.as_deref(), Some("Bench Press"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn deleting_a_workout_day_removes_its_templates(pool: PgPool) {
    let days = WorkoutDayRepository::new(&pool);
    let day = days.create(USER, "Legs").await.unwrap();
    let templates = TemplateRepository::new(&pool);
    templates.create(USER, "Leg Day", &day, &[]).await.unwrap();

    days.delete(USER, day.workout_day_id).await.unwrap();

    assert!(templates.list(USER).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn weight_goals_with_target_below_start_are_not_raised(pool: PgPool) {
    let exercise = bench_press(&pool, USER).await;
    let goals = GoalRepository::new(&pool);

    // coming down from 100 towards 90, halfway there
    let goal = goals
        .create(USER, &exercise, &weight_goal(&exercise, 100, 95, 90))
        .await
        .unwrap();
    assert_eq!(goal.status, GoalStatus::InProgress);

    RecordRepository::new(&pool)
        .admit(USER, &exercise, &weight_record(&exercise, Decimal::from(99)))
        .await
        .unwrap();

    let unchanged = goals.find(USER, goal.goal_id).await.unwrap();
    assert_eq!(unchanged.current_value, Decimal::from(95));
    assert_eq!(unchanged.status, GoalStatus::InProgress);
    assert_eq!(unchanged.version, goal.version);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn other_users_cannot_change_or_delete_rows(pool: PgPool) {
    let day = WorkoutDayRepository::new(&pool).create(USER, "Push").await.unwrap();
    let exercise = bench_press(&pool, USER).await;

    let exercises = ExerciseRepository::new(&pool);
    let request = ExerciseRequest {
        name: "Stolen".into(),
        category: None,
        workout_day_id: None,
        default_sets: None,
        default_reps: None,
        notes: None,
    };
    let err = exercises.update(OTHER, exercise.exercise_id, &request).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound("Exercise")));
    let err = exercises.delete(OTHER, exercise.exercise_id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound("Exercise")));

    let metrics = MetricRepository::new(&pool);
    let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let metric = metrics.create(USER, &body_weight(date, 80)).await.unwrap();
    let err = metrics
        .update(OTHER, metric.metric_id, &body_weight(date, 60))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound("Metric")));
    let err = metrics.delete(OTHER, metric.metric_id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound("Metric")));

    let records = RecordRepository::new(&pool);
    let record = match records
        .admit(USER, &exercise, &weight_record(&exercise, Decimal::from(100)))
        .await
        .unwrap()
    {
        RecordAdmission::Admitted(record) => record,
        RecordAdmission::Rejected(_) => panic!("first record is always admitted"),
    };
    let err = records.delete(OTHER, record.record_id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound("Personal record")));

    let templates = TemplateRepository::new(&pool);
    let template = templates.create(USER, "Heavy Push", &day, &[]).await.unwrap();
    let err = templates.mark_used(OTHER, template.template_id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound("Template")));
    let err = templates.delete(OTHER, template.template_id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound("Template")));

    let workouts = WorkoutRepository::new(&pool);
    let workout = workouts.create(USER, draft(&day, &exercise)).await.unwrap();
    let err = workouts
        .update(OTHER, workout.workout_id, draft(&day, &exercise))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound("Workout")));
    let err = workouts.delete(OTHER, workout.workout_id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound("Workout")));

    // everything is still there for its owner
    assert_eq!(exercises.find(USER, exercise.exercise_id).await.unwrap().name, "Bench Press");
    assert_eq!(metrics.list(USER).await.unwrap().len(), 1);
    assert_eq!(records.list(USER).await.unwrap().len(), 1);
    assert_eq!(templates.list(USER).await.unwrap().len(), 1);
    assert_eq!(workouts.find(USER, workout.workout_id).await.unwrap().exercises.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn achievements_cannot_point_at_another_users_exercise(pool: PgPool) {
    let theirs = bench_press(&pool, OTHER).await;

    let achievement = NewAchievement {
        kind: AchievementKind::WeightMilestone,
        name: "100kg Club".into(),
        description: "Benched 100kg".into(),
        value: Some(Decimal::from(100)),
        exercise_id: Some(theirs.exercise_id),
        exercise_name: Some(theirs.name.clone()),
    };
    let err = AchievementRepository::new(&pool)
        .create(USER, &achievement)
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::InvalidReference(_)));
}
