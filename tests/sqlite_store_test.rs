// ABOUTME: Integration tests for the SQLite workout store
// ABOUTME: Round-trips, query filters, ordering, soft delete, validation, import, and file databases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{bodyweight, create_test_store, days_ago, exercise, lifted, now, test_user};
use ironlog::errors::ErrorCode;
use ironlog::models::{Exercise, WorkoutSet};
use ironlog::store::{SetQuery, SqliteWorkoutStore, WorkoutImport, WorkoutStore};
use uuid::Uuid;

async fn seeded_store() -> (SqliteWorkoutStore, Exercise, Exercise, Vec<WorkoutSet>) {
    let store = create_test_store().await.unwrap();
    let bench = exercise("Bench Press");
    let pullup = exercise("Pull Up");
    store.insert_exercise(&bench).await.unwrap();
    store.insert_exercise(&pullup).await.unwrap();

    let sets = vec![
        lifted(&bench, 5, 185.0, days_ago(1)),
        bodyweight(&pullup, 10, days_ago(3)),
        lifted(&bench, 5, 180.0, days_ago(5)),
    ];
    for set in &sets {
        store.insert_set(set).await.unwrap();
    }
    (store, bench, pullup, sets)
}

#[tokio::test]
async fn test_sets_round_trip_sorted_ascending() {
    let (store, _, _, sets) = seeded_store().await;

    let fetched = store.sets_for_user(test_user(), &SetQuery::all()).await.unwrap();
    assert_eq!(fetched.len(), 3);
    assert_eq!(fetched[0], sets[2]);
    assert_eq!(fetched[1], sets[1]);
    assert_eq!(fetched[2], sets[0]);
}

#[tokio::test]
async fn test_sets_filtered_by_exercise_and_time() {
    let (store, bench, _, _) = seeded_store().await;

    let bench_only = store
        .sets_for_user(test_user(), &SetQuery::for_exercise(bench.id))
        .await
        .unwrap();
    assert_eq!(bench_only.len(), 2);
    assert!(bench_only.iter().all(|s| s.exercise_id == bench.id));

    let window = SetQuery::all().between(days_ago(4), days_ago(1));
    let in_window = store.sets_for_user(test_user(), &window).await.unwrap();
    assert_eq!(in_window.len(), 1);
    assert_eq!(in_window[0].reps, 10);
    assert!(in_window.iter().all(|s| window.matches(s)));
}

#[tokio::test]
async fn test_other_users_are_isolated() {
    let (store, _, _, _) = seeded_store().await;
    let stranger = Uuid::new_v4();

    assert!(store.sets_for_user(stranger, &SetQuery::all()).await.unwrap().is_empty());
    assert!(store.exercises_for_user(stranger, true).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_soft_delete_keeps_sets_and_hides_exercise() {
    let (store, bench, _, _) = seeded_store().await;

    store.soft_delete_exercise(bench.id, now()).await.unwrap();

    let active = store.exercises_for_user(test_user(), false).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name, "Pull Up");

    let all = store.exercises_for_user(test_user(), true).await.unwrap();
    let deleted = all.iter().find(|e| e.id == bench.id).unwrap();
    assert_eq!(deleted.deleted_at, Some(now()));
    assert!(!deleted.is_active());

    let sets = store
        .sets_for_user(test_user(), &SetQuery::for_exercise(bench.id))
        .await
        .unwrap();
    assert_eq!(sets.len(), 2);

    let again = store.soft_delete_exercise(bench.id, now()).await.unwrap_err();
    assert_eq!(again.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_invalid_records_are_rejected_before_writing() {
    let store = create_test_store().await.unwrap();
    let squat = exercise("Squat");
    store.insert_exercise(&squat).await.unwrap();

    let blank = exercise("   ");
    let err = store.insert_exercise(&blank).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let mut no_reps = lifted(&squat, 5, 225.0, now());
    no_reps.reps = 0;
    let err = store.insert_set(&no_reps).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    let mut no_unit = lifted(&squat, 5, 225.0, now());
    no_unit.unit = None;
    let err = store.insert_set(&no_unit).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);

    assert!(store
        .sets_for_user(test_user(), &SetQuery::all())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_import_writes_exercises_then_sets() {
    let store = create_test_store().await.unwrap();
    let deadlift = exercise("Deadlift");
    let json = serde_json::json!({
        "exercises": [deadlift.clone()],
        "sets": [lifted(&deadlift, 3, 315.0, days_ago(2))],
    })
    .to_string();

    let import = WorkoutImport::from_json(&json).unwrap();
    let summary = store.import(&import).await.unwrap();
    assert_eq!(summary.exercises, 1);
    assert_eq!(summary.sets, 1);

    let sets = store.sets_for_user(test_user(), &SetQuery::all()).await.unwrap();
    assert_eq!(sets, import.sets);
}

#[tokio::test]
async fn test_import_rejects_sets_for_unknown_exercises() {
    let store = create_test_store().await.unwrap();
    let ghost = exercise("Ghost Lift");
    let import = WorkoutImport {
        exercises: vec![],
        sets: vec![lifted(&ghost, 5, 100.0, now())],
    };

    let err = store.import(&import).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(store.exercises_for_user(test_user(), true).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_import_failing_midway_writes_nothing() {
    let store = create_test_store().await.unwrap();
    sqlx::query(
        r"
        CREATE TRIGGER reject_heavy_sets BEFORE INSERT ON workout_sets
        WHEN NEW.weight > 1000
        BEGIN
            SELECT RAISE(ABORT, 'weight above rack limit');
        END
        ",
    )
    .execute(store.pool())
    .await
    .unwrap();

    let deadlift = exercise("Deadlift");
    let import = WorkoutImport {
        exercises: vec![deadlift.clone()],
        sets: vec![
            lifted(&deadlift, 3, 315.0, days_ago(2)),
            lifted(&deadlift, 1, 1200.0, days_ago(1)),
        ],
    };

    let err = store.import(&import).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::DatabaseError);

    assert!(store.exercises_for_user(test_user(), true).await.unwrap().is_empty());
    assert!(store
        .sets_for_user(test_user(), &SetQuery::all())
        .await
        .unwrap()
        .is_empty());
    assert!(store.get_exercise(deadlift.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_import_rejects_malformed_json() {
    let err = WorkoutImport::from_json("{ not json").unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_file_database_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("ironlog.db").display());
    let squat = exercise("Squat");
    let set = lifted(&squat, 5, 225.0, days_ago(1));

    {
        let store = SqliteWorkoutStore::connect(&url).await.unwrap();
        store.insert_exercise(&squat).await.unwrap();
        store.insert_set(&set).await.unwrap();
        store.pool().close().await;
    }

    let reopened = SqliteWorkoutStore::connect(&url).await.unwrap();
    let sets = reopened.sets_for_user(test_user(), &SetQuery::all()).await.unwrap();
    assert_eq!(sets, vec![set]);
    assert_eq!(
        reopened.get_exercise(squat.id).await.unwrap().unwrap().name,
        "Squat"
    );
}
