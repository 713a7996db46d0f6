// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Fixed clock, exercise and set builders, quiet logging, and in-memory stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `ironlog`

use chrono::{DateTime, Duration, TimeZone, Utc};
use ironlog::errors::AppResult;
use ironlog::models::{Exercise, WeightUnit, WorkoutSet};
use ironlog::store::SqliteWorkoutStore;
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed "now" shared by every test: Saturday 2025-03-15 12:00 UTC
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
}

/// `now` shifted back by whole days
pub fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

/// Stable user id for fixtures
pub fn test_user() -> Uuid {
    Uuid::from_u128(0x0001_0000_0000_4000_8000_0000_0000_0001)
}

/// Active exercise owned by the test user, created a year before `now`
pub fn exercise(name: &str) -> Exercise {
    Exercise::new(test_user(), name, days_ago(365))
}

/// Soft-deleted exercise owned by the test user
pub fn deleted_exercise(name: &str) -> Exercise {
    let mut exercise = exercise(name);
    exercise.deleted_at = Some(days_ago(1));
    exercise
}

/// Loaded set in pounds
pub fn lifted(exercise: &Exercise, reps: u32, weight: f64, at: DateTime<Utc>) -> WorkoutSet {
    WorkoutSet::weighted(
        exercise.user_id,
        exercise.id,
        reps,
        weight,
        WeightUnit::Lbs,
        at,
    )
}

/// Bodyweight set
pub fn bodyweight(exercise: &Exercise, reps: u32, at: DateTime<Utc>) -> WorkoutSet {
    WorkoutSet::bodyweight(exercise.user_id, exercise.id, reps, at)
}

/// In-memory store with the schema applied
pub async fn create_test_store() -> AppResult<SqliteWorkoutStore> {
    init_test_logging();
    SqliteWorkoutStore::connect("sqlite::memory:").await
}
