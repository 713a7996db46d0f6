// ABOUTME: Benchmark fixtures generating deterministic lifting histories
// ABOUTME: Rotates through a fixed exercise catalog with one to three sets per workout day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Deterministic workout history for reproducible measurements.

use chrono::{DateTime, Duration, TimeZone, Utc};
use ironlog::models::{Exercise, WeightUnit, WorkoutSet};
use uuid::Uuid;

/// Exercise catalog covering every trainable muscle group
const CATALOG: [&str; 12] = [
    "Bench Press",
    "Barbell Row",
    "Squat",
    "Romanian Deadlift",
    "Overhead Press",
    "Pull Up",
    "Barbell Curl",
    "Tricep Pushdown",
    "Calf Raise",
    "Plank",
    "Hip Thrust",
    "Lat Pulldown",
];

/// Predefined history sizes
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// A few weeks of training
    Medium,
    /// Roughly a year of training
    Large,
}

impl HistorySize {
    #[must_use]
    pub const fn sets(self) -> usize {
        match self {
            Self::Medium => 100,
            Self::Large => 1_000,
        }
    }
}

/// Fixed clock so runs are comparable
#[must_use]
pub fn bench_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 18, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Workout history with its exercise catalog
pub struct History {
    pub exercises: Vec<Exercise>,
    pub sets: Vec<WorkoutSet>,
}

/// Generate `size` sets walking back from `bench_now`, two sets per workout day
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
pub fn generate_history(size: HistorySize) -> History {
    let user_id = Uuid::from_u128(0xbe4c);
    let now = bench_now();
    let exercises: Vec<Exercise> = CATALOG
        .iter()
        .map(|name| Exercise::new(user_id, *name, now - Duration::days(730)))
        .collect();

    let sets = (0..size.sets())
        .map(|index| {
            let exercise = &exercises[index % exercises.len()];
            let performed_at =
                now - Duration::days((index / 2) as i64) - Duration::minutes((index % 2) as i64 * 7);
            let reps = 5 + (index % 8) as u32;
            if index % 6 == 5 {
                WorkoutSet::bodyweight(user_id, exercise.id, reps, performed_at)
            } else {
                let weight = 45.0 + ((index * 37) % 250) as f64;
                WorkoutSet::weighted(
                    user_id,
                    exercise.id,
                    reps,
                    weight,
                    WeightUnit::Lbs,
                    performed_at,
                )
            }
        })
        .collect();

    History { exercises, sets }
}
