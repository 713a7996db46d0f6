// ABOUTME: Consecutive-day workout streaks and distinct workout-day counts
// ABOUTME: Current streak survives until the end of the day after the last workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::calendar::day_key;
use crate::models::WorkoutSet;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Streak summary for one user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakStats {
    /// Consecutive workout days ending today or yesterday (0 if broken)
    pub current_streak: u32,
    /// Longest run of consecutive workout days ever
    pub longest_streak: u32,
    /// Distinct calendar days with at least one set
    pub total_workouts: u32,
}

/// Streak calculator over a user's full, unsorted set history
pub struct StreakCalculator;

impl StreakCalculator {
    /// Distinct UTC calendar days with at least one set, ascending
    #[must_use]
    pub fn workout_days(sets: &[WorkoutSet]) -> BTreeSet<NaiveDate> {
        sets.iter().map(|set| day_key(set.performed_at)).collect()
    }

    /// Number of distinct workout days
    #[must_use]
    pub fn total_workouts(sets: &[WorkoutSet]) -> u32 {
        Self::workout_days(sets).len() as u32
    }

    /// Longest run of consecutive workout days
    #[must_use]
    pub fn longest_streak(sets: &[WorkoutSet]) -> u32 {
        let days = Self::workout_days(sets);

        let mut longest = 0;
        let mut running = 0;
        let mut previous: Option<NaiveDate> = None;

        for day in days {
            running = match previous {
                Some(prev) if (day - prev).num_days() == 1 => running + 1,
                _ => 1,
            };
            longest = longest.max(running);
            previous = Some(day);
        }

        longest
    }

    /// Consecutive workout days ending at the most recent workout
    ///
    /// Zero unless the most recent workout day is today or yesterday relative to `now`.
    #[must_use]
    pub fn current_streak(sets: &[WorkoutSet], now: DateTime<Utc>) -> u32 {
        let days = Self::workout_days(sets);
        let Some(&most_recent) = days.last() else {
            return 0;
        };

        let today = day_key(now);
        let yesterday = today.pred_opt();
        if most_recent != today && Some(most_recent) != yesterday {
            return 0;
        }

        let mut streak = 1;
        let mut successor = most_recent;
        for &day in days.iter().rev().skip(1) {
            if (successor - day).num_days() != 1 {
                break;
            }
            streak += 1;
            successor = day;
        }

        streak
    }

    /// All three streak figures at once
    #[must_use]
    pub fn compute(sets: &[WorkoutSet], now: DateTime<Utc>) -> StreakStats {
        let stats = StreakStats {
            current_streak: Self::current_streak(sets, now),
            longest_streak: Self::longest_streak(sets),
            total_workouts: Self::total_workouts(sets),
        };
        tracing::debug!(
            current = stats.current_streak,
            longest = stats.longest_streak,
            total = stats.total_workouts,
            "Computed workout streaks"
        );
        stats
    }
}
