// ABOUTME: Per-muscle-group recovery classification from logged sets
// ABOUTME: Days since last trained, trailing 7-day volume and frequency, and a 4-bucket status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Muscle group recovery
//!
//! Every trainable group gets exactly one record, so consumers can render a
//! fixed grid. Groups that were never trained report the `999` sentinel and are
//! classified `overdue`. Records are ordered most-overdue first.

use crate::calendar::{day_key, whole_days_since, within_trailing_days};
use crate::constants::recovery::{
    FRESH_MAX_DAYS, NEVER_TRAINED_DAYS, READY_MAX_DAYS, RECOVERING_MAX_DAYS,
};
use crate::constants::windows::TRAILING_WINDOW_DAYS;
use crate::models::{Exercise, MuscleGroup, WorkoutSet};
use crate::muscle_groups::MuscleGroupMapper;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// How recovered a muscle group is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// Trained within the last 2 days
    Fresh,
    /// Trained 3-4 days ago
    Recovering,
    /// Trained 5-7 days ago, good to go
    Ready,
    /// Not trained for more than a week (or never)
    Overdue,
}

impl RecoveryStatus {
    /// Bucket a days-since-trained value
    #[must_use]
    pub const fn from_days_since(days_since: i64) -> Self {
        if days_since <= FRESH_MAX_DAYS {
            Self::Fresh
        } else if days_since <= RECOVERING_MAX_DAYS {
            Self::Recovering
        } else if days_since <= READY_MAX_DAYS {
            Self::Ready
        } else {
            Self::Overdue
        }
    }
}

/// Recovery state of one muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryRecord {
    /// Group described by this record
    pub muscle_group: MuscleGroup,
    /// Most recent set touching the group, if any
    pub last_trained_date: Option<DateTime<Utc>>,
    /// Whole days since `last_trained_date`, `999` if never trained
    pub days_since: i64,
    /// Summed set volume over the trailing 7 days
    pub volume_last_7_days: f64,
    /// Distinct days trained over the trailing 7 days
    pub frequency_last_7_days: u32,
    /// Bucketed recovery state
    pub status: RecoveryStatus,
}

impl RecoveryRecord {
    fn never_trained(muscle_group: MuscleGroup) -> Self {
        Self {
            muscle_group,
            last_trained_date: None,
            days_since: NEVER_TRAINED_DAYS,
            volume_last_7_days: 0.0,
            frequency_last_7_days: 0,
            status: RecoveryStatus::from_days_since(NEVER_TRAINED_DAYS),
        }
    }
}

#[derive(Debug, Default)]
struct GroupAccumulator {
    last_trained: Option<DateTime<Utc>>,
    volume: f64,
    days: HashSet<NaiveDate>,
}

/// Recovery classifier
pub struct RecoveryClassifier;

impl RecoveryClassifier {
    /// Classify recovery for all ten trainable muscle groups
    ///
    /// Sets whose exercise is unknown are skipped. Soft-deleted exercises still
    /// count, since their sets remain part of the training history.
    #[must_use]
    pub fn classify(
        sets: &[WorkoutSet],
        exercises: &[Exercise],
        now: DateTime<Utc>,
    ) -> Vec<RecoveryRecord> {
        if sets.is_empty() {
            return MuscleGroup::TRAINABLE
                .into_iter()
                .map(RecoveryRecord::never_trained)
                .collect();
        }

        let groups_by_exercise = MuscleGroupMapper::index_exercises(exercises);
        let mut accumulators: HashMap<MuscleGroup, GroupAccumulator> = HashMap::new();
        let mut skipped = 0_usize;

        for set in sets {
            let Some(groups) = groups_by_exercise.get(&set.exercise_id) else {
                skipped += 1;
                continue;
            };
            let in_window = within_trailing_days(set.performed_at, now, TRAILING_WINDOW_DAYS);

            for group in groups.iter().filter(|group| group.is_trainable()) {
                let acc = accumulators.entry(*group).or_default();
                acc.last_trained = Some(
                    acc.last_trained
                        .map_or(set.performed_at, |last| last.max(set.performed_at)),
                );
                if in_window {
                    acc.volume += set.volume();
                    acc.days.insert(day_key(set.performed_at));
                }
            }
        }

        if skipped > 0 {
            tracing::debug!(skipped, "Skipped sets referencing unknown exercises");
        }

        let mut records: Vec<RecoveryRecord> = MuscleGroup::TRAINABLE
            .into_iter()
            .map(|group| match accumulators.remove(&group) {
                Some(GroupAccumulator {
                    last_trained: Some(last),
                    volume,
                    days,
                }) => {
                    let days_since = whole_days_since(last, now);
                    RecoveryRecord {
                        muscle_group: group,
                        last_trained_date: Some(last),
                        days_since,
                        volume_last_7_days: volume,
                        frequency_last_7_days: days.len() as u32,
                        status: RecoveryStatus::from_days_since(days_since),
                    }
                }
                _ => RecoveryRecord::never_trained(group),
            })
            .collect();

        records.sort_by(|a, b| b.days_since.cmp(&a.days_since));
        records
    }
}
